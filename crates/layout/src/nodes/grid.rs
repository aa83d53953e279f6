//! Grids: rows of cells laid out in shared columns.
//!
//! Column widths are resolved once per box from the track list and the
//! measured content, then every row flows through them. Rows split
//! like any other content: when a row does not finish in the current
//! box its cells carry their progress into the next one. A break row
//! stops filling the current box and is spent as soon as it sits at
//! the top of a fresh one.

use crate::LayoutError;
use crate::content::Content;
use crate::cursor::{Paginator, fits};
use crate::env::LayoutEnv;
use crate::fragment::Fragment;
use galley_types::Size;
use itertools::izip;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Track {
    /// Fixed width in points, though never below the column's widest
    /// unbreakable content.
    Fixed(f32),
    /// Takes a share of leftover width proportional to its weight.
    Weight(u32),
    /// Sized to the column's natural content width.
    Auto,
}

#[derive(Debug, Clone)]
enum Row {
    Cells(Vec<Content>),
    Break,
}

#[derive(Debug, Clone)]
pub struct Grid {
    tracks: Vec<Track>,
    rows: Vec<Row>,
    h_gap: f32,
    v_gap: f32,
}

impl Grid {
    pub fn new(tracks: Vec<Track>) -> Result<Self, LayoutError> {
        if tracks.is_empty() {
            return Err(LayoutError::InvalidArgument(
                "grid tracks",
                "at least one column is required".into(),
            ));
        }
        for track in &tracks {
            match *track {
                Track::Fixed(w) if !(w.is_finite() && w > 0.0) => {
                    return Err(LayoutError::InvalidArgument(
                        "grid track",
                        format!("fixed width {}", w),
                    ));
                }
                Track::Weight(0) => {
                    return Err(LayoutError::InvalidArgument(
                        "grid track",
                        "zero weight".into(),
                    ));
                }
                _ => {}
            }
        }
        Ok(Self {
            tracks,
            rows: Vec::new(),
            h_gap: 0.0,
            v_gap: 0.0,
        })
    }

    pub fn with_gaps(mut self, h_gap: f32, v_gap: f32) -> Result<Self, LayoutError> {
        let ok = h_gap.is_finite() && h_gap >= 0.0 && v_gap.is_finite() && v_gap >= 0.0;
        if !ok {
            return Err(LayoutError::InvalidArgument(
                "grid gaps",
                format!("{} {}", h_gap, v_gap),
            ));
        }
        self.h_gap = h_gap;
        self.v_gap = v_gap;
        Ok(self)
    }

    /// Appends a cell in row-major order, opening a new row whenever
    /// the current one is full. Adding break content closes the
    /// current row and records a hard break between rows.
    pub fn add(mut self, cell: impl Into<Content>) -> Self {
        match cell.into() {
            Content::Break => self.rows.push(Row::Break),
            content => {
                let columns = self.tracks.len();
                match self.rows.last_mut() {
                    Some(Row::Cells(cells)) if cells.len() < columns => cells.push(content),
                    _ => self.rows.push(Row::Cells(vec![content])),
                }
            }
        }
        self
    }

    pub fn add_break(self) -> Self {
        self.add(Content::Break)
    }

    pub fn column_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Debug, Clone, Copy)]
struct CellMeasure {
    min: Size,
    pref: Size,
}

/// Cursors for the cells of one row, `None` where the row has no cell
/// for a column.
#[derive(Debug)]
struct ActiveRow {
    cursors: Vec<Option<Box<dyn Paginator>>>,
}

impl ActiveRow {
    fn fork(&self) -> ActiveRow {
        ActiveRow {
            cursors: self
                .cursors
                .iter()
                .map(|c| c.as_ref().map(|p| p.fork()))
                .collect(),
        }
    }

    fn exhausted(&self) -> bool {
        self.cursors
            .iter()
            .all(|c| c.as_ref().is_none_or(|p| !p.has_more()))
    }

    fn min_height(&self) -> f32 {
        self.cursors
            .iter()
            .flatten()
            .filter(|p| p.has_more())
            .map(|p| p.min_size().height)
            .fold(0.0, f32::max)
    }

    fn preferred_height(&self) -> f32 {
        self.cursors
            .iter()
            .flatten()
            .filter(|p| p.has_more())
            .map(|p| p.preferred_size().height)
            .fold(0.0, f32::max)
    }
}

#[derive(Debug)]
pub(crate) struct GridCursor {
    env: LayoutEnv,
    grid: Arc<Grid>,
    /// Fresh-cursor measurements per row, empty for break rows.
    measures: Arc<Vec<Vec<CellMeasure>>>,
    col_min: Arc<Vec<f32>>,
    col_pref: Arc<Vec<f32>>,
    row: usize,
    active: Option<ActiveRow>,
    started: bool,
}

impl GridCursor {
    pub(crate) fn new(env: &LayoutEnv, grid: Arc<Grid>) -> Result<Self, LayoutError> {
        let cols = grid.tracks.len();
        let mut measures = Vec::with_capacity(grid.rows.len());
        let mut col_min = vec![0.0f32; cols];
        let mut col_pref = vec![0.0f32; cols];

        for row in &grid.rows {
            let mut row_measures = Vec::new();
            if let Row::Cells(cells) = row {
                for (col, cell) in cells.iter().enumerate() {
                    let probe = cell.paginate(env)?;
                    let measure = CellMeasure {
                        min: probe.min_size(),
                        pref: probe.preferred_size(),
                    };
                    col_min[col] = col_min[col].max(measure.min.width);
                    col_pref[col] = col_pref[col].max(measure.pref.width);
                    row_measures.push(measure);
                }
            }
            measures.push(row_measures);
        }

        // A fixed track pins its column at the given width, or at the
        // content minimum when that is wider.
        for (track, min, pref) in izip!(&grid.tracks, col_min.iter_mut(), col_pref.iter_mut()) {
            if let Track::Fixed(w) = track {
                *min = min.max(*w);
                *pref = *min;
            }
        }

        Ok(Self {
            env: env.clone(),
            grid,
            measures: Arc::new(measures),
            col_min: Arc::new(col_min),
            col_pref: Arc::new(col_pref),
            row: 0,
            active: None,
            started: false,
        })
    }

    fn gap_total(&self) -> f32 {
        self.grid.h_gap * (self.grid.tracks.len() - 1) as f32
    }

    /// Assigns every column a width inside `width`, or `None` when the
    /// box is narrower than the unbreakable minimum. Columns start at
    /// their minimum, grow toward their preferred width, and weighted
    /// tracks absorb whatever is left.
    fn resolve_widths(&self, width: f32) -> Option<Vec<f32>> {
        let total_min: f32 = self.col_min.iter().sum::<f32>() + self.gap_total();
        if !fits(total_min, width) {
            return None;
        }
        if width.is_infinite() {
            return Some(self.col_pref.to_vec());
        }

        let mut widths = self.col_min.to_vec();
        let mut extra = width - self.gap_total() - self.col_min.iter().sum::<f32>();

        let headrooms: Vec<f32> = izip!(self.col_pref.iter(), widths.iter())
            .map(|(pref, w)| (pref - w).max(0.0))
            .collect();
        let total_headroom: f32 = headrooms.iter().sum();
        if total_headroom > 0.0 && extra > 0.0 {
            let grow = extra.min(total_headroom);
            for (w, headroom) in izip!(widths.iter_mut(), &headrooms) {
                *w += grow * (headroom / total_headroom);
            }
            extra -= grow;
        }

        let total_weight: u32 = self
            .grid
            .tracks
            .iter()
            .map(|t| match t {
                Track::Weight(n) => *n,
                _ => 0,
            })
            .sum();
        if extra > 0.0 && total_weight > 0 {
            for (w, track) in izip!(widths.iter_mut(), &self.grid.tracks) {
                if let Track::Weight(n) = track {
                    *w += extra * (*n as f32 / total_weight as f32);
                }
            }
        }
        Some(widths)
    }

    fn next_row_min_height(&self) -> f32 {
        for (row, measures) in izip!(&self.grid.rows[self.row..], &self.measures[self.row..]) {
            if matches!(row, Row::Cells(_)) {
                return measures.iter().map(|m| m.min.height).fold(0.0, f32::max);
            }
        }
        0.0
    }

    fn open_row(&self, cells: &[Content]) -> Result<ActiveRow, LayoutError> {
        let mut cursors: Vec<Option<Box<dyn Paginator>>> = Vec::new();
        for cell in cells {
            cursors.push(Some(cell.paginate(&self.env)?));
        }
        cursors.resize_with(self.grid.tracks.len(), || None);
        Ok(ActiveRow { cursors })
    }

    /// Offers every live cell the row box. Returns the pieces that
    /// were produced, tagged with their column.
    fn advance_row(
        row: &mut ActiveRow,
        widths: &[f32],
        height: f32,
    ) -> Result<Vec<(usize, Fragment)>, LayoutError> {
        let mut pieces = Vec::new();
        for (col, slot) in row.cursors.iter_mut().enumerate() {
            let Some(cursor) = slot else { continue };
            if !cursor.has_more() {
                continue;
            }
            if let Some(piece) = cursor.next(widths[col], height)? {
                pieces.push((col, piece));
            }
        }
        Ok(pieces)
    }

    fn place_row(
        placements: &mut Vec<(f32, f32, Fragment)>,
        xs: &[f32],
        y: f32,
        pieces: Vec<(usize, Fragment)>,
    ) -> f32 {
        let row_h = pieces
            .iter()
            .map(|(_, piece)| piece.height())
            .fold(0.0f32, f32::max);
        for (col, piece) in pieces {
            placements.push((xs[col], y, piece));
        }
        row_h
    }
}

impl Paginator for GridCursor {
    fn min_size(&self) -> Size {
        if !self.has_more() {
            return Size::zero();
        }
        let width = self.col_min.iter().sum::<f32>() + self.gap_total();
        let height = match &self.active {
            Some(active) => active.min_height(),
            None => self.next_row_min_height(),
        };
        Size::new(width, height)
    }

    fn preferred_size(&self) -> Size {
        if !self.has_more() {
            return Size::zero();
        }
        let width = self.col_pref.iter().sum::<f32>() + self.gap_total();
        let mut height = 0.0f32;
        let mut parts = 0usize;
        if let Some(active) = &self.active {
            height += active.preferred_height();
            parts += 1;
        }
        for (row, measures) in izip!(&self.grid.rows[self.row..], &self.measures[self.row..]) {
            if matches!(row, Row::Cells(_)) {
                height += measures.iter().map(|m| m.pref.height).fold(0.0, f32::max);
                parts += 1;
            }
        }
        if parts > 1 {
            height += self.grid.v_gap * (parts - 1) as f32;
        }
        Size::new(width, height)
    }

    fn has_more(&self) -> bool {
        !self.started || self.active.is_some() || self.row < self.grid.rows.len()
    }

    fn next(&mut self, width: f32, height: f32) -> Result<Option<Fragment>, LayoutError> {
        if !self.has_more() {
            return Ok(None);
        }
        let Some(widths) = self.resolve_widths(width) else {
            return Ok(None);
        };
        let grid_w = widths.iter().sum::<f32>() + self.gap_total();
        let xs: Vec<f32> = {
            let mut xs = Vec::with_capacity(widths.len());
            let mut x = 0.0;
            for w in &widths {
                xs.push(x);
                x += w + self.grid.h_gap;
            }
            xs
        };

        // Progress is staged locally and committed only when a
        // fragment is actually returned, so a refusal leaves this
        // cursor untouched.
        let mut placements: Vec<(f32, f32, Fragment)> = Vec::new();
        let mut y = 0.0f32;
        let mut row = self.row;
        let mut carry: Option<ActiveRow> = None;

        if let Some(active) = &self.active {
            let mut attempt = active.fork();
            let pieces = Self::advance_row(&mut attempt, &widths, height)?;
            if pieces.is_empty() {
                return Ok(None);
            }
            y = Self::place_row(&mut placements, &xs, 0.0, pieces);
            if !attempt.exhausted() {
                // The resumed row fills this box entirely.
                carry = Some(attempt);
            }
        }

        if carry.is_none() {
            while row < self.grid.rows.len() {
                match &self.grid.rows[row] {
                    Row::Break => {
                        if y > 0.0 || !placements.is_empty() {
                            break;
                        }
                        row += 1;
                    }
                    Row::Cells(cells) => {
                        let gap = if y > 0.0 { self.grid.v_gap } else { 0.0 };
                        let row_min = self.measures[row]
                            .iter()
                            .map(|m| m.min.height)
                            .fold(0.0, f32::max);
                        if !fits(y + gap + row_min, height) {
                            break;
                        }
                        let mut fresh = self.open_row(cells)?;
                        let pieces = Self::advance_row(&mut fresh, &widths, height - y - gap)?;
                        if pieces.is_empty() {
                            break;
                        }
                        let row_h = Self::place_row(&mut placements, &xs, y + gap, pieces);
                        y += gap + row_h;
                        row += 1;
                        if !fresh.exhausted() {
                            carry = Some(fresh);
                            break;
                        }
                    }
                }
            }
        }

        let finished = carry.is_none() && row >= self.grid.rows.len();
        if placements.is_empty() && !finished {
            return Ok(None);
        }

        self.row = row;
        self.active = carry;
        self.started = true;

        let mut fragment = Fragment::new(Size::new(grid_w, y));
        for (dx, dy, piece) in placements {
            fragment.place(dx, dy, piece);
        }
        log::trace!(
            "grid fragment: rows consumed up to {}, {:.1}x{:.1}",
            row,
            grid_w,
            y
        );
        Ok(Some(fragment))
    }

    fn fork(&self) -> Box<dyn Paginator> {
        Box::new(Self {
            env: self.env.clone(),
            grid: Arc::clone(&self.grid),
            measures: Arc::clone(&self.measures),
            col_min: Arc::clone(&self.col_min),
            col_pref: Arc::clone(&self.col_pref),
            row: self.row,
            active: self.active.as_ref().map(ActiveRow::fork),
            started: self.started,
        })
    }
}
