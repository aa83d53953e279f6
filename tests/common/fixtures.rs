//! Content builders shared by the integration tests.
//!
//! Everything uses the 10pt "Mono" font so sizes come out in round
//! numbers: glyphs are 6pt wide and lines 12pt tall.

use galley::{Columns, Content, FontSpec, Grid, TextBlock, Track};

pub const GLYPH_W: f32 = 6.0;
pub const LINE_H: f32 = 12.0;

pub fn mono_font() -> FontSpec {
    FontSpec::new("Mono", 10.0)
}

pub fn mono(text: &str) -> Content {
    Content::from(TextBlock::new(text).with_font(mono_font()))
}

/// "The quick brown fox jumps over the lazy dog. " repeated `times`
/// times, as one paragraph.
pub fn pangram(times: usize) -> Content {
    let mut text = String::new();
    for _ in 0..times {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str("The quick brown fox jumps over the lazy dog.");
    }
    mono(&text)
}

/// A two-column grid of `label value` rows.
pub fn two_column_grid(rows: usize) -> Grid {
    let mut grid = Grid::new(vec![Track::Auto, Track::Auto]).unwrap();
    for i in 0..rows {
        grid = grid.add(mono(&format!("row{}", i))).add(mono("value"));
    }
    grid
}

/// Two newspaper columns over one wrapped paragraph.
pub fn two_columns(text: &str) -> Content {
    Content::from(Columns::new(mono(text), 2).unwrap())
}
