//! Fit-to-page search: the smallest page height that takes the whole
//! content in one fragment at a given width.
//!
//! The search probes forked cursors, growing the trial height
//! geometrically until everything fits and then narrowing by
//! bisection. Trial fragments from rejected heights are dropped on
//! the spot; only the final accepted fragment survives.

use crate::LayoutError;
use crate::content::Content;
use crate::cursor::fits;
use crate::env::LayoutEnv;
use crate::fragment::Fragment;

const GROWTH_FACTOR: f32 = 4.0;
/// Hard ceiling for trial heights. Content that cannot fit one page at
/// any height, such as anything containing a hard break, is reported
/// as an error once the search passes this.
const MAX_TRIAL_HEIGHT: f32 = 1.0e9;
/// Narrowing stops once the bracket is this tight, in points.
const TOLERANCE: f32 = 1.0;

#[derive(Debug)]
pub struct PageFit {
    /// Smallest workable page height found, within [`TOLERANCE`].
    pub height: f32,
    /// The single fragment produced at that height.
    pub fragment: Fragment,
}

pub fn fit_page_height(
    content: &Content,
    env: &LayoutEnv,
    width: f32,
) -> Result<PageFit, LayoutError> {
    let base = content.paginate(env)?;
    let min = base.min_size();
    if !fits(min.width, width) {
        return Err(LayoutError::TooWide {
            min: min.width,
            available: width,
        });
    }

    // One probe: does the whole content land in a single fragment at
    // this height? Rejected probes are dropped here, fragment and all.
    let try_height = |height: f32| -> Result<Option<Fragment>, LayoutError> {
        let mut trial = base.fork();
        Ok(match trial.next(width, height)? {
            Some(piece) if !trial.has_more() => Some(piece),
            _ => None,
        })
    };

    let mut low = 0.0f32;
    let mut high = base
        .preferred_size()
        .height
        .max(min.height)
        .max(1.0)
        .min(MAX_TRIAL_HEIGHT);

    let mut fragment = loop {
        if let Some(piece) = try_height(high)? {
            break piece;
        }
        low = high;
        high *= GROWTH_FACTOR;
        if high > MAX_TRIAL_HEIGHT {
            return Err(LayoutError::FitCeiling(MAX_TRIAL_HEIGHT));
        }
        log::debug!("fit: {:.1}pt too short, trying {:.1}pt", low, high);
    };

    while high - low > TOLERANCE {
        let mid = low + (high - low) / 2.0;
        match try_height(mid)? {
            Some(piece) => {
                high = mid;
                fragment = piece;
            }
            None => low = mid,
        }
    }

    log::debug!("fit: settled on {:.1}pt at width {:.1}pt", high, width);
    Ok(PageFit {
        height: high,
        fragment,
    })
}
