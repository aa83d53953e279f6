//! The pagination protocol.

use crate::fragment::Fragment;
use crate::LayoutError;
use galley_types::Size;
use std::fmt::Debug;

/// Height passed to [`Paginator::next`] when the caller wants the
/// whole remainder in one fragment, page length be damned.
pub const UNBOUNDED: f32 = f32::INFINITY;

/// Tolerance for box-fitting comparisons. Accumulated float error from
/// summing line heights must not make content spill to an extra page.
pub(crate) const EPSILON: f32 = 0.01;

/// Whether `needed` points fit inside `available` points, with slack
/// for float accumulation.
pub(crate) fn fits(needed: f32, available: f32) -> bool {
    needed <= available + EPSILON
}

/// A cursor over one piece of content.
///
/// Cursors are created by [`crate::Content::paginate`] and consumed by
/// repeatedly offering them a box: `next(width, height)` either
/// returns a fragment that fits the box and advances the cursor past
/// everything the fragment contains, or returns `None` to signal that
/// no progress is possible in a box that small. `None` never consumes
/// content; the caller is expected to come back with a bigger box (or
/// a fresh page).
///
/// The protocol's guarantees:
///
/// * A fresh cursor produces at least one fragment, even for empty
///   content.
/// * The same content paginated through the same sequence of boxes
///   yields the same sequence of fragments.
/// * [`Paginator::fork`] snapshots progress: the fork and the original
///   continue independently and neither observes the other.
pub trait Paginator: Debug {
    /// Size of the smallest box in which the remaining content can
    /// make any progress at all. Width is the hard floor: below it
    /// `next` returns `None` forever.
    fn min_size(&self) -> Size;

    /// Size the remaining content would occupy given no constraints,
    /// width first. Heights under this are usually where pagination
    /// starts splitting.
    fn preferred_size(&self) -> Size;

    /// False once everything has been emitted. A cursor that still
    /// answers true after a `None` from [`Paginator::next`] is waiting
    /// for a bigger box, not finished.
    fn has_more(&self) -> bool;

    /// Lays out the next fragment into a `width` by `height` box.
    /// Returns `Ok(None)` when nothing fits, leaving the cursor
    /// exactly as it was. An exhausted cursor also answers `Ok(None)`.
    fn next(&mut self, width: f32, height: f32) -> Result<Option<Fragment>, LayoutError>;

    /// An independent cursor at the same position. Cheap: cursors
    /// share their immutable content and measurements, a fork copies
    /// only the progress record.
    fn fork(&self) -> Box<dyn Paginator>;
}
