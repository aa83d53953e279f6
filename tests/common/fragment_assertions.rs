//! Inspection helpers for fragments and recorded drawing.

use galley::{Fragment, PaintOp, RecordingCanvas};

/// All text retained in a fragment, nested children included, joined
/// in paint order with single spaces.
pub fn extract_text(fragment: &Fragment) -> String {
    let mut runs: Vec<String> = Vec::new();
    fragment.visit_ops(&mut |_, _, op| {
        if let PaintOp::Text { text, .. } = op {
            runs.push(text.clone());
        }
    });
    runs.join(" ")
}

/// Paints the fragment at the origin and returns the recorded calls.
pub fn record(fragment: &Fragment) -> RecordingCanvas {
    let mut canvas = RecordingCanvas::new();
    fragment
        .paint(&mut canvas, 0.0, 0.0)
        .expect("painting onto a recording canvas");
    canvas
}

/// Drains a cursor through same-sized boxes, collecting every
/// produced fragment. Panics if the cursor refuses the box while
/// claiming more content remains.
pub fn collect_pages(
    cursor: &mut Box<dyn galley::Paginator>,
    width: f32,
    height: f32,
) -> Vec<Fragment> {
    let mut pages = Vec::new();
    while cursor.has_more() {
        match cursor.next(width, height).expect("pagination step") {
            Some(piece) => pages.push(piece),
            None => panic!(
                "cursor made no progress in a {}x{} box after {} page(s)",
                width,
                height,
                pages.len()
            ),
        }
    }
    pages
}

#[macro_export]
macro_rules! assert_fragment_contains_text {
    ($fragment:expr, $needle:expr) => {
        let text = $crate::common::fragment_assertions::extract_text($fragment);
        assert!(
            text.contains($needle),
            "expected fragment text to contain '{}', got '{}'",
            $needle,
            text
        );
    };
}

#[macro_export]
macro_rules! assert_page_count {
    ($pages:expr, $expected:expr) => {
        assert_eq!(
            $pages.len(),
            $expected,
            "expected {} page(s), got {} with heights {:?}",
            $expected,
            $pages.len(),
            $pages.iter().map(|p| p.height()).collect::<Vec<_>>()
        );
    };
}
