mod common;

use common::fixtures::*;
use common::fragment_assertions::{collect_pages, record};
use common::{TestResult, test_env};
use galley::{
    BackgroundDecorator, BorderDecorator, BorderStyle, CanvasOp, Color, Content, Decorator,
    DecoratorChain,
};

fn thin_border() -> BorderDecorator {
    BorderDecorator::new(BorderStyle {
        line_width: 1.0,
        color: galley::BLACK,
        padding: 2.0,
    })
    .unwrap()
}

#[test]
fn chained_decorators_nest_in_application_order() -> TestResult {
    let chain = DecoratorChain::new()
        .push(BackgroundDecorator::new(Color::gray(230)).unwrap())
        .push(thin_border());

    // Pushed last, the border is the outermost wrapper. Each layer
    // wraps the previous result; nothing is discarded.
    let decorated = chain.decorate(mono("inside"));
    let Content::Border(border) = &decorated else {
        panic!("expected the border outermost, got {:?}", decorated);
    };
    let Content::Background(background) = border.child() else {
        panic!("expected the background between border and text");
    };
    assert!(matches!(background.child(), Content::Text(_)));
    Ok(())
}

#[test]
fn decoration_preserves_the_pagination_contract() -> TestResult {
    let env = test_env();
    let plain = pangram(2);
    let decorated = thin_border().decorate(plain.clone());

    // The decorated tree still paginates repeatedly and
    // deterministically; the border only adds its insets.
    let mut a = decorated.paginate(&env)?;
    let mut b = decorated.paginate(&env)?;
    let pa = a.next(150.0, 40.0)?.unwrap();
    let pb = b.next(150.0, 40.0)?.unwrap();
    assert_eq!(pa.size(), pb.size());
    assert!(a.has_more());

    let plain_piece = plain.paginate(&env)?.next(144.0, 34.0)?.unwrap();
    // Inner box is 150 - 2*3 = 144 wide and 40 - 3 - 3 = 34 tall.
    assert_eq!(pa.children()[0].fragment.size(), plain_piece.size());
    Ok(())
}

#[test]
fn background_paints_behind_the_child() -> TestResult {
    let env = test_env();
    let decorated = BackgroundDecorator::new(Color::gray(200))
        .unwrap()
        .decorate(mono("shaded"));

    let fragment = decorated.paginate(&env)?.next(100.0, 100.0)?.unwrap();
    let canvas = record(&fragment);

    let fill_at = canvas
        .ops()
        .iter()
        .position(|op| matches!(op, CanvasOp::FillRect { .. }))
        .expect("background fill");
    let text_at = canvas
        .ops()
        .iter()
        .position(|op| matches!(op, CanvasOp::Text { .. }))
        .expect("text");
    assert!(fill_at < text_at);

    // The fill covers exactly the fragment.
    let CanvasOp::FillRect { rect, .. } = canvas.ops()[fill_at] else {
        unreachable!();
    };
    assert_eq!((rect.width, rect.height), (fragment.width(), fragment.height()));
    Ok(())
}

#[test]
fn split_borders_close_only_the_outer_edges() -> TestResult {
    let env = test_env();
    let decorated = thin_border().decorate(mono("aa bb cc"));
    let mut cursor = decorated.paginate(&env)?;

    // 18pt outer width holds one word per line; 17pt of height holds
    // one line plus one closed edge.
    let mut pages = vec![cursor.next(18.0, 17.0)?.unwrap()];
    pages.extend(collect_pages(&mut cursor, 18.0, 17.0));
    assert_eq!(pages.len(), 3);

    let horizontal_edges = |page: &galley::Fragment| {
        let canvas = record(page);
        canvas
            .ops()
            .iter()
            .filter(|op| matches!(op, CanvasOp::FillRect { rect, .. } if rect.height == 1.0))
            .count()
    };
    assert_eq!(horizontal_edges(&pages[0]), 1, "top edge only");
    assert_eq!(horizontal_edges(&pages[1]), 0, "both edges open mid-run");
    assert_eq!(horizontal_edges(&pages[2]), 1, "bottom edge only");
    Ok(())
}
