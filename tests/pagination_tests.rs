mod common;

use common::fixtures::*;
use common::fragment_assertions::{collect_pages, extract_text};
use common::{TestResult, test_env};
use galley::{Content, UNBOUNDED};

#[test]
fn independent_cursors_paginate_identically() -> TestResult {
    let env = test_env();
    let content = pangram(4);

    // Same content, same sequence of boxes, two independent cursors.
    let boxes = [(144.0, 20.0), (144.0, 50.0), (144.0, 13.0), (200.0, 1000.0)];
    let mut a = content.paginate(&env)?;
    let mut b = content.paginate(&env)?;

    for (w, h) in boxes {
        let pa = a.next(w, h)?;
        let pb = b.next(w, h)?;
        assert_eq!(
            pa.as_ref().map(|p| p.size()),
            pb.as_ref().map(|p| p.size())
        );
        assert_eq!(
            pa.as_ref().map(extract_text),
            pb.as_ref().map(extract_text)
        );
        assert_eq!(a.has_more(), b.has_more());
    }
    Ok(())
}

#[test]
fn forks_do_not_observe_each_other() -> TestResult {
    let env = test_env();
    let content = pangram(3);

    let mut original = content.paginate(&env)?;
    original.next(144.0, 20.0)?.unwrap();

    // What the second page would be, read through a throwaway fork.
    let fork = original.fork();
    let expected = fork.fork().next(144.0, 20.0)?.map(|p| extract_text(&p));

    // Draining the original must not move the fork.
    while original.has_more() {
        original.next(144.0, 20.0)?;
    }
    let mut fork = fork;
    assert_eq!(fork.next(144.0, 20.0)?.map(|p| extract_text(&p)), expected);

    // And draining the fork leaves a later checkpoint where it was.
    let checkpoint = fork.fork();
    let at_checkpoint = checkpoint.fork().next(144.0, 20.0)?.map(|p| extract_text(&p));
    while fork.has_more() {
        fork.next(144.0, 20.0)?;
    }
    assert_eq!(
        checkpoint.fork().next(144.0, 20.0)?.map(|p| extract_text(&p)),
        at_checkpoint
    );
    Ok(())
}

#[test]
fn below_minimum_width_never_makes_progress() -> TestResult {
    let env = test_env();
    for content in [pangram(1), Content::from(two_column_grid(3))] {
        let mut cursor = content.paginate(&env)?;
        let min = cursor.min_size();
        for height in [1.0, 50.0, 10_000.0, UNBOUNDED] {
            assert!(cursor.next(min.width - 1.0, height)?.is_none());
            assert!(cursor.has_more());
        }
        // At the minimum width progress resumes.
        assert!(cursor.next(min.width, UNBOUNDED)?.is_some());
    }
    Ok(())
}

#[test]
fn wrapped_text_fills_a_two_inch_column() -> TestResult {
    let env = test_env();
    // Repeat the pangram until its preferred width is well past a
    // 2-inch (144pt) column.
    let content = pangram(3);
    assert!(content.preferred_size(&env)?.width > 144.0);

    // The whole wrapped height, measured in one unconstrained pass.
    let total = content
        .paginate(&env)?
        .next(144.0, UNBOUNDED)?
        .unwrap()
        .height();

    // 20pt boxes hold exactly one 12pt line each.
    let mut cursor = content.paginate(&env)?;
    let pages = collect_pages(&mut cursor, 144.0, 20.0);

    assert!(pages.len() > 1);
    assert_eq!(
        pages.iter().map(|p| p.height()).sum::<f32>(),
        total,
        "page heights must add up to the unconstrained wrapped height"
    );
    for page in &pages {
        assert_eq!(page.height(), LINE_H);
        assert!(page.width() <= 144.0);
    }
    assert!(!cursor.has_more());

    // No word lost or reordered across the page boundaries.
    let all_text = pages.iter().map(extract_text).collect::<Vec<_>>().join(" ");
    let Content::Text(block) = &content else {
        panic!("fixture is text");
    };
    assert_eq!(all_text, block.text());
    Ok(())
}

#[test]
fn exhausted_cursors_stay_exhausted() -> TestResult {
    let env = test_env();
    let mut cursor = mono("just one line").paginate(&env)?;
    assert!(cursor.has_more());
    cursor.next(1000.0, 1000.0)?.unwrap();
    assert!(!cursor.has_more());
    assert!(cursor.next(1000.0, 1000.0)?.is_none());
    assert!(cursor.next(1000.0, UNBOUNDED)?.is_none());
    Ok(())
}
