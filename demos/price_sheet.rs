//! Paginates a bordered price table onto letter-size pages and prints
//! what lands on each one.
//!
//! Run with: cargo run --example price_sheet

use galley::{
    BorderDecorator, BorderStyle, Color, Content, Decorator, Device, FontSpec, Fragment, Grid,
    LayoutEnv, MemoryTarget, MonoMetrics, PageSetup, PaintOp, TextBlock, Track,
};
use std::env;
use std::sync::Arc;

fn heading(text: &str) -> Content {
    Content::from(
        TextBlock::new(text).with_font(FontSpec::new("Mono", 14.0).bold()),
    )
}

fn cell(text: &str) -> Content {
    Content::from(TextBlock::new(text).with_font(FontSpec::new("Mono", 10.0)))
}

fn price_table() -> Result<Content, galley::LayoutError> {
    let mut grid = Grid::new(vec![Track::Fixed(60.0), Track::Weight(3), Track::Weight(1)])?
        .with_gaps(8.0, 3.0)?
        .add(heading("SKU"))
        .add(heading("Description"))
        .add(heading("Price"));

    for i in 1..=120 {
        grid = grid
            .add(cell(&format!("A-{:04}", i)))
            .add(cell(&format!(
                "Replacement part number {} for the medium-duty assembly line",
                i
            )))
            .add(cell(&format!("{}.95", 4 + i % 40)));
        // A fresh page before the back-order section.
        if i == 80 {
            grid = grid.add_break();
        }
    }

    let border = BorderDecorator::new(BorderStyle {
        line_width: 1.0,
        color: Color::gray(60),
        padding: 6.0,
    })?;
    Ok(border.decorate(Content::from(grid)))
}

fn describe(page: usize, fragment: &Fragment) {
    let mut rows = 0;
    fragment.visit_ops(&mut |_, _, op| {
        if let PaintOp::Text { text, .. } = op {
            if text.starts_with("A-") {
                rows += 1;
            }
        }
    });
    println!(
        "page {:>2}: {:.0}x{:.0}pt, {} price row(s)",
        page,
        fragment.width(),
        fragment.height(),
        rows
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "galley=info");
        }
    }
    env_logger::init();

    // Page geometry straight from configuration.
    let setup: PageSetup = serde_json::from_str(
        r#"{ "size": "letter", "margins": "0.75in 1in" }"#,
    )?;

    let device = Device::new(MemoryTarget::new());
    let env = LayoutEnv::new(device.clone(), Arc::new(MonoMetrics));

    let content = price_table()?;
    let mut cursor = content.paginate(&env)?;

    let mut page = 0usize;
    while cursor.has_more() {
        match cursor.next(setup.content_width(), setup.content_height())? {
            Some(fragment) => {
                page += 1;
                describe(page, &fragment);
            }
            None => {
                eprintln!("content does not fit the page at all");
                break;
            }
        }
    }

    println!("\n{} page(s), {} pooled resource(s)", page, device.resources().len());
    device.dispose();
    Ok(())
}
