//! Simulates a preview window around a two-column newsletter: lays the
//! content out at a few viewer widths and lets the fit search pick a
//! single page height for each.
//!
//! Run with: cargo run --example fit_preview

use galley::{
    BackgroundDecorator, Color, Columns, Content, Decorator, Device, FontSpec, LayoutEnv,
    MemoryTarget, MonoMetrics, Preview, TextBlock,
};
use std::env;
use std::sync::Arc;

fn newsletter() -> Result<Content, galley::LayoutError> {
    let body = "Galley composes pages the way a printer once composed type: \
        content first, the page box last. This paragraph repeats just enough \
        to need balancing across the columns of the preview window below.";
    let text = format!("{}\n\n{}", body, body);

    let columns = Columns::new(
        Content::from(TextBlock::new(text).with_font(FontSpec::new("Mono", 9.0))),
        2,
    )?
    .with_gap(12.0)?;

    let shade = BackgroundDecorator::new(Color::gray(245))?;
    Ok(shade.decorate(Content::from(columns)))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "galley=debug");
        }
    }
    env_logger::init();

    let device = Device::new(MemoryTarget::new());
    let env = LayoutEnv::new(device.clone(), Arc::new(MonoMetrics));

    let mut preview = Preview::new(env).with_fit_to_page(true);
    preview.set_content(newsletter()?)?;

    for width in [360.0, 480.0, 640.0] {
        preview.resize(width)?;
        let fragment = preview.fragment().expect("content is set");
        println!(
            "viewer {:>3.0}pt wide -> page {:.0}x{:.0}pt",
            width,
            fragment.width(),
            preview.page_height().unwrap_or_default()
        );
    }

    device.dispose();
    Ok(())
}
