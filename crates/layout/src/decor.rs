//! Decorators: reusable wrappers applied to content.
//!
//! A decorator is a recipe, not content; applying one to a target
//! produces new content wrapping the target. Decorators validate
//! their arguments at construction so application itself cannot fail.

use crate::LayoutError;
use crate::content::Content;
use crate::nodes::background::BackgroundBox;
use crate::nodes::border::{BorderBox, BorderStyle};
use galley_types::Color;
use std::fmt::Debug;

pub trait Decorator: Debug + Send + Sync {
    fn decorate(&self, target: Content) -> Content;
}

#[derive(Debug, Clone)]
pub struct BorderDecorator {
    style: BorderStyle,
}

impl BorderDecorator {
    pub fn new(style: BorderStyle) -> Result<Self, LayoutError> {
        style.validate()?;
        Ok(Self { style })
    }

    pub fn style(&self) -> &BorderStyle {
        &self.style
    }
}

impl Decorator for BorderDecorator {
    fn decorate(&self, target: Content) -> Content {
        Content::from(BorderBox::from_parts(target, self.style.clone()))
    }
}

#[derive(Debug, Clone)]
pub struct BackgroundDecorator {
    color: Color,
}

impl BackgroundDecorator {
    pub fn new(color: Color) -> Result<Self, LayoutError> {
        if !color.has_valid_alpha() {
            return Err(LayoutError::InvalidArgument(
                "background color",
                format!("opacity {}", color.a),
            ));
        }
        Ok(Self { color })
    }

    pub fn color(&self) -> &Color {
        &self.color
    }
}

impl Decorator for BackgroundDecorator {
    fn decorate(&self, target: Content) -> Content {
        Content::from(BackgroundBox::from_parts(target, self.color.clone()))
    }
}

/// Applies decorators in order, each wrapping the result of the
/// previous one, so the last decorator added becomes the outermost
/// layer. The chain nests deliberately: handing every decorator the
/// original target and keeping only the final result would silently
/// drop all the other layers.
#[derive(Debug, Default)]
pub struct DecoratorChain {
    items: Vec<Box<dyn Decorator>>,
}

impl DecoratorChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, decorator: impl Decorator + 'static) -> Self {
        self.items.push(Box::new(decorator));
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Decorator for DecoratorChain {
    fn decorate(&self, target: Content) -> Content {
        self.items
            .iter()
            .fold(target, |wrapped, decorator| decorator.decorate(wrapped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galley_types::{BLACK, Color};

    #[test]
    fn chain_nests_with_the_last_outermost() {
        let chain = DecoratorChain::new()
            .push(BackgroundDecorator::new(Color::gray(220)).unwrap())
            .push(BorderDecorator::new(BorderStyle::default()).unwrap());

        let decorated = chain.decorate(Content::text("x"));
        // Border added last, so it wraps the background.
        let Content::Border(border) = decorated else {
            panic!("expected border outermost");
        };
        let Content::Background(background) = border.child() else {
            panic!("expected background inside the border");
        };
        assert!(matches!(background.child(), Content::Text(_)));
    }

    #[test]
    fn empty_chain_returns_the_target_unchanged() {
        let chain = DecoratorChain::new();
        assert!(chain.is_empty());
        let out = chain.decorate(Content::text("y"));
        assert!(matches!(out, Content::Text(_)));
    }

    #[test]
    fn decorators_validate_at_construction() {
        assert!(BorderDecorator::new(BorderStyle {
            line_width: -1.0,
            ..BorderStyle::default()
        })
        .is_err());
        assert!(BackgroundDecorator::new(Color { a: 7.0, ..BLACK }).is_err());
    }
}
