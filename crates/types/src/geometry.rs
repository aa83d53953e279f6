#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Component-wise maximum of two sizes.
    pub fn max(self, other: Size) -> Size {
        Size {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Grows both dimensions, used when wrapping content in chrome
    /// such as borders or padding.
    pub fn expand(self, dw: f32, dh: f32) -> Size {
        Size {
            width: self.width + dw,
            height: self.height + dh,
        }
    }

    pub fn has_unbounded_height(&self) -> bool {
        self.height.is_infinite()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_max_is_component_wise() {
        let a = Size::new(10.0, 2.0);
        let b = Size::new(4.0, 8.0);
        assert_eq!(a.max(b), Size::new(10.0, 8.0));
    }

    #[test]
    fn rect_translate_moves_origin_only() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        let moved = r.translate(10.0, 20.0);
        assert_eq!(moved, Rect::new(11.0, 22.0, 3.0, 4.0));
        assert_eq!(moved.size(), Size::new(3.0, 4.0));
    }

    #[test]
    fn unbounded_height_is_detected() {
        assert!(Size::new(100.0, f32::INFINITY).has_unbounded_height());
        assert!(!Size::new(100.0, 1.0e9).has_unbounded_height());
    }
}
