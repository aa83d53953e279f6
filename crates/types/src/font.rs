use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FontWeight {
    Light,
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// Value-level description of a font. Two specs describing the same
/// family, size, weight and style compare equal, which is what allows
/// rendering targets to cache one allocation per distinct description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size_pt: f32,
    #[serde(default)]
    pub weight: FontWeight,
    #[serde(default)]
    pub style: FontStyle,
}

impl Eq for FontSpec {}

impl Hash for FontSpec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.family.hash(state);
        self.size_pt.to_bits().hash(state);
        self.weight.hash(state);
        self.style.hash(state);
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "Helvetica".to_string(),
            size_pt: 12.0,
            weight: FontWeight::default(),
            style: FontStyle::default(),
        }
    }
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size_pt: f32) -> Self {
        Self {
            family: family.into(),
            size_pt,
            ..Self::default()
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    pub fn bold(self) -> Self {
        self.with_weight(FontWeight::Bold)
    }

    pub fn italic(self) -> Self {
        self.with_style(FontStyle::Italic)
    }

    /// A spec can only be allocated when it names a family and asks for
    /// a real, positive size.
    pub fn is_well_formed(&self) -> bool {
        !self.family.trim().is_empty() && self.size_pt.is_finite() && self.size_pt > 0.0
    }
}
