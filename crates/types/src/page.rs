use serde::{Deserialize, Deserializer, Serialize, de};

/// Physical sheet size. All dimensions are in PostScript points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
    Custom {
        width: f32,
        height: f32,
    },
}

impl PageSize {
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.0, 842.0),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Parses a CSS-style shorthand: one value for all sides, two for
    /// vertical/horizontal, three for top/horizontal/bottom, four for
    /// top/right/bottom/left.
    fn parse_shorthand(s: &str) -> Result<Self, String> {
        let parts: Vec<f32> = s
            .split_whitespace()
            .map(parse_length)
            .collect::<Result<_, _>>()?;

        match parts.as_slice() {
            [all] => Ok(Margins::all(*all)),
            [v, h] => Ok(Margins {
                top: *v,
                right: *h,
                bottom: *v,
                left: *h,
            }),
            [top, h, bottom] => Ok(Margins {
                top: *top,
                right: *h,
                bottom: *bottom,
                left: *h,
            }),
            [top, right, bottom, left] => Ok(Margins {
                top: *top,
                right: *right,
                bottom: *bottom,
                left: *left,
            }),
            _ => Err(format!(
                "margin shorthand takes 1 to 4 values, got {}",
                parts.len()
            )),
        }
    }
}

/// Parses a length such as "12", "12pt", "1in", "2.5cm" into points.
fn parse_length(s: &str) -> Result<f32, String> {
    let s = s.trim();
    let (number, factor) = if let Some(v) = s.strip_suffix("pt") {
        (v, 1.0)
    } else if let Some(v) = s.strip_suffix("px") {
        (v, 0.75)
    } else if let Some(v) = s.strip_suffix("in") {
        (v, 72.0)
    } else if let Some(v) = s.strip_suffix("cm") {
        (v, 28.3465)
    } else if let Some(v) = s.strip_suffix("mm") {
        (v, 2.83465)
    } else {
        (s, 1.0)
    };

    number
        .trim()
        .parse::<f32>()
        .map(|v| v * factor)
        .map_err(|e| format!("invalid length '{}': {}", s, e))
}

impl<'de> Deserialize<'de> for Margins {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum MarginsDef {
            Str(String),
            Num(f32),
            Map {
                #[serde(default)]
                top: f32,
                #[serde(default)]
                right: f32,
                #[serde(default)]
                bottom: f32,
                #[serde(default)]
                left: f32,
            },
        }

        match MarginsDef::deserialize(deserializer)? {
            MarginsDef::Str(s) => Margins::parse_shorthand(&s).map_err(de::Error::custom),
            MarginsDef::Num(v) => Ok(Margins::all(v)),
            MarginsDef::Map {
                top,
                right,
                bottom,
                left,
            } => Ok(Margins {
                top,
                right,
                bottom,
                left,
            }),
        }
    }
}

/// Sheet size plus margins, the box pagination actually fills.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct PageSetup {
    #[serde(default)]
    pub size: PageSize,
    #[serde(default)]
    pub margins: Margins,
}

impl PageSetup {
    pub fn new(size: PageSize, margins: Margins) -> Self {
        Self { size, margins }
    }

    pub fn content_width(&self) -> f32 {
        let (w, _) = self.size.dimensions_pt();
        w - self.margins.horizontal()
    }

    pub fn content_height(&self) -> f32 {
        let (_, h) = self.size.dimensions_pt();
        h - self.margins.vertical()
    }
}
