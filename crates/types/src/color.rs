use serde::{Deserialize, Deserializer, Serialize, de};
use std::hash::{Hash, Hasher};

fn default_one() -> f32 {
    1.0
}

fn is_one(num: &f32) -> bool {
    *num == 1.0
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(skip_serializing_if = "is_one", default = "default_one")]
    pub a: f32,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.r.hash(state);
        self.g.hash(state);
        self.b.hash(state);
        self.a.to_bits().hash(state);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self { r: 0, g: 0, b: 0, a: 1.0 }
    }
}

pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 1.0 };
pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 1.0 };

impl Color {
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn gray(value: u8) -> Self {
        Self { r: value, g: value, b: value, a: 1.0 }
    }

    /// Opacity must be a finite value between zero and one to describe
    /// a drawable color.
    pub fn has_valid_alpha(&self) -> bool {
        self.a.is_finite() && (0.0..=1.0).contains(&self.a)
    }

    /// Parses `#RGB` or `#RRGGBB` into an opaque color.
    fn parse_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        let Some(hex) = s.strip_prefix('#') else {
            return Err(format!("color '{}' is missing the leading '#'", s));
        };
        // Byte slicing below needs single-byte characters.
        if !hex.is_ascii() {
            return Err(format!("color '{}' has non-hex characters", s));
        }

        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16)
                .map_err(|_| format!("'{}' is not a hex channel value", digits))
        };

        match hex.len() {
            // Shorthand: each digit doubles, so #fa0 is #ffaa00.
            3 => Ok(Color::rgb(
                channel(&hex[0..1])? * 17,
                channel(&hex[1..2])? * 17,
                channel(&hex[2..3])? * 17,
            )),
            6 => Ok(Color::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            n => Err(format!("hex color takes 3 or 6 digits, got {}", n)),
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Accepts both a hex string and an explicit channel map.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Channels {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "default_one")]
                a: f32,
            },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Self::parse_hex(&s).map_err(de::Error::custom),
            Repr::Channels { r, g, b, a } => Ok(Color { r, g, b, a }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        let short: Color = serde_json::from_str("\"#f00\"").unwrap();
        assert_eq!(short, Color::rgb(255, 0, 0));

        let long: Color = serde_json::from_str("\"#336699\"").unwrap();
        assert_eq!(long, Color::rgb(51, 102, 153));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(serde_json::from_str::<Color>("\"336699\"").is_err());
        assert!(serde_json::from_str::<Color>("\"#12345\"").is_err());
        assert!(serde_json::from_str::<Color>("\"#xyz\"").is_err());
        assert!(serde_json::from_str::<Color>("\"#aé\"").is_err());
    }

    #[test]
    fn map_form_defaults_alpha_to_opaque() {
        let c: Color = serde_json::from_str(r#"{"r": 10, "g": 20, "b": 30}"#).unwrap();
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn alpha_validity() {
        assert!(BLACK.has_valid_alpha());
        assert!(!Color { a: 1.5, ..BLACK }.has_valid_alpha());
        assert!(!Color { a: f32::NAN, ..BLACK }.has_valid_alpha());
    }

    #[test]
    fn equal_colors_hash_alike() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Color::rgb(1, 2, 3));
        assert!(set.contains(&Color::rgb(1, 2, 3)));
    }
}
