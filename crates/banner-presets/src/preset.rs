use std::fmt;

use serde::de::{self, Deserializer};
use serde::Deserialize;

/// An opaque sRGB color, stored as three channels.
///
/// Deserialized from `"#rrggbb"` strings so the preset document reads the
/// same as the design sources it was transcribed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).ok_or_else(|| de::Error::custom(format!("invalid color: {s}")))
    }
}

/// One stop in a gradient ramp.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GradientStop {
    /// Position along the ramp, 0.0 (center) to 1.0 (edge).
    pub at: f32,
    pub color: Color,
}

/// A radial gradient: an ellipse centered at a fractional position with
/// pixel radii and an ordered list of color stops.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Gradient {
    /// Center x as a fraction of the banner width.
    pub cx: f32,
    /// Center y as a fraction of the banner height.
    pub cy: f32,
    /// Horizontal radius in pixels.
    pub rx: f32,
    /// Vertical radius in pixels.
    pub ry: f32,
    /// Stops ordered by `at`, ascending. Must contain at least one entry.
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    /// Color at normalized distance `t` from the gradient center.
    ///
    /// `t` is clamped to [0, 1]; values between stops interpolate linearly.
    pub fn sample(&self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let first = match self.stops.first() {
            Some(stop) => stop,
            None => return Color::rgb(0, 0, 0),
        };
        if t <= first.at {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.at {
                let span = b.at - a.at;
                let f = if span <= f32::EPSILON {
                    1.0
                } else {
                    (t - a.at) / span
                };
                return lerp(a.color, b.color, f);
            }
        }
        self.stops.last().map(|s| s.color).unwrap_or(first.color)
    }
}

fn lerp(a: Color, b: Color, f: f32) -> Color {
    let mix = |x: u8, y: u8| -> u8 { (x as f32 + (y as f32 - x as f32) * f).round() as u8 };
    Color::rgb(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
}

/// Tiling texture drawn over the gradient at low opacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    Grain,
    Grid,
    Rings,
    Dots,
}

/// Decorative border treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameStyle {
    None,
    Ink,
    Paper,
}

/// Which arrangement algorithm composes the banner.
///
/// Closed set: the compositor matches exhaustively over these, so a preset
/// document naming anything else fails at parse time rather than at render
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    Stack,
    Split,
    Center,
}

/// A named, immutable bundle of visual styling choices.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub description: String,
    pub gradient: Gradient,
    pub accent: Color,
    pub text: Color,
    pub soft_text: Color,
    pub pattern: Pattern,
    pub frame: FrameStyle,
    pub layout: LayoutKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_hex_roundtrip() {
        let c = Color::from_hex("#d7a94b").unwrap();
        assert_eq!(c, Color::rgb(0xd7, 0xa9, 0x4b));
        assert_eq!(c.to_string(), "#d7a94b");
    }

    #[test]
    fn color_from_hex_rejects_malformed() {
        assert!(Color::from_hex("d7a94b").is_none()); // missing '#'
        assert!(Color::from_hex("#fff").is_none());
        assert!(Color::from_hex("#zzzzzz").is_none());
        assert!(Color::from_hex("#d7a94b00").is_none());
    }

    #[test]
    fn gradient_sample_interpolates_between_stops() {
        let g = Gradient {
            cx: 0.5,
            cy: 0.5,
            rx: 100.0,
            ry: 100.0,
            stops: vec![
                GradientStop { at: 0.0, color: Color::rgb(0, 0, 0) },
                GradientStop { at: 1.0, color: Color::rgb(200, 100, 50) },
            ],
        };
        assert_eq!(g.sample(0.0), Color::rgb(0, 0, 0));
        assert_eq!(g.sample(1.0), Color::rgb(200, 100, 50));
        assert_eq!(g.sample(0.5), Color::rgb(100, 50, 25));
    }

    #[test]
    fn gradient_sample_clamps_out_of_range() {
        let g = Gradient {
            cx: 0.0,
            cy: 0.0,
            rx: 1.0,
            ry: 1.0,
            stops: vec![
                GradientStop { at: 0.2, color: Color::rgb(10, 10, 10) },
                GradientStop { at: 0.8, color: Color::rgb(90, 90, 90) },
            ],
        };
        // Before the first stop and past the last, the edge colors hold.
        assert_eq!(g.sample(-1.0), Color::rgb(10, 10, 10));
        assert_eq!(g.sample(0.1), Color::rgb(10, 10, 10));
        assert_eq!(g.sample(0.9), Color::rgb(90, 90, 90));
        assert_eq!(g.sample(2.0), Color::rgb(90, 90, 90));
    }

    #[test]
    fn enums_deserialize_from_lowercase() {
        let p: Pattern = serde_json::from_str("\"grain\"").unwrap();
        assert_eq!(p, Pattern::Grain);
        let f: FrameStyle = serde_json::from_str("\"paper\"").unwrap();
        assert_eq!(f, FrameStyle::Paper);
        let l: LayoutKind = serde_json::from_str("\"center\"").unwrap();
        assert_eq!(l, LayoutKind::Center);
    }

    #[test]
    fn unknown_layout_variant_fails_to_parse() {
        let err = serde_json::from_str::<LayoutKind>("\"mosaic\"");
        assert!(err.is_err());
    }
}
