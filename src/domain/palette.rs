//! Chart colors

use std::fmt;

use ratatui::style::Color;

use crate::error::FixtureError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn parse(input: &str) -> Result<Self, FixtureError> {
        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(FixtureError::InvalidColor(input.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| FixtureError::InvalidColor(input.to_string()))
        };
        Ok(Self(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Linear blend between `self` (t = 0) and `other` (t = 1).
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb(
            mix(self.0, other.0),
            mix(self.1, other.1),
            mix(self.2, other.2),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

/// Ordered colors, matched positionally against the category order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPalette {
    colors: Vec<Rgb>,
}

impl ColorPalette {
    pub fn from_hex<'a>(values: impl IntoIterator<Item = &'a str>) -> Result<Self, FixtureError> {
        let colors = values
            .into_iter()
            .map(Rgb::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for position `index`, wrapping around when there are more
    /// categories than colors.
    pub fn color_at(&self, index: usize) -> Color {
        if self.colors.is_empty() {
            return Color::Gray;
        }
        self.colors[index % self.colors.len()].into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgb::parse("#E57373").unwrap(), Rgb(0xE5, 0x73, 0x73));
        assert_eq!(Rgb::parse("0277bd").unwrap(), Rgb(0x02, 0x77, 0xBD));
        assert!(Rgb::parse("#E5737").is_err());
        assert!(Rgb::parse("#GG0000").is_err());
        assert!(Rgb::parse("").is_err());
    }

    #[test]
    fn test_display_round_trips_case() {
        assert_eq!(Rgb(0xE1, 0xF5, 0xFE).to_string(), "#E1F5FE");
    }

    #[test]
    fn test_lerp_endpoints() {
        let low = Rgb(0xE1, 0xF5, 0xFE);
        let high = Rgb(0x02, 0x77, 0xBD);
        assert_eq!(low.lerp(high, 0.0), low);
        assert_eq!(low.lerp(high, 1.0), high);
        assert_eq!(low.lerp(high, 7.5), high);
        assert_eq!(low.lerp(high, f64::NAN), low);
    }

    #[test]
    fn test_palette_wraps() {
        let palette = ColorPalette::from_hex(["#010203", "#040506"]).unwrap();
        assert_eq!(palette.color_at(0), Color::Rgb(1, 2, 3));
        assert_eq!(palette.color_at(3), Color::Rgb(4, 5, 6));
        let empty = ColorPalette::from_hex([]).unwrap();
        assert_eq!(empty.color_at(4), Color::Gray);
    }
}
