//! 8-bit RGB colors with hex parsing and the overlay brightening rule.

use std::fmt;
use std::str::FromStr;

use crate::errors::ColorParseError;

/// An opaque RGB color. Stroke opacity is a separate style field, so no
/// alpha channel is carried here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb`.
    pub fn from_hex(s: &str) -> Result<Color, ColorParseError> {
        let Some(digits) = s.strip_prefix('#') else {
            return Err(ColorParseError::MissingHash(s.to_string()));
        };

        let expanded;
        let digits = match digits.len() {
            3 => {
                let mut wide = String::with_capacity(6);
                for c in digits.chars() {
                    wide.push(c);
                    wide.push(c);
                }
                expanded = wide;
                expanded.as_str()
            }
            6 => digits,
            n => return Err(ColorParseError::BadLength(n)),
        };

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::BadDigit(s.to_string()))
        };

        Ok(Color {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Brighten each channel toward white by `percent`.
    ///
    /// Per channel: `c + (256 - c) * percent / 100`, truncated and clamped
    /// to 255. `#ff0000` at 50 gives `#ff8080`.
    pub fn brighten(self, percent: f64) -> Color {
        let lift = |c: u8| {
            let raised = f64::from(c) + (256.0 - f64::from(c)) * percent / 100.0;
            if raised >= 255.0 { 255 } else { raised as u8 }
        };
        Color {
            r: lift(self.r),
            g: lift(self.g),
            b: lift(self.b),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Color, ColorParseError> {
        Color::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_six_digit_hex() {
        assert_eq!(Color::from_hex("#ff0000").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::from_hex("#00ff00").unwrap(), Color::rgb(0, 255, 0));
        assert_eq!(Color::from_hex("#123abc").unwrap(), Color::rgb(0x12, 0x3a, 0xbc));
    }

    #[test]
    fn parse_three_digit_hex() {
        assert_eq!(Color::from_hex("#e0f").unwrap(), Color::rgb(0xee, 0x00, 0xff));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            Color::from_hex("ff0000"),
            Err(ColorParseError::MissingHash("ff0000".to_string()))
        );
        assert_eq!(Color::from_hex("#ff00"), Err(ColorParseError::BadLength(4)));
        assert_eq!(
            Color::from_hex("#ff00zz"),
            Err(ColorParseError::BadDigit("#ff00zz".to_string()))
        );
    }

    #[test]
    fn display_round_trip() {
        let c = Color::from_hex("#1a2b3c").unwrap();
        assert_eq!(c.to_string(), "#1a2b3c");
        assert_eq!(c.to_string().parse::<Color>().unwrap(), c);
    }

    #[test]
    fn brighten_pinned_values() {
        let red = Color::rgb(255, 0, 0);
        assert_eq!(red.brighten(50.0), Color::from_hex("#ff8080").unwrap());
        assert_eq!(red.brighten(25.0), Color::from_hex("#ff4040").unwrap());
    }

    #[test]
    fn brighten_saturates_at_white() {
        assert_eq!(Color::rgb(200, 200, 200).brighten(100.0), Color::rgb(255, 255, 255));
    }
}
