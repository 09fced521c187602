//! Hex color parsing for template and jersey palettes.
//!
//! Colors are packed in **BGR** channel order. The layout tables and shipped
//! template presets were authored against a BGR drawing backend, so the swap
//! from natural RGB order is part of the contract; the accessors below are the
//! only place that knows about it.

use crate::error::ColorError;

/// A 3-channel color packed as `[b, g, r]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub [u8; 3]);

impl Color {
    pub const WHITE: Color = Color([255, 255, 255]);
    pub const BLACK: Color = Color([0, 0, 0]);

    /// Parse a `#rgb` or `#rrggbb` hex string into a BGR-packed color.
    ///
    /// The 3-digit form expands each nibble (`#fc0` is `#ffcc00`).
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidFormat { input: hex.to_string() };

        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let (r, g, b) = match digits.len() {
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).unwrap();
                let expand = |n: u8| n << 4 | n;
                (expand(nibble(0)), expand(nibble(1)), expand(nibble(2)))
            }
            6 => {
                let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap();
                (byte(0), byte(2), byte(4))
            }
            _ => return Err(invalid()),
        };

        Ok(Color([b, g, r]))
    }

    /// Canonical lowercase 6-digit form; round-trips [`Color::from_hex`].
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
    }

    pub fn b(&self) -> u8 {
        self.0[0]
    }

    pub fn g(&self) -> u8 {
        self.0[1]
    }

    pub fn r(&self) -> u8 {
        self.0[2]
    }

    /// The color as an RGBA pixel with full opacity.
    pub fn to_rgba(&self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), 255]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_six_digit_hex() {
        let c = Color::from_hex("#ffc300").unwrap();
        assert_eq!(c.r(), 0xff);
        assert_eq!(c.g(), 0xc3);
        assert_eq!(c.b(), 0x00);
    }

    #[test]
    fn test_channel_order_is_bgr() {
        let c = Color::from_hex("#102030").unwrap();
        assert_eq!(c.0, [0x30, 0x20, 0x10]);
    }

    #[test]
    fn test_three_digit_form_expands_nibbles() {
        assert_eq!(Color::from_hex("#abc").unwrap(), Color::from_hex("#aabbcc").unwrap());
        assert_eq!(Color::from_hex("#fff").unwrap(), Color::WHITE);
    }

    #[test]
    fn test_hex_round_trip() {
        for hex in ["#000000", "#ffffff", "#ffc300", "#1a2b3c", "#d62828"] {
            assert_eq!(Color::from_hex(hex).unwrap().to_hex(), hex);
        }
        // 3-digit input canonicalizes to the 6-digit form
        assert_eq!(Color::from_hex("#fc0").unwrap().to_hex(), "#ffcc00");
    }

    #[test]
    fn test_rejects_malformed_input() {
        for bad in ["ffc300", "#ffc3", "#ffc30", "#ffc3001", "#ggg", "", "#", "#ff c300"] {
            assert!(Color::from_hex(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            Color::from_hex("#AABBCC").unwrap(),
            Color::from_hex("#aabbcc").unwrap()
        );
    }
}
