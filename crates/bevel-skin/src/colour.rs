// colour.rs
// Author: Dustin Pilgrim
// License: MIT
//
// RGBA colours as the skin settings carry them: four reals in [0, 1].
// Config files spell them as hex (#RRGGBB or #RRGGBBAA).

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkinError};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const RED: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// From packed 0xAARRGGBB.
    pub fn from_argb(argb: u32) -> Self {
        Self::new(
            channel(r(argb)),
            channel(g(argb)),
            channel(b(argb)),
            channel(a(argb)),
        )
    }

    pub fn to_argb(self) -> u32 {
        argb(byte(self.a), byte(self.r), byte(self.g), byte(self.b))
    }

    pub fn parse_hex(s: &str) -> Result<Self> {
        let s = s.trim();

        let Some(hex) = s.strip_prefix('#') else {
            return Err(SkinError::InvalidColour("colour must start with #".into()));
        };

        let bad = || SkinError::InvalidColour(format!("invalid hex colour \"{s}\""));
        let value = u32::from_str_radix(hex, 16).map_err(|_| bad())?;

        match hex.len() {
            6 => Ok(Self::from_argb(0xFF00_0000 | value)),
            // RRGGBBAA -> AARRGGBB
            8 => Ok(Self::from_argb(value.rotate_right(8))),
            _ => Err(SkinError::InvalidColour(
                "colour must be 6 or 8 hex digits (RRGGBB / RRGGBBAA)".into(),
            )),
        }
    }

    pub(crate) fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(byte(self.r), byte(self.g), byte(self.b), byte(self.a))
    }
}

#[inline]
fn a(argb: u32) -> u8 { ((argb >> 24) & 0xFF) as u8 }
#[inline]
fn r(argb: u32) -> u8 { ((argb >> 16) & 0xFF) as u8 }
#[inline]
fn g(argb: u32) -> u8 { ((argb >> 8) & 0xFF) as u8 }
#[inline]
fn b(argb: u32) -> u8 { (argb & 0xFF) as u8 }

#[inline]
fn argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

#[inline]
fn channel(v: u8) -> f64 {
    v as f64 / 255.0
}

#[inline]
fn byte(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_and_rgba() {
        assert_eq!(Rgba::parse_hex("#000000").unwrap(), Rgba::BLACK);
        assert_eq!(Rgba::parse_hex(" #ff0000 ").unwrap(), Rgba::RED);

        let c = Rgba::parse_hex("#0A84FF80").unwrap();
        assert_eq!(c.to_argb(), 0x800A_84FF);
    }

    #[test]
    fn rejects_malformed() {
        assert!(Rgba::parse_hex("ff0000").is_err());
        assert!(Rgba::parse_hex("#ff00").is_err());
        assert!(Rgba::parse_hex("#gg0000").is_err());
    }

    #[test]
    fn argb_round_trips_through_reals() {
        assert_eq!(Rgba::from_argb(0xFF0F_1115).to_argb(), 0xFF0F_1115);
    }
}
