//! 8-bit RGB colors and the blending rules the render adapters share.
//!
//! Blending is linear in sRGB space, not perceptual.

use crate::constants::{ACCENT, LUMA_WEIGHTS};
use crate::error::FieldError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Gray with the same luma, `round(0.299R + 0.587G + 0.114B)`.
    pub fn grayscale(self) -> Self {
        let [wr, wg, wb] = LUMA_WEIGHTS;
        let y = (wr * self.r as f32 + wg * self.g as f32 + wb * self.b as f32).round();
        let y = y.clamp(0.0, 255.0) as u8;
        Self::new(y, y, y)
    }

    /// Per-channel linear blend; `t` is clamped to \[0, 1\].
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            (a as f32 + (b as f32 - a as f32) * t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }

    /// CSS functional notation, e.g. `rgb(60, 124, 255)`.
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = FieldError;

    /// Accepts `#rrggbb`, `rrggbb` and `rgb(r, g, b)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(body) = s.strip_prefix("rgb") {
            let channels: Vec<u8> = body
                .split(|c: char| !c.is_ascii_digit())
                .filter(|part| !part.is_empty())
                .take(3)
                .map(|part| part.parse::<u8>())
                .collect::<Result<_, _>>()
                .map_err(|_| FieldError::Color(s.to_string()))?;
            return match channels[..] {
                [r, g, b] => Ok(Self::new(r, g, b)),
                _ => Err(FieldError::Color(s.to_string())),
            };
        }
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(FieldError::Color(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| FieldError::Color(s.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Color at column `x` of `width` along evenly spaced gradient `stops`.
///
/// No stops yields the accent color, a single stop is used as-is.
pub fn gradient_at(stops: &[Rgb], x: f32, width: f32) -> Rgb {
    match stops {
        [] => ACCENT,
        [only] => *only,
        _ => {
            let last = stops.len() - 1;
            let progress = if width > 0.0 { x / width } else { 0.0 };
            let scaled = progress.clamp(0.0, 1.0) * last as f32;
            let index = (scaled.floor() as usize).min(last);
            let next = (index + 1).min(last);
            stops[index].lerp(stops[next], scaled - index as f32)
        }
    }
}

/// Parses a comma separated list of colors, skipping blank entries.
pub fn parse_stops(csv: &str) -> Result<Vec<Rgb>, FieldError> {
    csv.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect()
}
