//! Logo silhouettes sampled from an RGBA buffer into a dot map.
//!
//! Sampling runs once per source image and option set. The inclusion
//! predicate only looks at the pixel itself, so re-sampling with the same
//! inputs always yields the same dots.

use crate::color::{gradient_at, Rgb};
use crate::constants::{
    ALPHA_THRESHOLD, BRIGHTNESS_THRESHOLD, DEFAULT_GRADIENT, DOT_SIZE, DOT_SPACING,
    SAMPLING_GRID_WIDTH,
};
use crate::entity::{Entity, GridLayout};
use crate::error::FieldError;
use glam::Vec2;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

pub type GradientStops = SmallVec<[Rgb; 4]>;

/// Where included dots take their target color from.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorSource {
    /// Silhouette mode: only dark pixels are kept and colored by column
    /// along the gradient.
    Gradient(GradientStops),
    /// Every opaque pixel is kept with its own color.
    Image,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SamplingOptions {
    pub grid_width: u32,
    pub brightness_threshold: u8,
    pub alpha_threshold: u8,
    pub source: ColorSource,
    /// Dot spacing factor recorded in the map.
    pub spacing: f32,
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self {
            grid_width: SAMPLING_GRID_WIDTH,
            brightness_threshold: BRIGHTNESS_THRESHOLD,
            alpha_threshold: ALPHA_THRESHOLD,
            source: ColorSource::Gradient(DEFAULT_GRADIENT.iter().copied().collect()),
            spacing: DOT_SPACING,
        }
    }
}

#[inline]
pub fn brightness(r: u8, g: u8, b: u8) -> f32 {
    (r as u16 + g as u16 + b as u16) as f32 / 3.0
}

/// Whether a source pixel becomes a dot.
pub fn include_pixel([r, g, b, a]: [u8; 4], options: &SamplingOptions) -> bool {
    if a < options.alpha_threshold {
        return false;
    }
    match options.source {
        ColorSource::Image => true,
        ColorSource::Gradient(_) => brightness(r, g, b) <= options.brightness_threshold as f32,
    }
}

/// Rows needed to sample a `width` x `height` image at `grid_width`
/// columns while keeping its aspect ratio.
pub fn sampled_height(width: u32, height: u32, grid_width: u32) -> u32 {
    if width == 0 {
        return 0;
    }
    (grid_width as u64 * height as u64 / width as u64) as u32
}

/// Target color of one map cell; serialized as `#rrggbb`, or `""` when
/// the cell holds no dot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapColor(pub Option<Rgb>);

impl Serialize for MapColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(c) => serializer.collect_str(&c),
            None => serializer.serialize_str(""),
        }
    }
}

impl<'de> Deserialize<'de> for MapColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s.trim().is_empty() {
            return Ok(MapColor(None));
        }
        s.parse().map(|c| MapColor(Some(c))).map_err(serde::de::Error::custom)
    }
}

/// Row-major dot map, in the JSON shape the logo generator exports.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoMap {
    pub grid_width: u32,
    pub grid_height: u32,
    #[serde(rename = "dotPositions")]
    pub dots: Vec<Vec<bool>>,
    pub spacing: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<Vec<MapColor>>>,
}

impl LogoMap {
    /// Samples an RGBA buffer that is already at grid resolution.
    pub fn from_rgba(
        pixels: &[u8],
        width: u32,
        height: u32,
        options: &SamplingOptions,
    ) -> Result<Self, FieldError> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(FieldError::PixelBuffer {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }

        let mut dots = Vec::with_capacity(height as usize);
        let mut colors = Vec::with_capacity(height as usize);
        for (y, row_px) in pixels.chunks_exact((width as usize * 4).max(1)).enumerate() {
            if y >= height as usize {
                break;
            }
            let mut row = Vec::with_capacity(width as usize);
            let mut color_row = Vec::with_capacity(width as usize);
            for (x, px) in row_px.chunks_exact(4).enumerate() {
                let px = [px[0], px[1], px[2], px[3]];
                let on = include_pixel(px, options);
                let color = on.then(|| match &options.source {
                    ColorSource::Image => Rgb::new(px[0], px[1], px[2]),
                    ColorSource::Gradient(stops) => gradient_at(stops, x as f32, width as f32),
                });
                row.push(on);
                color_row.push(MapColor(color));
            }
            dots.push(row);
            colors.push(color_row);
        }

        let map = Self {
            grid_width: width,
            grid_height: height,
            dots,
            spacing: if options.spacing > 0.0 {
                options.spacing
            } else {
                DOT_SPACING
            },
            colors: Some(colors),
        };
        log::debug!(
            "[logo] sampled {}x{} grid, {} dots",
            width,
            height,
            map.dot_count()
        );
        Ok(map)
    }

    pub fn from_json(json: &str) -> Result<Self, FieldError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, FieldError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn dot_count(&self) -> usize {
        self.dots.iter().flatten().filter(|&&on| on).count()
    }

    /// Precomputed color at `(x, y)`, if the map carries one.
    pub fn color(&self, x: usize, y: usize) -> Option<Rgb> {
        self.colors.as_ref()?.get(y)?.get(x)?.0
    }
}

/// Dot diameter and pitch for drawing a map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotLayout {
    pub dot_size: f32,
    pub spacing: f32,
}

impl Default for DotLayout {
    fn default() -> Self {
        Self::new(DOT_SIZE, DOT_SPACING)
    }
}

impl DotLayout {
    /// A non-positive spacing falls back to the default factor.
    pub fn new(dot_size: f32, spacing: f32) -> Self {
        let spacing = if spacing > 0.0 { spacing } else { DOT_SPACING };
        Self { dot_size, spacing }
    }

    pub fn for_map(map: &LogoMap, dot_size: f32) -> Self {
        Self::new(dot_size, map.spacing)
    }

    pub fn gap(&self) -> f32 {
        self.dot_size * self.spacing * 0.5
    }

    pub fn cell(&self) -> f32 {
        self.dot_size + self.gap()
    }

    pub fn grid(&self) -> GridLayout {
        GridLayout::new(Vec2::splat(self.cell()), Vec2::splat(self.dot_size * 0.5))
    }

    pub fn canvas_size(&self, map: &LogoMap) -> Vec2 {
        Vec2::new(map.grid_width as f32, map.grid_height as f32) * self.cell()
    }
}

/// One entity per set map cell, carrying its target color.
///
/// Cells without a precomputed color are colored by column along
/// `fallback` (the accent color when it is empty).
pub fn build_dots(map: &LogoMap, layout: &DotLayout, fallback: &[Rgb]) -> Vec<Entity<Rgb>> {
    let grid = layout.grid();
    let mut dots = Vec::with_capacity(map.dot_count());
    for (y, row) in map.dots.iter().enumerate() {
        for (x, _) in row.iter().enumerate().filter(|(_, on)| **on) {
            let target = map
                .color(x, y)
                .unwrap_or_else(|| gradient_at(fallback, x as f32, map.grid_width as f32));
            dots.push(Entity::new(grid.rest_position(x, y), target));
        }
    }
    dots
}
