//! Deterministic procedural pixel sprites.
//!
//! A sprite is a `size x (size + 1)` raster: the plant body fills rows
//! `0..size` and a flat pot occupies the last row. The body is a seeded
//! random fill whose density peaks at the horizontal center, overlaid with
//! two eyes and a highlight so every plant gets a face.
//!
//! Output depends only on the organism id's first character, the level,
//! the palette and the size. Same inputs, same pixels, on every platform.

use crate::rng::Mulberry32;
use garden_data::{OrganismDefinition, Rgba};

/// Used when a palette has no usable color.
pub const DEFAULT_COLOR: Rgba = Rgba::rgb(0xFF, 0xD1, 0xE8);
pub const EYE_COLOR: Rgba = Rgba::rgb(0x3B, 0x3B, 0x3B);
pub const HIGHLIGHT_COLOR: Rgba = Rgba::new(0xFF, 0xFF, 0xFF, 153);

const BASE_CHANCE: f64 = 0.25;
const CENTER_BONUS: f64 = 0.6;

/// A rendered sprite in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sprite {
    width: usize,
    height: usize,
    pixels: Vec<Rgba>,
}

impl Sprite {
    fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; width * height],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at `(x, y)`; out-of-range reads are transparent.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Rgba {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x]
        } else {
            Rgba::TRANSPARENT
        }
    }

    fn set(&mut self, x: usize, y: usize, color: Rgba) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Rgba]> {
        self.pixels.chunks(self.width.max(1))
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Number of non-transparent pixels.
    #[must_use]
    pub fn filled(&self) -> usize {
        self.pixels.iter().filter(|p| !p.is_transparent()).count()
    }

    /// Flattens the raster into RGBA8 bytes, suitable for `ImageData`.
    #[must_use]
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|p| [p.r, p.g, p.b, p.a])
            .collect()
    }
}

/// Seed derived from the id's first character and the growth level.
#[must_use]
pub fn sprite_seed(organism_id: &str, level: u8) -> u32 {
    let first = organism_id.chars().next().map_or(0, u32::from);
    (first + u32::from(level) * 13) % 100
}

/// Fill probability for column `x`: peaks at `center`, linear falloff.
fn fill_chance(x: usize, center: usize) -> f64 {
    if center == 0 {
        return BASE_CHANCE + CENTER_BONUS;
    }
    let distance = x.abs_diff(center) as f64;
    BASE_CHANCE + (1.0 - distance / center as f64) * CENTER_BONUS
}

pub fn generate_sprite(definition: &OrganismDefinition, level: u8) -> Sprite {
    let size = definition.size.max(1);
    let palette = &definition.palette;
    let center = size / 2;
    let mut rng = Mulberry32::new(sprite_seed(&definition.id, level));
    let mut sprite = Sprite::blank(size, size + 1);

    let pot_color = palette.get(1).copied().unwrap_or(DEFAULT_COLOR);
    let pot_start = size / 4;
    for x in pot_start..pot_start + (size / 2).max(1) {
        sprite.set(x, size, pot_color);
    }

    for y in 0..size {
        for x in 0..size {
            if rng.next_f64() > fill_chance(x, center) {
                continue;
            }
            let pick = (rng.next_f64() * palette.len() as f64) as usize;
            let color = palette
                .get(pick.min(palette.len().saturating_sub(1)))
                .copied()
                .unwrap_or(DEFAULT_COLOR);
            sprite.set(x, y, color);
        }
    }

    let eye_row = size * 2 / 5;
    sprite.set(center.saturating_sub(1), eye_row, EYE_COLOR);
    sprite.set(center.min(size - 1), eye_row, EYE_COLOR);
    sprite.set(center.saturating_sub(1), size * 7 / 20, HIGHLIGHT_COLOR);

    sprite
}
