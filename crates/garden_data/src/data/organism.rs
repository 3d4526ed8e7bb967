use serde::{Deserialize, Serialize};
use std::fmt;

/// An 8-bit RGBA color. `a == 0` is fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
        match digits.len() {
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// A purchasable plant type from the shop catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganismDefinition {
    pub id: String,
    pub name: String,
    /// Price in coins.
    pub price: u64,
    pub palette: Vec<Rgba>,
    /// Pixels per side of the generated sprite body.
    pub size: usize,
}

impl OrganismDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: u64,
        palette: Vec<Rgba>,
        size: usize,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            palette,
            size: size.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgba::from_hex("#FFD1E8"), Some(Rgba::rgb(0xFF, 0xD1, 0xE8)));
        assert_eq!(Rgba::from_hex("3b3b3b"), Some(Rgba::rgb(0x3B, 0x3B, 0x3B)));
        assert_eq!(
            Rgba::from_hex("#FFFFFF99"),
            Some(Rgba::new(255, 255, 255, 0x99))
        );
        assert_eq!(Rgba::from_hex("#FFF"), None);
        assert_eq!(Rgba::from_hex("#GGGGGG"), None);
    }

    #[test]
    fn test_display_round_trips_hex() {
        let c = Rgba::rgb(0x8E, 0xE7, 0xB8);
        assert_eq!(c.to_string(), "#8EE7B8");
        assert_eq!(Rgba::from_hex(&c.to_string()), Some(c));
    }

    #[test]
    fn test_zero_size_is_bumped() {
        let def = OrganismDefinition::new("x", "X", 1, vec![], 0);
        assert_eq!(def.size, 1);
    }
}
