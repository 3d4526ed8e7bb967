pub mod finance;
pub mod garden;
pub mod overlays;
pub mod shop;
pub mod status;

pub use finance::FinanceWidget;
pub use garden::GardenWidget;
pub use overlays::{ConfirmWidget, EntryFormWidget, FormField};
pub use shop::ShopWidget;
pub use status::{EventLogWidget, KeyHintsWidget, StatusWidget};

use ratatui::layout::Rect;
use ratatui::style::Color;

/// Pastel colour set for the light and dark modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub earning: Color,
    pub expense: Color,
    pub warning: Color,
}

impl Theme {
    pub const LIGHT: Theme = Theme {
        background: Color::Rgb(0xFF, 0xF8, 0xFB),
        text: Color::Rgb(0x3B, 0x3B, 0x3B),
        muted: Color::Rgb(0x8A, 0x8A, 0x9A),
        accent: Color::Rgb(0xC0, 0x7B, 0xD8),
        earning: Color::Rgb(0x3F, 0xA8, 0x75),
        expense: Color::Rgb(0xE0, 0x6C, 0x8A),
        warning: Color::Rgb(0xD9, 0x8E, 0x04),
    };

    pub const DARK: Theme = Theme {
        background: Color::Rgb(0x1E, 0x1B, 0x26),
        text: Color::Rgb(0xEE, 0xE8, 0xF4),
        muted: Color::Rgb(0x8C, 0x86, 0x9A),
        accent: Color::Rgb(0xE8, 0xD1, 0xFF),
        earning: Color::Rgb(0xCF, 0xFF, 0xE4),
        expense: Color::Rgb(0xFF, 0xB3, 0xC6),
        warning: Color::Rgb(0xFF, 0xE0, 0x8A),
    };

    pub fn for_mode(dark: bool) -> Theme {
        if dark {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }
}

/// A `width` x `height` rect centred in `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
