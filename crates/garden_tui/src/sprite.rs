use garden_core::Sprite;
use garden_data::Rgba;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

/// Upper half block: foreground paints the top pixel, background the bottom.
const HALF_BLOCK: &str = "▀";

/// Draws a sprite at one terminal cell per two vertical pixels, centred in
/// the area. Rows or columns that do not fit are clipped.
pub struct SpriteWidget<'a> {
    sprite: &'a Sprite,
    background: Color,
}

impl<'a> SpriteWidget<'a> {
    pub fn new(sprite: &'a Sprite, background: Color) -> Self {
        Self { sprite, background }
    }

    /// Terminal cells needed to show the whole sprite.
    pub fn cell_size(sprite: &Sprite) -> (u16, u16) {
        let w = sprite.width() as u16;
        let h = sprite.height().div_ceil(2) as u16;
        (w, h)
    }
}

/// Alpha-blends `pixel` over `background`. Transparent pixels show the
/// background unchanged.
pub fn blend(pixel: Rgba, background: Color) -> Color {
    if pixel.is_transparent() {
        return background;
    }
    if pixel.a == u8::MAX {
        return Color::Rgb(pixel.r, pixel.g, pixel.b);
    }
    let (br, bg, bb) = match background {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => (0, 0, 0),
    };
    let a = u16::from(pixel.a);
    let mix = |fg: u8, bg: u8| ((u16::from(fg) * a + u16::from(bg) * (255 - a)) / 255) as u8;
    Color::Rgb(mix(pixel.r, br), mix(pixel.g, bg), mix(pixel.b, bb))
}

impl<'a> Widget for SpriteWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (w, h) = Self::cell_size(self.sprite);
        let offset_x = area.width.saturating_sub(w) / 2;
        let offset_y = area.height.saturating_sub(h) / 2;

        for cy in 0..h.min(area.height) {
            for cx in 0..w.min(area.width) {
                let x = area.x + offset_x + cx;
                let y = area.y + offset_y + cy;
                if x >= area.right() || y >= area.bottom() {
                    continue;
                }
                let px = cx as usize;
                let top = self.sprite.get(px, cy as usize * 2);
                let bottom = self.sprite.get(px, cy as usize * 2 + 1);

                let cell = &mut buf[(x, y)];
                cell.set_symbol(HALF_BLOCK);
                cell.set_fg(blend(top, self.background));
                cell.set_bg(blend(bottom, self.background));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garden_core::{generate_sprite, OrganismCatalog};

    #[test]
    fn test_blend_opaque_and_transparent() {
        let bg = Color::Rgb(10, 20, 30);
        assert_eq!(blend(Rgba::TRANSPARENT, bg), bg);
        assert_eq!(blend(Rgba::rgb(1, 2, 3), bg), Color::Rgb(1, 2, 3));
    }

    #[test]
    fn test_blend_partial_alpha() {
        let white_60 = Rgba::new(255, 255, 255, 153);
        assert_eq!(blend(white_60, Color::Rgb(0, 0, 0)), Color::Rgb(153, 153, 153));
    }

    #[test]
    fn test_sprite_fills_expected_cells() {
        let catalog = OrganismCatalog::builtin();
        let sprite = generate_sprite(catalog.resolve("sprout"), 1);
        let (w, h) = SpriteWidget::cell_size(&sprite);
        assert_eq!((w, h), (8, 5));

        let area = Rect::new(0, 0, w, h);
        let mut buf = Buffer::empty(area);
        SpriteWidget::new(&sprite, Color::Rgb(0, 0, 0)).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), HALF_BLOCK);
        assert_eq!(buf[(7, 4)].symbol(), HALF_BLOCK);
    }
}
