use super::Theme;
use crate::sprite::SpriteWidget;
use garden_core::Garden;
use garden_data::{Plant, MAX_VITALITY};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph, Widget};

/// One card per slot: sprite, level, health and hunger meters.
pub struct GardenWidget<'a> {
    pub garden: &'a Garden,
    pub selected: usize,
    pub theme: Theme,
}

impl<'a> Widget for GardenWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let slot_count = self.garden.state().slot_count();
        if slot_count == 0 {
            Paragraph::new(" No garden slots configured. ")
                .style(Style::default().fg(self.theme.muted))
                .render(area, buf);
            return;
        }

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, slot_count as u32); slot_count])
            .split(area);

        for (index, card) in cards.iter().enumerate() {
            let border_style = if index == self.selected {
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.muted)
            };
            let block = Block::default()
                .title(format!(" Slot {} ", index + 1))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style);
            let inner = block.inner(*card);
            block.render(*card, buf);

            match self.garden.plant(index) {
                Some(plant) => self.render_plant(index, plant, inner, buf),
                None => Paragraph::new(vec![
                    Line::from(""),
                    Line::from(" (empty)"),
                    Line::from(" Buy a plant in the Shop"),
                ])
                .style(Style::default().fg(self.theme.muted))
                .render(inner, buf),
            }
        }
    }
}

impl<'a> GardenWidget<'a> {
    fn render_plant(&self, index: usize, plant: &Plant, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let name = &self.garden.catalog().resolve(&plant.organism_id).name;
        Paragraph::new(format!(" {} · Lv {}", name, plant.level))
            .style(
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            )
            .render(rows[0], buf);

        if let Some(sprite) = self.garden.render(index) {
            SpriteWidget::new(&sprite, self.theme.background).render(rows[1], buf);
        }

        meter("Health", plant.health, self.theme.earning).render(rows[2], buf);
        meter("Hunger", plant.hunger, self.theme.warning).render(rows[3], buf);

        Paragraph::new(format!(" Age {} · Mood {:.0}%", plant.age, plant.happiness()))
            .style(Style::default().fg(self.theme.muted))
            .render(rows[4], buf);
    }
}

fn meter(label: &str, value: u8, color: ratatui::style::Color) -> Gauge<'static> {
    let percent = u16::from(value.min(MAX_VITALITY)) * 100 / u16::from(MAX_VITALITY);
    Gauge::default()
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{}: {}", label, value))
}
