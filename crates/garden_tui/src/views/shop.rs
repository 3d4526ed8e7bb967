use super::Theme;
use crate::sprite::SpriteWidget;
use garden_core::{generate_sprite, OrganismCatalog};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

pub struct ShopWidget<'a> {
    pub catalog: &'a OrganismCatalog,
    pub coins: u64,
    pub selected: usize,
    pub theme: Theme,
}

impl<'a> Widget for ShopWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let mut lines = Vec::with_capacity(self.catalog.len());
        for (i, def) in self.catalog.iter().enumerate() {
            let affordable = self.coins >= def.price;
            let marker = if i == self.selected { "▶ " } else { "  " };
            let mut name_style = Style::default().fg(self.theme.text);
            if i == self.selected {
                name_style = name_style.add_modifier(Modifier::BOLD);
            }
            let price_color = if affordable {
                self.theme.earning
            } else {
                self.theme.expense
            };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(self.theme.accent)),
                Span::styled(format!("{:<10}", def.name), name_style),
                Span::styled(
                    format!("{:>4} coins", def.price),
                    Style::default().fg(price_color),
                ),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " [↑/↓] choose  [b] buy",
            Style::default().fg(self.theme.muted),
        )));

        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" 🛒 Shop ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(self.theme.accent)),
            )
            .render(columns[0], buf);

        let preview = Block::default()
            .title(" Preview ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.muted));
        let inner = preview.inner(columns[1]);
        preview.render(columns[1], buf);

        if let Some(def) = self.catalog.iter().nth(self.selected) {
            let sprite = generate_sprite(def, 1);
            SpriteWidget::new(&sprite, self.theme.background).render(inner, buf);
        }
    }
}
