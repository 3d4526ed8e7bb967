use super::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Widget};
use std::collections::VecDeque;

pub const TAB_TITLES: [&str; 3] = ["Garden", "Shop", "Finance"];

/// Top bar: tab strip plus coin balance.
pub struct StatusWidget {
    pub active_tab: usize,
    pub coins: u64,
    pub plants: usize,
    pub slots: usize,
    pub dark: bool,
    pub theme: Theme,
}

impl Widget for StatusWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(40)])
            .split(area);

        Tabs::new(TAB_TITLES)
            .select(self.active_tab)
            .style(Style::default().fg(self.theme.muted))
            .highlight_style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .render(columns[0], buf);

        let mode = if self.dark { "🌙" } else { "☀" };
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("🪙 {} ", self.coins),
                Style::default()
                    .fg(self.theme.warning)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("| 🌱 {}/{} | {}", self.plants, self.slots, mode),
                Style::default().fg(self.theme.text),
            ),
        ]))
        .render(columns[1], buf);
    }
}

/// Most recent notifications, newest first.
pub struct EventLogWidget<'a> {
    pub events: &'a VecDeque<(String, Color)>,
    pub theme: Theme,
}

impl<'a> Widget for EventLogWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Events ")
            .borders(Borders::TOP)
            .border_style(Style::default().fg(self.theme.muted));
        let capacity = block.inner(area).height as usize;
        let lines: Vec<Line> = self
            .events
            .iter()
            .take(capacity)
            .map(|(msg, color)| Line::from(Span::styled(format!(" {}", msg), Style::default().fg(*color))))
            .collect();
        Paragraph::new(lines).block(block).render(area, buf);
    }
}

/// Footer listing the keys available on the active tab.
pub struct KeyHintsWidget {
    pub active_tab: usize,
    pub theme: Theme,
}

impl KeyHintsWidget {
    pub fn hints(active_tab: usize) -> &'static str {
        match active_tab {
            0 => "[1-3] slot [w] water [f] feed [h] harvest [x] remove [d] daily [Tab] next [q] quit",
            1 => "[↑/↓] item [b] buy [d] daily [Tab] next [q] quit",
            _ => "[a/e] add earning/expense [Enter] edit [Del] delete [E] export [I] import [C] clear all [t] theme [q] quit",
        }
    }
}

impl Widget for KeyHintsWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Self::hints(self.active_tab))
            .style(Style::default().fg(self.theme.muted))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_shows_coins() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        StatusWidget {
            active_tab: 0,
            coins: 42,
            plants: 1,
            slots: 3,
            dark: false,
            theme: Theme::LIGHT,
        }
        .render(area, &mut buf);
        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("42"));
        assert!(text.contains("Garden"));
    }

    #[test]
    fn test_event_log_is_clipped_to_area() {
        let events: VecDeque<(String, Color)> = (0..10)
            .map(|i| (format!("event {}", i), Color::White))
            .collect();
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);
        EventLogWidget {
            events: &events,
            theme: Theme::DARK,
        }
        .render(area, &mut buf);
        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("event 0"));
        assert!(text.contains("event 2"));
        assert!(!text.contains("event 3"));
    }
}
