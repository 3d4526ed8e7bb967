use super::{centered_rect, Theme};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap};

/// Yes/no prompt drawn over the current tab.
pub struct ConfirmWidget<'a> {
    pub message: &'a str,
    pub theme: Theme,
}

impl<'a> Widget for ConfirmWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(46, 6, area);
        Clear.render(popup, buf);
        Paragraph::new(vec![
            Line::from(""),
            Line::from(format!(" {}", self.message)),
            Line::from(""),
            Line::from(Span::styled(
                " [y] confirm   [any other key] cancel",
                Style::default().fg(self.theme.muted),
            )),
        ])
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Confirm ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(self.theme.warning)),
        )
        .render(popup, buf);
    }
}

pub struct FormField<'a> {
    pub label: &'a str,
    pub value: &'a str,
    /// Allowed values shown as a hint, cycled with Left/Right.
    pub choices: Option<&'a [&'a str]>,
}

/// Modal form used to add or edit a finance entry.
pub struct EntryFormWidget<'a> {
    pub title: &'a str,
    pub fields: &'a [FormField<'a>],
    pub active: usize,
    pub theme: Theme,
}

impl<'a> Widget for EntryFormWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = self.fields.len() as u16 + 5;
        let popup = centered_rect(56, height, area);
        Clear.render(popup, buf);

        let mut lines = vec![Line::from("")];
        for (i, field) in self.fields.iter().enumerate() {
            let active = i == self.active;
            let label_style = if active {
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.muted)
            };
            let cursor = if active && field.choices.is_none() { "▏" } else { "" };
            let value = match field.choices {
                Some(_) => format!("◀ {} ▶", field.value),
                None => format!("{}{}", field.value, cursor),
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {:<10}", field.label), label_style),
                Span::styled(value, Style::default().fg(self.theme.text)),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " [Tab] next  [←/→] choose  [Enter] save  [Esc] cancel",
            Style::default().fg(self.theme.muted),
        )));

        Paragraph::new(lines)
            .block(
                Block::default()
                    .title(format!(" {} ", self.title))
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(self.theme.accent)),
            )
            .render(popup, buf);
    }
}
