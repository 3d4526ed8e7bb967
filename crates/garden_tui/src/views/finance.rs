use super::Theme;
use garden_core::FinanceBook;
use garden_data::{EntryKind, FinanceEntry};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Paragraph, Widget};

/// Ledger view: earnings and expenses side by side, then totals, a bar
/// chart and the expense breakdown by category.
pub struct FinanceWidget<'a> {
    pub book: &'a FinanceBook,
    pub selected: Option<usize>,
    pub theme: Theme,
}

impl<'a> Widget for FinanceWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);
        let lists = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);
        let stats = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Percentage(30),
                Constraint::Percentage(40),
            ])
            .split(rows[1]);

        self.entry_list(EntryKind::Earning).render(lists[0], buf);
        self.entry_list(EntryKind::Expense).render(lists[1], buf);

        let summary = self.book.summary();
        let net_color = if summary.net() >= 0.0 {
            self.theme.earning
        } else {
            self.theme.expense
        };
        Paragraph::new(vec![
            Line::from(Span::styled(
                format!(" Earnings  {:>10.2}", summary.earnings),
                Style::default().fg(self.theme.earning),
            )),
            Line::from(Span::styled(
                format!(" Expenses  {:>10.2}", summary.expenses),
                Style::default().fg(self.theme.expense),
            )),
            Line::from(Span::styled(
                format!(" Net       {:>10.2}", summary.net()),
                Style::default().fg(net_color).add_modifier(Modifier::BOLD),
            )),
        ])
        .block(self.panel(" Summary "))
        .render(stats[0], buf);

        let bars = [
            Bar::default()
                .value(summary.earnings.max(0.0).round() as u64)
                .label(Line::from("Earn"))
                .style(Style::default().fg(self.theme.earning)),
            Bar::default()
                .value(summary.expenses.max(0.0).round() as u64)
                .label(Line::from("Spend"))
                .style(Style::default().fg(self.theme.expense)),
        ];
        BarChart::default()
            .block(self.panel(" Overview "))
            .bar_width(7)
            .bar_gap(2)
            .data(BarGroup::default().bars(&bars))
            .render(stats[1], buf);

        let by_category = self.book.expenses_by_category();
        let mut lines: Vec<Line> = by_category
            .iter()
            .map(|(category, amount)| {
                let share = if summary.expenses > 0.0 {
                    amount / summary.expenses * 100.0
                } else {
                    0.0
                };
                Line::from(format!(" {:<14}{:>9.2} {:>5.1}%", category, amount, share))
            })
            .collect();
        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                " No expenses yet",
                Style::default().fg(self.theme.muted),
            )));
        }
        Paragraph::new(lines)
            .block(self.panel(" Expenses by category "))
            .render(stats[2], buf);
    }
}

impl<'a> FinanceWidget<'a> {
    fn panel(&self, title: &'static str) -> Block<'static> {
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.muted))
    }

    fn entry_list(&self, kind: EntryKind) -> Paragraph<'static> {
        let (title, color) = match kind {
            EntryKind::Earning => (" 💰 Earnings ", self.theme.earning),
            EntryKind::Expense => (" 🧾 Expenses ", self.theme.expense),
        };
        let mut lines: Vec<Line<'static>> = self
            .book
            .iter_kind(kind)
            .map(|(index, entry)| self.entry_line(index, entry))
            .collect();
        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                " Nothing here yet",
                Style::default().fg(self.theme.muted),
            )));
        }
        Paragraph::new(lines).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        )
    }

    fn entry_line(&self, index: usize, entry: &FinanceEntry) -> Line<'static> {
        let selected = self.selected == Some(index);
        let mut style = Style::default().fg(self.theme.text);
        if selected {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let date = entry.date.as_deref().unwrap_or("-");
        Line::from(Span::styled(
            format!(
                " {:<14} {:>9.2}  {} · {} · {}",
                entry.name, entry.amount, entry.category, entry.frequency, date
            ),
            style,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shows_entries_and_totals() {
        let mut book = FinanceBook::default();
        book.add(FinanceEntry::new(EntryKind::Earning, "Salary", "Salary", 1200.0, "monthly"));
        book.add(FinanceEntry::new(EntryKind::Expense, "Groceries", "Food", 80.0, "weekly"));

        let area = Rect::new(0, 0, 120, 30);
        let mut buf = Buffer::empty(area);
        FinanceWidget {
            book: &book,
            selected: Some(1),
            theme: Theme::LIGHT,
        }
        .render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Salary"));
        assert!(text.contains("Groceries"));
        assert!(text.contains("1120.00"));
    }
}
