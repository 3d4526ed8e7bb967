//! Modal form for adding or editing a finance entry.

use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent};
use garden_core::finance::{categories_for, frequencies_for};
use garden_data::{EntryKind, FinanceEntry};
use garden_tui::views::FormField;

const NAME: usize = 0;
const CATEGORY: usize = 1;
const AMOUNT: usize = 2;
const FREQUENCY: usize = 3;
const DATE: usize = 4;
const NOTE: usize = 5;
const FIELD_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Pending,
    Submit,
    Cancel,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    pub kind: EntryKind,
    /// Index of the entry being edited, `None` when adding.
    pub editing: Option<usize>,
    pub name: String,
    pub category: String,
    pub amount: String,
    pub frequency: String,
    pub date: String,
    pub note: String,
    pub active: usize,
    created_at: Option<DateTime<Utc>>,
}

impl EntryForm {
    pub fn new(kind: EntryKind) -> Self {
        Self {
            kind,
            editing: None,
            name: String::new(),
            category: categories_for(kind)[0].to_string(),
            amount: String::new(),
            frequency: frequencies_for(kind)[0].to_string(),
            date: String::new(),
            note: String::new(),
            active: NAME,
            created_at: None,
        }
    }

    pub fn edit(index: usize, entry: &FinanceEntry) -> Self {
        Self {
            kind: entry.kind,
            editing: Some(index),
            name: entry.name.clone(),
            category: entry.category.clone(),
            amount: entry.amount.to_string(),
            frequency: entry.frequency.clone(),
            date: entry.date.clone().unwrap_or_default(),
            note: entry.note.clone(),
            active: NAME,
            created_at: Some(entry.created_at),
        }
    }

    pub fn title(&self) -> String {
        let verb = if self.editing.is_some() { "Edit" } else { "Add" };
        match self.kind {
            EntryKind::Earning => format!("{verb} earning"),
            EntryKind::Expense => format!("{verb} expense"),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormOutcome {
        match key.code {
            KeyCode::Esc => return FormOutcome::Cancel,
            KeyCode::Enter => return FormOutcome::Submit,
            KeyCode::Tab | KeyCode::Down => self.active = (self.active + 1) % FIELD_COUNT,
            KeyCode::BackTab | KeyCode::Up => {
                self.active = (self.active + FIELD_COUNT - 1) % FIELD_COUNT
            }
            KeyCode::Left => self.cycle(false),
            KeyCode::Right => self.cycle(true),
            KeyCode::Backspace => {
                if let Some(text) = self.text_mut() {
                    text.pop();
                }
            }
            KeyCode::Char(c) => self.type_char(c),
            _ => {}
        }
        FormOutcome::Pending
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self.active {
            NAME => Some(&mut self.name),
            AMOUNT => Some(&mut self.amount),
            DATE => Some(&mut self.date),
            NOTE => Some(&mut self.note),
            _ => None,
        }
    }

    fn type_char(&mut self, c: char) {
        let accepted = match self.active {
            AMOUNT => c.is_ascii_digit() || c == '.',
            DATE => c.is_ascii_digit() || c == '-',
            _ => !c.is_control(),
        };
        if !accepted {
            return;
        }
        if let Some(text) = self.text_mut() {
            text.push(c);
        }
    }

    /// Steps through the allowed categories or frequencies. A value that is
    /// not in the list (e.g. from an import) moves to the first choice.
    fn cycle(&mut self, forward: bool) {
        let (choices, value) = match self.active {
            CATEGORY => (categories_for(self.kind), &mut self.category),
            FREQUENCY => (frequencies_for(self.kind), &mut self.frequency),
            _ => return,
        };
        let len = choices.len();
        let next = match choices.iter().position(|c| *c == value.as_str()) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        *value = choices[next].to_string();
    }

    pub fn fields(&self) -> [FormField<'_>; FIELD_COUNT] {
        [
            FormField {
                label: "Name",
                value: &self.name,
                choices: None,
            },
            FormField {
                label: "Category",
                value: &self.category,
                choices: Some(categories_for(self.kind)),
            },
            FormField {
                label: "Amount",
                value: &self.amount,
                choices: None,
            },
            FormField {
                label: "Frequency",
                value: &self.frequency,
                choices: Some(frequencies_for(self.kind)),
            },
            FormField {
                label: "Date",
                value: &self.date,
                choices: None,
            },
            FormField {
                label: "Note",
                value: &self.note,
                choices: None,
            },
        ]
    }

    /// Builds the entry. An unparsable amount is booked as zero.
    pub fn to_entry(&self) -> FinanceEntry {
        let amount = self.amount.trim().parse::<f64>().unwrap_or(0.0);
        let mut entry = FinanceEntry::new(
            self.kind,
            self.name.trim(),
            self.category.clone(),
            amount,
            self.frequency.clone(),
        )
        .with_note(self.note.trim());
        if !self.date.trim().is_empty() {
            entry = entry.with_date(self.date.trim());
        }
        if let Some(created_at) = self.created_at {
            entry.created_at = created_at;
        }
        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(form: &mut EntryForm, code: KeyCode) -> FormOutcome {
        form.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(form: &mut EntryForm, s: &str) {
        for c in s.chars() {
            press(form, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_fill_and_submit() {
        let mut form = EntryForm::new(EntryKind::Expense);
        type_str(&mut form, "Coffee");
        press(&mut form, KeyCode::Tab);
        press(&mut form, KeyCode::Right);
        press(&mut form, KeyCode::Tab);
        type_str(&mut form, "4.5x");
        assert_eq!(press(&mut form, KeyCode::Enter), FormOutcome::Submit);

        let entry = form.to_entry();
        assert_eq!(entry.name, "Coffee");
        assert_eq!(entry.amount, 4.5);
        assert_eq!(entry.category, categories_for(EntryKind::Expense)[1]);
        assert!(entry.date.is_none());
    }

    #[test]
    fn test_cycle_wraps_backwards() {
        let mut form = EntryForm::new(EntryKind::Earning);
        form.active = FREQUENCY;
        press(&mut form, KeyCode::Left);
        let freqs = frequencies_for(EntryKind::Earning);
        assert_eq!(form.frequency, freqs[freqs.len() - 1]);
    }

    #[test]
    fn test_edit_keeps_created_at() {
        let original = FinanceEntry::new(EntryKind::Earning, "Gig", "Business", 80.0, "Once")
            .with_date("2024-03-01");
        let mut form = EntryForm::edit(4, &original);
        assert_eq!(form.title(), "Edit earning");
        form.active = AMOUNT;
        press(&mut form, KeyCode::Backspace);
        press(&mut form, KeyCode::Backspace);
        type_str(&mut form, "95");

        let entry = form.to_entry();
        assert_eq!(entry.amount, 95.0);
        assert_eq!(entry.created_at, original.created_at);
        assert_eq!(entry.date.as_deref(), Some("2024-03-01"));
    }

    #[test]
    fn test_escape_cancels() {
        let mut form = EntryForm::new(EntryKind::Earning);
        assert_eq!(press(&mut form, KeyCode::Esc), FormOutcome::Cancel);
    }
}
