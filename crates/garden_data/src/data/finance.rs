use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Earning,
    Expense,
}

impl EntryKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Earning => "earning",
            EntryKind::Expense => "expense",
        }
    }

    /// Anything other than `earning` is booked as an expense.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("earning") {
            EntryKind::Earning
        } else {
            EntryKind::Expense
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single income or expense line in the personal ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceEntry {
    pub kind: EntryKind,
    pub name: String,
    pub category: String,
    pub amount: f64,
    pub frequency: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub note: String,
    pub created_at: DateTime<Utc>,
}

impl FinanceEntry {
    pub fn new(
        kind: EntryKind,
        name: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        frequency: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            category: category.into(),
            amount,
            frequency: frequency.into(),
            date: None,
            note: String::new(),
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}
