//! Personal ledger of earnings and expenses.

use crate::error::{GardenError, Result};
use garden_data::{EntryKind, FinanceEntry};

pub const INCOME_CATEGORIES: [&str; 5] = ["Job", "Gift", "Tips", "Business", "Other"];
pub const EXPENSE_CATEGORIES: [&str; 8] = [
    "Food",
    "Rent",
    "Utilities",
    "Gas",
    "Shopping",
    "Health",
    "Entertainment",
    "Other",
];
pub const EARNING_FREQUENCIES: [&str; 4] = ["Once", "Weekly", "Monthly", "Yearly"];
pub const EXPENSE_FREQUENCIES: [&str; 5] = ["Once", "Weekly", "Biweekly", "Monthly", "Yearly"];

const UNNAMED: &str = "(no name)";

pub fn categories_for(kind: EntryKind) -> &'static [&'static str] {
    match kind {
        EntryKind::Earning => &INCOME_CATEGORIES,
        EntryKind::Expense => &EXPENSE_CATEGORIES,
    }
}

pub fn frequencies_for(kind: EntryKind) -> &'static [&'static str] {
    match kind {
        EntryKind::Earning => &EARNING_FREQUENCIES,
        EntryKind::Expense => &EXPENSE_FREQUENCIES,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub earnings: f64,
    pub expenses: f64,
}

impl Summary {
    #[must_use]
    pub fn net(&self) -> f64 {
        self.earnings - self.expenses
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinanceBook {
    entries: Vec<FinanceEntry>,
}

impl FinanceBook {
    pub fn new(entries: Vec<FinanceEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[FinanceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter_kind(&self, kind: EntryKind) -> impl Iterator<Item = (usize, &FinanceEntry)> {
        self.entries
            .iter()
            .enumerate()
            .filter(move |(_, e)| e.kind == kind)
    }

    fn normalize(mut entry: FinanceEntry) -> FinanceEntry {
        let trimmed = entry.name.trim();
        entry.name = if trimmed.is_empty() {
            UNNAMED.to_string()
        } else {
            trimmed.to_string()
        };
        if !entry.amount.is_finite() {
            entry.amount = 0.0;
        }
        entry
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(GardenError::InvalidEntryIndex {
                index,
                len: self.entries.len(),
            })
        }
    }

    /// Appends an entry and returns its index.
    pub fn add(&mut self, entry: FinanceEntry) -> usize {
        self.entries.push(Self::normalize(entry));
        self.entries.len() - 1
    }

    pub fn edit(&mut self, index: usize, entry: FinanceEntry) -> Result<()> {
        self.check_index(index)?;
        self.entries[index] = Self::normalize(entry);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<FinanceEntry> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    pub fn replace_all(&mut self, entries: Vec<FinanceEntry>) {
        self.entries = entries.into_iter().map(Self::normalize).collect();
    }

    pub fn extend(&mut self, entries: Vec<FinanceEntry>) {
        self.entries
            .extend(entries.into_iter().map(Self::normalize));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn summary(&self) -> Summary {
        self.entries
            .iter()
            .fold(Summary::default(), |mut acc, e| {
                match e.kind {
                    EntryKind::Earning => acc.earnings += e.amount,
                    EntryKind::Expense => acc.expenses += e.amount,
                }
                acc
            })
    }

    /// Expense totals per category, largest first, zero totals omitted.
    ///
    /// Categories outside the built-in list (e.g. from an imported CSV) are
    /// kept as their own buckets.
    pub fn expenses_by_category(&self) -> Vec<(String, f64)> {
        let mut totals: Vec<(String, f64)> = EXPENSE_CATEGORIES
            .iter()
            .map(|c| (c.to_string(), 0.0))
            .collect();
        for entry in self.entries.iter().filter(|e| e.kind == EntryKind::Expense) {
            match totals.iter_mut().find(|(c, _)| *c == entry.category) {
                Some((_, total)) => *total += entry.amount,
                None => totals.push((entry.category.clone(), entry.amount)),
            }
        }
        totals.retain(|(_, total)| *total > 0.0);
        totals.sort_by(|a, b| b.1.total_cmp(&a.1));
        totals
    }

    pub fn into_entries(self) -> Vec<FinanceEntry> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(category: &str, amount: f64) -> FinanceEntry {
        FinanceEntry::new(EntryKind::Expense, "x", category, amount, "Once")
    }

    #[test]
    fn test_add_normalizes_name() {
        let mut book = FinanceBook::default();
        let idx = book.add(FinanceEntry::new(EntryKind::Earning, "   ", "Job", 5.0, "Once"));
        assert_eq!(book.entries()[idx].name, "(no name)");
        let idx = book.add(FinanceEntry::new(EntryKind::Earning, " Pay ", "Job", 5.0, "Once"));
        assert_eq!(book.entries()[idx].name, "Pay");
    }

    #[test]
    fn test_summary() {
        let mut book = FinanceBook::default();
        book.add(FinanceEntry::new(EntryKind::Earning, "Pay", "Job", 1000.0, "Monthly"));
        book.add(expense("Rent", 600.0));
        book.add(expense("Food", 150.5));
        let summary = book.summary();
        assert_eq!(summary.earnings, 1000.0);
        assert_eq!(summary.expenses, 750.5);
        assert_eq!(summary.net(), 249.5);
    }

    #[test]
    fn test_expenses_by_category_sorted() {
        let mut book = FinanceBook::default();
        book.add(expense("Food", 20.0));
        book.add(expense("Rent", 500.0));
        book.add(expense("Food", 30.0));
        book.add(expense("Pets", 10.0));
        book.add(FinanceEntry::new(EntryKind::Earning, "Tip", "Tips", 99.0, "Once"));
        assert_eq!(
            book.expenses_by_category(),
            vec![
                ("Rent".to_string(), 500.0),
                ("Food".to_string(), 50.0),
                ("Pets".to_string(), 10.0),
            ]
        );
    }

    #[test]
    fn test_edit_and_remove_bounds() {
        let mut book = FinanceBook::default();
        book.add(expense("Gas", 40.0));
        assert!(book.edit(0, expense("Gas", 45.0)).is_ok());
        assert_eq!(book.entries()[0].amount, 45.0);
        assert_eq!(
            book.edit(1, expense("Gas", 1.0)),
            Err(GardenError::InvalidEntryIndex { index: 1, len: 1 })
        );
        assert_eq!(book.remove(0).unwrap().amount, 45.0);
        assert!(book.remove(0).is_err());
    }

    #[test]
    fn test_category_lists() {
        assert!(categories_for(EntryKind::Earning).contains(&"Tips"));
        assert!(frequencies_for(EntryKind::Expense).contains(&"Biweekly"));
        assert!(!frequencies_for(EntryKind::Earning).contains(&"Biweekly"));
    }
}
