mod common;

use common::GardenBuilder;
use garden_core::ImportMode;
use garden_data::{EntryKind, FinanceEntry};
use garden_io::csv::{export_entries, import_entries};

fn seeded_ledger() -> garden_core::Session<garden_core::MemoryStore> {
    let mut session = GardenBuilder::new().with_coins(0).build();
    session.add_entry(
        FinanceEntry::new(EntryKind::Earning, "Paycheck", "Job", 2000.0, "Monthly")
            .with_date("2024-04-30"),
    );
    session.add_entry(FinanceEntry::new(EntryKind::Expense, "Rent", "Rent", 900.0, "Monthly"));
    session.add_entry(
        FinanceEntry::new(EntryKind::Expense, "Pizza, large", "Food", 18.5, "Once")
            .with_note("friday \"treat\""),
    );
    session
}

#[test]
fn test_entries_pay_rewards_but_imports_do_not() {
    let mut session = seeded_ledger();
    assert_eq!(session.coins(), 3);

    let csv = export_entries(session.book().entries());
    let imported = import_entries(&csv).unwrap();
    session.import_entries(imported, ImportMode::Append);
    assert_eq!(session.book().len(), 6);
    assert_eq!(session.coins(), 3);
}

#[test]
fn test_replace_import_restores_ledger() {
    let mut session = seeded_ledger();
    let csv = export_entries(session.book().entries());
    let summary = session.book().summary();

    session.import_entries(Vec::new(), ImportMode::Replace);
    assert!(session.book().is_empty());

    let count = session.import_entries(import_entries(&csv).unwrap(), ImportMode::Replace);
    assert_eq!(count, 3);
    assert_eq!(session.book().summary(), summary);
    assert_eq!(session.book().entries()[2].name, "Pizza, large");
    assert_eq!(session.book().entries()[2].note, "friday \"treat\"");
}

#[test]
fn test_summary_and_breakdown() {
    let session = seeded_ledger();
    let summary = session.book().summary();
    assert_eq!(summary.earnings, 2000.0);
    assert_eq!(summary.expenses, 918.5);
    assert_eq!(summary.net(), 1081.5);

    let breakdown = session.book().expenses_by_category();
    assert_eq!(
        breakdown,
        vec![("Rent".to_string(), 900.0), ("Food".to_string(), 18.5)]
    );
}

#[test]
fn test_unknown_types_import_as_expenses() {
    let csv = "type,name,category,amount,frequency,date,note\nrefund,Shoes,Shopping,40,Once,,\n";
    let entries = import_entries(csv).unwrap();
    assert_eq!(entries[0].kind, EntryKind::Expense);
    assert_eq!(entries[0].amount, 40.0);
}
