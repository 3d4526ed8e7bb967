use super::form::EntryForm;
use chrono::NaiveDate;
use garden_core::{AppConfig, GardenError, ImportMode, OrganismCatalog, Session, StateStore};
use garden_data::EntryKind;
use garden_io::{csv, FileStore};
use garden_tui::views::Theme;
use ratatui::style::Color;
use std::collections::VecDeque;
use std::path::PathBuf;

const EVENT_LOG_CAPACITY: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Garden,
    Shop,
    Finance,
}

impl Tab {
    pub fn index(self) -> usize {
        match self {
            Tab::Garden => 0,
            Tab::Shop => 1,
            Tab::Finance => 2,
        }
    }

    pub fn next(self) -> Tab {
        match self {
            Tab::Garden => Tab::Shop,
            Tab::Shop => Tab::Finance,
            Tab::Finance => Tab::Garden,
        }
    }
}

/// Destructive actions that wait for a `y` before running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    RemovePlant(usize),
    DeleteEntry(usize),
    ClearAll,
}

impl ConfirmAction {
    pub fn prompt(&self) -> String {
        match self {
            ConfirmAction::RemovePlant(slot) => format!("Remove the plant in slot {}?", slot + 1),
            ConfirmAction::DeleteEntry(_) => "Delete this entry?".to_string(),
            ConfirmAction::ClearAll => "Clear ALL data (entries, coins, garden)?".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Confirm(ConfirmAction),
    Form(Box<EntryForm>),
}

pub struct App<S: StateStore> {
    pub running: bool,
    pub session: Session<S>,
    pub config: AppConfig,
    pub tab: Tab,
    pub selected_slot: usize,
    pub selected_item: usize,
    pub selected_entry: Option<usize>,
    pub overlay: Option<Overlay>,
    /// Newest first.
    pub event_log: VecDeque<(String, Color)>,
    pub csv_path: PathBuf,
}

impl App<FileStore> {
    /// Opens the save file named in the config, falling back to a fresh
    /// garden when it is missing or unreadable.
    pub fn new(config: AppConfig) -> Self {
        let store = FileStore::new(&config.storage.save_path);
        let session = Session::open(&config, OrganismCatalog::builtin(), store);
        Self::with_session(session, config)
    }
}

impl<S: StateStore> App<S> {
    pub fn with_session(session: Session<S>, config: AppConfig) -> Self {
        let csv_path = PathBuf::from(&config.storage.csv_path);
        Self {
            running: true,
            session,
            config,
            tab: Tab::Garden,
            selected_slot: 0,
            selected_item: 0,
            selected_entry: None,
            overlay: None,
            event_log: VecDeque::with_capacity(EVENT_LOG_CAPACITY),
            csv_path,
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::for_mode(self.session.settings().dark)
    }

    pub fn notify(&mut self, message: impl Into<String>, color: Color) {
        self.event_log.push_front((message.into(), color));
        self.event_log.truncate(EVENT_LOG_CAPACITY);
    }

    fn report(&mut self, err: GardenError) {
        tracing::debug!(error = %err, "Action rejected");
        self.notify(err.to_string(), Color::Red);
    }

    pub fn select_slot(&mut self, slot: usize) {
        if slot < self.session.garden().state().slot_count() {
            self.selected_slot = slot;
        }
    }

    pub fn water_selected(&mut self) {
        match self.session.water(self.selected_slot) {
            Ok(true) => self.notify("Watered 💧", Color::Cyan),
            Ok(false) => self.notify("That slot is empty", Color::DarkGray),
            Err(e) => self.report(e),
        }
    }

    pub fn feed_selected(&mut self) {
        match self.session.feed(self.selected_slot) {
            Ok(true) => self.notify("Fed 🍎", Color::Cyan),
            Ok(false) => self.notify("That slot is empty", Color::DarkGray),
            Err(e) => self.report(e),
        }
    }

    pub fn harvest_selected(&mut self) {
        match self.session.harvest(self.selected_slot) {
            Ok(Some(outcome)) => {
                self.notify(format!("Harvested {} coins!", outcome.coins), Color::Yellow);
                if outcome.leveled_up {
                    self.notify("Your plant grew a level! 🌱", Color::Green);
                }
            }
            Ok(None) => self.notify("That slot is empty", Color::DarkGray),
            Err(e) => self.report(e),
        }
    }

    pub fn request_remove(&mut self) {
        if self.session.plant(self.selected_slot).is_some() {
            self.overlay = Some(Overlay::Confirm(ConfirmAction::RemovePlant(
                self.selected_slot,
            )));
        }
    }

    pub fn buy_selected(&mut self) {
        let Some(id) = self
            .session
            .catalog()
            .iter()
            .nth(self.selected_item)
            .map(|def| def.id.clone())
        else {
            return;
        };
        match self.session.purchase(&id) {
            Ok(slot) => {
                let name = self.session.catalog().resolve(&id).name.clone();
                self.selected_slot = slot;
                self.notify(format!("Bought {}!", name), Color::Green);
            }
            Err(e) => self.report(e),
        }
    }

    pub fn claim_daily(&mut self, today: NaiveDate) {
        match self.session.claim_daily(today) {
            Ok(bonus) => self.notify(format!("+{} coins daily bonus!", bonus), Color::Yellow),
            Err(e) => self.report(e),
        }
    }

    pub fn toggle_dark(&mut self) {
        let dark = self.session.toggle_dark();
        self.notify(
            if dark { "Dark mode on" } else { "Light mode on" },
            Color::DarkGray,
        );
    }

    pub fn open_form(&mut self, kind: EntryKind) {
        self.overlay = Some(Overlay::Form(Box::new(EntryForm::new(kind))));
    }

    pub fn edit_selected_entry(&mut self) {
        let Some(index) = self.selected_entry else {
            return;
        };
        if let Some(entry) = self.session.book().entries().get(index) {
            self.overlay = Some(Overlay::Form(Box::new(EntryForm::edit(index, entry))));
        }
    }

    pub fn submit_form(&mut self, form: &EntryForm) {
        let entry = form.to_entry();
        match form.editing {
            Some(index) => match self.session.edit_entry(index, entry) {
                Ok(()) => self.notify("Entry updated", Color::Green),
                Err(e) => self.report(e),
            },
            None => {
                let index = self.session.add_entry(entry);
                self.selected_entry = Some(index);
                let reward = self.config.rewards.entry_reward;
                let plural = if reward == 1 { "" } else { "s" };
                self.notify(
                    format!("+{} coin{} for adding entry!", reward, plural),
                    Color::Yellow,
                );
            }
        }
    }

    pub fn request_delete_entry(&mut self) {
        if let Some(index) = self.selected_entry {
            self.overlay = Some(Overlay::Confirm(ConfirmAction::DeleteEntry(index)));
        }
    }

    pub fn move_entry_selection(&mut self, forward: bool) {
        let len = self.session.book().len();
        if len == 0 {
            self.selected_entry = None;
            return;
        }
        self.selected_entry = Some(match self.selected_entry {
            None => 0,
            Some(i) if forward => (i + 1).min(len - 1),
            Some(i) => i.saturating_sub(1),
        });
    }

    pub fn move_item_selection(&mut self, forward: bool) {
        let len = self.session.catalog().len();
        if len == 0 {
            return;
        }
        self.selected_item = if forward {
            (self.selected_item + 1).min(len - 1)
        } else {
            self.selected_item.saturating_sub(1)
        };
    }

    pub fn confirm(&mut self, action: ConfirmAction) {
        match action {
            ConfirmAction::RemovePlant(slot) => match self.session.remove(slot) {
                Ok(Some(_)) => self.notify("Plant removed", Color::DarkGray),
                Ok(None) => {}
                Err(e) => self.report(e),
            },
            ConfirmAction::DeleteEntry(index) => match self.session.remove_entry(index) {
                Ok(_) => {
                    let len = self.session.book().len();
                    self.selected_entry = (len > 0).then(|| index.min(len - 1));
                    self.notify("Entry deleted", Color::DarkGray);
                }
                Err(e) => self.report(e),
            },
            ConfirmAction::ClearAll => {
                self.session.clear_all();
                self.selected_entry = None;
                self.selected_slot = 0;
                self.notify("All data cleared", Color::Red);
            }
        }
    }

    pub fn export_csv(&mut self) {
        match csv::write_csv_file(self.session.book().entries(), &self.csv_path) {
            Ok(()) => {
                let msg = format!("Exported to {}", self.csv_path.display());
                self.notify(msg, Color::Green);
            }
            Err(e) => {
                tracing::warn!(error = %e, "CSV export failed");
                self.notify(format!("Export failed: {}", e), Color::Red);
            }
        }
    }

    pub fn import_csv(&mut self, mode: ImportMode) {
        match csv::read_csv_file(&self.csv_path) {
            Ok(entries) => {
                let count = self.session.import_entries(entries, mode);
                self.selected_entry = None;
                self.notify(format!("Imported {} entries", count), Color::Green);
            }
            Err(e) => {
                tracing::warn!(error = %e, "CSV import failed");
                self.notify(format!("Import failed: {}", e), Color::Red);
            }
        }
    }

    /// Runs one simulation step and surfaces passive income.
    pub fn on_tick(&mut self) {
        let report = self.session.tick();
        for (slot, coins) in &report.income {
            self.notify(
                format!("Slot {} produced {} coin(s) 🌼", slot + 1, coins),
                Color::Yellow,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garden_core::MemoryStore;

    fn app() -> App<MemoryStore> {
        let mut config = AppConfig::default();
        config.garden.seed = Some(3);
        config.storage.csv_path = std::env::temp_dir()
            .join(format!("pixel_garden_app_{}.csv", std::process::id()))
            .to_string_lossy()
            .into_owned();
        let session = Session::open(&config, OrganismCatalog::builtin(), MemoryStore::default());
        App::with_session(session, config)
    }

    #[test]
    fn test_buy_then_remove_with_confirm() {
        let mut app = app();
        app.buy_selected();
        assert!(app.session.plant(0).is_some());
        assert!(app.event_log[0].0.starts_with("Bought"));

        app.request_remove();
        assert_eq!(
            app.overlay,
            Some(Overlay::Confirm(ConfirmAction::RemovePlant(0)))
        );
        app.confirm(ConfirmAction::RemovePlant(0));
        assert!(app.session.plant(0).is_none());
    }

    #[test]
    fn test_errors_become_notifications() {
        let mut app = app();
        app.selected_item = 1;
        app.buy_selected();
        app.buy_selected();
        assert_eq!(app.event_log[0].1, Color::Red);
        assert!(app.event_log[0].0.contains("Not enough coins"));
    }

    #[test]
    fn test_event_log_is_bounded() {
        let mut app = app();
        for i in 0..40 {
            app.notify(format!("msg {}", i), Color::White);
        }
        assert_eq!(app.event_log.len(), EVENT_LOG_CAPACITY);
        assert_eq!(app.event_log[0].0, "msg 39");
    }

    #[test]
    fn test_form_submit_adds_entry_and_reward() {
        let mut app = app();
        let coins = app.session.coins();
        let mut form = EntryForm::new(EntryKind::Earning);
        form.name = "Tips".into();
        form.amount = "20".into();
        app.submit_form(&form);
        assert_eq!(app.session.book().len(), 1);
        assert_eq!(app.session.coins(), coins + 1);
        assert_eq!(app.selected_entry, Some(0));
    }

    #[test]
    fn test_csv_export_then_import_appends() {
        let mut app = app();
        let mut form = EntryForm::new(EntryKind::Expense);
        form.name = "Bus".into();
        form.amount = "2.5".into();
        app.submit_form(&form);

        app.export_csv();
        app.import_csv(ImportMode::Append);
        assert_eq!(app.session.book().len(), 2);
        assert_eq!(app.session.book().entries()[1].name, "Bus");
        let _ = std::fs::remove_file(&app.csv_path);
    }
}
