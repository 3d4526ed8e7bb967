use super::form::FormOutcome;
use super::state::{App, ConfirmAction, Overlay, Tab};
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use garden_core::{ImportMode, StateStore};
use garden_data::EntryKind;

impl<S: StateStore> App<S> {
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        match self.overlay.take() {
            Some(Overlay::Confirm(action)) => self.handle_confirm_key(action, key),
            Some(Overlay::Form(mut form)) => match form.handle_key(key) {
                FormOutcome::Pending => self.overlay = Some(Overlay::Form(form)),
                FormOutcome::Submit => self.submit_form(&form),
                FormOutcome::Cancel => {}
            },
            None => self.handle_normal_key(key),
        }
    }

    fn handle_confirm_key(&mut self, action: ConfirmAction, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
            self.confirm(action);
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Tab => self.tab = self.tab.next(),
            KeyCode::Char('g') => self.tab = Tab::Garden,
            KeyCode::Char('s') => self.tab = Tab::Shop,
            KeyCode::Char('l') => self.tab = Tab::Finance,
            KeyCode::Char('d') => self.claim_daily(Utc::now().date_naive()),
            KeyCode::Char('t') => self.toggle_dark(),
            KeyCode::Char('C') => self.overlay = Some(Overlay::Confirm(ConfirmAction::ClearAll)),
            _ => match self.tab {
                Tab::Garden => self.handle_garden_key(key),
                Tab::Shop => self.handle_shop_key(key),
                Tab::Finance => self.handle_finance_key(key),
            },
        }
    }

    fn handle_garden_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                self.select_slot(c as usize - '1' as usize);
            }
            KeyCode::Left => self.selected_slot = self.selected_slot.saturating_sub(1),
            KeyCode::Right => self.select_slot(self.selected_slot + 1),
            KeyCode::Char('w') => self.water_selected(),
            KeyCode::Char('f') => self.feed_selected(),
            KeyCode::Char('h') => self.harvest_selected(),
            KeyCode::Char('x') => self.request_remove(),
            _ => {}
        }
    }

    fn handle_shop_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.move_item_selection(false),
            KeyCode::Down => self.move_item_selection(true),
            KeyCode::Char('b') | KeyCode::Enter => self.buy_selected(),
            _ => {}
        }
    }

    fn handle_finance_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.move_entry_selection(false),
            KeyCode::Down => self.move_entry_selection(true),
            KeyCode::Char('a') => self.open_form(EntryKind::Earning),
            KeyCode::Char('e') => self.open_form(EntryKind::Expense),
            KeyCode::Enter => self.edit_selected_entry(),
            KeyCode::Delete | KeyCode::Backspace => self.request_delete_entry(),
            KeyCode::Char('E') => self.export_csv(),
            KeyCode::Char('I') => self.import_csv(ImportMode::Replace),
            KeyCode::Char('A') => self.import_csv(ImportMode::Append),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garden_core::{AppConfig, MemoryStore, OrganismCatalog, Session};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App<MemoryStore> {
        let config = AppConfig::default();
        let session = Session::open(&config, OrganismCatalog::builtin(), MemoryStore::default());
        App::with_session(session, config)
    }

    #[test]
    fn test_shop_then_garden_flow() {
        let mut app = app();
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.tab, Tab::Shop);
        app.handle_key(key(KeyCode::Char('b')));
        assert!(app.session.plant(0).is_some());

        app.handle_key(key(KeyCode::Char('g')));
        app.handle_key(key(KeyCode::Char('x')));
        assert!(app.overlay.is_some());
        app.handle_key(key(KeyCode::Char('n')));
        assert!(app.overlay.is_none());
        assert!(app.session.plant(0).is_some());
    }

    #[test]
    fn test_slot_keys_stay_in_range() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.selected_slot, 2);
        app.handle_key(key(KeyCode::Char('9')));
        assert_eq!(app.selected_slot, 2);
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.selected_slot, 2);
    }

    #[test]
    fn test_clear_all_requires_confirmation() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('s')));
        app.handle_key(key(KeyCode::Char('b')));
        app.handle_key(key(KeyCode::Char('C')));
        app.handle_key(key(KeyCode::Char('y')));
        assert!(app.session.plant(0).is_none());
    }

    #[test]
    fn test_form_typing_does_not_trigger_shortcuts() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('l')));
        app.handle_key(key(KeyCode::Char('e')));
        for c in "quit".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert!(app.running);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.session.book().entries()[0].name, "quit");
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }
}
