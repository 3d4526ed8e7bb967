use super::state::{App, Overlay, Tab};
use garden_core::StateStore;
use garden_tui::views::{
    ConfirmWidget, EntryFormWidget, EventLogWidget, FinanceWidget, GardenWidget, KeyHintsWidget,
    ShopWidget, StatusWidget,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

impl<S: StateStore> App<S> {
    pub fn draw(&self, f: &mut Frame) {
        let theme = self.theme();
        let area = f.area();
        f.render_widget(
            Block::default().style(Style::default().bg(theme.background).fg(theme.text)),
            area,
        );

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(10),
                Constraint::Length(6),
                Constraint::Length(1),
            ])
            .split(area);

        let garden = self.session.garden();
        f.render_widget(
            StatusWidget {
                active_tab: self.tab.index(),
                coins: self.session.coins(),
                plants: garden.state().slots().iter().filter(|s| !s.is_empty()).count(),
                slots: garden.state().slot_count(),
                dark: self.session.settings().dark,
                theme,
            },
            main_layout[0],
        );

        match self.tab {
            Tab::Garden => f.render_widget(
                GardenWidget {
                    garden,
                    selected: self.selected_slot,
                    theme,
                },
                main_layout[1],
            ),
            Tab::Shop => f.render_widget(
                ShopWidget {
                    catalog: self.session.catalog(),
                    coins: self.session.coins(),
                    selected: self.selected_item,
                    theme,
                },
                main_layout[1],
            ),
            Tab::Finance => f.render_widget(
                FinanceWidget {
                    book: self.session.book(),
                    selected: self.selected_entry,
                    theme,
                },
                main_layout[1],
            ),
        }

        f.render_widget(
            EventLogWidget {
                events: &self.event_log,
                theme,
            },
            main_layout[2],
        );
        f.render_widget(
            KeyHintsWidget {
                active_tab: self.tab.index(),
                theme,
            },
            main_layout[3],
        );

        match &self.overlay {
            Some(Overlay::Confirm(action)) => {
                let prompt = action.prompt();
                f.render_widget(
                    ConfirmWidget {
                        message: &prompt,
                        theme,
                    },
                    area,
                );
            }
            Some(Overlay::Form(form)) => {
                let title = form.title();
                let fields = form.fields();
                f.render_widget(
                    EntryFormWidget {
                        title: &title,
                        fields: &fields,
                        active: form.active,
                        theme,
                    },
                    area,
                );
            }
            None => {}
        }
    }
}
