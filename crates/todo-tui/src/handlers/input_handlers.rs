use crate::app::{App, Focus};
use crate::dialog::{handle_dialog_input, DialogAction};
use crossterm::event::{KeyCode, KeyEvent};

impl App {
    pub fn handle_todo_input(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Down {
            self.focus_list();
            return;
        }

        match handle_dialog_input(&mut self.input, key) {
            DialogAction::Confirm => self.submit_todo(),
            DialogAction::Cancel => self.focus_list(),
            DialogAction::Edited | DialogAction::None => {}
        }
    }

    /// Add the typed text as a new todo. The field is cleared only when the
    /// todo was accepted; a blank entry opens the Input Required dialog.
    pub fn submit_todo(&mut self) {
        match self.store.add_todo(self.input.as_str()) {
            Ok(id) => {
                self.input.clear();
                self.sync_selection();
                self.select_todo(id);
            }
            Err(e) if e.is_validation() => {}
            Err(e) => tracing::error!("Failed to add todo: {}", e),
        }
    }

    pub fn focus_list(&mut self) {
        self.focus = Focus::List;
        self.sync_selection();
    }
}
