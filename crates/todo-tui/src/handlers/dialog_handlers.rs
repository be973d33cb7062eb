use crate::app::App;
use crate::dialog::{handle_dialog_input, DialogAction};
use crossterm::event::{KeyCode, KeyEvent};

impl App {
    pub fn handle_input_required_dialog(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            self.store.dismiss_input_required();
        }
    }

    pub fn handle_edit_todo_dialog(&mut self, key: KeyEvent) {
        match handle_dialog_input(&mut self.edit_input, key) {
            DialogAction::Confirm => match self.store.save_edit() {
                Ok(()) => {
                    self.edit_input.clear();
                    self.sync_selection();
                }
                // Blank draft: the dialog stays open for correction.
                Err(e) if e.is_validation() => {
                    tracing::debug!("Edit not saved: {}", e);
                }
                Err(e) => tracing::error!("Failed to save todo: {}", e),
            },
            DialogAction::Cancel => {
                self.store.cancel_edit();
                self.edit_input.clear();
            }
            DialogAction::Edited => self.store.update_draft(self.edit_input.as_str()),
            DialogAction::None => {}
        }
    }

    pub fn handle_help_popup(&mut self, key: KeyEvent) {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter
        ) {
            self.show_help = false;
        }
    }
}
