pub mod dialog_handlers;
pub mod input_handlers;
pub mod list_handlers;

use crate::app::{App, AppMode, Focus};
use crate::events::is_force_quit;
use crossterm::event::KeyEvent;

impl App {
    /// Route one key press to the layer that owns it.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if is_force_quit(&key) {
            self.quit();
            return;
        }

        match self.mode() {
            AppMode::InputRequired => self.handle_input_required_dialog(key),
            AppMode::EditTodo => self.handle_edit_todo_dialog(key),
            AppMode::Help => self.handle_help_popup(key),
            AppMode::Normal => match self.focus {
                Focus::Input => self.handle_todo_input(key),
                Focus::List => self.handle_list_key(key),
            },
        }
    }
}
