use crate::app::{App, Focus};
use crate::keybindings::{list_action_for_key, KeybindingAction};
use crossterm::event::KeyEvent;
use todo_domain::ViewFilter;

impl App {
    pub fn handle_list_key(&mut self, key: KeyEvent) {
        let Some(action) = list_action_for_key(&key) else {
            return;
        };
        let len = self.visible_len();

        match action {
            KeybindingAction::NavigateDown => self.selection.next(len),
            KeybindingAction::NavigateUp => self.selection.prev(len),
            KeybindingAction::JumpToTop => self.selection.jump_to_first(len),
            KeybindingAction::JumpToBottom => self.selection.jump_to_last(len),
            KeybindingAction::ToggleImportant => self.toggle_selected_important(),
            KeybindingAction::DeleteTodo => self.delete_selected(),
            KeybindingAction::EditTodo => self.edit_selected(),
            KeybindingAction::FocusInput => self.focus = Focus::Input,
            KeybindingAction::NextFilter => self.set_filter(self.store.filter().next()),
            KeybindingAction::PrevFilter => self.set_filter(self.store.filter().prev()),
            KeybindingAction::SelectFilter(position) => {
                if let Some(filter) = ViewFilter::from_position(position) {
                    self.set_filter(filter);
                }
            }
            KeybindingAction::ShowHelp => self.show_help = true,
            KeybindingAction::Quit => self.quit(),
        }
    }

    pub fn toggle_selected_important(&mut self) {
        if let Some(id) = self.selected_todo_id() {
            self.store.toggle_important(id);
            // The item may have left the current view.
            self.sync_selection();
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_todo_id() {
            self.store.delete_todo(id);
            self.sync_selection();
        }
    }

    pub fn edit_selected(&mut self) {
        let Some(id) = self.selected_todo_id() else {
            return;
        };
        if self.store.start_edit(id) {
            let draft = self
                .store
                .dialog()
                .edit_session()
                .map(|s| s.draft.clone())
                .unwrap_or_default();
            self.edit_input.set(draft);
        }
    }
}
