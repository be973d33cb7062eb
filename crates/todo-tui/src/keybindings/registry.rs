use super::{
    dialog_modes::{EditTodoProvider, HelpProvider, InputRequiredProvider},
    input_mode::TodoInputProvider,
    list_mode::TodoListProvider,
    KeybindingProvider,
};
use crate::app::{App, AppMode, Focus};

pub struct KeybindingRegistry;

impl KeybindingRegistry {
    pub fn get_provider(app: &App) -> Box<dyn KeybindingProvider> {
        Self::get_provider_for_mode(app.mode(), app.focus)
    }

    /// Bindings of the screen underneath the help popup.
    pub fn get_underlying_provider(app: &App) -> Box<dyn KeybindingProvider> {
        match app.mode() {
            AppMode::Help => Self::get_provider_for_mode(AppMode::Normal, app.focus),
            mode => Self::get_provider_for_mode(mode, app.focus),
        }
    }

    fn get_provider_for_mode(mode: AppMode, focus: Focus) -> Box<dyn KeybindingProvider> {
        match mode {
            AppMode::Normal => match focus {
                Focus::Input => Box::new(TodoInputProvider),
                Focus::List => Box::new(TodoListProvider),
            },
            AppMode::InputRequired => Box::new(InputRequiredProvider),
            AppMode::EditTodo => Box::new(EditTodoProvider),
            AppMode::Help => Box::new(HelpProvider),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_follows_focus() {
        let mut app = App::default();
        assert_eq!(
            KeybindingRegistry::get_provider(&app).get_context().name,
            "Normal Mode - New Todo"
        );
        app.focus = Focus::List;
        assert_eq!(
            KeybindingRegistry::get_provider(&app).get_context().name,
            "Normal Mode - Todo List"
        );
    }

    #[test]
    fn test_help_shows_underlying_bindings() {
        let mut app = App::default();
        app.focus = Focus::List;
        app.show_help = true;
        assert_eq!(
            KeybindingRegistry::get_provider(&app).get_context().name,
            "Help"
        );
        assert_eq!(
            KeybindingRegistry::get_underlying_provider(&app)
                .get_context()
                .name,
            "Normal Mode - Todo List"
        );
    }

    #[test]
    fn test_list_rows_carry_actions_and_dialog_rows_are_hints() {
        let mut app = App::default();
        app.focus = Focus::List;
        let list = KeybindingRegistry::get_provider(&app).get_context();
        assert!(list.bindings.iter().all(|b| b.action.is_some()));

        let edit = EditTodoProvider.get_context();
        assert!(edit.bindings.iter().all(|b| b.action.is_none()));
    }
}
