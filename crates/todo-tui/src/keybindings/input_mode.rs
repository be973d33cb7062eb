use super::{Keybinding, KeybindingAction, KeybindingContext, KeybindingProvider};

pub struct TodoInputProvider;

impl KeybindingProvider for TodoInputProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Normal Mode - New Todo",
            vec![
                Keybinding::hint("Enter", "add", "Add todo"),
                Keybinding::hint("ESC/↓", "list", "Focus the todo list"),
                Keybinding::hint("Type", "text", "Enter todo text"),
                Keybinding::hint("Ctrl-W", "del word", "Delete previous word"),
                Keybinding::new("Ctrl-C", "quit", "Quit application", KeybindingAction::Quit),
            ],
        )
    }
}
