use super::{Keybinding, KeybindingContext, KeybindingProvider};

pub struct InputRequiredProvider;

impl KeybindingProvider for InputRequiredProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Input Required",
            vec![Keybinding::hint("Enter/ESC", "close", "Close")],
        )
    }
}

pub struct EditTodoProvider;

impl KeybindingProvider for EditTodoProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Update Todo - Input Dialog",
            vec![
                Keybinding::hint("Enter", "save", "Save"),
                Keybinding::hint("ESC", "cancel", "Cancel"),
                Keybinding::hint("Type", "text", "Edit todo text"),
                Keybinding::hint("←/→", "move", "Move cursor"),
                Keybinding::hint("Home/End", "jump", "Jump to start/end"),
            ],
        )
    }
}

pub struct HelpProvider;

impl KeybindingProvider for HelpProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Help",
            vec![Keybinding::hint("ESC/?", "close help", "Close help")],
        )
    }
}
