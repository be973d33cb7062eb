use super::{Keybinding, KeybindingAction, KeybindingContext, KeybindingProvider};

pub struct TodoListProvider;

impl KeybindingProvider for TodoListProvider {
    fn get_context(&self) -> KeybindingContext {
        KeybindingContext::new(
            "Normal Mode - Todo List",
            vec![
                Keybinding::new("?", "help", "Show help", KeybindingAction::ShowHelp),
                Keybinding::new("q", "quit", "Quit application", KeybindingAction::Quit),
                Keybinding::new("i", "add", "Focus the new todo field", KeybindingAction::FocusInput),
                Keybinding::new(
                    "s/*",
                    "star",
                    "Toggle important on selected todo",
                    KeybindingAction::ToggleImportant,
                ),
                Keybinding::new("e", "edit", "Edit selected todo", KeybindingAction::EditTodo),
                Keybinding::new("d", "delete", "Delete selected todo", KeybindingAction::DeleteTodo),
                Keybinding::new("Tab", "view", "Next view", KeybindingAction::NextFilter),
                Keybinding::new("Shift-Tab", "prev view", "Previous view", KeybindingAction::PrevFilter),
                Keybinding::new(
                    "1/2/3",
                    "all/important/others",
                    "Show all, important or other todos",
                    KeybindingAction::SelectFilter(0),
                ),
                Keybinding::new("j/↓", "down", "Navigate down", KeybindingAction::NavigateDown),
                Keybinding::new("k/↑", "up", "Navigate up", KeybindingAction::NavigateUp),
                Keybinding::new("g/G", "top/bottom", "Jump to first or last todo", KeybindingAction::JumpToTop),
            ],
        )
    }
}
