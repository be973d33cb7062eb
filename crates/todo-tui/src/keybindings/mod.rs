pub mod dialog_modes;
pub mod input_mode;
pub mod list_mode;
pub mod registry;

pub use registry::KeybindingRegistry;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeybindingAction {
    NavigateDown,
    NavigateUp,
    JumpToTop,
    JumpToBottom,
    ToggleImportant,
    DeleteTodo,
    EditTodo,
    FocusInput,
    NextFilter,
    PrevFilter,
    SelectFilter(usize),
    ShowHelp,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: String,
    pub short_description: String,
    pub description: String,
    /// `None` for rows that only describe text editing or dialog keys.
    pub action: Option<KeybindingAction>,
}

impl Keybinding {
    pub fn new(
        key: impl Into<String>,
        short_description: impl Into<String>,
        description: impl Into<String>,
        action: KeybindingAction,
    ) -> Self {
        Self {
            key: key.into(),
            short_description: short_description.into(),
            description: description.into(),
            action: Some(action),
        }
    }

    pub fn hint(
        key: impl Into<String>,
        short_description: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            short_description: short_description.into(),
            description: description.into(),
            action: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingContext {
    pub name: String,
    pub bindings: Vec<Keybinding>,
}

impl KeybindingContext {
    pub fn new(name: impl Into<String>, bindings: Vec<Keybinding>) -> Self {
        Self {
            name: name.into(),
            bindings,
        }
    }

    /// One-line summary for the footer.
    pub fn footer_text(&self) -> String {
        self.bindings
            .iter()
            .map(|b| format!("{}: {}", b.key, b.short_description))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

pub trait KeybindingProvider {
    fn get_context(&self) -> KeybindingContext;
}

/// Resolve a key press on the todo list to the action it triggers.
pub fn list_action_for_key(key: &KeyEvent) -> Option<KeybindingAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    let action = match key.code {
        KeyCode::Char('j') | KeyCode::Down => KeybindingAction::NavigateDown,
        KeyCode::Char('k') | KeyCode::Up => KeybindingAction::NavigateUp,
        KeyCode::Char('g') | KeyCode::Home => KeybindingAction::JumpToTop,
        KeyCode::Char('G') | KeyCode::End => KeybindingAction::JumpToBottom,
        KeyCode::Char('s') | KeyCode::Char('*') => KeybindingAction::ToggleImportant,
        KeyCode::Char('d') | KeyCode::Delete => KeybindingAction::DeleteTodo,
        KeyCode::Char('e') | KeyCode::Enter => KeybindingAction::EditTodo,
        KeyCode::Char('i') | KeyCode::Char('a') | KeyCode::Char('/') => {
            KeybindingAction::FocusInput
        }
        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => KeybindingAction::NextFilter,
        KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => KeybindingAction::PrevFilter,
        KeyCode::Char(c @ '1'..='3') => KeybindingAction::SelectFilter(c as usize - '1' as usize),
        KeyCode::Char('?') => KeybindingAction::ShowHelp,
        KeyCode::Char('q') | KeyCode::Char('Q') => KeybindingAction::Quit,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_list_keys() {
        assert_eq!(
            list_action_for_key(&key(KeyCode::Char('j'))),
            Some(KeybindingAction::NavigateDown)
        );
        assert_eq!(
            list_action_for_key(&key(KeyCode::Char('*'))),
            Some(KeybindingAction::ToggleImportant)
        );
        assert_eq!(
            list_action_for_key(&key(KeyCode::Char('3'))),
            Some(KeybindingAction::SelectFilter(2))
        );
        assert_eq!(
            list_action_for_key(&key(KeyCode::BackTab)),
            Some(KeybindingAction::PrevFilter)
        );
        assert_eq!(list_action_for_key(&key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_control_chords_are_not_list_actions() {
        let ctrl_d = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL);
        assert_eq!(list_action_for_key(&ctrl_d), None);
    }

    #[test]
    fn test_footer_text() {
        let context = KeybindingContext::new(
            "Test",
            vec![
                Keybinding::new("q", "quit", "Quit", KeybindingAction::Quit),
                Keybinding::new("?", "help", "Help", KeybindingAction::ShowHelp),
            ],
        );
        assert_eq!(context.footer_text(), "q: quit | ?: help");
    }
}
