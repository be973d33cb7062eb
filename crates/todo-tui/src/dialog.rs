use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use todo_core::InputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    None,
    /// The buffer text changed.
    Edited,
    Cancel,
    Confirm,
}

/// Apply a key press to a text field.
///
/// Enter always confirms: emptiness is judged by whoever consumes the text.
pub fn handle_dialog_input(input: &mut InputState, key: KeyEvent) -> DialogAction {
    let before = input.as_str().len();
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => return DialogAction::Cancel,
        KeyCode::Enter => return DialogAction::Confirm,
        KeyCode::Char('w') if ctrl => input.delete_word_back(),
        KeyCode::Char('u') if ctrl => input.clear(),
        KeyCode::Char('a') if ctrl => input.move_home(),
        KeyCode::Char('e') if ctrl => input.move_end(),
        KeyCode::Char(_) if ctrl => {}
        KeyCode::Char(c) => input.insert_char(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }

    if input.as_str().len() != before {
        DialogAction::Edited
    } else {
        DialogAction::None
    }
}
