//! Modal dialog state.
//!
//! At most one dialog is open at a time: the "Input Required" notice raised
//! by an empty add, or the "Update Todo" editor holding an [`EditSession`].

use crate::TodoId;

/// Draft for the item currently being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub target: TodoId,
    pub draft: String,
}

impl EditSession {
    pub fn new(target: TodoId, draft: impl Into<String>) -> Self {
        Self {
            target,
            draft: draft.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    InputRequired,
    Editing(EditSession),
}

impl DialogState {
    pub fn is_open(&self) -> bool {
        !matches!(self, DialogState::Closed)
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        match self {
            DialogState::Editing(session) => Some(session),
            _ => None,
        }
    }

    pub fn edit_session_mut(&mut self) -> Option<&mut EditSession> {
        match self {
            DialogState::Editing(session) => Some(session),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_closed_by_default() {
        let state = DialogState::default();
        assert!(!state.is_open());
        assert!(state.edit_session().is_none());
    }

    #[test]
    fn test_editing_exposes_session() {
        let id = Uuid::new_v4();
        let mut state = DialogState::Editing(EditSession::new(id, "draft"));
        assert!(state.is_open());
        assert_eq!(state.edit_session().map(|s| s.target), Some(id));

        if let Some(session) = state.edit_session_mut() {
            session.draft.push('!');
        }
        assert_eq!(state.edit_session().unwrap().draft, "draft!");
    }

    #[test]
    fn test_input_required_has_no_session() {
        let mut state = DialogState::InputRequired;
        assert!(state.is_open());
        assert!(state.edit_session_mut().is_none());
    }
}
