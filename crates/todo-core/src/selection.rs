//! Cursor over a list of rows.
//!
//! The list itself is owned elsewhere; callers pass its current length.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.selected_index = index;
    }

    pub fn clear(&mut self) {
        self.selected_index = None;
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
    }

    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        });
    }

    pub fn jump_to_first(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = Some(0);
        }
    }

    pub fn jump_to_last(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = Some(len - 1);
        }
    }

    /// Keep the selection inside `0..len` after the list changed size, and
    /// select the first row when a non-empty list has nothing selected.
    pub fn clamp(&mut self, len: usize) {
        self.selected_index = match (self.selected_index, len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(idx), len) if idx >= len => Some(len - 1),
            (keep, _) => keep,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_stops_at_last_row() {
        let mut selection = SelectionState::new();
        selection.next(2);
        assert_eq!(selection.get(), Some(0));
        selection.next(2);
        selection.next(2);
        assert_eq!(selection.get(), Some(1));
    }

    #[test]
    fn test_prev_stops_at_first_row() {
        let mut selection = SelectionState::new();
        selection.set(Some(1));
        selection.prev(3);
        selection.prev(3);
        assert_eq!(selection.get(), Some(0));
    }

    #[test]
    fn test_movement_on_empty_list_is_noop() {
        let mut selection = SelectionState::new();
        selection.next(0);
        selection.prev(0);
        selection.jump_to_first(0);
        selection.jump_to_last(0);
        assert_eq!(selection.get(), None);
    }

    #[test]
    fn test_jumps() {
        let mut selection = SelectionState::new();
        selection.jump_to_last(5);
        assert_eq!(selection.get(), Some(4));
        selection.jump_to_first(5);
        assert_eq!(selection.get(), Some(0));
    }

    #[test]
    fn test_clamp() {
        let mut selection = SelectionState::new();
        selection.set(Some(4));
        selection.clamp(2);
        assert_eq!(selection.get(), Some(1));

        selection.clamp(0);
        assert_eq!(selection.get(), None);

        selection.clamp(3);
        assert_eq!(selection.get(), Some(0));

        selection.clear();
        assert_eq!(selection.get(), None);
    }
}
