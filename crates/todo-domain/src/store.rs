//! The in-memory todo list and the operations the UI drives it with.
//!
//! Items are addressed by [`TodoId`]. Operations on an id that is no longer in
//! the list are no-ops reported through their `bool` return value, so a stale
//! row in the UI can never take the application down.

use crate::commands::{
    Command, CommandContext, CreateTodo, DeleteTodo, ToggleImportant, UpdateTodoText,
};
use crate::{DialogState, EditSession, TodoFilter, TodoId, TodoItem, ViewFilter};
use todo_core::TodoResult;

/// A row of the filtered view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleTodo<'a> {
    /// Position of the item in the unfiltered list.
    pub original_index: usize,
    pub item: &'a TodoItem,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TodoCounts {
    pub all: usize,
    pub important: usize,
    pub others: usize,
}

impl TodoCounts {
    pub fn for_filter(&self, filter: ViewFilter) -> usize {
        match filter {
            ViewFilter::All => self.all,
            ViewFilter::Important => self.important,
            ViewFilter::Others => self.others,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    todos: Vec<TodoItem>,
    filter: ViewFilter,
    dialog: DialogState,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(filter: ViewFilter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    fn apply(&mut self, command: &dyn Command) -> TodoResult<()> {
        let mut context = CommandContext {
            todos: &mut self.todos,
        };
        command.execute(&mut context)?;
        tracing::info!("{}", command.description());
        Ok(())
    }

    /// Append a new item built from `raw_text`.
    ///
    /// Blank input leaves the list alone, opens the Input Required dialog and
    /// returns a validation error.
    pub fn add_todo(&mut self, raw_text: &str) -> TodoResult<TodoId> {
        let item = match TodoItem::new(raw_text) {
            Ok(item) => item,
            Err(e) => {
                tracing::debug!("Rejected empty todo input");
                self.dialog = DialogState::InputRequired;
                return Err(e);
            }
        };
        let id = item.id;
        self.apply(&CreateTodo { item })?;
        Ok(id)
    }

    pub fn delete_todo(&mut self, id: TodoId) -> bool {
        if self.position(id).is_none() {
            tracing::warn!("Delete ignored, todo {} not found", id);
            return false;
        }
        self.apply(&DeleteTodo { todo_id: id }).is_ok()
    }

    pub fn toggle_important(&mut self, id: TodoId) -> bool {
        if self.position(id).is_none() {
            tracing::warn!("Toggle ignored, todo {} not found", id);
            return false;
        }
        self.apply(&ToggleImportant { todo_id: id }).is_ok()
    }

    /// Open the Update Todo dialog with the item's current text as draft.
    pub fn start_edit(&mut self, id: TodoId) -> bool {
        let Some(item) = self.get(id) else {
            tracing::warn!("Edit ignored, todo {} not found", id);
            return false;
        };
        self.dialog = DialogState::Editing(EditSession::new(id, item.text.clone()));
        true
    }

    /// Replace the draft verbatim. Does nothing unless an edit is open.
    pub fn update_draft(&mut self, new_text: impl Into<String>) {
        if let Some(session) = self.dialog.edit_session_mut() {
            session.draft = new_text.into();
        }
    }

    /// Commit the open edit.
    ///
    /// A blank draft returns a validation error and keeps the dialog open
    /// without raising Input Required. If the target was removed meanwhile
    /// the dialog just closes.
    pub fn save_edit(&mut self) -> TodoResult<()> {
        let Some(session) = self.dialog.edit_session() else {
            return Ok(());
        };
        let text = TodoItem::normalize_text(&session.draft)?;
        let target = session.target;

        if self.position(target).is_none() {
            tracing::warn!("Edit target {} disappeared, discarding draft", target);
            self.dialog = DialogState::Closed;
            return Ok(());
        }

        self.apply(&UpdateTodoText {
            todo_id: target,
            text,
        })?;
        self.dialog = DialogState::Closed;
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        if self.dialog.edit_session().is_some() {
            self.dialog = DialogState::Closed;
        }
    }

    pub fn dismiss_input_required(&mut self) {
        if self.dialog == DialogState::InputRequired {
            self.dialog = DialogState::Closed;
        }
    }

    pub fn set_filter(&mut self, filter: ViewFilter) {
        if self.filter != filter {
            tracing::debug!("View filter: {} -> {}", self.filter, filter);
        }
        self.filter = filter;
    }

    pub fn visible_todos(&self) -> Vec<VisibleTodo<'_>> {
        self.filter
            .apply(&self.todos)
            .into_iter()
            .map(|(original_index, item)| VisibleTodo {
                original_index,
                item,
            })
            .collect()
    }

    pub fn counts(&self) -> TodoCounts {
        let important = self.todos.iter().filter(|t| t.important).count();
        TodoCounts {
            all: self.todos.len(),
            important,
            others: self.todos.len() - important,
        }
    }

    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.todos.iter().position(|t| t.id == id)
    }

    pub fn id_at(&self, index: usize) -> Option<TodoId> {
        self.todos.get(index).map(|t| t.id)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn filter(&self) -> ViewFilter {
        self.filter
    }

    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }
}
