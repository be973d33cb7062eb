use super::{Command, CommandContext};
use crate::{TodoId, TodoItem};
use todo_core::TodoResult;

/// Append an already validated item to the end of the list
pub struct CreateTodo {
    pub item: TodoItem,
}

impl Command for CreateTodo {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()> {
        context.todos.push(self.item.clone());
        Ok(())
    }

    fn description(&self) -> String {
        format!("Create todo: '{}'", self.item.text)
    }
}

/// Remove a todo from the list
pub struct DeleteTodo {
    pub todo_id: TodoId,
}

impl Command for DeleteTodo {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()> {
        context.todos.retain(|t| t.id != self.todo_id);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Delete todo {}", self.todo_id)
    }
}

/// Replace the text of a todo, keeping its importance
pub struct UpdateTodoText {
    pub todo_id: TodoId,
    pub text: String,
}

impl Command for UpdateTodoText {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()> {
        let text = TodoItem::normalize_text(&self.text)?;
        if let Some(todo) = context.todos.iter_mut().find(|t| t.id == self.todo_id) {
            todo.update_text(text);
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Update todo {}: '{}'", self.todo_id, self.text.trim())
    }
}

/// Flip the important flag of a todo
pub struct ToggleImportant {
    pub todo_id: TodoId,
}

impl Command for ToggleImportant {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()> {
        if let Some(todo) = context.todos.iter_mut().find(|t| t.id == self.todo_id) {
            todo.toggle_important();
        }
        Ok(())
    }

    fn description(&self) -> String {
        format!("Toggle important on todo {}", self.todo_id)
    }
}
