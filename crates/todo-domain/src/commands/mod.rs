use todo_core::TodoResult;

pub mod todo_commands;

pub use todo_commands::*;

/// Trait for domain commands that mutate the todo list
pub trait Command {
    /// Execute this command, mutating the list
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Context passed to commands for mutation
pub struct CommandContext<'a> {
    pub todos: &'a mut Vec<crate::TodoItem>,
}
