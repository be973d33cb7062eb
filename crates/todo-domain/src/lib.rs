pub mod commands;
pub mod dialog;
pub mod filter;
pub mod store;
pub mod todo;

pub use dialog::{DialogState, EditSession};
pub use filter::{ParseViewFilterError, TodoFilter, ViewFilter};
pub use store::{TodoCounts, TodoStore, VisibleTodo};
pub use todo::{TodoId, TodoItem};
