//! Todo filtering.
//!
//! Provides the TodoFilter trait and the ViewFilter tabs that implement it.

pub mod todo_filter;
pub mod view_filter;

pub use todo_filter::TodoFilter;
pub use view_filter::{ParseViewFilterError, ViewFilter};
