pub mod panel;
pub mod popup;
pub mod text_field;
pub mod todo_list_item;

pub use panel::*;
pub use popup::*;
pub use text_field::*;
pub use todo_list_item::*;
