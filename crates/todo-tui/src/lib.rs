pub mod app;
pub mod components;
pub mod dialog;
pub mod events;
pub mod handlers;
pub mod keybindings;
pub mod theme;
pub mod ui;

pub use app::{App, AppMode, Focus};
