use crate::theme::{normal_text, selected_item, star_style};
use ratatui::text::{Line, Span};
use todo_domain::TodoItem;

pub const IMPORTANT_MARKER: &str = "★";
pub const PLAIN_MARKER: &str = "☆";

pub struct TodoRowConfig {
    pub is_selected: bool,
    pub is_focused: bool,
}

impl TodoRowConfig {
    pub fn new() -> Self {
        Self {
            is_selected: false,
            is_focused: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }

    pub fn prefix(&self) -> &'static str {
        if self.is_selected {
            "▶ "
        } else {
            "  "
        }
    }
}

impl Default for TodoRowConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub fn todo_row(item: &TodoItem, config: &TodoRowConfig) -> Line<'static> {
    let marker = if item.important {
        IMPORTANT_MARKER
    } else {
        PLAIN_MARKER
    };
    let line = Line::from(vec![
        Span::styled(config.prefix(), normal_text()),
        Span::styled(marker, star_style(item.important)),
        Span::raw(" "),
        Span::styled(item.text.clone(), normal_text()),
    ]);
    if config.is_selected {
        line.style(selected_item(config.is_focused))
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_row_shows_star_for_important() {
        let mut item = TodoItem::new("Buy milk").unwrap();
        let row = todo_row(&item, &TodoRowConfig::new());
        assert_eq!(plain(&row), "  ☆ Buy milk");

        item.important = true;
        let row = todo_row(&item, &TodoRowConfig::new().selected(true));
        assert_eq!(plain(&row), "▶ ★ Buy milk");
    }
}
