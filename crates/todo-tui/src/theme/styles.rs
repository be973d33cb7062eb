use super::colors::*;
use ratatui::style::{Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn selected_item(focused: bool) -> Style {
    if focused {
        Style::default().bg(SELECTED_BG)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    }
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn placeholder_text() -> Style {
    Style::default()
        .fg(LABEL_TEXT)
        .add_modifier(Modifier::ITALIC)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn bold_highlight() -> Style {
    Style::default()
        .fg(HIGHLIGHT_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn title_text() -> Style {
    Style::default()
        .fg(TITLE_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn star_style(important: bool) -> Style {
    if important {
        Style::default()
            .fg(IMPORTANT_STAR)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(PLAIN_STAR)
    }
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}
