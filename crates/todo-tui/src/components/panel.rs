use crate::theme::{focused_border, unfocused_border};
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Bordered section of the main screen. The title is built from a label,
/// an optional item count and a key hint shown only while focused.
pub struct PanelConfig<'a> {
    label: &'a str,
    count: Option<usize>,
    focus_hint: Option<&'a str>,
    is_focused: bool,
}

impl<'a> PanelConfig<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            count: None,
            focus_hint: None,
            is_focused: false,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_focus_hint(mut self, hint: &'a str) -> Self {
        self.focus_hint = Some(hint);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }

    pub fn border_style(&self) -> Style {
        if self.is_focused {
            focused_border()
        } else {
            unfocused_border()
        }
    }

    pub fn title(&self) -> String {
        let mut title = self.label.to_string();
        if let Some(count) = self.count {
            title.push_str(&format!(" [{}]", count));
        }
        if let (true, Some(hint)) = (self.is_focused, self.focus_hint) {
            title.push_str(&format!(" [{}]", hint));
        }
        title
    }

    pub fn block(&self) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style())
            .title(self.title())
    }
}

pub fn render_panel(frame: &mut Frame, area: Rect, config: &PanelConfig, content: Paragraph) {
    frame.render_widget(content.block(config.block()), area);
}
