use super::FieldView;
use crate::theme::{focused_border, highlight_text, label_text, normal_text, popup_bg};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn render_popup_with_block(
    frame: &mut Frame,
    title: &str,
    width_percent: u16,
    height_percent: u16,
) -> Rect {
    let area = centered_rect(width_percent, height_percent, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(focused_border())
        .style(popup_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    inner
}

/// Text field popup with a description line and a hint row under the field.
pub fn render_input_popup(
    frame: &mut Frame,
    title: &str,
    label: &str,
    input_text: &str,
    cursor_column: usize,
    hint: &str,
) {
    let inner = render_popup_with_block(frame, title, 60, 40);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let label_widget = Paragraph::new(label).style(highlight_text());
    frame.render_widget(label_widget, chunks[0]);

    let input_block = Block::default().borders(Borders::ALL);
    let field = FieldView::new(input_block.inner(chunks[1]), cursor_column);
    let input = Paragraph::new(input_text)
        .style(normal_text())
        .scroll((0, field.scroll))
        .block(input_block);
    frame.render_widget(input, chunks[1]);

    let hint_widget = Paragraph::new(hint)
        .style(label_text())
        .alignment(Alignment::Right);
    frame.render_widget(hint_widget, chunks[2]);

    frame.set_cursor_position(field.cursor);
}

/// Informational popup with a single dismiss hint.
pub fn render_message_popup(frame: &mut Frame, title: &str, message: &str, hint: &str) {
    let inner = render_popup_with_block(frame, title, 60, 25);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let body = Paragraph::new(Line::from(message))
        .style(normal_text())
        .wrap(Wrap { trim: true });
    frame.render_widget(body, chunks[0]);

    let hint_widget = Paragraph::new(hint)
        .style(label_text())
        .alignment(Alignment::Right);
    frame.render_widget(hint_widget, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside_and_centered() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(60, 50, outer);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 20);
        assert_eq!(inner.y, 10);
    }
}
