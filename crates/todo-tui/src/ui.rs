use crate::app::{App, AppMode, Focus};
use crate::components::*;
use crate::keybindings::KeybindingRegistry;
use crate::theme::*;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};
use todo_domain::ViewFilter;

pub const APP_TITLE: &str = "Todo Application";
pub const INPUT_PLACEHOLDER: &str =
    "Enter your todo. e.g: I'll have a fried egg for breakfast...";
pub const INPUT_REQUIRED_TITLE: &str = "Input Required";
pub const INPUT_REQUIRED_MESSAGE: &str = "Please enter a todo item before submitting.";
pub const UPDATE_TITLE: &str = "Update Todo";
pub const UPDATE_MESSAGE: &str = "Update your todo item below.";

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_input(app, frame, chunks[1]);
    render_tabs(app, frame, chunks[2]);
    render_todo_list(app, frame, chunks[3]);
    render_footer(app, frame, chunks[4]);

    match app.mode() {
        AppMode::InputRequired => render_message_popup(
            frame,
            INPUT_REQUIRED_TITLE,
            INPUT_REQUIRED_MESSAGE,
            "[Enter/ESC] Close",
        ),
        AppMode::EditTodo => render_input_popup(
            frame,
            UPDATE_TITLE,
            UPDATE_MESSAGE,
            app.edit_input.as_str(),
            app.edit_input.cursor_column(),
            "[ESC] Cancel  [Enter] Save",
        ),
        AppMode::Help => render_help_popup(app, frame),
        AppMode::Normal => {}
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(APP_TITLE)
        .style(title_text())
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn render_input(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Input && app.mode() == AppMode::Normal;
    let panel_config = PanelConfig::new("New Todo")
        .with_focus_hint("Enter: Add Todo")
        .focused(focused);
    let field = FieldView::new(panel_config.block().inner(area), app.input.cursor_column());

    let content = if app.input.is_empty() {
        Paragraph::new(Span::styled(INPUT_PLACEHOLDER, placeholder_text()))
    } else {
        Paragraph::new(Span::styled(app.input.as_str(), normal_text())).scroll((0, field.scroll))
    };
    render_panel(frame, area, &panel_config, content);

    if focused {
        frame.set_cursor_position(field.cursor);
    }
}

pub fn tab_titles(app: &App) -> Vec<String> {
    let counts = app.store.counts();
    ViewFilter::ALL
        .iter()
        .map(|f| format!("{} ({})", f.label(), counts.for_filter(*f)))
        .collect()
}

fn render_tabs(app: &App, frame: &mut Frame, area: Rect) {
    let tabs = Tabs::new(tab_titles(app))
        .select(app.store.filter().position())
        .style(label_text())
        .highlight_style(bold_highlight().add_modifier(Modifier::UNDERLINED))
        .divider(" | ");
    frame.render_widget(tabs, area);
}

pub fn empty_list_message(app: &App) -> &'static str {
    if app.store.is_empty() {
        "No todos yet. Type one above and press Enter!"
    } else {
        match app.store.filter() {
            ViewFilter::Important => "No important todos. Press 's' on a todo to star it.",
            ViewFilter::Others => "Every todo is marked important.",
            ViewFilter::All => "",
        }
    }
}

fn render_todo_list(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::List && app.mode() == AppMode::Normal;
    let panel_config = PanelConfig::new(app.store.filter().label())
        .with_count(app.visible_len())
        .focused(focused);

    let visible = app.store.visible_todos();
    if visible.is_empty() {
        let content = Paragraph::new(Span::styled(empty_list_message(app), label_text()));
        render_panel(frame, area, &panel_config, content);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(row, v)| {
            let config = TodoRowConfig::new()
                .selected(app.selection.get() == Some(row))
                .focused(focused);
            ListItem::new(todo_row(v.item, &config))
        })
        .collect();

    let list = List::new(items).block(panel_config.block());
    let mut state = ListState::default().with_selected(app.selection.get());
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let provider = KeybindingRegistry::get_provider(app);
    let help = Paragraph::new(provider.get_context().footer_text())
        .style(label_text())
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}

fn render_help_popup(app: &App, frame: &mut Frame) {
    let area = centered_rect(80, 80, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title("Help - Keybindings for Current Context")
        .borders(Borders::ALL)
        .border_style(focused_border())
        .style(popup_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let context = KeybindingRegistry::get_underlying_provider(app).get_context();

    let mut lines = vec![
        Line::from(Span::styled(context.name.clone(), title_text())),
        Line::from(""),
    ];

    for binding in &context.bindings {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<12}", binding.key), highlight_text()),
            Span::raw(" "),
            Span::styled(binding.description.clone(), normal_text()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press ESC or ? to close help",
        Style::default()
            .fg(crate::theme::colors::LABEL_TEXT)
            .add_modifier(Modifier::ITALIC),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
