use crate::{
    events::{Event, EventHandler},
    ui,
};
use crossterm::{
    event::KeyEventKind,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use todo_core::{InputState, SelectionState, TodoResult};
use todo_domain::{DialogState, TodoId, TodoStore, ViewFilter};

pub struct App {
    pub should_quit: bool,
    pub store: TodoStore,
    /// Text of the "new todo" field.
    pub input: InputState,
    /// Text field of the Update Todo dialog, mirrored into the store's draft.
    pub edit_input: InputState,
    pub focus: Focus,
    pub selection: SelectionState,
    pub show_help: bool,
    pub tick_rate: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
}

/// What currently receives key presses, from the topmost layer down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    InputRequired,
    EditTodo,
    Help,
}

impl App {
    pub fn new(filter: ViewFilter) -> Self {
        Self {
            should_quit: false,
            store: TodoStore::with_filter(filter),
            input: InputState::new(),
            edit_input: InputState::new(),
            focus: Focus::Input,
            selection: SelectionState::new(),
            show_help: false,
            tick_rate: Duration::from_millis(16),
        }
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn mode(&self) -> AppMode {
        match self.store.dialog() {
            DialogState::Editing(_) => AppMode::EditTodo,
            DialogState::InputRequired => AppMode::InputRequired,
            DialogState::Closed if self.show_help => AppMode::Help,
            DialogState::Closed => AppMode::Normal,
        }
    }

    pub fn visible_len(&self) -> usize {
        self.store.visible_todos().len()
    }

    pub fn selected_todo_id(&self) -> Option<TodoId> {
        let index = self.selection.get()?;
        self.store.visible_todos().get(index).map(|v| v.item.id)
    }

    /// Keep the row cursor on the visible list after it changed.
    pub fn sync_selection(&mut self) {
        let len = self.visible_len();
        self.selection.clamp(len);
    }

    /// Move the row cursor onto `id` if the current view shows it.
    pub fn select_todo(&mut self, id: TodoId) {
        if let Some(row) = self
            .store
            .visible_todos()
            .iter()
            .position(|v| v.item.id == id)
        {
            self.selection.set(Some(row));
        }
    }

    pub fn set_filter(&mut self, filter: ViewFilter) {
        let keep = self.selected_todo_id();
        self.store.set_filter(filter);
        self.selection.clear();
        if let Some(id) = keep {
            self.select_todo(id);
        }
        self.sync_selection();
    }

    pub async fn run(&mut self) -> TodoResult<()> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> TodoResult<()> {
        let mut events = EventHandler::new(self.tick_rate);

        let result = loop {
            if self.should_quit {
                break Ok(());
            }
            if let Err(e) = terminal.draw(|frame| ui::render(self, frame)) {
                break Err(e.into());
            }
            match events.next().await {
                Some(event) => {
                    if let Err(e) = self.handle_event(event) {
                        break Err(e);
                    }
                }
                None => break Ok(()),
            }
        };

        events.stop();
        result
    }

    /// Apply one terminal event. A terminal read failure ends the session
    /// with an error so it surfaces after the screen is restored.
    pub fn handle_event(&mut self, event: Event) -> TodoResult<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Failed(e) => {
                tracing::error!("Failed to read terminal event: {}", e);
                return Err(e.into());
            }
            Event::Key(_) | Event::Resize | Event::Tick => {}
        }
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

impl Default for App {
    fn default() -> Self {
        Self::new(ViewFilter::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_app_focuses_input() {
        let app = App::default();
        assert_eq!(app.focus, Focus::Input);
        assert_eq!(app.mode(), AppMode::Normal);
        assert_eq!(app.selected_todo_id(), None);
    }

    #[test]
    fn test_mode_follows_store_dialog() {
        let mut app = App::default();
        let _ = app.store.add_todo("   ");
        assert_eq!(app.mode(), AppMode::InputRequired);

        app.store.dismiss_input_required();
        let id = app.store.add_todo("task").unwrap();
        app.store.start_edit(id);
        assert_eq!(app.mode(), AppMode::EditTodo);
    }

    #[test]
    fn test_dialogs_take_precedence_over_help() {
        let mut app = App::default();
        app.show_help = true;
        assert_eq!(app.mode(), AppMode::Help);
        let _ = app.store.add_todo("");
        assert_eq!(app.mode(), AppMode::InputRequired);
    }

    #[test]
    fn test_set_filter_keeps_selected_item_when_visible() {
        let mut app = App::default();
        app.store.add_todo("a").unwrap();
        let b = app.store.add_todo("b").unwrap();
        app.store.toggle_important(b);
        app.selection.set(Some(1));

        app.set_filter(ViewFilter::Important);
        assert_eq!(app.selection.get(), Some(0));
        assert_eq!(app.selected_todo_id(), Some(b));

        app.set_filter(ViewFilter::Others);
        assert_eq!(app.selection.get(), Some(0));
        assert_ne!(app.selected_todo_id(), Some(b));
    }

    #[test]
    fn test_sync_selection_clears_on_empty_view() {
        let mut app = App::new(ViewFilter::Important);
        app.store.add_todo("plain").unwrap();
        app.selection.set(Some(0));
        app.sync_selection();
        assert_eq!(app.selection.get(), None);
    }

    #[test]
    fn test_terminal_read_failure_is_returned() {
        let mut app = App::default();
        let failure = io::Error::new(io::ErrorKind::BrokenPipe, "tty gone");
        let err = app.handle_event(Event::Failed(failure)).unwrap_err();
        assert!(matches!(err, todo_core::TodoError::Io(_)));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_key_event_reaches_input() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let mut app = App::default();
        app.handle_event(Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)))
            .unwrap();
        app.handle_event(Event::Tick).unwrap();
        assert_eq!(app.input.as_str(), "x");
    }
}
