use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Resize,
    Tick,
    /// The terminal could not be read. The poller stops after sending this.
    Failed(std::io::Error),
}

/// Polls the terminal on a background task and hands events to the UI loop
/// one at a time.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    shutdown_tx: mpsc::UnboundedSender<()>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (shutdown_tx, mut shutdown_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => {
                        break;
                    }
                    _ = tokio::time::sleep(tick_rate) => {
                        let event = match event::poll(Duration::from_millis(0)) {
                            Ok(true) => match event::read() {
                                Ok(CrosstermEvent::Key(key)) => Event::Key(key),
                                Ok(CrosstermEvent::Resize(_, _)) => Event::Resize,
                                Ok(_) => continue,
                                Err(e) => Event::Failed(e),
                            },
                            Ok(false) => Event::Tick,
                            Err(e) => Event::Failed(e),
                        };
                        let failed = matches!(event, Event::Failed(_));
                        if tx.send(event).is_err() || failed {
                            break;
                        }
                    }
                }
            }
        });

        Self { rx, shutdown_tx }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(());
    }
}

/// Ctrl-C quits from anywhere, including while typing.
pub fn is_force_quit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_force_quit_needs_control() {
        let plain = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        let ctrl = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!is_force_quit(&plain));
        assert!(is_force_quit(&ctrl));
    }
}
