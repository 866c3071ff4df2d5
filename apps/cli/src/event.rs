use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

use crate::tasks::TaskEvent;

pub enum AppEvent {
    Key(KeyEvent),
    Task(TaskEvent),
    Resize,
    Tick,
}

/// Merges terminal input (read on a dedicated thread; crossterm's reader
/// blocks) and request-task events into one stream for the draw loop.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    pub fn new(task_rx: mpsc::UnboundedReceiver<TaskEvent>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let term_tx = tx.clone();
        std::thread::spawn(move || {
            loop {
                match event::poll(Duration::from_millis(200)) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                                term_tx.send(AppEvent::Key(key))
                            }
                            Ok(Event::Resize(_, _)) => term_tx.send(AppEvent::Resize),
                            Ok(_) => Ok(()),
                            Err(_) => break,
                        };
                        if forwarded.is_err() {
                            break;
                        }
                    }
                    Ok(false) => {
                        if term_tx.send(AppEvent::Tick).is_err() {
                            break;
                        }
                    }
                    Err(_) => break,
                }
            }
        });

        let mut task_rx = task_rx;
        tokio::spawn(async move {
            while let Some(event) = task_rx.recv().await {
                if tx.send(AppEvent::Task(event)).is_err() {
                    break;
                }
            }
        });

        Self { rx }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}
