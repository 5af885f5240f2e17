//! Event handling for TUI
//!
//! Terminal input is read on a dedicated thread and forwarded into the same
//! tokio channel that carries analysis outcomes and copy-feedback expiries,
//! so the app handles everything from one loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use tokio::sync::mpsc::UnboundedSender;

use crate::controller::Ticket;
use crate::error::AnalysisError;
use crate::feedback::FeedbackExpired;
use crate::model::AnalysisResult;

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// Key was pressed
    Key(KeyEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic redraws
    Tick,
    /// A dispatched analysis finished
    Analyzed {
        ticket: Ticket,
        outcome: Result<AnalysisResult, AnalysisError>,
    },
    /// A copy indicator's display time elapsed
    FeedbackExpired(FeedbackExpired),
}

impl From<FeedbackExpired> for AppEvent {
    fn from(event: FeedbackExpired) -> Self {
        AppEvent::FeedbackExpired(event)
    }
}

/// Reads terminal events on a separate thread.
pub struct EventHandler {
    stop: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl EventHandler {
    /// Start forwarding terminal events into `tx`.
    ///
    /// A `Tick` is sent whenever `tick_rate` passes without input.
    pub fn new(tx: UnboundedSender<AppEvent>, tick_rate: Duration) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = stop.clone();

        let handle = thread::spawn(move || {
            while !stop_flag.load(Ordering::Relaxed) {
                let event = match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        // Key release events arrive on some platforms; only presses matter
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            AppEvent::Key(key)
                        }
                        Ok(CrosstermEvent::Resize(width, height)) => AppEvent::Resize(width, height),
                        Ok(_) => continue,
                        Err(e) => {
                            tracing::warn!(error = %e, "terminal event read failed");
                            break;
                        }
                    },
                    Ok(false) => AppEvent::Tick,
                    Err(e) => {
                        tracing::warn!(error = %e, "terminal event poll failed");
                        break;
                    }
                };
                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Stop the reader thread and wait for it to release stdin.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop();
    }
}
