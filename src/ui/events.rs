use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};

use crate::fetch::FetchOutcome;

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// Animation heartbeat.
    Tick,
    /// The one-shot recipe fetch resolved.
    Recipes(FetchOutcome),
}

/// Pumps terminal input and ticks into a channel the UI loop drains.
///
/// A dedicated thread polls crossterm so the UI loop can also receive
/// completions from async work through `sender()`. Every send is checked:
/// once the receiver is gone the thread exits on its next event or tick,
/// so no input listener outlives the view.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());

                let sent = match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) => event_tx.send(AppEvent::Key(key)),
                        Ok(CrosstermEvent::Mouse(mouse)) => event_tx.send(AppEvent::Mouse(mouse)),
                        Ok(CrosstermEvent::Resize(cols, rows)) => {
                            event_tx.send(AppEvent::Resize(cols, rows))
                        }
                        Ok(_) => Ok(()),
                        Err(_) => break,
                    },
                    Ok(false) => Ok(()),
                    Err(_) => break,
                };
                if sent.is_err() {
                    break;
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Clone of the channel sender, for async completions.
    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
