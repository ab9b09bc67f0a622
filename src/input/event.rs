// src/input/event.rs
use crate::core::constants::RESIZE_THROTTLE_MS;
use crossterm::event::{self as crossterm_event, Event as CrosstermEvent, KeyEvent};
use tokio::sync::mpsc::{self, Sender};
use tokio::time::{interval, Duration, Instant};

#[derive(Debug)]
pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    Resize(u16, u16),
}

/// Pumps terminal input and ticks into one channel, consumed by the UI loop.
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    shutdown_tx: Vec<Sender<()>>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel(100);
        let mut shutdown_tx = Vec::new();

        let (input_shutdown_tx, mut input_shutdown_rx) = mpsc::channel(1);
        shutdown_tx.push(input_shutdown_tx);

        let input_tx = tx.clone();
        tokio::spawn(async move {
            let min_resize_interval = Duration::from_millis(RESIZE_THROTTLE_MS);
            let mut last_resize_time: Option<Instant> = None;

            loop {
                tokio::select! {
                    _ = input_shutdown_rx.recv() => break,
                    _ = async {
                        if !crossterm_event::poll(Duration::from_millis(50)).unwrap_or(false) {
                            tokio::task::yield_now().await;
                            return;
                        }

                        match crossterm_event::read() {
                            Ok(CrosstermEvent::Key(key)) => {
                                let _ = input_tx.send(AppEvent::Input(key)).await;
                            }
                            Ok(CrosstermEvent::Resize(width, height)) => {
                                let now = Instant::now();
                                let throttled = last_resize_time
                                    .is_some_and(|last| now.duration_since(last) < min_resize_interval);
                                if throttled {
                                    log::trace!("Resize event dropped (too fast): {}x{}", width, height);
                                } else {
                                    last_resize_time = Some(now);
                                    let _ = input_tx.send(AppEvent::Resize(width, height)).await;
                                }
                            }
                            Ok(_) => {}
                            Err(e) => log::warn!("Terminal read failed: {}", e),
                        }
                    } => {}
                }
            }
        });

        let (tick_shutdown_tx, mut tick_shutdown_rx) = mpsc::channel(1);
        shutdown_tx.push(tick_shutdown_tx);

        let tick_tx = tx;
        tokio::spawn(async move {
            let mut interval = interval(tick_rate);
            loop {
                tokio::select! {
                    _ = tick_shutdown_rx.recv() => break,
                    _ = interval.tick() => {
                        if tick_tx.send(AppEvent::Tick).await.is_err() {
                            break;
                        }
                    }
                }
            }
        });

        EventHandler { rx, shutdown_tx }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    pub async fn shutdown(&mut self) {
        for tx in self.shutdown_tx.iter() {
            let _ = tx.send(()).await;
        }
    }
}
