//! Restartable periodic-callback timer.
//!
//! A [`PeriodicTimer`] owns at most one background worker task at a time.
//! The worker waits on a recurring timer and a control channel; stopping is
//! a cooperative handshake, so `stop()` only returns once the worker has
//! confirmed termination and no further callback firing can occur.

use log::{debug, warn};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// Errors surfaced by [`PeriodicTimer`] lifecycle operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TickerError {
    #[error("ticker already started")]
    AlreadyStarted,

    #[error("ticker not started")]
    NotStarted,

    #[error("tick interval must be greater than zero")]
    ZeroInterval,
}

/// Control messages understood by the worker task.
enum ControlMessage {
    Stop,
}

/// Handle to a running worker task.
struct Worker {
    control_tx: mpsc::Sender<ControlMessage>,
    ack_rx: oneshot::Receiver<()>,
}

impl Worker {
    /// Request shutdown and wait until the worker confirms termination.
    async fn shutdown(self) {
        if self.control_tx.send(ControlMessage::Stop).await.is_err() {
            warn!("tick worker dropped its control channel before stop request");
        }
        let _ = self.ack_rx.await;
        debug!("tick worker confirmed shutdown");
    }
}

/// Fires a caller-supplied callback at a fixed interval until stopped.
///
/// Start and stop must strictly alternate; a second consecutive call of
/// either fails with a [`TickerError`]. The timer may be restarted any
/// number of times. Lifecycle methods take `&mut self`, so callers that
/// share a timer across tasks must serialize access themselves (for
/// example behind a `tokio::sync::Mutex`).
pub struct PeriodicTimer {
    interval: Duration,
    callback: Arc<dyn Fn() + Send + Sync>,
    worker: Option<Worker>,
}

impl PeriodicTimer {
    /// Create a stopped timer. No background work starts until
    /// [`start`](Self::start) is called.
    ///
    /// A zero interval is rejected with [`TickerError::ZeroInterval`].
    pub fn new<F>(interval: Duration, callback: F) -> Result<Self, TickerError>
    where
        F: Fn() + Send + Sync + 'static,
    {
        if interval.is_zero() {
            return Err(TickerError::ZeroInterval);
        }
        Ok(Self {
            interval,
            callback: Arc::new(callback),
            worker: None,
        })
    }

    /// Whether a worker task currently exists.
    pub fn is_running(&self) -> bool {
        self.worker.is_some()
    }

    /// The configured interval between firings.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start firing the callback every interval.
    ///
    /// The first firing happens one full interval after this call. Fails
    /// with [`TickerError::AlreadyStarted`] if the timer is already running.
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self) -> Result<(), TickerError> {
        if self.worker.is_some() {
            return Err(TickerError::AlreadyStarted);
        }
        self.worker = Some(self.spawn_worker());
        Ok(())
    }

    /// Stop the timer and wait for the worker to terminate.
    ///
    /// Fails with [`TickerError::NotStarted`] if the timer is not running.
    /// Once this returns, the worker is gone and the callback will not fire
    /// again. The callback runs on the worker task itself, so a callback
    /// that never returns keeps the stop request from being observed and
    /// blocks this call forever; callers worried about that can wrap the
    /// call in `tokio::time::timeout`.
    pub async fn stop(&mut self) -> Result<(), TickerError> {
        let worker = self.worker.take().ok_or(TickerError::NotStarted)?;
        worker.shutdown().await;
        Ok(())
    }

    /// Change the interval between firings.
    ///
    /// On a stopped timer this only updates the stored interval. On a
    /// running timer the worker is stopped with the usual handshake and a
    /// new one is spawned with the new interval, so the timer is running
    /// before and after the call; the in-flight countdown is discarded. A
    /// zero interval is ignored with a warning.
    pub async fn change_interval(&mut self, interval: Duration) {
        if interval.is_zero() {
            warn!("ignoring zero tick interval, keeping {:?}", self.interval);
            return;
        }
        match self.worker.take() {
            None => self.interval = interval,
            Some(worker) => {
                worker.shutdown().await;
                self.interval = interval;
                self.worker = Some(self.spawn_worker());
            }
        }
    }

    fn spawn_worker(&self) -> Worker {
        let (control_tx, mut control_rx) = mpsc::channel(1);
        let (ack_tx, ack_rx) = oneshot::channel();
        let interval = self.interval;
        let callback = Arc::clone(&self.callback);

        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = ticker.tick() => (callback)(),
                    msg = control_rx.recv() => match msg {
                        Some(ControlMessage::Stop) | None => break,
                    },
                }
            }
            let _ = ack_tx.send(());
        });

        debug!("tick worker started with interval {:?}", interval);
        Worker { control_tx, ack_rx }
    }
}
