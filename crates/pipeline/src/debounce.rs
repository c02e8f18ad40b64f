//! Trailing-edge debounce of live input.
//!
//! A [`Debouncer`] owns a background task holding at most one pending value
//! and one timer. Each input replaces the pending value and restarts the
//! timer; when the timer fires the pending value becomes the derived value.
//! There is no leading-edge emission and no max-wait cap.
//!
//! The derived value lives in a [`watch`] channel, so subscribers are only
//! woken when it actually changes.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Quiet period before typed input becomes the effective query.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

pub struct Debouncer {
    input: mpsc::UnboundedSender<String>,
    output: watch::Receiver<String>,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl Debouncer {
    /// Spawn a debouncer whose derived value starts at `initial`.
    pub fn spawn(initial: impl Into<String>, delay: Duration) -> Self {
        Self::spawn_with_token(initial, delay, CancellationToken::new())
    }

    /// Like [`spawn`](Self::spawn), stopping when `cancel` fires.
    pub fn spawn_with_token(
        initial: impl Into<String>,
        delay: Duration,
        cancel: CancellationToken,
    ) -> Self {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let (output_tx, output_rx) = watch::channel(initial.into());
        let task = tokio::spawn(run(input_rx, output_tx, delay, cancel.clone()));

        Self {
            input: input_tx,
            output: output_rx,
            cancel,
            task,
        }
    }

    /// Feed a new live value, restarting the quiet period.
    pub fn input(&self, value: impl Into<String>) {
        if self.input.send(value.into()).is_err() {
            tracing::trace!("Debouncer already stopped, input dropped");
        }
    }

    /// Receiver notified each time the derived value changes.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.output.clone()
    }

    /// Current derived value.
    pub fn current(&self) -> String {
        self.output.borrow().clone()
    }

    /// Stop the task, discarding any pending value.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        let _ = (&mut self.task).await;
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn run(
    mut input: mpsc::UnboundedReceiver<String>,
    output: watch::Sender<String>,
    delay: Duration,
    cancel: CancellationToken,
) {
    let mut pending: Option<String> = None;
    let timer = tokio::time::sleep(delay);
    tokio::pin!(timer);

    loop {
        tokio::select! {
            biased;

            _ = cancel.cancelled() => break,

            value = input.recv() => match value {
                Some(value) => {
                    pending = Some(value);
                    timer.as_mut().reset(Instant::now() + delay);
                }
                None => break,
            },

            _ = &mut timer, if pending.is_some() => {
                if let Some(value) = pending.take() {
                    output.send_if_modified(|current| {
                        if *current == value {
                            false
                        } else {
                            *current = value;
                            true
                        }
                    });
                }
            }
        }
    }

    if pending.is_some() {
        tracing::trace!("Debouncer stopped with a pending value, discarded");
    }
}
