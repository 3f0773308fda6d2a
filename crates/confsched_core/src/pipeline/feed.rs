//! Snapshot feeds backed by bounded tokio channels.
//!
//! A feed carries full snapshots (`Ok`) and at most one terminal failure
//! (`Err`). Closing the sending side without a failure completes the feed.

use std::error::Error;
use std::fmt::{Display, Formatter};
use tokio::sync::mpsc;

/// Terminal failure reported by a feed provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedError {
    message: String,
}

impl FeedError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for FeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "feed failed: {}", self.message)
    }
}

impl Error for FeedError {}

/// Returned when emitting into a feed nobody listens to anymore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedClosed;

impl Display for FeedClosed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "feed receiver is closed")
    }
}

impl Error for FeedClosed {}

/// One delivery on a feed.
pub type FeedItem<T> = Result<T, FeedError>;

/// Creates a bounded feed.
///
/// # Panics
/// Panics when `capacity` is zero (tokio channel contract).
pub fn channel<T>(capacity: usize) -> (FeedSender<T>, Feed<T>) {
    let (tx, rx) = mpsc::channel(capacity);
    (FeedSender { tx }, Feed { rx })
}

/// Producer half. Cloneable; may be used from any thread.
#[derive(Debug)]
pub struct FeedSender<T> {
    tx: mpsc::Sender<FeedItem<T>>,
}

impl<T> Clone for FeedSender<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T> FeedSender<T> {
    /// Publishes a new snapshot, waiting for buffer space.
    pub async fn emit(&self, value: T) -> Result<(), FeedClosed> {
        self.tx.send(Ok(value)).await.map_err(|_| FeedClosed)
    }

    /// Publishes a new snapshot from a thread outside the async runtime.
    ///
    /// # Panics
    /// Panics when called from within an async execution context.
    pub fn blocking_emit(&self, value: T) -> Result<(), FeedClosed> {
        self.tx.blocking_send(Ok(value)).map_err(|_| FeedClosed)
    }

    /// Terminates the feed with `error`.
    pub async fn fail(self, error: FeedError) -> Result<(), FeedClosed> {
        self.tx.send(Err(error)).await.map_err(|_| FeedClosed)
    }

    /// Blocking variant of [`FeedSender::fail`].
    pub fn blocking_fail(self, error: FeedError) -> Result<(), FeedClosed> {
        self.tx.blocking_send(Err(error)).map_err(|_| FeedClosed)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    /// Resolves once the consuming side has been dropped.
    pub async fn closed(&self) {
        self.tx.closed().await
    }
}

/// Consumer half.
#[derive(Debug)]
pub struct Feed<T> {
    rx: mpsc::Receiver<FeedItem<T>>,
}

impl<T> Feed<T> {
    /// Feed that yields `value` once and then completes.
    pub fn once(value: T) -> Self {
        let (tx, rx) = mpsc::channel(1);
        // Why: capacity 1 and a live receiver, so this send cannot fail.
        let _ = tx.try_send(Ok(value));
        Self { rx }
    }

    /// Feed that fails immediately with `error`.
    pub fn failed(error: FeedError) -> Self {
        let (tx, rx) = mpsc::channel(1);
        // Why: capacity 1 and a live receiver, so this send cannot fail.
        let _ = tx.try_send(Err(error));
        Self { rx }
    }

    /// Next delivery, or `None` once every sender is gone.
    pub async fn recv(&mut self) -> Option<FeedItem<T>> {
        self.rx.recv().await
    }
}
