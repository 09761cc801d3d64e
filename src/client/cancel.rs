//! Cancellation token for in-flight requests

use crate::error::{ApiError, Result};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;

/// Cloneable, one-shot cancellation flag
///
/// All clones observe the same flag. Once cancelled a token stays cancelled.
#[derive(Debug, Clone)]
pub struct CancelToken {
    tx: Arc<watch::Sender<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves once [`cancel`](Self::cancel) has been called on any clone
    pub async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives in `self`, so the channel cannot close under us.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive `fut` to completion unless `token` is cancelled first
///
/// Cancellation drops `fut`, which aborts any HTTP exchange it owns.
pub async fn run_cancellable<T, F>(token: Option<&CancelToken>, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match token {
        Some(token) => {
            if token.is_cancelled() {
                return Err(ApiError::Cancelled);
            }
            tokio::select! {
                biased;
                _ = token.cancelled() => Err(ApiError::Cancelled),
                result = fut => result,
            }
        }
        None => fut.await,
    }
}
