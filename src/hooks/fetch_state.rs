//! Generic data/loading/error holder around an async fetch function

use super::Fence;
use crate::client::run_cancellable;
use crate::error::Result;
use futures_util::future::{BoxFuture, FutureExt};
use parking_lot::RwLock;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use tracing::debug;

type Fetcher<T, A> = Arc<dyn Fn(A) -> BoxFuture<'static, Result<T>> + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct FetchHook<T, A = ()> {
    fetcher: RwLock<Fetcher<T, A>>,
    immediate: bool,
    state: RwLock<FetchState<T>>,
    fence: Fence,
}

fn boxed<T, A, F, Fut>(fetch: F) -> Fetcher<T, A>
where
    F: Fn(A) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T>> + Send + 'static,
{
    Arc::new(move |args| fetch(args).boxed())
}

impl<T, A> FetchHook<T, A>
where
    T: Clone + Send + Sync + 'static,
    A: Send + 'static,
{
    /// `immediate` hooks start out loading and fetch on [`mount`](Self::mount)
    pub fn new<F, Fut>(fetch: F, immediate: bool) -> Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        Self {
            fetcher: RwLock::new(boxed(fetch)),
            immediate,
            state: RwLock::new(FetchState {
                data: None,
                loading: immediate,
                error: None,
            }),
            fence: Fence::default(),
        }
    }

    /// Hook that only fetches on [`refetch`](Self::refetch)
    pub fn lazy<F, Fut>(fetch: F) -> Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        Self::new(fetch, false)
    }

    pub fn snapshot(&self) -> FetchState<T> {
        self.state.read().clone()
    }

    /// Run the fetch with `args`
    ///
    /// The result is returned to the caller either way. It is written to
    /// state only when no newer fetch started meanwhile and the hook was not
    /// unmounted or re-pointed.
    pub async fn refetch(&self, args: A) -> Result<T> {
        let ticket = self.fence.begin();
        {
            let mut state = self.state.write();
            state.loading = true;
            state.error = None;
        }

        let fetch = self.fetcher.read().clone();
        let result = run_cancellable(Some(&ticket.token), fetch(args)).await;

        let mut state = self.state.write();
        if !self.fence.is_current(&ticket) {
            debug!("Discarding superseded fetch result");
            return result;
        }
        match &result {
            Ok(data) => state.data = Some(data.clone()),
            Err(e) => state.error = Some(e.to_string()),
        }
        state.loading = false;
        result
    }

    /// Cancel the fetch in flight; its result is never applied
    pub fn unmount(&self) {
        self.fence.cancel_in_flight();
    }
}

impl<T, A> FetchHook<T, A>
where
    T: Clone + Send + Sync + 'static,
    A: Default + Send + 'static,
{
    /// Initial fetch of an immediate hook; failures only land in `error`
    pub async fn mount(&self) {
        if self.immediate {
            let _ = self.refetch(A::default()).await;
        }
    }

    /// Swap the fetch function, as when its inputs change
    ///
    /// The fetch in flight is cancelled and an immediate hook fetches again;
    /// a lazy hook stops loading until its next refetch.
    pub async fn set_fetcher<F, Fut>(&self, fetch: F)
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
    {
        self.fence.cancel_in_flight();
        *self.fetcher.write() = boxed(fetch);
        // nothing is outstanding until a lazy hook is refetched
        self.state.write().loading = self.immediate;
        self.mount().await;
    }
}
