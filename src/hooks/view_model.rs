//! Shared state machine of the specialized hooks
//!
//! `Loading` (data shows the initial value) settles into `Ready` with either
//! live data (`using_mock == false`) or the fallback (`using_mock == true`).
//! Failures never leave the hook; the message stays in `error`.

use super::Fence;
use crate::client::run_cancellable;
use crate::error::Result;
use parking_lot::RwLock;
use serde::Serialize;
use std::future::Future;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
    pub using_mock: bool,
}

pub(crate) struct ViewModel<T> {
    label: &'static str,
    state: RwLock<ViewState<T>>,
    fence: Fence,
}

impl<T: Clone> ViewModel<T> {
    pub(crate) fn new(label: &'static str, initial: T, loading: bool) -> Self {
        Self {
            label,
            state: RwLock::new(ViewState {
                data: initial,
                loading,
                error: None,
                using_mock: false,
            }),
            fence: Fence::default(),
        }
    }

    pub(crate) fn snapshot(&self) -> ViewState<T> {
        self.state.read().clone()
    }

    /// Settle on the result of `fetch`
    ///
    /// `Ok(None)` (nothing to show) and errors both settle on `fallback()`.
    /// A fetch superseded by a newer one, or cancelled, writes nothing.
    pub(crate) async fn load<F>(&self, fetch: F, fallback: impl FnOnce() -> T) -> ViewState<T>
    where
        F: Future<Output = Result<Option<T>>>,
    {
        let ticket = self.fence.begin();
        {
            let mut state = self.state.write();
            state.loading = true;
            state.error = None;
        }

        let result = run_cancellable(Some(&ticket.token), fetch).await;

        let mut state = self.state.write();
        if !self.fence.is_current(&ticket) {
            debug!("{} - discarding stale result", self.label);
            return state.clone();
        }

        match result {
            Ok(Some(data)) => {
                state.data = data;
                state.using_mock = false;
            }
            Ok(None) => {
                info!("{} - live data empty, using sample data", self.label);
                state.data = fallback();
                state.using_mock = true;
            }
            Err(e) => {
                warn!("{} - using sample data: {}", self.label, e);
                state.data = fallback();
                state.using_mock = true;
                state.error = Some(e.to_string());
            }
        }
        state.loading = false;
        state.clone()
    }

    /// Settle on `data` without fetching
    pub(crate) fn settle(&self, data: T) {
        self.fence.cancel_in_flight();
        let mut state = self.state.write();
        *state = ViewState {
            data,
            loading: false,
            error: None,
            using_mock: false,
        };
    }

    pub(crate) fn cancel(&self) {
        self.fence.cancel_in_flight();
    }
}
