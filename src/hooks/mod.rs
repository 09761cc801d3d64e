//! View-model hooks
//!
//! A hook owns the state one view renders from and the fetch that fills it.
//! [`FetchHook`] is the generic data/loading/error holder; the specialized
//! hooks map live data through the services and fall back to the bundled
//! dataset when the live fetch fails or comes back empty.
//!
//! Overlapping fetches on one hook are fenced: every fetch takes the next
//! generation and only the latest generation writes state. Unmounting, or
//! changing what the hook fetches, cancels the fetch in flight.

mod alerts;
mod fetch_state;
mod market;
mod portfolio;
mod prediction;
mod stocks;
mod view_model;

pub use alerts::AlertsHook;
pub use fetch_state::{FetchHook, FetchState};
pub use market::MarketOverviewHook;
pub use portfolio::PortfolioHook;
pub use prediction::StockPredictionHook;
pub use stocks::StocksHook;
pub use view_model::ViewState;

use crate::client::CancelToken;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Generation counter plus the cancellation token of the current fetches
#[derive(Debug, Default)]
pub(crate) struct Fence {
    generation: AtomicU64,
    token: Mutex<CancelToken>,
}

/// Identity of one fetch, checked before its result is applied
#[derive(Debug, Clone)]
pub(crate) struct Ticket {
    generation: u64,
    pub(crate) token: CancelToken,
}

impl Fence {
    pub(crate) fn begin(&self) -> Ticket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            generation,
            token: self.token.lock().clone(),
        }
    }

    /// Latest fetch, and not cancelled
    pub(crate) fn is_current(&self, ticket: &Ticket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.generation && !ticket.token.is_cancelled()
    }

    /// Cancel every fetch started so far; later fetches get a fresh token
    pub(crate) fn cancel_in_flight(&self) {
        let mut token = self.token.lock();
        token.cancel();
        *token = CancelToken::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let fence = Fence::default();
        let first = fence.begin();
        assert!(fence.is_current(&first));
        let second = fence.begin();
        assert!(!fence.is_current(&first));
        assert!(fence.is_current(&second));
    }

    #[test]
    fn test_cancel_only_affects_started_tickets() {
        let fence = Fence::default();
        let before = fence.begin();
        fence.cancel_in_flight();
        assert!(before.token.is_cancelled());
        assert!(!fence.is_current(&before));

        let after = fence.begin();
        assert!(!after.token.is_cancelled());
        assert!(fence.is_current(&after));
    }
}
