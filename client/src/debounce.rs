//! Debounced browse-list fetch
//!
//! A filter change waits for a quiet period before its request is issued.
//! Every new change bumps a generation counter: a waiting task that has been
//! superseded never issues its request, and an in-flight one that has been
//! superseded has its page discarded instead of applied. The underlying HTTP
//! call is never aborted.
//!
//! The final generation check runs inside the store's write lock, so a stale
//! page can never land after a newer one. It may still land just before the
//! newer page if the filter changes while it is being applied.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use shared::{ApiErrors, BusinessFilters, BusinessPage};
use tokio::task::JoinHandle;

use crate::error::{ApiOutcome, ClientResult};
use crate::gateway::Gateway;

/// What happened to one scheduled fetch
#[derive(Debug, Clone, PartialEq)]
pub enum DebouncedFetch {
    /// A newer change (or a cancel) arrived first; nothing was applied
    Superseded,
    /// Page applied to the browse map
    Applied(BusinessPage),
    /// Server rejected the request; store untouched
    Rejected(ApiErrors),
}

#[derive(Clone)]
pub struct FilterDebouncer {
    gateway: Gateway,
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl FilterDebouncer {
    pub fn new(gateway: Gateway, delay: Duration) -> Self {
        Self {
            gateway,
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule a fetch for `filters`, superseding any earlier one
    pub fn schedule(&self, filters: BusinessFilters) -> JoinHandle<ClientResult<DebouncedFetch>> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let gateway = self.gateway.clone();
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if generation.load(Ordering::SeqCst) != ticket {
                tracing::debug!(ticket, "filter fetch superseded before issue");
                return Ok(DebouncedFetch::Superseded);
            }

            let result = gateway.request_businesses(&filters).await;
            let current = || generation.load(Ordering::SeqCst) == ticket;
            if !current() {
                tracing::debug!(ticket, "discarding superseded filter fetch result");
                return Ok(DebouncedFetch::Superseded);
            }

            match result? {
                ApiOutcome::Success(page) => {
                    if gateway.apply_page_if(&page, current) {
                        Ok(DebouncedFetch::Applied(page))
                    } else {
                        tracing::debug!(ticket, "filter fetch superseded while applying");
                        Ok(DebouncedFetch::Superseded)
                    }
                }
                ApiOutcome::Rejected(errors) => Ok(DebouncedFetch::Rejected(errors)),
            }
        })
    }

    /// Invalidate whatever is pending without scheduling a replacement
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}
