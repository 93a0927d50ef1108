//! Page-level load state
//!
//! Loading indicators and retry affordances are local to each page and
//! never stored in the resource store.

use shared::store::RootState;
use shared::{view, Business, BusinessFilters, BusinessId, ImageId, Pagination, Review};
use tokio::task::JoinHandle;

use crate::config::BrowseConfig;
use crate::debounce::{DebouncedFetch, FilterDebouncer};
use crate::error::{ApiOutcome, ClientResult};
use crate::gateway::Gateway;

pub const BROWSE_FAILED: &str = "Failed to load businesses. Please try again.";
pub const DETAIL_FAILED: &str = "Failed to load business.";
pub const MANAGE_FAILED: &str = "Failed to load your businesses.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Loaded,
    /// Shown with a retry affordance
    Failed(String),
    /// Page needs a session user
    RequiresLogin,
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn can_retry(&self) -> bool {
        matches!(self, LoadStatus::Failed(_))
    }
}

/// Browse list with debounced filters
pub struct BrowsePage {
    gateway: Gateway,
    debouncer: FilterDebouncer,
    filters: BusinessFilters,
    status: LoadStatus,
    pending: Option<JoinHandle<ClientResult<DebouncedFetch>>>,
}

impl BrowsePage {
    pub fn new(gateway: Gateway, config: &BrowseConfig) -> Self {
        let filters = BusinessFilters {
            pagination: Pagination {
                page: 1,
                size: config.page_size,
            },
            ..BusinessFilters::default()
        };

        Self {
            debouncer: FilterDebouncer::new(gateway.clone(), config.debounce()),
            gateway,
            filters,
            status: LoadStatus::Loading,
            pending: None,
        }
    }

    pub fn filters(&self) -> &BusinessFilters {
        &self.filters
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Schedule the first fetch
    pub fn mount(&mut self) {
        self.schedule();
    }

    /// Change filters; the fetch is debounced
    pub fn set_filters(&mut self, change: impl FnOnce(&mut BusinessFilters)) {
        change(&mut self.filters);
        self.schedule();
    }

    pub fn clear_filters(&mut self) {
        self.filters = self.filters.cleared();
        self.schedule();
    }

    pub fn retry(&mut self) {
        self.schedule();
    }

    /// Wait for the latest scheduled fetch and update the status
    pub async fn settle(&mut self) -> &LoadStatus {
        let Some(handle) = self.pending.take() else {
            return &self.status;
        };

        self.status = match handle.await {
            Ok(Ok(DebouncedFetch::Applied(_))) => LoadStatus::Loaded,
            Ok(Ok(DebouncedFetch::Superseded)) => self.status.clone(),
            Ok(Ok(DebouncedFetch::Rejected(errors))) => {
                tracing::warn!(errors = %errors, "browse list rejected");
                LoadStatus::Failed(BROWSE_FAILED.to_string())
            }
            Ok(Err(e)) => {
                tracing::error!(error = %e, "error fetching businesses");
                LoadStatus::Failed(BROWSE_FAILED.to_string())
            }
            Err(e) => {
                tracing::error!(error = %e, "browse fetch task failed");
                LoadStatus::Failed(BROWSE_FAILED.to_string())
            }
        };
        &self.status
    }

    pub fn businesses(&self) -> Vec<Business> {
        let state = self.gateway.store().state();
        view::browse_list(&state).into_iter().cloned().collect()
    }

    fn schedule(&mut self) {
        self.status = LoadStatus::Loading;
        self.pending = Some(self.debouncer.schedule(self.filters.clone()));
    }
}

impl Drop for BrowsePage {
    fn drop(&mut self) {
        self.debouncer.cancel();
    }
}

/// Single business with its reviews
pub struct DetailPage {
    gateway: Gateway,
    business_id: BusinessId,
    status: LoadStatus,
}

impl DetailPage {
    pub fn new(gateway: Gateway, business_id: BusinessId) -> Self {
        Self {
            gateway,
            business_id,
            status: LoadStatus::Loading,
        }
    }

    pub fn business_id(&self) -> BusinessId {
        self.business_id
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Fetch detail and reviews together
    pub async fn load(&mut self) -> &LoadStatus {
        self.status = LoadStatus::Loading;
        let (detail, reviews) = tokio::join!(
            self.gateway.fetch_business_details(self.business_id),
            self.gateway.fetch_business_reviews(self.business_id),
        );

        match reviews {
            Ok(ApiOutcome::Success(_)) => {}
            Ok(ApiOutcome::Rejected(errors)) => {
                tracing::warn!(business_id = self.business_id, errors = %errors, "reviews not loaded")
            }
            Err(e) => tracing::error!(business_id = self.business_id, error = %e, "reviews not loaded"),
        }

        self.status = match detail {
            Ok(ApiOutcome::Success(_)) => LoadStatus::Loaded,
            Ok(ApiOutcome::Rejected(_)) => LoadStatus::Failed(DETAIL_FAILED.to_string()),
            Err(e) => {
                tracing::error!(business_id = self.business_id, error = %e, "detail not loaded");
                LoadStatus::Failed(DETAIL_FAILED.to_string())
            }
        };
        &self.status
    }

    pub async fn retry(&mut self) -> &LoadStatus {
        self.load().await
    }

    fn snapshot(&self) -> std::sync::Arc<RootState> {
        self.gateway.store().state()
    }

    /// `None` renders the loading state
    pub fn business(&self) -> Option<Business> {
        view::business_detail(&self.snapshot(), self.business_id).cloned()
    }

    pub fn reviews(&self) -> Vec<Review> {
        view::reviews_for_business(&self.snapshot(), self.business_id)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn can_write_review(&self) -> bool {
        let state = self.snapshot();
        view::business_detail(&state, self.business_id)
            .map(|business| view::can_write_review(&state, business))
            .unwrap_or(false)
    }

    pub fn can_add_image(&self) -> bool {
        view::can_add_image(view::session_user(&self.snapshot()))
    }

    pub fn can_manage_image(&self, image_id: ImageId) -> bool {
        let state = self.snapshot();
        let Some(business) = view::business_detail(&state, self.business_id) else {
            return false;
        };
        business
            .images
            .iter()
            .find(|image| image.id == image_id)
            .map(|image| view::can_manage_image(view::session_user(&state), business, image))
            .unwrap_or(false)
    }
}

/// The session user's own listings
pub struct ManagePage {
    gateway: Gateway,
    status: LoadStatus,
}

impl ManagePage {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            status: LoadStatus::Loading,
        }
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub async fn load(&mut self) -> &LoadStatus {
        if view::session_user(&self.gateway.store().state()).is_none() {
            self.status = LoadStatus::RequiresLogin;
            return &self.status;
        }

        self.status = LoadStatus::Loading;
        self.status = match self.gateway.fetch_current_user_businesses().await {
            Ok(ApiOutcome::Success(_)) => LoadStatus::Loaded,
            Ok(ApiOutcome::Rejected(_)) => LoadStatus::Failed(MANAGE_FAILED.to_string()),
            Err(e) => {
                tracing::error!(error = %e, "error loading user businesses");
                LoadStatus::Failed(MANAGE_FAILED.to_string())
            }
        };
        &self.status
    }

    pub async fn retry(&mut self) -> &LoadStatus {
        self.load().await
    }

    pub fn businesses(&self) -> Vec<Business> {
        view::owned_list(&self.gateway.store().state())
            .into_iter()
            .cloned()
            .collect()
    }
}
