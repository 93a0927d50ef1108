//! Resource store reducers
//!
//! Each resource slice is an immutable snapshot with a closed set of named
//! transitions. `reduce` never mutates its input; it returns the next
//! snapshot. The container that holds the current snapshot and notifies
//! subscribers lives in the client crate.

mod businesses;
mod reviews;
mod session;

pub use businesses::{BusinessAction, BusinessMap, BusinessState};
pub use reviews::{ReviewAction, ReviewMap, ReviewState};
pub use session::{SessionAction, SessionState};

use serde::Serialize;

/// Every transition the store recognizes
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Businesses(BusinessAction),
    Reviews(ReviewAction),
    Session(SessionAction),
}

impl Action {
    /// Stable name used in logs, e.g. `businesses/update`
    pub fn name(&self) -> &'static str {
        match self {
            Action::Businesses(action) => action.name(),
            Action::Reviews(action) => action.name(),
            Action::Session(action) => action.name(),
        }
    }
}

impl From<BusinessAction> for Action {
    fn from(action: BusinessAction) -> Self {
        Action::Businesses(action)
    }
}

impl From<ReviewAction> for Action {
    fn from(action: ReviewAction) -> Self {
        Action::Reviews(action)
    }
}

impl From<SessionAction> for Action {
    fn from(action: SessionAction) -> Self {
        Action::Session(action)
    }
}

/// Whole-application snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RootState {
    pub businesses: BusinessState,
    pub reviews: ReviewState,
    pub session: SessionState,
}

impl RootState {
    /// Apply one transition; only the targeted slice changes
    pub fn reduce(&self, action: &Action) -> RootState {
        match action {
            Action::Businesses(action) => RootState {
                businesses: self.businesses.reduce(action),
                ..self.clone()
            },
            Action::Reviews(action) => RootState {
                reviews: self.reviews.reduce(action),
                ..self.clone()
            },
            Action::Session(action) => RootState {
                session: self.session.reduce(action),
                ..self.clone()
            },
        }
    }
}
