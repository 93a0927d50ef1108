//! Review slice: business id -> (review id -> review)

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{BusinessId, Review, ReviewId};

/// Reviews of one business keyed by id, kept in the order the server sent them
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReviewMap(Vec<Review>);

impl ReviewMap {
    /// Build from a server list; a repeated id overwrites its first slot
    pub fn from_list(reviews: &[Review]) -> Self {
        let mut map = Self::default();
        for review in reviews {
            map.upsert(review.clone());
        }
        map
    }

    pub fn get(&self, id: ReviewId) -> Option<&Review> {
        self.0.iter().find(|review| review.id == id)
    }

    pub fn contains(&self, id: ReviewId) -> bool {
        self.get(id).is_some()
    }

    /// Overwrite in place, or append when the id is new
    pub fn upsert(&mut self, review: Review) {
        match self.0.iter_mut().find(|existing| existing.id == review.id) {
            Some(existing) => *existing = review,
            None => self.0.push(review),
        }
    }

    pub fn remove(&mut self, id: ReviewId) {
        self.0.retain(|review| review.id != id);
    }

    pub fn values(&self) -> impl Iterator<Item = &Review> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Transitions of the review slice
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewAction {
    /// Replace one business's reviews
    LoadForBusiness {
        business_id: BusinessId,
        reviews: Vec<Review>,
    },
    Add(Review),
    Update(Review),
    Remove {
        business_id: BusinessId,
        review_id: ReviewId,
    },
    Clear,
}

impl ReviewAction {
    pub fn name(&self) -> &'static str {
        match self {
            ReviewAction::LoadForBusiness { .. } => "reviews/load-for-business",
            ReviewAction::Add(_) => "reviews/add",
            ReviewAction::Update(_) => "reviews/update",
            ReviewAction::Remove { .. } => "reviews/remove",
            ReviewAction::Clear => "reviews/clear",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReviewState {
    pub by_business: BTreeMap<BusinessId, ReviewMap>,
}

impl ReviewState {
    pub fn reduce(&self, action: &ReviewAction) -> ReviewState {
        match action {
            ReviewAction::LoadForBusiness {
                business_id,
                reviews,
            } => {
                let mut next = self.clone();
                next.by_business
                    .insert(*business_id, ReviewMap::from_list(reviews));
                next
            }
            ReviewAction::Add(review) | ReviewAction::Update(review) => {
                let mut next = self.clone();
                next.by_business
                    .entry(review.business_id)
                    .or_default()
                    .upsert(review.clone());
                next
            }
            ReviewAction::Remove {
                business_id,
                review_id,
            } => {
                let mut next = self.clone();
                if let Some(reviews) = next.by_business.get_mut(business_id) {
                    reviews.remove(*review_id);
                }
                next
            }
            ReviewAction::Clear => ReviewState::default(),
        }
    }

    pub fn for_business(&self, business_id: BusinessId) -> Option<&ReviewMap> {
        self.by_business.get(&business_id)
    }
}
