//! Business slice: browse, detail and owned maps

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Business, BusinessId};
use crate::types::Pagination;

/// Businesses keyed by id
pub type BusinessMap = BTreeMap<BusinessId, Business>;

/// Transitions of the business slice
#[derive(Debug, Clone, PartialEq)]
pub enum BusinessAction {
    /// Replace the browse map from a list page
    LoadAll {
        businesses: Vec<Business>,
        pagination: Pagination,
    },
    /// Replace the detail map with exactly this business
    LoadDetail(Business),
    /// Replace the owned map
    LoadUserOwned(Vec<Business>),
    /// Insert into browse and owned
    Add(Business),
    /// Overwrite in browse and owned, reset detail to this business
    Update(Business),
    /// Drop the id from all three maps
    Remove(BusinessId),
    Clear,
}

impl BusinessAction {
    pub fn name(&self) -> &'static str {
        match self {
            BusinessAction::LoadAll { .. } => "businesses/load-all",
            BusinessAction::LoadDetail(_) => "businesses/load-detail",
            BusinessAction::LoadUserOwned(_) => "businesses/load-user-owned",
            BusinessAction::Add(_) => "businesses/add",
            BusinessAction::Update(_) => "businesses/update",
            BusinessAction::Remove(_) => "businesses/remove",
            BusinessAction::Clear => "businesses/clear",
        }
    }
}

/// Snapshot of the business slice.
///
/// The three maps may hold different snapshots of the same id. Every
/// transition that edits or deletes a business touches all maps that hold
/// it within the same snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BusinessState {
    /// Browse list (all businesses on the current page)
    pub browse: BusinessMap,
    /// Single-detail view; never more than one entry
    pub detail: BusinessMap,
    /// Businesses owned by the session user
    pub owned: BusinessMap,
    pub pagination: Pagination,
}

impl BusinessState {
    pub fn reduce(&self, action: &BusinessAction) -> BusinessState {
        match action {
            BusinessAction::LoadAll {
                businesses,
                pagination,
            } => BusinessState {
                browse: normalize(businesses),
                pagination: *pagination,
                ..self.clone()
            },
            BusinessAction::LoadDetail(business) => BusinessState {
                detail: single(business),
                ..self.clone()
            },
            BusinessAction::LoadUserOwned(businesses) => BusinessState {
                owned: normalize(businesses),
                ..self.clone()
            },
            BusinessAction::Add(business) => {
                let mut next = self.clone();
                next.browse.insert(business.id, business.clone());
                next.owned.insert(business.id, business.clone());
                next
            }
            BusinessAction::Update(business) => {
                let mut next = self.clone();
                next.browse.insert(business.id, business.clone());
                next.owned.insert(business.id, business.clone());
                next.detail = single(business);
                next
            }
            BusinessAction::Remove(id) => {
                let mut next = self.clone();
                next.browse.remove(id);
                next.owned.remove(id);
                next.detail.remove(id);
                next
            }
            BusinessAction::Clear => BusinessState::default(),
        }
    }

    pub fn contains(&self, id: BusinessId) -> bool {
        self.browse.contains_key(&id) || self.detail.contains_key(&id) || self.owned.contains_key(&id)
    }
}

fn normalize(businesses: &[Business]) -> BusinessMap {
    businesses
        .iter()
        .map(|business| (business.id, business.clone()))
        .collect()
}

fn single(business: &Business) -> BusinessMap {
    BusinessMap::from([(business.id, business.clone())])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn business(id: BusinessId, name: &str) -> Business {
        serde_json::from_value(serde_json::json!({ "id": id, "name": name })).unwrap()
    }

    fn loaded(ids: &[BusinessId]) -> BusinessState {
        BusinessState::default().reduce(&BusinessAction::LoadAll {
            businesses: ids.iter().map(|id| business(*id, "b")).collect(),
            pagination: Pagination { page: 1, size: 20 },
        })
    }

    #[test]
    fn test_load_all_normalizes_and_stores_pagination() {
        let state = BusinessState::default().reduce(&BusinessAction::LoadAll {
            businesses: vec![business(1, "Cafe One")],
            pagination: Pagination { page: 1, size: 20 },
        });
        assert_eq!(state.browse.len(), 1);
        assert_eq!(state.browse[&1].name, "Cafe One");
        assert_eq!(state.pagination, Pagination { page: 1, size: 20 });
    }

    #[test]
    fn test_load_all_replaces_previous_page() {
        let state = loaded(&[1, 2, 3]).reduce(&BusinessAction::LoadAll {
            businesses: vec![business(4, "d")],
            pagination: Pagination { page: 2, size: 20 },
        });
        assert_eq!(state.browse.keys().copied().collect::<Vec<_>>(), vec![4]);
        assert_eq!(state.pagination.page, 2);
    }

    #[test]
    fn test_load_detail_holds_exactly_one() {
        let state = BusinessState::default()
            .reduce(&BusinessAction::LoadDetail(business(1, "a")))
            .reduce(&BusinessAction::LoadDetail(business(2, "b")));
        assert_eq!(state.detail.len(), 1);
        assert!(state.detail.contains_key(&2));
    }

    #[test]
    fn test_add_skips_detail() {
        let state = BusinessState::default()
            .reduce(&BusinessAction::LoadDetail(business(1, "a")))
            .reduce(&BusinessAction::Add(business(9, "new")));
        assert!(state.browse.contains_key(&9));
        assert!(state.owned.contains_key(&9));
        assert!(!state.detail.contains_key(&9));
        assert!(state.detail.contains_key(&1));
    }

    #[test]
    fn test_update_propagates_to_all_maps() {
        let state = loaded(&[1, 2])
            .reduce(&BusinessAction::LoadUserOwned(vec![business(2, "old")]))
            .reduce(&BusinessAction::LoadDetail(business(1, "a")))
            .reduce(&BusinessAction::Update(business(2, "renamed")));

        assert_eq!(state.browse[&2].name, "renamed");
        assert_eq!(state.owned[&2].name, "renamed");
        assert_eq!(state.detail.len(), 1);
        assert_eq!(state.detail[&2].name, "renamed");
        assert_eq!(state.browse[&1].name, "b");
    }

    #[test]
    fn test_remove_only_in_owned() {
        let state = loaded(&[1])
            .reduce(&BusinessAction::LoadDetail(business(1, "a")))
            .reduce(&BusinessAction::LoadUserOwned(vec![business(5, "mine")]));
        let next = state.reduce(&BusinessAction::Remove(5));

        assert!(next.owned.is_empty());
        assert_eq!(next.browse, state.browse);
        assert_eq!(next.detail, state.detail);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let state = loaded(&[1, 2]);
        assert_eq!(state.reduce(&BusinessAction::Remove(42)), state);
    }

    #[test]
    fn test_clear_resets() {
        let state = loaded(&[1, 2]).reduce(&BusinessAction::Clear);
        assert_eq!(state, BusinessState::default());
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let before = loaded(&[1, 2]);
        let snapshot = before.clone();
        let _ = before.reduce(&BusinessAction::Remove(1));
        assert_eq!(before, snapshot);
    }
}
