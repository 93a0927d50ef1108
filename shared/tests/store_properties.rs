//! Resource store tests
//!
//! Covers the business and review slice invariants:
//! - update after load-all touches only the updated id
//! - remove is idempotent
//! - load-detail always leaves exactly one entry
//! - "can write review" flips once the session user's review is loaded

use proptest::prelude::*;
use shared::store::{Action, BusinessAction, ReviewAction, RootState, SessionAction};
use shared::types::Pagination;
use shared::view;
use shared::{Business, Review, SessionUser};

fn business(id: u64, name: &str) -> Business {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "ownerId": 1,
        "name": name,
        "numReviews": 0
    }))
    .unwrap()
}

fn review(id: u64, business_id: u64, user_id: u64) -> Review {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "businessId": business_id,
        "userId": user_id,
        "review": "fine",
        "stars": 3
    }))
    .unwrap()
}

fn load_all(ids: &[u64]) -> Action {
    BusinessAction::LoadAll {
        businesses: ids.iter().map(|id| business(*id, "loaded")).collect(),
        pagination: Pagination::default(),
    }
    .into()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// List endpoint scenario: one business, page 1, size 20
    #[test]
    fn test_list_page_populates_browse_map() {
        let page: shared::BusinessPage = serde_json::from_value(serde_json::json!({
            "Businesses": [{"id": 1, "name": "Cafe"}],
            "page": 1,
            "size": 20
        }))
        .unwrap();

        let state = RootState::default().reduce(
            &BusinessAction::LoadAll {
                businesses: page.businesses.clone(),
                pagination: page.pagination(),
            }
            .into(),
        );

        assert_eq!(state.businesses.browse.len(), 1);
        assert_eq!(state.businesses.browse[&1].name, "Cafe");
        assert_eq!(state.businesses.pagination, Pagination { page: 1, size: 20 });
    }

    /// Delete scenario: id 5 only present in the owned map
    #[test]
    fn test_remove_owned_only() {
        let state = RootState::default()
            .reduce(&load_all(&[1, 2]))
            .reduce(&BusinessAction::LoadDetail(business(1, "detail")).into())
            .reduce(&BusinessAction::LoadUserOwned(vec![business(5, "mine")]).into());

        let next = state.reduce(&BusinessAction::Remove(5).into());

        assert!(!next.businesses.owned.contains_key(&5));
        assert_eq!(next.businesses.browse, state.businesses.browse);
        assert_eq!(next.businesses.detail, state.businesses.detail);
    }

    /// Logout wipes every slice
    #[test]
    fn test_clear_after_logout() {
        let user: SessionUser = serde_json::from_value(serde_json::json!({"id": 3})).unwrap();
        let state = RootState::default()
            .reduce(&SessionAction::SetUser(user).into())
            .reduce(&load_all(&[1]))
            .reduce(&ReviewAction::Add(review(1, 1, 3)).into())
            .reduce(&SessionAction::RemoveUser.into())
            .reduce(&BusinessAction::Clear.into())
            .reduce(&ReviewAction::Clear.into());

        assert_eq!(state, RootState::default());
    }

    #[test]
    fn test_action_names() {
        assert_eq!(Action::from(BusinessAction::Clear).name(), "businesses/clear");
        assert_eq!(Action::from(ReviewAction::Clear).name(), "reviews/clear");
        assert_eq!(Action::from(SessionAction::RemoveUser).name(), "session/remove-user");
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    fn ids_strategy() -> impl Strategy<Value = Vec<u64>> {
        prop::collection::btree_set(1u64..200, 1..30).prop_map(|ids| ids.into_iter().collect())
    }

    proptest! {
        /// update(b) after load-all leaves every other browse entry untouched
        #[test]
        fn prop_update_preserves_other_entries(ids in ids_strategy(), pick in any::<prop::sample::Index>()) {
            let target = ids[pick.index(ids.len())];
            let loaded = RootState::default().reduce(&load_all(&ids));
            let updated = loaded.reduce(&BusinessAction::Update(business(target, "updated")).into());

            prop_assert_eq!(&updated.businesses.browse[&target].name, "updated");
            prop_assert_eq!(updated.businesses.browse.len(), loaded.businesses.browse.len());
            for (id, entry) in &loaded.businesses.browse {
                if *id != target {
                    prop_assert_eq!(&updated.businesses.browse[id], entry);
                }
            }
        }

        /// remove(id) twice equals remove(id) once
        #[test]
        fn prop_remove_idempotent(ids in ids_strategy(), id in 1u64..250) {
            let loaded = RootState::default()
                .reduce(&load_all(&ids))
                .reduce(&BusinessAction::LoadUserOwned(vec![business(id, "owned")]).into());
            let remove: Action = BusinessAction::Remove(id).into();

            let once = loaded.reduce(&remove);
            let twice = once.reduce(&remove);
            prop_assert_eq!(once.clone(), twice);
            prop_assert!(!once.businesses.contains(id));
        }

        /// load-detail leaves exactly one entry regardless of prior contents
        #[test]
        fn prop_load_detail_single_entry(history in prop::collection::vec(1u64..50, 0..10), id in 1u64..50) {
            let mut state = RootState::default();
            for previous in history {
                state = state.reduce(&BusinessAction::LoadDetail(business(previous, "prev")).into());
            }
            let state = state.reduce(&BusinessAction::LoadDetail(business(id, "now")).into());

            prop_assert_eq!(state.businesses.detail.len(), 1);
            prop_assert!(state.businesses.detail.contains_key(&id));
        }

        /// "can write review" is true before the user's review is loaded and false after
        #[test]
        fn prop_can_write_review_flips(user_id in 2u64..100, others in prop::collection::vec(100u64..200, 0..5)) {
            let user: SessionUser = serde_json::from_value(serde_json::json!({"id": user_id})).unwrap();
            let biz = business(7, "target");
            let other_reviews: Vec<Review> = others
                .iter()
                .enumerate()
                .map(|(i, author)| review(i as u64 + 1, 7, *author))
                .collect();

            let before = RootState::default()
                .reduce(&SessionAction::SetUser(user).into())
                .reduce(&ReviewAction::LoadForBusiness { business_id: 7, reviews: other_reviews }.into());
            prop_assert!(view::can_write_review(&before, &biz));

            let after = before.reduce(&ReviewAction::Add(review(1000, 7, user_id)).into());
            prop_assert!(!view::can_write_review(&after, &biz));
        }
    }
}
