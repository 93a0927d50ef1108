//! View derivations over a store snapshot
//!
//! Pure functions recomputed on every store change; nothing here is stored.

use crate::models::{Business, BusinessId, BusinessImage, Review, SessionUser, MAX_REVIEW_LENGTH};
use crate::store::RootState;

/// Detail view for `id`; `None` means the caller renders a loading state
pub fn business_detail(state: &RootState, id: BusinessId) -> Option<&Business> {
    state.businesses.detail.get(&id)
}

/// Browse list in map order
pub fn browse_list(state: &RootState) -> Vec<&Business> {
    state.businesses.browse.values().collect()
}

/// Businesses owned by the session user, in map order
pub fn owned_list(state: &RootState) -> Vec<&Business> {
    state.businesses.owned.values().collect()
}

/// Reviews of a business in server order
pub fn reviews_for_business(state: &RootState, business_id: BusinessId) -> Vec<&Review> {
    state
        .reviews
        .for_business(business_id)
        .map(|reviews| reviews.values().collect())
        .unwrap_or_default()
}

pub fn session_user(state: &RootState) -> Option<&SessionUser> {
    state.session.user.as_ref()
}

/// The session user's own review of a business, if loaded
pub fn own_review<'a>(state: &'a RootState, business_id: BusinessId) -> Option<&'a Review> {
    let user = session_user(state)?;
    reviews_for_business(state, business_id)
        .into_iter()
        .find(|review| review.user_id == user.id)
}

/// True iff a session user exists, does not own the business and has no
/// review among the loaded reviews for it
pub fn can_write_review(state: &RootState, business: &Business) -> bool {
    can_review(
        session_user(state),
        business,
        reviews_for_business(state, business.id),
    )
}

/// `can_write_review` over loose parts rather than a snapshot
pub fn can_review<'a>(
    user: Option<&SessionUser>,
    business: &Business,
    reviews: impl IntoIterator<Item = &'a Review>,
) -> bool {
    match user {
        Some(user) => {
            user.id != business.owner_id
                && !reviews.into_iter().any(|review| review.user_id == user.id)
        }
        None => false,
    }
}

/// True iff the session user owns the business or uploaded the image
pub fn can_manage_image(user: Option<&SessionUser>, business: &Business, image: &BusinessImage) -> bool {
    match user {
        Some(user) => user.id == business.owner_id || image.user_id == Some(user.id),
        None => false,
    }
}

/// Any logged-in user may add photos
pub fn can_add_image(user: Option<&SessionUser>) -> bool {
    user.is_some()
}

pub fn is_owner(user: Option<&SessionUser>, business: &Business) -> bool {
    user.map(|user| user.id == business.owner_id).unwrap_or(false)
}

/// `"New"` when unrated, else the rating to one decimal
pub fn rating_label(business: &Business) -> String {
    match business.rating() {
        Some(rating) => format!("{:.1}", rating),
        None => "New".to_string(),
    }
}

/// Five-character star bar, e.g. `★★★☆☆`
pub fn star_bar(rating: f64) -> String {
    let filled = rating.clamp(0.0, 5.0).floor() as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

pub fn review_count_label(count: u32) -> String {
    if count == 1 {
        "1 review".to_string()
    } else {
        format!("{} reviews", count)
    }
}

/// `"123/2000 characters"` under the review textarea
pub fn character_count(text: &str) -> String {
    format!("{}/{} characters", text.chars().count(), MAX_REVIEW_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Action, BusinessAction, ReviewAction, SessionAction};
    use crate::types::Pagination;

    fn business(id: u64, owner_id: u64) -> Business {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "ownerId": owner_id,
            "name": "Spot",
            "avgRating": 4.26,
            "numReviews": 3
        }))
        .unwrap()
    }

    fn review(id: u64, business_id: u64, user_id: u64) -> Review {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "businessId": business_id,
            "userId": user_id,
            "review": "ok",
            "stars": 3
        }))
        .unwrap()
    }

    fn user(id: u64) -> SessionUser {
        serde_json::from_value(serde_json::json!({ "id": id, "firstName": "Ana" })).unwrap()
    }

    fn image(uploader: u64) -> BusinessImage {
        serde_json::from_value(serde_json::json!({
            "id": 1, "businessId": 1, "url": "https://img", "preview": false, "userId": uploader
        }))
        .unwrap()
    }

    fn logged_in(user_id: u64) -> RootState {
        RootState::default().reduce(&Action::Session(SessionAction::SetUser(user(user_id))))
    }

    #[test]
    fn test_detail_absent_until_loaded() {
        let state = RootState::default();
        assert!(business_detail(&state, 1).is_none());

        let state = state.reduce(&BusinessAction::LoadDetail(business(1, 2)).into());
        assert_eq!(business_detail(&state, 1).map(|b| b.id), Some(1));
    }

    #[test]
    fn test_browse_list_follows_map() {
        let state = RootState::default().reduce(
            &BusinessAction::LoadAll {
                businesses: vec![business(2, 1), business(1, 1)],
                pagination: Pagination::default(),
            }
            .into(),
        );
        assert_eq!(browse_list(&state).len(), 2);
        assert!(owned_list(&state).is_empty());
    }

    #[test]
    fn test_can_write_review() {
        let biz = business(1, 10);

        assert!(!can_write_review(&RootState::default(), &biz));
        assert!(!can_write_review(&logged_in(10), &biz));

        let state = logged_in(20);
        assert!(can_write_review(&state, &biz));

        let state = state.reduce(&ReviewAction::Add(review(5, 1, 20)).into());
        assert!(!can_write_review(&state, &biz));
        assert_eq!(own_review(&state, 1).map(|r| r.id), Some(5));
    }

    #[test]
    fn test_other_users_reviews_do_not_block() {
        let state = logged_in(20).reduce(&ReviewAction::Add(review(5, 1, 30)).into());
        assert!(can_write_review(&state, &business(1, 10)));
    }

    #[test]
    fn test_can_review_agrees_with_snapshot_rule() {
        let biz = business(1, 10);
        let reviews = vec![review(5, 1, 30), review(6, 1, 20)];

        assert!(!can_review(None, &biz, &reviews));
        assert!(!can_review(Some(&user(10)), &biz, &reviews));
        assert!(!can_review(Some(&user(20)), &biz, &reviews));
        assert!(can_review(Some(&user(40)), &biz, &reviews));

        let state = logged_in(20)
            .reduce(&ReviewAction::LoadForBusiness { business_id: 1, reviews: reviews.clone() }.into());
        assert_eq!(
            can_write_review(&state, &biz),
            can_review(Some(&user(20)), &biz, &reviews)
        );
    }

    #[test]
    fn test_can_manage_image() {
        let biz = business(1, 10);
        let owner = user(10);
        let uploader = user(20);
        let stranger = user(30);

        assert!(can_manage_image(Some(&owner), &biz, &image(20)));
        assert!(can_manage_image(Some(&uploader), &biz, &image(20)));
        assert!(!can_manage_image(Some(&stranger), &biz, &image(20)));
        assert!(!can_manage_image(None, &biz, &image(20)));
    }

    #[test]
    fn test_labels() {
        assert_eq!(rating_label(&business(1, 1)), "4.3");

        let unrated: Business =
            serde_json::from_value(serde_json::json!({ "id": 1, "numReviews": 0 })).unwrap();
        assert_eq!(rating_label(&unrated), "New");

        assert_eq!(star_bar(3.7), "★★★☆☆");
        assert_eq!(star_bar(0.0), "☆☆☆☆☆");
        assert_eq!(review_count_label(1), "1 review");
        assert_eq!(review_count_label(0), "0 reviews");
        assert_eq!(character_count("héllo"), "5/2000 characters");
    }
}
