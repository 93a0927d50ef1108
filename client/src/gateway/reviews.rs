//! Review operations

use shared::store::ReviewAction;
use shared::{BusinessId, Review, ReviewId, ReviewInput, ReviewList};

use super::Gateway;
use crate::error::{ApiOutcome, ClientResult, Deleted};

impl Gateway {
    /// `GET /api/businesses/:id/reviews`, replacing that business's reviews
    pub async fn fetch_business_reviews(
        &self,
        business_id: BusinessId,
    ) -> ClientResult<ApiOutcome<Vec<Review>>> {
        let request = self
            .client
            .get(self.url(&format!("/api/businesses/{}/reviews", business_id)));
        let outcome: ApiOutcome<ReviewList> = self.execute("fetch_business_reviews", request).await?;
        if let ApiOutcome::Success(list) = &outcome {
            self.store.dispatch(ReviewAction::LoadForBusiness {
                business_id,
                reviews: list.reviews.clone(),
            });
        }
        Ok(outcome.map(|list| list.reviews))
    }

    /// `POST /api/businesses/:id/reviews`
    pub async fn create_review(
        &self,
        business_id: BusinessId,
        input: &ReviewInput,
    ) -> ClientResult<ApiOutcome<Review>> {
        let request = self
            .client
            .post(self.url(&format!("/api/businesses/{}/reviews", business_id)))
            .json(input);
        let outcome: ApiOutcome<Review> = self.execute("create_review", request).await?;
        if let ApiOutcome::Success(review) = &outcome {
            self.store.dispatch(ReviewAction::Add(review.clone()));
        }
        Ok(outcome)
    }

    /// `PUT /api/reviews/:id`
    pub async fn edit_review(
        &self,
        review_id: ReviewId,
        input: &ReviewInput,
    ) -> ClientResult<ApiOutcome<Review>> {
        let request = self
            .client
            .put(self.url(&format!("/api/reviews/{}", review_id)))
            .json(input);
        let outcome: ApiOutcome<Review> = self.execute("edit_review", request).await?;
        if let ApiOutcome::Success(review) = &outcome {
            self.store.dispatch(ReviewAction::Update(review.clone()));
        }
        Ok(outcome)
    }

    /// `DELETE /api/reviews/:id`
    pub async fn remove_review(
        &self,
        business_id: BusinessId,
        review_id: ReviewId,
    ) -> ClientResult<ApiOutcome<Deleted>> {
        let request = self
            .client
            .delete(self.url(&format!("/api/reviews/{}", review_id)));
        let outcome = self.execute_empty("remove_review", request).await?;
        if outcome.is_success() {
            self.store.dispatch(ReviewAction::Remove {
                business_id,
                review_id,
            });
        }
        Ok(outcome.map(|_| Deleted))
    }
}
