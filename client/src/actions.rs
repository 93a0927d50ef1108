//! Confirmation-gated destructive actions

use shared::{ApiErrors, Business, BusinessId, ImageId, Review};

use crate::error::{ApiOutcome, ClientResult, Deleted};
use crate::forms::refresh_detail;
use crate::gateway::Gateway;

/// Asks the user before a destructive request is issued
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// User declined; no request was issued
    Cancelled,
    Deleted,
    Rejected(ApiErrors),
}

impl DeleteOutcome {
    /// A rejection without a usable body gets `fallback` as its banner
    fn settle(outcome: ApiOutcome<Deleted>, fallback: &str) -> Self {
        match outcome {
            ApiOutcome::Success(Deleted) => DeleteOutcome::Deleted,
            ApiOutcome::Rejected(errors) => DeleteOutcome::Rejected(errors.or_general(fallback)),
        }
    }
}

pub async fn delete_business(
    gateway: &Gateway,
    confirm: &impl Confirm,
    business: &Business,
) -> ClientResult<DeleteOutcome> {
    let prompt = format!(
        "Are you sure you want to delete \"{}\"? This action cannot be undone.",
        business.name
    );
    if !confirm.confirm(&prompt) {
        return Ok(DeleteOutcome::Cancelled);
    }
    let outcome = gateway.remove_business(business.id).await?;
    Ok(DeleteOutcome::settle(outcome, "Failed to delete business"))
}

/// Deletes an image, then reloads the business it belonged to
pub async fn delete_image(
    gateway: &Gateway,
    confirm: &impl Confirm,
    business_id: BusinessId,
    image_id: ImageId,
) -> ClientResult<DeleteOutcome> {
    if !confirm.confirm("Are you sure you want to delete this image?") {
        return Ok(DeleteOutcome::Cancelled);
    }
    let outcome = DeleteOutcome::settle(
        gateway.delete_business_image(image_id).await?,
        "Failed to delete image",
    );
    if outcome == DeleteOutcome::Deleted {
        refresh_detail(gateway, business_id).await;
    }
    Ok(outcome)
}

pub async fn delete_review(
    gateway: &Gateway,
    confirm: &impl Confirm,
    review: &Review,
) -> ClientResult<DeleteOutcome> {
    if !confirm.confirm("Are you sure you want to delete this review?") {
        return Ok(DeleteOutcome::Cancelled);
    }
    let outcome = gateway.remove_review(review.business_id, review.id).await?;
    Ok(DeleteOutcome::settle(outcome, "Failed to delete review"))
}
