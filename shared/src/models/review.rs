//! Review models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::business::BusinessId;
use super::user::UserId;

pub type ReviewId = u64;

/// Maximum review body length
pub const MAX_REVIEW_LENGTH: usize = 2000;

/// Author summary nested in a review payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewAuthor {
    pub id: UserId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Image attached to a review
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewImage {
    pub id: u64,
    #[serde(default)]
    pub review_id: ReviewId,
    #[serde(default)]
    pub url: String,
}

/// A star-rated review of a business
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub business_id: BusinessId,
    #[serde(default)]
    pub user_id: UserId,
    /// Review body
    #[serde(default)]
    pub review: String,
    /// 1-5
    #[serde(default)]
    pub stars: u8,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "User", default)]
    pub author: Option<ReviewAuthor>,
    #[serde(rename = "ReviewImages", default)]
    pub images: Vec<ReviewImage>,
}

impl Review {
    pub fn author_name(&self) -> String {
        match &self.author {
            Some(author) => format!("{} {}", author.first_name, author.last_name)
                .trim()
                .to_string(),
            None => String::new(),
        }
    }
}

/// Body of the review create and edit requests
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct ReviewInput {
    #[validate(length(max = 2000, message = "Review must be 2000 characters or less"))]
    pub review: String,
    #[validate(range(min = 1, max = 5, message = "Please select a star rating"))]
    pub stars: u8,
}

impl From<&Review> for ReviewInput {
    fn from(review: &Review) -> Self {
        Self {
            review: review.review.clone(),
            stars: review.stars,
        }
    }
}
