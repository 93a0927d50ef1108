//! Business listing models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

use super::user::UserId;

pub type BusinessId = u64;
pub type ImageId = u64;

/// Country pre-filled on the create form
pub const DEFAULT_COUNTRY: &str = "United States of America";

/// Categories offered by the business form
pub const BUSINESS_CATEGORIES: &[&str] = &[
    "Restaurant",
    "Cafe",
    "Pizza",
    "Fast Food",
    "Bar",
    "Retail",
    "Services",
    "Healthcare",
    "Entertainment",
    "Other",
];

/// Price tier of a business
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PriceRange {
    #[serde(rename = "$")]
    Budget,
    #[serde(rename = "$$")]
    Moderate,
    #[serde(rename = "$$$")]
    Expensive,
    #[serde(rename = "$$$$")]
    VeryExpensive,
}

impl PriceRange {
    pub const ALL: [PriceRange; 4] = [
        PriceRange::Budget,
        PriceRange::Moderate,
        PriceRange::Expensive,
        PriceRange::VeryExpensive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::Budget => "$",
            PriceRange::Moderate => "$$",
            PriceRange::Expensive => "$$$",
            PriceRange::VeryExpensive => "$$$$",
        }
    }

    /// Option label shown in the price select
    pub fn label(&self) -> &'static str {
        match self {
            PriceRange::Budget => "$ - Budget friendly",
            PriceRange::Moderate => "$$ - Moderate",
            PriceRange::Expensive => "$$$ - Expensive",
            PriceRange::VeryExpensive => "$$$$ - Very expensive",
        }
    }
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown price range: {0:?}")]
pub struct ParsePriceRangeError(pub String);

impl std::str::FromStr for PriceRange {
    type Err = ParsePriceRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PriceRange::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| ParsePriceRangeError(s.to_string()))
    }
}

/// Owner summary nested in the detail payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessOwner {
    pub id: UserId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Image attached to a business
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessImage {
    pub id: ImageId,
    #[serde(default)]
    pub business_id: BusinessId,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub preview: bool,
    /// Uploader
    #[serde(default)]
    pub user_id: Option<UserId>,
}

/// A business as returned by the API.
///
/// List payloads carry `avgRating` and `previewImage`; the detail payload
/// carries `avgStarRating`, the nested `Owner` and `BusinessImages`. Missing
/// fields decode to defaults and are passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: BusinessId,
    #[serde(default)]
    pub owner_id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub price_range: Option<PriceRange>,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "avgStarRating")]
    pub avg_rating: Option<f64>,
    #[serde(default)]
    pub num_reviews: u32,
    #[serde(default)]
    pub preview_image: Option<String>,
    #[serde(rename = "BusinessImages", default)]
    pub images: Vec<BusinessImage>,
    #[serde(rename = "Owner", default)]
    pub owner: Option<BusinessOwner>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Business {
    /// Aggregate rating, or `None` ("New") while there are no reviews
    pub fn rating(&self) -> Option<f64> {
        if self.num_reviews == 0 {
            return None;
        }
        self.avg_rating.filter(|rating| *rating > 0.0)
    }

    /// Image flagged to represent the business in list views
    pub fn preview(&self) -> Option<&str> {
        self.images
            .iter()
            .find(|image| image.preview)
            .map(|image| image.url.as_str())
            .or(self.preview_image.as_deref())
    }
}

/// Body of `POST /api/businesses` and `PUT /api/businesses/:id`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInput {
    #[validate(length(max = 50, message = "Business name must be less than 50 characters"))]
    pub name: String,
    pub category: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub price_range: Option<PriceRange>,
    pub description: String,
}

impl Default for BusinessInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
            price_range: None,
            description: String::new(),
        }
    }
}

impl From<&Business> for BusinessInput {
    /// Pre-fill the edit form from a loaded business
    fn from(business: &Business) -> Self {
        Self {
            name: business.name.clone(),
            category: business.category.clone(),
            address: business.address.clone(),
            city: business.city.clone(),
            state: business.state.clone(),
            zip_code: business.zip_code.clone(),
            country: business.country.clone(),
            price_range: business.price_range,
            description: business.description.clone(),
        }
    }
}

/// Body of `POST /api/businesses/:id/images`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct NewBusinessImage {
    #[validate(url(message = "Please enter a valid image URL"))]
    pub url: String,
    pub preview: bool,
}
