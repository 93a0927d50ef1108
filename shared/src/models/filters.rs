//! Browse filters and their query-string form

use serde::{Deserialize, Serialize};

use super::business::PriceRange;
use crate::types::Pagination;

/// Filter set for `GET /api/businesses`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessFilters {
    pub category: Option<String>,
    pub city: Option<String>,
    pub price_range: Option<PriceRange>,
    pub min_rating: Option<f64>,
    pub pagination: Pagination,
}

impl BusinessFilters {
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_price_range(mut self, price_range: PriceRange) -> Self {
        self.price_range = Some(price_range);
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn with_page(mut self, page: u32, size: u32) -> Self {
        self.pagination = Pagination { page, size };
        self
    }

    /// Drop every filter but keep the page size
    pub fn cleared(&self) -> Self {
        Self {
            pagination: Pagination {
                page: 1,
                size: self.pagination.size,
            },
            ..Self::default()
        }
    }

    /// Query pairs in request order.
    ///
    /// `page` and `size` are always sent; the other filters only when present
    /// and non-empty.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("page", self.pagination.page.to_string()),
            ("size", self.pagination.size.to_string()),
        ];

        if let Some(category) = non_empty(&self.category) {
            query.push(("category", category.to_string()));
        }
        if let Some(min_rating) = self.min_rating.filter(|rating| *rating > 0.0) {
            query.push(("minRating", min_rating.to_string()));
        }
        if let Some(city) = non_empty(&self.city) {
            query.push(("city", city.to_string()));
        }
        if let Some(price_range) = self.price_range {
            query.push(("priceRange", price_range.as_str().to_string()));
        }

        query
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
