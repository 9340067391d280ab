//! Request DTOs for the feedback API
//!
//! Defines the structure of incoming query strings and request bodies.

use std::fmt::Display;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer};

use crate::domain::ProductSearchFilter;

/// Query string for GET /api/products/search
///
/// Every parameter is optional; an empty value counts as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub rating_min: Option<Decimal>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub rating_max: Option<Decimal>,
}

impl From<SearchQuery> for ProductSearchFilter {
    fn from(query: SearchQuery) -> Self {
        let mut filter = ProductSearchFilter::new();
        if let Some(id) = query.id {
            filter = filter.with_id(id);
        }
        if let Some(name) = query.product_name {
            filter = filter.with_name(name);
        }
        if let Some(brand) = query.brand {
            filter = filter.with_brand(brand);
        }
        if let Some(min) = query.rating_min {
            filter = filter.with_rating_min(min);
        }
        if let Some(max) = query.rating_max {
            filter = filter.with_rating_max(max);
        }
        filter
    }
}

/// Body for POST /api/products/feedback/:id, a single tag/score pair.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackRequest {
    /// Feedback tag
    #[serde(alias = "Key")]
    pub key: String,
    /// Score attached to the tag
    #[serde(alias = "Value")]
    pub value: i32,
}

fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(de::Error::custom),
    }
}
