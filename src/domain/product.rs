//! Product Entity
//!
//! A product record with freeform feedback and a derived rating.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Ordered tag → score mapping; iteration follows insertion order.
pub type Feedback = IndexMap<String, i32>;

// == Product ==
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "productName", default)]
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(rename = "feedBacks", default, deserialize_with = "null_as_empty")]
    pub feedback: Feedback,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            feedback: Feedback::new(),
        }
    }

    /// Builder-style helper appending one feedback entry.
    pub fn with_feedback(mut self, tag: impl Into<String>, score: i32) -> Self {
        self.push_feedback(tag, score);
        self
    }

    // == Rating ==
    /// Arithmetic mean of the feedback scores, zero when there is none.
    ///
    /// Computed in decimal so range comparisons never suffer float drift.
    pub fn rating(&self) -> Decimal {
        if self.feedback.is_empty() {
            return Decimal::ZERO;
        }
        let sum: Decimal = self.feedback.values().copied().map(Decimal::from).sum();
        sum / Decimal::from(self.feedback.len())
    }

    // == Push Feedback ==
    /// Appends `(tag, score)` as the newest entry.
    ///
    /// A repeated tag is last-write-wins: the old entry is dropped and the new
    /// one lands at the end.
    pub fn push_feedback(&mut self, tag: impl Into<String>, score: i32) {
        let tag = tag.into();
        self.feedback.shift_remove(&tag);
        self.feedback.insert(tag, score);
    }
}

// Wire shape, rating included as a JSON number.
#[derive(Serialize)]
struct ProductRepr<'a> {
    id: &'a str,
    #[serde(rename = "productName")]
    name: &'a str,
    brand: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    rating: Decimal,
    #[serde(rename = "feedBacks")]
    feedback: &'a Feedback,
}

impl Serialize for Product {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ProductRepr {
            id: &self.id,
            name: &self.name,
            brand: &self.brand,
            rating: self.rating(),
            feedback: &self.feedback,
        }
        .serialize(serializer)
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Feedback, D::Error> {
    Ok(Option::<Feedback>::deserialize(deserializer)?.unwrap_or_default())
}
