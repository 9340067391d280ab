//! Product search filter.

use std::fmt;

use rust_decimal::Decimal;

use super::Product;

/// Conjunctive query over products. Absent or blank fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductSearchFilter {
    id: Option<String>,
    name: Option<String>,
    brand: Option<String>,
    rating_min: Option<Decimal>,
    rating_max: Option<Decimal>,
}

impl ProductSearchFilter {
    /// Filter that matches every product.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Inclusive lower bound on the derived rating.
    pub fn with_rating_min(mut self, min: Decimal) -> Self {
        self.rating_min = Some(min);
        self
    }

    /// Inclusive upper bound on the derived rating.
    pub fn with_rating_max(mut self, max: Decimal) -> Self {
        self.rating_max = Some(max);
        self
    }

    /// Returns true when `product` satisfies every active constraint.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(id) = non_blank(&self.id) {
            if product.id != id {
                return false;
            }
        }
        if let Some(name) = non_blank(&self.name) {
            if product.name != name {
                return false;
            }
        }
        if let Some(brand) = non_blank(&self.brand) {
            if product.brand != brand {
                return false;
            }
        }
        if self.rating_min.is_none() && self.rating_max.is_none() {
            return true;
        }

        let rating = product.rating();
        self.rating_min.map_or(true, |min| rating >= min)
            && self.rating_max.map_or(true, |max| rating <= max)
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

impl fmt::Display for ProductSearchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn show<T: fmt::Display>(v: &Option<T>) -> String {
            v.as_ref().map(ToString::to_string).unwrap_or_default()
        }
        write!(
            f,
            "Id:[{}], ProductName:[{}], Brand:[{}], RatingMin:[{}], RatingMax:[{}]",
            show(&self.id),
            show(&self.name),
            show(&self.brand),
            show(&self.rating_min),
            show(&self.rating_max)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bmw() -> Product {
        Product::new("001", "335", "BMW")
            .with_feedback("good", 3)
            .with_feedback("very good", 4)
    }

    #[test]
    fn test_empty_filter_matches_all() {
        assert!(ProductSearchFilter::new().matches(&bmw()));
        assert!(ProductSearchFilter::new().matches(&Product::default()));
    }

    #[test]
    fn test_blank_fields_are_ignored() {
        let filter = ProductSearchFilter::new()
            .with_id("  ")
            .with_name("")
            .with_brand("\t");
        assert!(filter.matches(&bmw()));
    }

    #[test]
    fn test_exact_field_match() {
        assert!(ProductSearchFilter::new().with_brand("BMW").matches(&bmw()));
        assert!(!ProductSearchFilter::new().with_brand("bmw").matches(&bmw()));
        assert!(!ProductSearchFilter::new().with_name("33").matches(&bmw()));
        assert!(!ProductSearchFilter::new()
            .with_id("001")
            .with_brand("Toyota")
            .matches(&bmw()));
    }

    #[test]
    fn test_rating_bounds_are_inclusive() {
        let exact = Decimal::new(35, 1);
        let filter = ProductSearchFilter::new()
            .with_rating_min(exact)
            .with_rating_max(exact);
        assert!(filter.matches(&bmw()));

        let above = ProductSearchFilter::new().with_rating_min(Decimal::new(36, 1));
        assert!(!above.matches(&bmw()));

        let below = ProductSearchFilter::new().with_rating_max(Decimal::new(34, 1));
        assert!(!below.matches(&bmw()));
    }

    #[test]
    fn test_display() {
        let filter = ProductSearchFilter::new()
            .with_brand("BMW")
            .with_rating_min(Decimal::new(2, 0));
        assert_eq!(
            filter.to_string(),
            "Id:[], ProductName:[], Brand:[BMW], RatingMin:[2], RatingMax:[]"
        );
    }
}
