//! Domain Module
//!
//! Product records and the search filter applied over them.

mod product;
mod search;

pub use product::{Feedback, Product};
pub use search::ProductSearchFilter;
