//! Service Module
//!
//! Product operations over the cache-fronted collection.

mod products;

#[cfg(test)]
mod property_tests;

pub use products::{ProductService, ProductServices};
