//! Request and Response models for the feedback API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP query strings and bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{FeedbackRequest, SearchQuery};
pub use responses::HealthResponse;
