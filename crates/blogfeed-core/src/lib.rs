//! # Blogfeed Core
//!
//! The domain layer of Blogfeed: blogs, articles and their draft/published
//! lifecycle, plus the pure builders that turn stored content into the home
//! feed and the per-blog article listing.
//! This crate has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod feed;
pub mod ports;
pub mod publishing;

pub use error::DomainError;
pub use feed::{BlogDetailView, Feed, FeedEntry};
