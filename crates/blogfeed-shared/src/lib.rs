//! # Blogfeed Shared
//!
//! Wire types consumed by whatever renders the feed.
//! Plain serde structs with no dependency on the domain crate.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
