//! Read models for readers: the home feed and the per-blog article listing.
//!
//! The builders are pure functions over content already fetched from a
//! [`ContentStore`](crate::ports::ContentStore); the loaders do the fetching.

mod builder;
mod loader;
mod view;

pub use builder::{build_blog_detail, build_feed, latest_published};
pub use loader::{load_blog_detail, load_feed};
pub use view::{ArticleSummary, BlogDetailView, Feed, FeedEntry};
