//! Data Transfer Objects - response types for the read API.
//!
//! Identifiers are strings and timestamps RFC 3339 strings.

use serde::{Deserialize, Serialize};

/// A blog's public attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogResponse {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub created_at: String,
}

/// The article preview shown next to a blog on the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSummaryResponse {
    pub title: String,
    pub content: String,
    pub created_at: String,
}

/// One feed row. `latest_article` is `null` when nothing is published.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedEntryResponse {
    pub blog: BlogResponse,
    pub latest_article: Option<ArticleSummaryResponse>,
}

/// GET /api/feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedResponse {
    pub entries: Vec<FeedEntryResponse>,
}

/// A published article as listed on its blog page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// GET /api/blogs/{blog_id}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogDetailResponse {
    pub blog: BlogResponse,
    pub articles: Vec<ArticleResponse>,
}
