use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{Article, Blog};

/// The subset of an article shown on the home feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleSummary {
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Article> for ArticleSummary {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            content: article.content.clone(),
            created_at: article.created_at,
        }
    }
}

/// One blog's contribution to the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedEntry {
    pub blog: Blog,
    /// `None` when the blog has no published articles.
    pub latest_article: Option<ArticleSummary>,
}

impl FeedEntry {
    pub fn has_published(&self) -> bool {
        self.latest_article.is_some()
    }
}

/// Ordered feed of blogs, newest blog first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Feed {
    pub entries: Vec<FeedEntry>,
}

impl Feed {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// A blog with all of its published articles, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogDetailView {
    pub blog: Blog,
    pub articles: Vec<Article>,
}
