use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Visibility state of an article.
///
/// Drafts are only visible to their author; readers see published articles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Draft => "draft",
            ArticleStatus::Published => "published",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Article entity - a unit of content belonging to a blog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,
    pub blog_id: Uuid,
    pub title: String,
    pub content: String,
    pub status: ArticleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Create a new draft article.
    pub fn new(blog_id: Uuid, title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            blog_id,
            title: title.into(),
            content: content.into(),
            status: ArticleStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_published(&self) -> bool {
        self.status == ArticleStatus::Published
    }

    /// Make the article visible to readers.
    ///
    /// Returns `false` when it was already published; the article is then
    /// left untouched.
    pub fn publish(&mut self) -> bool {
        self.transition_to(ArticleStatus::Published)
    }

    /// Move the article back to draft. Idempotent, like [`Article::publish`].
    pub fn unpublish(&mut self) -> bool {
        self.transition_to(ArticleStatus::Draft)
    }

    /// Replace title and content.
    pub fn edit(&mut self, title: impl Into<String>, content: impl Into<String>) {
        self.title = title.into();
        self.content = content.into();
        self.touch();
    }

    fn transition_to(&mut self, status: ArticleStatus) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        self.touch();
        true
    }

    fn touch(&mut self) {
        // Never move backwards, even if the wall clock does.
        self.updated_at = Utc::now().max(self.updated_at);
    }
}
