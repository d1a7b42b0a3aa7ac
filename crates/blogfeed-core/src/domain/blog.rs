use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Blog entity - a named content channel owned by an author.
///
/// A blog owns its articles: removing a blog from a store removes them too.
/// `created_at` is stamped by [`Blog::new`] and never touched afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Blog {
    /// Create a new blog with a generated ID and the current time.
    pub fn new(
        author_id: Uuid,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::Validation(
                "Blog title must not be empty".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            author_id,
            title,
            description: description.into(),
            category: category.into(),
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_blog_keeps_attributes() {
        let author = Uuid::new_v4();
        let blog = Blog::new(author, "title1", "description1", "category1").unwrap();

        assert_eq!(blog.author_id, author);
        assert_eq!(blog.title, "title1");
        assert_eq!(blog.description, "description1");
        assert_eq!(blog.category, "category1");
    }

    #[test]
    fn blank_title_is_rejected() {
        let result = Blog::new(Uuid::new_v4(), "   ", "description", "category");
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}
