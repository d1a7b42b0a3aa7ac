//! Read-side port used by the feed and blog detail loaders.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Article, Blog};
use crate::error::RepoError;

/// Query primitives over stored blogs and articles.
///
/// Implementations return owned snapshots; the builders never hold on to the
/// store while they work.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// All blogs ordered by creation time, newest first.
    async fn list_blogs_by_recency(&self) -> Result<Vec<Blog>, RepoError>;

    /// All articles of a blog in any status, newest first with equal
    /// timestamps by ascending id. Unknown blogs yield an empty list.
    async fn list_articles(&self, blog_id: Uuid) -> Result<Vec<Article>, RepoError>;

    /// Look up a single blog; `None` when the id does not resolve.
    async fn get_blog(&self, blog_id: Uuid) -> Result<Option<Blog>, RepoError>;
}
