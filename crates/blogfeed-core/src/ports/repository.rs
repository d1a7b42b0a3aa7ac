use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Article, Blog};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Blog repository. Deleting a blog also deletes its articles.
#[async_trait]
pub trait BlogRepository: BaseRepository<Blog, Uuid> {
    /// All blogs, newest first.
    async fn list_by_recency(&self) -> Result<Vec<Blog>, RepoError>;
}

/// Article repository.
///
/// Saving an article whose blog does not exist fails with
/// [`RepoError::Constraint`].
#[async_trait]
pub trait ArticleRepository: BaseRepository<Article, Uuid> {
    /// Every article of a blog, drafts included.
    async fn find_by_blog_id(&self, blog_id: Uuid) -> Result<Vec<Article>, RepoError>;
}
