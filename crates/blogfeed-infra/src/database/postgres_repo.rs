//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DbConn, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use blogfeed_core::domain::{Article, Blog};
use blogfeed_core::error::RepoError;
use blogfeed_core::ports::{ArticleRepository, BlogRepository, ContentStore};

use super::entity::article::{self, Entity as ArticleEntity};
use super::entity::blog::{self, Entity as BlogEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL blog repository. Article rows go with their blog through the
/// `ON DELETE CASCADE` foreign key.
pub type PostgresBlogRepository = PostgresBaseRepository<BlogEntity>;

/// PostgreSQL article repository.
pub type PostgresArticleRepository = PostgresBaseRepository<ArticleEntity>;

async fn blogs_by_recency(db: &DbConn) -> Result<Vec<Blog>, RepoError> {
    let result = BlogEntity::find()
        .order_by_desc(blog::Column::CreatedAt)
        .order_by_asc(blog::Column::Id)
        .all(db)
        .await
        .map_err(|e| RepoError::Query(e.to_string()))?;

    Ok(result.into_iter().map(Into::into).collect())
}

async fn articles_of(db: &DbConn, blog_id: Uuid) -> Result<Vec<Article>, RepoError> {
    tracing::debug!(blog_id = %blog_id, "Listing articles");

    let result = ArticleEntity::find()
        .filter(article::Column::BlogId.eq(blog_id))
        .order_by_desc(article::Column::CreatedAt)
        .order_by_asc(article::Column::Id)
        .all(db)
        .await
        .map_err(|e| RepoError::Query(e.to_string()))?;

    Ok(result.into_iter().map(Into::into).collect())
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn list_by_recency(&self) -> Result<Vec<Blog>, RepoError> {
        blogs_by_recency(&self.db).await
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn find_by_blog_id(&self, blog_id: Uuid) -> Result<Vec<Article>, RepoError> {
        articles_of(&self.db, blog_id).await
    }
}

/// Read-side store over the `blogs` and `articles` tables.
pub struct PostgresContentStore {
    db: DbConn,
}

impl PostgresContentStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentStore for PostgresContentStore {
    async fn list_blogs_by_recency(&self) -> Result<Vec<Blog>, RepoError> {
        blogs_by_recency(&self.db).await
    }

    async fn list_articles(&self, blog_id: Uuid) -> Result<Vec<Article>, RepoError> {
        articles_of(&self.db, blog_id).await
    }

    async fn get_blog(&self, blog_id: Uuid) -> Result<Option<Blog>, RepoError> {
        let result = BlogEntity::find_by_id(blog_id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }
}
