//! In-memory content store - used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blogfeed_core::domain::{Article, Blog};
use blogfeed_core::error::RepoError;
use blogfeed_core::ports::{ArticleRepository, BaseRepository, BlogRepository, ContentStore};

/// Blogs and articles held in two maps behind async RwLocks.
///
/// Locks are always taken blogs first, then articles.
/// Note: Data is lost on process restart.
pub struct InMemoryContentStore {
    blogs: RwLock<HashMap<Uuid, Blog>>,
    articles: RwLock<HashMap<Uuid, Article>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self {
            blogs: RwLock::new(HashMap::new()),
            articles: RwLock::new(HashMap::new()),
        }
    }

    async fn blogs_by_recency(&self) -> Vec<Blog> {
        let blogs = self.blogs.read().await;
        let mut list: Vec<Blog> = blogs.values().cloned().collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        list
    }

    async fn articles_of(&self, blog_id: Uuid) -> Vec<Article> {
        let articles = self.articles.read().await;
        let mut list: Vec<Article> = articles
            .values()
            .filter(|a| a.blog_id == blog_id)
            .cloned()
            .collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        list
    }
}

impl Default for InMemoryContentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn list_blogs_by_recency(&self) -> Result<Vec<Blog>, RepoError> {
        Ok(self.blogs_by_recency().await)
    }

    async fn list_articles(&self, blog_id: Uuid) -> Result<Vec<Article>, RepoError> {
        Ok(self.articles_of(blog_id).await)
    }

    async fn get_blog(&self, blog_id: Uuid) -> Result<Option<Blog>, RepoError> {
        Ok(self.blogs.read().await.get(&blog_id).cloned())
    }
}

#[async_trait]
impl BaseRepository<Blog, Uuid> for InMemoryContentStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, RepoError> {
        Ok(self.blogs.read().await.get(&id).cloned())
    }

    async fn save(&self, mut entity: Blog) -> Result<Blog, RepoError> {
        tracing::debug!(blog_id = %entity.id, "Saving blog");
        let mut blogs = self.blogs.write().await;
        // created_at is write-once.
        if let Some(stored) = blogs.get(&entity.id) {
            entity.created_at = stored.created_at;
        }
        blogs.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut blogs = self.blogs.write().await;
        if blogs.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }

        let mut articles = self.articles.write().await;
        let before = articles.len();
        articles.retain(|_, a| a.blog_id != id);
        tracing::debug!(
            blog_id = %id,
            removed_articles = before - articles.len(),
            "Deleted blog"
        );

        Ok(())
    }
}

#[async_trait]
impl BlogRepository for InMemoryContentStore {
    async fn list_by_recency(&self) -> Result<Vec<Blog>, RepoError> {
        Ok(self.blogs_by_recency().await)
    }
}

#[async_trait]
impl BaseRepository<Article, Uuid> for InMemoryContentStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Article>, RepoError> {
        Ok(self.articles.read().await.get(&id).cloned())
    }

    async fn save(&self, mut entity: Article) -> Result<Article, RepoError> {
        // Held until the insert so a concurrent blog delete cannot orphan it.
        let blogs = self.blogs.read().await;
        if !blogs.contains_key(&entity.blog_id) {
            return Err(RepoError::Constraint(format!(
                "blog {} does not exist",
                entity.blog_id
            )));
        }

        tracing::debug!(
            article_id = %entity.id,
            blog_id = %entity.blog_id,
            status = %entity.status,
            "Saving article"
        );
        let mut articles = self.articles.write().await;
        if let Some(stored) = articles.get(&entity.id) {
            entity.created_at = stored.created_at;
        }
        articles.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut articles = self.articles.write().await;
        articles.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl ArticleRepository for InMemoryContentStore {
    async fn find_by_blog_id(&self, blog_id: Uuid) -> Result<Vec<Article>, RepoError> {
        Ok(self.articles_of(blog_id).await)
    }
}
