use uuid::Uuid;

use crate::error::DomainError;
use crate::ports::ContentStore;

use super::builder::{build_blog_detail, build_feed};
use super::view::{BlogDetailView, Feed};

/// Fetch every blog with its articles and build the home feed.
pub async fn load_feed(store: &dyn ContentStore) -> Result<Feed, DomainError> {
    let blogs = store.list_blogs_by_recency().await?;

    let mut content = Vec::with_capacity(blogs.len());
    for blog in blogs {
        let articles = store.list_articles(blog.id).await?;
        content.push((blog, articles));
    }

    Ok(build_feed(content))
}

/// Fetch one blog and build its detail view.
pub async fn load_blog_detail(
    store: &dyn ContentStore,
    blog_id: Uuid,
) -> Result<BlogDetailView, DomainError> {
    let blog = store
        .get_blog(blog_id)
        .await?
        .ok_or_else(|| DomainError::blog_not_found(blog_id))?;
    let articles = store.list_articles(blog.id).await?;

    Ok(build_blog_detail(blog, articles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Article, Blog};
    use crate::error::RepoError;
    use async_trait::async_trait;

    /// Fixed snapshot; optionally fails every article query.
    struct StubStore {
        blogs: Vec<Blog>,
        articles: Vec<Article>,
        broken: bool,
    }

    #[async_trait]
    impl ContentStore for StubStore {
        async fn list_blogs_by_recency(&self) -> Result<Vec<Blog>, RepoError> {
            Ok(self.blogs.clone())
        }

        async fn list_articles(&self, blog_id: Uuid) -> Result<Vec<Article>, RepoError> {
            if self.broken {
                return Err(RepoError::Connection("connection reset".to_string()));
            }
            Ok(self
                .articles
                .iter()
                .filter(|a| a.blog_id == blog_id)
                .cloned()
                .collect())
        }

        async fn get_blog(&self, blog_id: Uuid) -> Result<Option<Blog>, RepoError> {
            Ok(self.blogs.iter().find(|b| b.id == blog_id).cloned())
        }
    }

    fn fixture() -> StubStore {
        let author = Uuid::new_v4();
        let newer = Blog::new(author, "newer", "d", "c").unwrap();
        let older = Blog::new(author, "older", "d", "c").unwrap();

        let mut published = Article::new(newer.id, "Hello", "world");
        published.publish();
        let draft = Article::new(newer.id, "Draft", "hidden");
        let other = Article::new(older.id, "Other draft", "hidden");

        StubStore {
            blogs: vec![newer, older],
            articles: vec![published, draft, other],
            broken: false,
        }
    }

    #[tokio::test]
    async fn feed_follows_store_order() {
        let store = fixture();

        let feed = load_feed(&store).await.unwrap();

        let titles: Vec<&str> = feed.entries.iter().map(|e| e.blog.title.as_str()).collect();
        assert_eq!(titles, ["newer", "older"]);
        assert_eq!(
            feed.entries[0].latest_article.as_ref().map(|a| a.title.as_str()),
            Some("Hello")
        );
        assert!(feed.entries[1].latest_article.is_none());
    }

    #[tokio::test]
    async fn detail_hides_drafts() {
        let store = fixture();
        let id = store.blogs[0].id;

        let view = load_blog_detail(&store, id).await.unwrap();

        assert_eq!(view.blog.id, id);
        assert_eq!(view.articles.len(), 1);
        assert_eq!(view.articles[0].title, "Hello");
    }

    #[tokio::test]
    async fn unknown_blog_is_not_found() {
        let store = fixture();
        let missing = Uuid::new_v4();

        let err = load_blog_detail(&store, missing).await.unwrap_err();

        assert!(matches!(
            err,
            DomainError::NotFound { entity_type: "Blog", id } if id == missing
        ));
    }

    #[tokio::test]
    async fn store_failures_propagate() {
        let mut store = fixture();
        store.broken = true;

        let err = load_feed(&store).await.unwrap_err();

        assert!(matches!(err, DomainError::Store(RepoError::Connection(_))));
    }
}
