//! Publishing workflow over stored articles.

use uuid::Uuid;

use crate::domain::Article;
use crate::error::DomainError;
use crate::ports::ArticleRepository;

/// Publish a stored article. Already published articles are returned as is.
pub async fn publish_article(
    repo: &dyn ArticleRepository,
    article_id: Uuid,
) -> Result<Article, DomainError> {
    apply(repo, article_id, Article::publish).await
}

/// Return a stored article to draft. Drafts are returned as is.
pub async fn unpublish_article(
    repo: &dyn ArticleRepository,
    article_id: Uuid,
) -> Result<Article, DomainError> {
    apply(repo, article_id, Article::unpublish).await
}

async fn apply(
    repo: &dyn ArticleRepository,
    article_id: Uuid,
    transition: fn(&mut Article) -> bool,
) -> Result<Article, DomainError> {
    let mut article = repo
        .find_by_id(article_id)
        .await?
        .ok_or_else(|| DomainError::article_not_found(article_id))?;

    if !transition(&mut article) {
        return Ok(article);
    }

    Ok(repo.save(article).await?)
}
