use std::cmp::Ordering;

use crate::domain::{Article, Blog};

use super::view::{ArticleSummary, BlogDetailView, Feed, FeedEntry};

/// Build the home feed.
///
/// `blogs` must already be ordered newest first; that order is kept as is.
/// Each blog gets its most recent published article, or no article at all.
pub fn build_feed<I>(blogs: I) -> Feed
where
    I: IntoIterator<Item = (Blog, Vec<Article>)>,
{
    let entries = blogs
        .into_iter()
        .map(|(blog, articles)| {
            let latest_article = latest_published(&articles).map(ArticleSummary::from);
            FeedEntry {
                blog,
                latest_article,
            }
        })
        .collect();

    Feed { entries }
}

/// The newest published article. Equal timestamps resolve to the lowest id.
pub fn latest_published(articles: &[Article]) -> Option<&Article> {
    articles
        .iter()
        .filter(|a| a.is_published())
        .min_by(|a, b| newest_first(a, b).then_with(|| a.id.cmp(&b.id)))
}

/// Build the detail view of one blog: published articles only, newest
/// first, equal timestamps by descending id.
pub fn build_blog_detail(blog: Blog, articles: Vec<Article>) -> BlogDetailView {
    let mut articles: Vec<Article> = articles.into_iter().filter(Article::is_published).collect();
    articles.sort_by(|a, b| newest_first(a, b).then_with(|| b.id.cmp(&a.id)));

    BlogDetailView { blog, articles }
}

fn newest_first(a: &Article, b: &Article) -> Ordering {
    b.created_at.cmp(&a.created_at)
}
