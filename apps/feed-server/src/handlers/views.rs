//! Domain read models to wire DTOs.

use blogfeed_core::domain::{Article, Blog};
use blogfeed_core::feed::{ArticleSummary, BlogDetailView, Feed, FeedEntry};
use blogfeed_shared::dto::{
    ArticleResponse, ArticleSummaryResponse, BlogDetailResponse, BlogResponse, FeedEntryResponse,
    FeedResponse,
};

pub fn feed_response(feed: Feed) -> FeedResponse {
    FeedResponse {
        entries: feed.entries.into_iter().map(feed_entry_response).collect(),
    }
}

pub fn blog_detail_response(view: BlogDetailView) -> BlogDetailResponse {
    BlogDetailResponse {
        blog: blog_response(view.blog),
        articles: view.articles.into_iter().map(article_response).collect(),
    }
}

fn feed_entry_response(entry: FeedEntry) -> FeedEntryResponse {
    FeedEntryResponse {
        blog: blog_response(entry.blog),
        latest_article: entry.latest_article.map(summary_response),
    }
}

fn blog_response(blog: Blog) -> BlogResponse {
    BlogResponse {
        id: blog.id.to_string(),
        author_id: blog.author_id.to_string(),
        title: blog.title,
        description: blog.description,
        category: blog.category,
        created_at: blog.created_at.to_rfc3339(),
    }
}

fn summary_response(summary: ArticleSummary) -> ArticleSummaryResponse {
    ArticleSummaryResponse {
        title: summary.title,
        content: summary.content,
        created_at: summary.created_at.to_rfc3339(),
    }
}

fn article_response(article: Article) -> ArticleResponse {
    ArticleResponse {
        id: article.id.to_string(),
        title: article.title,
        content: article.content,
        status: article.status.to_string(),
        created_at: article.created_at.to_rfc3339(),
        updated_at: article.updated_at.to_rfc3339(),
    }
}
