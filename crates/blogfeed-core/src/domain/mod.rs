//! Domain entities - the core business objects.

mod article;
mod blog;

pub use article::{Article, ArticleStatus};
pub use blog::Blog;
