//! Home feed handler.

use actix_web::{HttpResponse, web};

use blogfeed_core::feed::load_feed;
use blogfeed_shared::ApiResponse;

use super::views::feed_response;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/feed
///
/// Every blog, newest first, each with its latest published article.
pub async fn get_feed(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let feed = load_feed(state.content.as_ref()).await?;
    tracing::debug!(entries = feed.len(), "Feed built");

    Ok(HttpResponse::Ok().json(ApiResponse::ok(feed_response(feed))))
}
