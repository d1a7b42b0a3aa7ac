//! Blog page handler.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blogfeed_core::feed::load_blog_detail;
use blogfeed_shared::ApiResponse;

use super::views::blog_detail_response;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/blogs/{blog_id}
pub async fn get_blog(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let blog_id = path.into_inner();
    let view = load_blog_detail(state.content.as_ref(), blog_id).await?;
    tracing::debug!(blog_id = %blog_id, articles = view.articles.len(), "Blog detail built");

    Ok(HttpResponse::Ok().json(ApiResponse::ok(blog_detail_response(view))))
}
