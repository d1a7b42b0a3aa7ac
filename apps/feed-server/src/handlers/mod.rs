//! HTTP handlers and route configuration.

mod blogs;
mod feed;
mod health;
mod views;

use actix_web::web;

use crate::middleware::error::path_error_handler;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .route("/feed", web::get().to(feed::get_feed))
                .route("/blogs/{blog_id}", web::get().to(blogs::get_blog)),
        );
}
