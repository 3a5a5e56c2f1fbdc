//! RPC handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

use crate::middleware::RpcError;

/// Path prefix of the blog RPC service.
pub const SERVICE_PATH: &str = "/blog.v1.BlogService";

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope(SERVICE_PATH)
                .route("/CreatePost", web::post().to(posts::create_post))
                .route("/GetPost", web::post().to(posts::get_post))
                .route("/UpdatePost", web::post().to(posts::update_post))
                .route("/DeletePost", web::post().to(posts::delete_post)),
        );
}

/// A missing or undecodable request message is an invalid argument.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| RpcError::invalid_argument(err.to_string()).into())
}
