//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod state;
pub mod users;
pub mod validation;

use actix_web::web;

pub use error::{ApiResult, json_error_handler};

/// JSON extractor configuration rendering body errors as `invalid_request`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(16 * 1024)
        .error_handler(json_error_handler)
}

/// Mount the versioned API under `/api/v1`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use profile_registry::inbound::http::api_v1;
///
/// let app = App::new().configure(api_v1);
/// ```
pub fn api_v1(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(json_config())
            .configure(users::configure),
    );
}
