//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every user record and health endpoint together with
//! the request, response, and error schemas. The document backs Swagger UI in
//! debug builds and is exported via `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::users::{PointResponse, UserRecordRequest, UserRecordResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Profile registry API",
        description = "Create, read, update, and delete user profiles and resolve their postal addresses to coordinates."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::users::resolve_user_address,
        crate::inbound::http::users::resolve_user_address_legacy,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserRecordRequest,
        UserRecordResponse,
        PointResponse,
        Error,
        ErrorCode
    )),
    tags(
        (name = "users", description = "User record lifecycle and address lookup"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
