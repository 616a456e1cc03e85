//! OpenAPI documentation.
//!
//! [`ApiDoc`] registers the user and health endpoints together with the
//! schema wrappers from `inbound::http::schemas`, so domain types never
//! depend on utoipa. Swagger UI serves it in debug builds and the
//! `openapi-dump` binary prints it.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, UserSchema};
use crate::inbound::http::users::UserPayload;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User directory API",
        description = "CRUD access to users plus health probes."
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
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserSchema, UserPayload, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "users", description = "User directory operations"),
        (name = "health", description = "Orchestration probes")
    )
)]
pub struct ApiDoc;
