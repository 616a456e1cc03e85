//! User directory HTTP handlers.
//!
//! ```text
//! GET    /users
//! GET    /users/{id}
//! POST   /users        {"name":"Ann","email":"ann@example.com"}
//! PUT    /users/{id}   {"name":"Ann"}
//! DELETE /users/{id}
//! ```

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{Error, User, UserDraft, UserId, UserValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::map_user_validation_error;

/// Request body for creating or replacing a user.
///
/// Unknown fields, including `id`, are ignored: the store assigns ids on
/// create and the path names the target on update.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    #[schema(example = "Ann", max_length = 64)]
    pub name: String,
    #[serde(default)]
    #[schema(example = "ann@example.com", max_length = 254)]
    pub email: Option<String>,
}

impl TryFrom<UserPayload> for UserDraft {
    type Error = UserValidationError;

    fn try_from(value: UserPayload) -> Result<Self, Self::Error> {
        UserDraft::try_from_strings(value.name, value.email)
    }
}

fn parse_draft(payload: web::Json<UserPayload>) -> ApiResult<UserDraft> {
    UserDraft::try_from(payload.into_inner()).map_err(map_user_validation_error)
}

fn user_not_found(id: UserId) -> Error {
    Error::not_found(format!("user {id} not found"))
}

fn location_for(req: &HttpRequest, id: UserId) -> String {
    format!("{}/{id}", req.path().trim_end_matches('/'))
}

/// List every user ordered by id.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [UserSchema]),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier", minimum = 1)),
    responses(
        (status = 200, description = "The user", body = UserSchema),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<UserId>,
) -> ApiResult<web::Json<User>> {
    let id = path.into_inner();
    let user = state
        .users
        .find_user(id)
        .await?
        .ok_or_else(|| user_not_found(id))?;
    Ok(web::Json(user))
}

/// Create a user; the response carries its location.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = UserSchema,
            headers(("Location" = String, description = "Path of the new user"))),
        (status = 400, description = "Invalid body", body = ErrorSchema),
        (status = 413, description = "Body too large", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Insert affected no rows", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    req: HttpRequest,
    state: web::Data<HttpState>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let draft = parse_draft(payload)?;
    let created = state.users_command.create_user(draft).await?;
    let user = created
        .user
        .ok_or_else(|| Error::internal("user insert affected no rows"))?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location_for(&req, user.id())))
        .json(user))
}

/// Replace the fields of an existing user.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier", minimum = 1)),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = UserSchema),
        (status = 400, description = "Malformed id or body", body = ErrorSchema),
        (status = 413, description = "Body too large", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<UserId>,
    payload: web::Json<UserPayload>,
) -> ApiResult<web::Json<User>> {
    let id = path.into_inner();
    let user = parse_draft(payload)?.into_user(id);
    let rows = state.users_command.update_user(user.clone()).await?;
    if !rows.is_any() {
        return Err(user_not_found(id));
    }
    Ok(web::Json(user))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier", minimum = 1)),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "No such user", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<UserId>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let rows = state.users_command.delete_user(id).await?;
    if !rows.is_any() {
        return Err(user_not_found(id));
    }
    Ok(HttpResponse::NoContent().finish())
}

/// Register every user route on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_users)
        .service(get_user)
        .service(create_user)
        .service(update_user)
        .service(delete_user);
}
