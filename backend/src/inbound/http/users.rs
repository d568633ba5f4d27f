//! User record API handlers.
//!
//! ```text
//! GET    /api/v1/users
//! GET    /api/v1/users/{id}
//! POST   /api/v1/users {"name":"Stephen Buttigieg","dob":"1988-03-21",...}
//! PATCH  /api/v1/users/{id}
//! DELETE /api/v1/users/{id}
//! GET    /api/v1/users/{id}/address
//! GET    /api/v1/users/address/{id}
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, web};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{Coordinates, Error, UserField, UserInput, UserRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_record_id};

const ID_FIELD: FieldName = FieldName::new("id");

/// Create or full-replacement payload.
///
/// Missing fields are treated as empty and non-string values are flagged;
/// both are reported by validation rather than rejected while parsing.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRecordRequest {
    #[schema(value_type = Option<String>, example = "Stephen Buttigieg")]
    pub name: Option<Value>,
    /// Calendar date, `YYYY-MM-DD`. Also accepted as `dob`.
    #[serde(alias = "dob")]
    #[schema(value_type = Option<String>, example = "1988-03-21")]
    pub date_of_birth: Option<Value>,
    #[schema(value_type = Option<String>, example = "4, Triq-Klin Mgarr, MGR2241, Malta")]
    pub address: Option<Value>,
    #[schema(value_type = Option<String>, example = "Full stack developer")]
    pub description: Option<Value>,
}

fn text_field(value: Option<Value>, field: UserField, mistyped: &mut Vec<UserField>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(_) => {
            mistyped.push(field);
            String::new()
        }
    }
}

impl From<UserRecordRequest> for UserInput {
    fn from(value: UserRecordRequest) -> Self {
        let mut mistyped = Vec::new();
        let name = text_field(value.name, UserField::Name, &mut mistyped);
        let date_of_birth = text_field(value.date_of_birth, UserField::DateOfBirth, &mut mistyped);
        let address = text_field(value.address, UserField::Address, &mut mistyped);
        let description = text_field(value.description, UserField::Description, &mut mistyped);
        Self {
            name,
            date_of_birth,
            address,
            description,
            mistyped,
        }
    }
}

/// Stored user record.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRecordResponse {
    #[schema(example = 1)]
    pub id: i32,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub address: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRecord> for UserRecordResponse {
    fn from(record: UserRecord) -> Self {
        let UserRecord {
            id,
            fields,
            created_at,
            updated_at,
        } = record;
        Self {
            id: id.get(),
            name: fields.name().to_owned(),
            date_of_birth: fields.date_of_birth(),
            address: fields.address().to_owned(),
            description: fields.description().to_owned(),
            created_at,
            updated_at,
        }
    }
}

/// GeoJSON point, `[longitude, latitude]`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PointResponse {
    #[serde(rename = "type")]
    #[schema(example = "Point")]
    pub geometry_type: String,
    #[schema(value_type = Vec<f64>, example = json!([14.36639, 35.91972]))]
    pub coordinates: [f64; 2],
}

impl From<Coordinates> for PointResponse {
    fn from(value: Coordinates) -> Self {
        Self {
            geometry_type: "Point".to_owned(),
            coordinates: value.as_lon_lat(),
        }
    }
}

/// List every user record ordered by id.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "User records", body = [UserRecordResponse]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<UserRecordResponse>>> {
    let records = state.records.list_all().await?;
    Ok(web::Json(records.into_iter().map(Into::into).collect()))
}

/// Fetch one user record.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = i32, Path, description = "User record id")),
    responses(
        (status = 200, description = "User record", body = UserRecordResponse),
        (status = 400, description = "Invalid id", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserRecordResponse>> {
    let id = parse_record_id(&path, ID_FIELD)?;
    let record = state.records.get_by_id(id).await?;
    Ok(web::Json(record.into()))
}

/// Create a user record.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = UserRecordRequest,
    responses(
        (status = 201, description = "Created", body = UserRecordResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRecordRequest>,
) -> ApiResult<HttpResponse> {
    let record = state
        .records_command
        .create(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(UserRecordResponse::from(record)))
}

/// Replace the mutable fields of a user record.
#[utoipa::path(
    patch,
    path = "/api/v1/users/{id}",
    params(("id" = i32, Path, description = "User record id")),
    request_body = UserRecordRequest,
    responses(
        (status = 200, description = "Updated", body = UserRecordResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[patch("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserRecordRequest>,
) -> ApiResult<web::Json<UserRecordResponse>> {
    let id = parse_record_id(&path, ID_FIELD)?;
    let record = state
        .records_command
        .update(id, payload.into_inner().into())
        .await?;
    Ok(web::Json(record.into()))
}

/// Delete a user record.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = i32, Path, description = "User record id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Invalid id", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_record_id(&path, ID_FIELD)?;
    state.records_command.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

async fn resolve(state: &HttpState, raw_id: &str) -> ApiResult<web::Json<PointResponse>> {
    let id = parse_record_id(raw_id, ID_FIELD)?;
    let coordinates = state.addresses.resolve_address(id).await?;
    Ok(web::Json(coordinates.into()))
}

/// Geocode the stored address of a user record.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}/address",
    params(("id" = i32, Path, description = "User record id")),
    responses(
        (status = 200, description = "Resolved point", body = PointResponse),
        (status = 400, description = "Invalid id", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 502, description = "Geocoding provider failed", body = Error)
    ),
    tags = ["users"],
    operation_id = "resolveUserAddress"
)]
#[get("/users/{id}/address")]
pub async fn resolve_user_address(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<PointResponse>> {
    resolve(&state, &path).await
}

/// Legacy path for [`resolve_user_address`].
#[utoipa::path(
    get,
    path = "/api/v1/users/address/{id}",
    params(("id" = i32, Path, description = "User record id")),
    responses(
        (status = 200, description = "Resolved point", body = PointResponse),
        (status = 400, description = "Invalid id", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 502, description = "Geocoding provider failed", body = Error)
    ),
    tags = ["users"],
    operation_id = "resolveUserAddressLegacy"
)]
#[get("/users/address/{id}")]
pub async fn resolve_user_address_legacy(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<PointResponse>> {
    resolve(&state, &path).await
}

/// Register every user record handler on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_users)
        .service(create_user)
        .service(resolve_user_address_legacy)
        .service(resolve_user_address)
        .service(get_user)
        .service(update_user)
        .service(delete_user);
}

#[cfg(test)]
mod tests;
