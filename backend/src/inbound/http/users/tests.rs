//! Handler tests for the user record endpoints.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use chrono::{NaiveDate, TimeZone, Utc};
use mockall::predicate::eq;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockAddressLookup, MockUserRecordsCommand, MockUserRecordsQuery};
use crate::domain::{
    FieldViolation, UserField, UserFields, UserRecordError, UserRecordId, ViolationKind,
};
use crate::inbound::http::api_v1;

fn stored_record(id: i32) -> UserRecord {
    let at = Utc
        .with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp");
    UserRecord {
        id: UserRecordId::new(id),
        fields: UserFields::from_trusted_parts(
            "Stephen Buttigieg",
            NaiveDate::from_ymd_opt(1988, 3, 21).expect("valid date"),
            "4, Triq-Klin Mgarr, MGR2241, Malta",
            "Full stack developer",
        ),
        created_at: at,
        updated_at: at,
    }
}

struct Mocks {
    query: MockUserRecordsQuery,
    command: MockUserRecordsCommand,
    addresses: MockAddressLookup,
}

impl Mocks {
    fn new() -> Self {
        Self {
            query: MockUserRecordsQuery::new(),
            command: MockUserRecordsCommand::new(),
            addresses: MockAddressLookup::new(),
        }
    }

    fn into_state(self) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(
            Arc::new(self.query),
            Arc::new(self.command),
            Arc::new(self.addresses),
        ))
    }
}

async fn call(mocks: Mocks, request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(
        App::new()
            .app_data(mocks.into_state())
            .configure(api_v1),
    )
    .await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("JSON body")
    };
    (status, value)
}

#[actix_web::test]
async fn list_returns_camel_case_records() {
    let mut mocks = Mocks::new();
    mocks
        .query
        .expect_list_all()
        .times(1)
        .return_once(|| Ok(vec![stored_record(1), stored_record(2)]));

    let (status, body) = call(mocks, actix_test::TestRequest::get().uri("/api/v1/users")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], json!(1));
    assert_eq!(body[0]["dateOfBirth"], json!("1988-03-21"));
    assert_eq!(body[0]["createdAt"], json!("2026-03-01T09:00:00Z"));
    assert_eq!(body[1]["id"], json!(2));
}

#[actix_web::test]
async fn create_accepts_dob_alias_and_returns_201() {
    let mut mocks = Mocks::new();
    mocks
        .command
        .expect_create()
        .withf(|input| input.date_of_birth == "1988-03-21" && input.name == "Stephen Buttigieg")
        .times(1)
        .return_once(|_| Ok(stored_record(1)));

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({
            "name": "Stephen Buttigieg",
            "dob": "1988-03-21",
            "address": "4, Triq-Klin Mgarr, MGR2241, Malta",
            "description": "Full stack developer",
        }));
    let (status, body) = call(mocks, request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], json!(1));
    assert_eq!(body["name"], json!("Stephen Buttigieg"));
}

#[actix_web::test]
async fn missing_fields_reach_validation_as_empty() {
    let mut mocks = Mocks::new();
    mocks
        .command
        .expect_create()
        .withf(|input| input.address.is_empty() && input.description.is_empty())
        .times(1)
        .return_once(|_| {
            Err(UserRecordError::validation_failed(vec![FieldViolation::new(
                UserField::Address,
                ViolationKind::Required,
            )]))
        });

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({ "name": "Stephen Buttigieg", "dateOfBirth": "1988-03-21" }));
    let (status, body) = call(mocks, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("invalid_request"));
    assert_eq!(
        body["details"]["violations"][0],
        json!({ "field": "address", "code": "required", "message": "address should not be empty" })
    );
}

#[actix_web::test]
async fn malformed_json_is_invalid_request() {
    let mut mocks = Mocks::new();
    mocks.command.expect_create().never();

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/users")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ");
    let (status, body) = call(mocks, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("invalid_request"));
}

#[rstest]
#[case("/api/v1/users/abc")]
#[case("/api/v1/users/9999999999")]
#[actix_web::test]
async fn non_integer_ids_are_rejected(#[case] uri: &str) {
    let mut mocks = Mocks::new();
    mocks.query.expect_get_by_id().never();

    let (status, body) = call(mocks, actix_test::TestRequest::get().uri(uri)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["code"], json!("invalid_integer"));
}

#[actix_web::test]
async fn missing_record_is_404() {
    let mut mocks = Mocks::new();
    mocks
        .query
        .expect_get_by_id()
        .with(eq(UserRecordId::new(42)))
        .times(1)
        .return_once(|id| Err(UserRecordError::not_found(id)));

    let (status, body) = call(mocks, actix_test::TestRequest::get().uri("/api/v1/users/42")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], json!("not_found"));
    assert_eq!(body["message"], json!("user 42 not found"));
}

#[actix_web::test]
async fn update_passes_id_and_input() {
    let mut mocks = Mocks::new();
    mocks
        .command
        .expect_update()
        .withf(|id, input| id.get() == 3 && input.description == "Backend developer")
        .times(1)
        .return_once(|id, _| Ok(stored_record(id.get())));

    let request = actix_test::TestRequest::patch()
        .uri("/api/v1/users/3")
        .set_json(json!({
            "name": "Stephen Buttigieg",
            "dateOfBirth": "1988-03-21",
            "address": "4, Triq-Klin Mgarr, MGR2241, Malta",
            "description": "Backend developer",
        }));
    let (status, body) = call(mocks, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], json!(3));
}

#[rstest]
#[case(Ok(()), StatusCode::NO_CONTENT)]
#[case(Err(UserRecordError::not_found(UserRecordId::new(8))), StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn delete_maps_outcome(
    #[case] outcome: Result<(), UserRecordError>,
    #[case] expected: StatusCode,
) {
    let mut mocks = Mocks::new();
    mocks
        .command
        .expect_delete()
        .with(eq(UserRecordId::new(8)))
        .times(1)
        .return_once(move |_| outcome);

    let (status, _) = call(mocks, actix_test::TestRequest::delete().uri("/api/v1/users/8")).await;

    assert_eq!(status, expected);
}

#[actix_web::test]
async fn storage_failures_are_redacted() {
    let mut mocks = Mocks::new();
    mocks
        .query
        .expect_list_all()
        .return_once(|| Err(UserRecordError::storage_failure("connection refused")));

    let (status, body) = call(mocks, actix_test::TestRequest::get().uri("/api/v1/users")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], json!("internal_error"));
    assert_eq!(body["message"], json!("Internal server error"));
}

#[rstest]
#[case("/api/v1/users/1/address")]
#[case("/api/v1/users/address/1")]
#[actix_web::test]
async fn address_routes_return_point(#[case] uri: &str) {
    let mut mocks = Mocks::new();
    mocks
        .addresses
        .expect_resolve_address()
        .with(eq(UserRecordId::new(1)))
        .times(1)
        .return_once(|_| Ok(Coordinates::new(14.36639, 35.91972).expect("valid point")));

    let (status, body) = call(mocks, actix_test::TestRequest::get().uri(uri)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "type": "Point", "coordinates": [14.36639, 35.91972] })
    );
}

#[actix_web::test]
async fn lookup_failures_are_bad_gateway() {
    let mut mocks = Mocks::new();
    mocks
        .addresses
        .expect_resolve_address()
        .return_once(|_| Err(UserRecordError::lookup_failed("geocoding timeout: deadline")));

    let (status, body) =
        call(mocks, actix_test::TestRequest::get().uri("/api/v1/users/1/address")).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], json!("lookup_failed"));
    assert_eq!(
        body["message"],
        json!("address lookup failed: geocoding timeout: deadline")
    );
}

#[actix_web::test]
async fn non_string_fields_reach_validation_as_mistyped() {
    let mut mocks = Mocks::new();
    mocks
        .command
        .expect_create()
        .withf(|input| {
            input.mistyped == vec![UserField::Name, UserField::Description]
                && input.name.is_empty()
                && input.date_of_birth == "1988-03-21"
        })
        .times(1)
        .return_once(|_| {
            Err(UserRecordError::validation_failed(vec![FieldViolation::new(
                UserField::Name,
                ViolationKind::NotAString,
            )]))
        });

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({
            "name": 12345,
            "dob": "1988-03-21",
            "address": "4, Triq-Klin Mgarr, MGR2241, Malta",
            "description": ["Full stack developer"],
        }));
    let (status, body) = call(mocks, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["details"]["violations"][0],
        json!({ "field": "name", "code": "not_string", "message": "name must be a string" })
    );
}
