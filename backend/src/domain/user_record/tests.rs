//! Tests for user input validation and the record error mapping.

use super::*;
use crate::domain::{Error, ErrorCode};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn valid_input() -> UserInput {
    UserInput {
        name: "Stephen Buttigieg".to_owned(),
        date_of_birth: "1988-03-21".to_owned(),
        address: "4, Triq-Klin Mgarr, MGR2241, Malta".to_owned(),
        description: "Full stack developer".to_owned(),
        ..UserInput::default()
    }
}

fn kinds_for(violations: &[FieldViolation], field: UserField) -> Vec<ViolationKind> {
    violations
        .iter()
        .filter(|violation| violation.field == field)
        .map(|violation| violation.kind)
        .collect()
}

#[rstest]
fn valid_input_produces_fields(valid_input: UserInput) {
    let fields = valid_input.validate().expect("valid input");
    assert_eq!(fields.name(), "Stephen Buttigieg");
    assert_eq!(
        fields.date_of_birth(),
        NaiveDate::from_ymd_opt(1988, 3, 21).expect("valid date")
    );
    assert_eq!(fields.address(), "4, Triq-Klin Mgarr, MGR2241, Malta");
    assert_eq!(fields.description(), "Full stack developer");
}

#[rstest]
#[case("abcde")]
#[case("a".repeat(NAME_MAX))]
#[case("ÉÉÉÉÉ")]
fn name_length_bounds_are_inclusive(mut valid_input: UserInput, #[case] name: String) {
    valid_input.name = name;
    assert!(valid_input.validate().is_ok());
}

#[rstest]
#[case("abcd", ViolationKind::TooShort { min: NAME_MIN })]
#[case("a".repeat(NAME_MAX + 1), ViolationKind::TooLong { max: NAME_MAX })]
fn name_out_of_bounds_is_rejected(
    mut valid_input: UserInput,
    #[case] name: String,
    #[case] expected: ViolationKind,
) {
    valid_input.name = name;
    let violations = valid_input.validate().expect_err("invalid name");
    assert_eq!(violations, vec![FieldViolation::new(UserField::Name, expected)]);
}

#[rstest]
#[case("a".repeat(ADDRESS_MAX + 1), UserField::Address)]
#[case("d".repeat(DESCRIPTION_MAX + 1), UserField::Description)]
fn long_text_fields_are_rejected(
    mut valid_input: UserInput,
    #[case] value: String,
    #[case] field: UserField,
) {
    match field {
        UserField::Address => valid_input.address = value,
        _ => valid_input.description = value,
    }
    let violations = valid_input.validate().expect_err("too long");
    assert_eq!(kinds_for(&violations, field).len(), 1);
    assert_eq!(violations[0].kind.code(), "too_long");
}

#[rstest]
#[case("1988-02-30")]
#[case("21/03/1988")]
#[case("not a date")]
fn invalid_dates_are_rejected(mut valid_input: UserInput, #[case] raw: &str) {
    valid_input.date_of_birth = raw.to_owned();
    let violations = valid_input.validate().expect_err("invalid date");
    assert_eq!(
        violations,
        vec![FieldViolation::new(
            UserField::DateOfBirth,
            ViolationKind::InvalidDate
        )]
    );
}

#[rstest]
fn rfc3339_date_of_birth_is_truncated_to_date(mut valid_input: UserInput) {
    valid_input.date_of_birth = "1988-03-21T10:30:00Z".to_owned();
    let fields = valid_input.validate().expect("valid timestamp");
    assert_eq!(
        fields.date_of_birth(),
        NaiveDate::from_ymd_opt(1988, 3, 21).expect("valid date")
    );
}

#[rstest]
fn empty_input_reports_every_broken_rule() {
    let violations = UserInput::default().validate().expect_err("empty input");

    assert_eq!(
        kinds_for(&violations, UserField::Name),
        vec![
            ViolationKind::Required,
            ViolationKind::TooShort { min: NAME_MIN }
        ]
    );
    assert_eq!(
        kinds_for(&violations, UserField::DateOfBirth),
        vec![ViolationKind::Required, ViolationKind::InvalidDate]
    );
    assert_eq!(kinds_for(&violations, UserField::Address).len(), 2);
    assert_eq!(kinds_for(&violations, UserField::Description).len(), 2);
    assert_eq!(violations.len(), 8);
}

#[rstest]
fn whitespace_only_counts_as_blank(mut valid_input: UserInput) {
    valid_input.description = "       ".to_owned();
    let violations = valid_input.validate().expect_err("blank description");
    assert_eq!(
        violations,
        vec![FieldViolation::new(
            UserField::Description,
            ViolationKind::Required
        )]
    );
}

#[rstest]
fn mistyped_fields_are_reported_with_other_violations(mut valid_input: UserInput) {
    valid_input.name = String::new();
    valid_input.date_of_birth = "nope".to_owned();
    valid_input.address = "ab".to_owned();
    valid_input.mistyped = vec![UserField::Name];

    let violations = valid_input.validate().expect_err("invalid input");
    assert_eq!(
        violations,
        vec![
            FieldViolation::new(UserField::Name, ViolationKind::NotAString),
            FieldViolation::new(UserField::DateOfBirth, ViolationKind::InvalidDate),
            FieldViolation::new(
                UserField::Address,
                ViolationKind::TooShort { min: ADDRESS_MIN }
            ),
        ]
    );
}

#[rstest]
fn mistyped_date_of_birth_skips_date_parsing(mut valid_input: UserInput) {
    valid_input.date_of_birth = String::new();
    valid_input.mistyped = vec![UserField::DateOfBirth];

    let violations = valid_input.validate().expect_err("mistyped date");
    assert_eq!(
        violations,
        vec![FieldViolation::new(
            UserField::DateOfBirth,
            ViolationKind::NotAString
        )]
    );
}

#[rstest]
#[case(ViolationKind::TooShort { min: 5 }, "Minimum length is 5 characters")]
#[case(ViolationKind::TooLong { max: 30 }, "Maximum length is 30 characters")]
#[case(ViolationKind::Required, "name should not be empty")]
#[case(ViolationKind::NotAString, "name must be a string")]
fn violation_messages_are_readable(#[case] kind: ViolationKind, #[case] expected: &str) {
    assert_eq!(FieldViolation::new(UserField::Name, kind).message(), expected);
}

#[rstest]
fn validation_failure_maps_to_invalid_request_with_violations() {
    let error: Error = UserRecordError::validation_failed(vec![FieldViolation::new(
        UserField::Name,
        ViolationKind::TooShort { min: NAME_MIN },
    )])
    .into();

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        error.details(),
        Some(&json!({
            "violations": [{
                "field": "name",
                "code": "too_short",
                "message": "Minimum length is 5 characters",
            }]
        }))
    );
}

#[rstest]
#[case(UserRecordError::not_found(UserRecordId::new(7)), ErrorCode::NotFound, "user 7 not found")]
#[case(
    UserRecordError::storage_failure("pool exhausted"),
    ErrorCode::InternalError,
    "storage failure: pool exhausted"
)]
#[case(
    UserRecordError::lookup_failed("provider returned 401"),
    ErrorCode::LookupFailed,
    "address lookup failed: provider returned 401"
)]
fn record_errors_map_to_payload_codes(
    #[case] error: UserRecordError,
    #[case] code: ErrorCode,
    #[case] message: &str,
) {
    let payload: Error = error.into();
    assert_eq!(payload.code(), code);
    assert_eq!(payload.message(), message);
}

#[rstest]
fn coordinates_reject_out_of_range_values() {
    assert!(matches!(
        Coordinates::new(181.0, 0.0),
        Err(CoordinatesValidationError::Longitude(_))
    ));
    assert!(matches!(
        Coordinates::new(0.0, f64::NAN),
        Err(CoordinatesValidationError::Latitude(_))
    ));
}
