//! Field rules for [`UserInput`].
//!
//! Every rule is checked independently so callers receive one violation per
//! broken rule rather than only the first.

use std::fmt;

use chrono::{DateTime, NaiveDate};
use serde::Serialize;

use super::{UserFields, UserInput};

pub const NAME_MIN: usize = 5;
pub const NAME_MAX: usize = 30;
pub const ADDRESS_MIN: usize = 5;
pub const ADDRESS_MAX: usize = 100;
pub const DESCRIPTION_MIN: usize = 5;
pub const DESCRIPTION_MAX: usize = 100;

/// Input field a violation refers to, named as clients send it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UserField {
    Name,
    DateOfBirth,
    Address,
    Description,
}

impl UserField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::DateOfBirth => "dateOfBirth",
            Self::Address => "address",
            Self::Description => "description",
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule that a field broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// Blank or whitespace-only value.
    Required,
    TooShort { min: usize },
    TooLong { max: usize },
    /// Not a calendar date in `YYYY-MM-DD` or RFC 3339 form.
    InvalidDate,
    /// Supplied as something other than a string.
    NotAString,
}

impl ViolationKind {
    /// Stable machine-readable code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::TooShort { .. } => "too_short",
            Self::TooLong { .. } => "too_long",
            Self::InvalidDate => "invalid_date",
            Self::NotAString => "not_string",
        }
    }
}

/// One broken rule on one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldViolation {
    pub field: UserField,
    pub kind: ViolationKind,
}

impl FieldViolation {
    pub const fn new(field: UserField, kind: ViolationKind) -> Self {
        Self { field, kind }
    }

    /// Human-readable explanation.
    pub fn message(&self) -> String {
        match self.kind {
            ViolationKind::Required => format!("{} should not be empty", self.field),
            ViolationKind::TooShort { min } => format!("Minimum length is {min} characters"),
            ViolationKind::TooLong { max } => format!("Maximum length is {max} characters"),
            ViolationKind::InvalidDate => format!("{} must be a valid date", self.field),
            ViolationKind::NotAString => format!("{} must be a string", self.field),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message())
    }
}

/// Parse a calendar date given as `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use profile_registry::domain::parse_date_of_birth;
///
/// let expected = NaiveDate::from_ymd_opt(1988, 3, 21);
/// assert_eq!(parse_date_of_birth("1988-03-21"), expected);
/// assert_eq!(parse_date_of_birth("1988-03-21T00:00:00Z"), expected);
/// assert_eq!(parse_date_of_birth("1988-02-30"), None);
/// ```
pub fn parse_date_of_birth(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

fn check_length(
    field: UserField,
    value: &str,
    min: usize,
    max: usize,
    violations: &mut Vec<FieldViolation>,
) {
    if value.trim().is_empty() {
        violations.push(FieldViolation::new(field, ViolationKind::Required));
    }
    let length = value.chars().count();
    if length < min {
        violations.push(FieldViolation::new(field, ViolationKind::TooShort { min }));
    }
    if length > max {
        violations.push(FieldViolation::new(field, ViolationKind::TooLong { max }));
    }
}

fn check_text(
    input: &UserInput,
    field: UserField,
    value: &str,
    (min, max): (usize, usize),
    violations: &mut Vec<FieldViolation>,
) {
    if input.is_mistyped(field) {
        violations.push(FieldViolation::new(field, ViolationKind::NotAString));
    } else {
        check_length(field, value, min, max, violations);
    }
}

fn check_date_of_birth(
    input: &UserInput,
    violations: &mut Vec<FieldViolation>,
) -> Option<NaiveDate> {
    let field = UserField::DateOfBirth;
    if input.is_mistyped(field) {
        violations.push(FieldViolation::new(field, ViolationKind::NotAString));
        return None;
    }
    if input.date_of_birth.trim().is_empty() {
        violations.push(FieldViolation::new(field, ViolationKind::Required));
    }
    let parsed = parse_date_of_birth(&input.date_of_birth);
    if parsed.is_none() {
        violations.push(FieldViolation::new(field, ViolationKind::InvalidDate));
    }
    parsed
}

pub(super) fn validate(input: &UserInput) -> Result<UserFields, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    check_text(
        input,
        UserField::Name,
        &input.name,
        (NAME_MIN, NAME_MAX),
        &mut violations,
    );
    let date_of_birth = check_date_of_birth(input, &mut violations);
    check_text(
        input,
        UserField::Address,
        &input.address,
        (ADDRESS_MIN, ADDRESS_MAX),
        &mut violations,
    );
    check_text(
        input,
        UserField::Description,
        &input.description,
        (DESCRIPTION_MIN, DESCRIPTION_MAX),
        &mut violations,
    );

    match date_of_birth {
        Some(date_of_birth) if violations.is_empty() => Ok(UserFields {
            name: input.name.clone(),
            date_of_birth,
            address: input.address.clone(),
            description: input.description.clone(),
        }),
        _ => Err(violations),
    }
}
