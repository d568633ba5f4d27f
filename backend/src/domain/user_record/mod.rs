//! User record aggregate: identifiers, the persisted record, and the
//! unvalidated input used to create or replace one.
//!
//! A [`UserRecord`] is only ever built from [`UserFields`], which in turn can
//! only be obtained by validating a [`UserInput`]. Adapters reconstructing
//! records from storage go through [`UserFields::from_trusted_parts`].

mod coordinates;
mod error;
mod validation;

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

pub use self::coordinates::{Coordinates, CoordinatesValidationError};
pub use self::error::UserRecordError;
pub use self::validation::{
    ADDRESS_MAX, ADDRESS_MIN, DESCRIPTION_MAX, DESCRIPTION_MIN, FieldViolation, NAME_MAX,
    NAME_MIN, UserField, ViolationKind, parse_date_of_birth,
};

/// Store-assigned identifier of a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserRecordId(i32);

impl UserRecordId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for UserRecordId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserRecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unvalidated mutation payload for create and full-replacement update.
///
/// Fields are kept as raw strings so every rule violation can be reported,
/// including a date of birth that does not parse. Fields the caller supplied
/// as a non-string value are listed in `mistyped` and left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserInput {
    pub name: String,
    pub date_of_birth: String,
    pub address: String,
    pub description: String,
    pub mistyped: Vec<UserField>,
}

impl UserInput {
    /// Whether `field` arrived as something other than a string.
    pub fn is_mistyped(&self, field: UserField) -> bool {
        self.mistyped.contains(&field)
    }

    /// Check every field rule, returning the validated fields or all
    /// violations found.
    ///
    /// # Examples
    /// ```
    /// use profile_registry::domain::UserInput;
    ///
    /// let input = UserInput {
    ///     name: "Stephen Buttigieg".to_owned(),
    ///     date_of_birth: "1988-03-21".to_owned(),
    ///     address: "4, Triq-Klin Mgarr, MGR2241, Malta".to_owned(),
    ///     description: "Full stack developer".to_owned(),
    ///     ..UserInput::default()
    /// };
    /// let fields = input.validate().expect("valid input");
    /// assert_eq!(fields.name(), "Stephen Buttigieg");
    /// ```
    pub fn validate(&self) -> Result<UserFields, Vec<FieldViolation>> {
        validation::validate(self)
    }
}

/// The four mutable fields of a record, known to satisfy the field rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    name: String,
    date_of_birth: NaiveDate,
    address: String,
    description: String,
}

impl UserFields {
    /// Rebuild fields from storage, where the rules were enforced on write.
    pub fn from_trusted_parts(
        name: impl Into<String>,
        date_of_birth: NaiveDate,
        address: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date_of_birth,
            address: address.into(),
            description: description.into(),
        }
    }

    /// Display name, 5 to 30 characters.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Calendar date of birth.
    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// Free-form postal address used as the geocoding query.
    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    /// Profile description, 5 to 100 characters.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
}

/// Persisted user profile.
///
/// ## Invariants
/// - `id` and `created_at` never change after creation.
/// - `updated_at` is never earlier than `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserRecordId,
    pub fields: UserFields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// Address used for geocoding lookups.
    pub fn address(&self) -> &str {
        self.fields.address()
    }
}

#[cfg(test)]
mod tests;
