//! Path parameter validation for inbound HTTP adapters.

use serde_json::json;

use crate::domain::{Error, UserRecordId};

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn invalid_integer_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a 32-bit integer")).with_details(json!({
        "field": field,
        "value": value,
        "code": "invalid_integer",
    }))
}

/// Parse a record id path segment.
pub(crate) fn parse_record_id(value: &str, field: FieldName) -> Result<UserRecordId, Error> {
    value
        .trim()
        .parse::<i32>()
        .map(UserRecordId::new)
        .map_err(|_| invalid_integer_error(field, value))
}
