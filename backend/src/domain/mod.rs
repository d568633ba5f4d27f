//! Domain primitives, services, and ports.
//!
//! Purpose: define the user record model, its validation rules, and the
//! services that drive persistence and address resolution. Transport and
//! storage concerns stay behind the traits in [`ports`].

pub mod address_resolver_service;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user_record;
pub mod user_record_service;

pub use self::address_resolver_service::AddressResolverService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user_record::{
    ADDRESS_MAX, ADDRESS_MIN, Coordinates, CoordinatesValidationError, DESCRIPTION_MAX,
    DESCRIPTION_MIN, FieldViolation, NAME_MAX, NAME_MIN, UserField, UserFields, UserInput,
    UserRecord, UserRecordError, UserRecordId, ViolationKind, parse_date_of_birth,
};
pub use self::user_record_service::UserRecordService;
