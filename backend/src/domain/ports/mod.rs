//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports ([`UserRecordRepository`], [`GeocodingProvider`]) are
//! implemented by outbound adapters. Driving ports ([`UserRecordsQuery`],
//! [`UserRecordsCommand`], [`AddressLookup`]) are implemented by domain
//! services and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod address_lookup;
mod geocoding_provider;
mod user_record_repository;
mod user_records_command;
mod user_records_query;

pub use address_lookup::AddressLookup;
#[cfg(test)]
pub use address_lookup::MockAddressLookup;
#[cfg(test)]
pub use geocoding_provider::MockGeocodingProvider;
pub use geocoding_provider::{
    GeocodingProvider, GeocodingProviderError, UnconfiguredGeocodingProvider,
};
#[cfg(test)]
pub use user_record_repository::MockUserRecordRepository;
pub use user_record_repository::{
    FixtureUserRecordRepository, UserRecordRepository, UserRecordRepositoryError,
};
#[cfg(test)]
pub use user_records_command::MockUserRecordsCommand;
pub use user_records_command::UserRecordsCommand;
#[cfg(test)]
pub use user_records_query::MockUserRecordsQuery;
pub use user_records_query::UserRecordsQuery;
