//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and depend only on the
//! driving ports, so they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AddressLookup, UserRecordsCommand, UserRecordsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub records: Arc<dyn UserRecordsQuery>,
    pub records_command: Arc<dyn UserRecordsCommand>,
    pub addresses: Arc<dyn AddressLookup>,
}

impl HttpState {
    /// Bundle the three driving ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use profile_registry::domain::ports::UnconfiguredGeocodingProvider;
    /// use profile_registry::domain::{AddressResolverService, UserRecordService};
    /// use profile_registry::inbound::http::state::HttpState;
    /// use profile_registry::outbound::in_memory::InMemoryUserRecordRepository;
    ///
    /// let records = Arc::new(UserRecordService::new(
    ///     Arc::new(InMemoryUserRecordRepository::new()),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let addresses = Arc::new(AddressResolverService::new(
    ///     records.clone(),
    ///     Arc::new(UnconfiguredGeocodingProvider),
    /// ));
    /// let state = HttpState::new(records.clone(), records, addresses);
    /// # let _ = state;
    /// ```
    pub fn new(
        records: Arc<dyn UserRecordsQuery>,
        records_command: Arc<dyn UserRecordsCommand>,
        addresses: Arc<dyn AddressLookup>,
    ) -> Self {
        Self {
            records,
            records_command,
            addresses,
        }
    }
}
