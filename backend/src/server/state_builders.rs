//! Builders wiring repositories and services into [`HttpState`].

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};
use tracing::info;

use profile_registry::domain::ports::{GeocodingProvider, UserRecordRepository};
use profile_registry::domain::{AddressResolverService, UserRecordService};
use profile_registry::inbound::http::state::HttpState;
use profile_registry::outbound::in_memory::InMemoryUserRecordRepository;
use profile_registry::outbound::persistence::DieselUserRecordRepository;

use super::ServerConfig;

/// Build the handler state for `config`.
///
/// Uses the Diesel repository when a pool is configured, otherwise the
/// in-memory repository.
pub fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let state = match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL user record store");
            state_for(
                Arc::new(DieselUserRecordRepository::new(pool.clone())),
                clock,
                config.geocoder.clone(),
            )
        }
        None => {
            info!("using in-memory user record store");
            state_for(
                Arc::new(InMemoryUserRecordRepository::new()),
                clock,
                config.geocoder.clone(),
            )
        }
    };
    web::Data::new(state)
}

fn state_for<R>(
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
    geocoder: Arc<dyn GeocodingProvider>,
) -> HttpState
where
    R: UserRecordRepository + 'static,
{
    let records = Arc::new(UserRecordService::new(repository, clock));
    let addresses = Arc::new(AddressResolverService::new(records.clone(), geocoder));
    HttpState::new(records.clone(), records, addresses)
}
