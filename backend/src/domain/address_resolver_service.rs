//! Address resolution on top of stored user records.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::ports::{AddressLookup, GeocodingProvider, UserRecordsQuery};
use crate::domain::{Coordinates, UserRecordError, UserRecordId};

/// Service resolving the stored address of a record into coordinates.
///
/// Reads only; nothing is persisted or cached.
pub struct AddressResolverService<Q: ?Sized, G: ?Sized> {
    records: Arc<Q>,
    geocoder: Arc<G>,
}

impl<Q: ?Sized, G: ?Sized> AddressResolverService<Q, G> {
    pub fn new(records: Arc<Q>, geocoder: Arc<G>) -> Self {
        Self { records, geocoder }
    }
}

#[async_trait]
impl<Q, G> AddressLookup for AddressResolverService<Q, G>
where
    Q: UserRecordsQuery + ?Sized,
    G: GeocodingProvider + ?Sized,
{
    async fn resolve_address(&self, id: UserRecordId) -> Result<Coordinates, UserRecordError> {
        let record = self.records.get_by_id(id).await?;
        let coordinates = self
            .geocoder
            .forward_geocode(record.address())
            .await
            .map_err(|err| {
                warn!(user_id = %id, error = %err, "address lookup failed");
                UserRecordError::lookup_failed(err.to_string())
            })?;
        debug!(
            user_id = %id,
            longitude = coordinates.longitude(),
            latitude = coordinates.latitude(),
            "resolved user address"
        );
        Ok(coordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{GeocodingProviderError, MockGeocodingProvider, MockUserRecordsQuery};
    use crate::domain::{UserFields, UserRecord};
    use chrono::{NaiveDate, TimeZone, Utc};
    use mockall::predicate::eq;
    use rstest::rstest;

    const ADDRESS: &str = "4, Triq-Klin Mgarr, MGR2241, Malta";

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
                ADDRESS,
                "Full stack developer",
            ),
            created_at: at,
            updated_at: at,
        }
    }

    fn make_service(
        records: MockUserRecordsQuery,
        geocoder: MockGeocodingProvider,
    ) -> AddressResolverService<MockUserRecordsQuery, MockGeocodingProvider> {
        AddressResolverService::new(Arc::new(records), Arc::new(geocoder))
    }

    #[tokio::test]
    async fn resolves_stored_address() {
        let mut records = MockUserRecordsQuery::new();
        records
            .expect_get_by_id()
            .with(eq(UserRecordId::new(1)))
            .times(1)
            .return_once(|id| Ok(stored_record(id.get())));
        let mut geocoder = MockGeocodingProvider::new();
        geocoder
            .expect_forward_geocode()
            .withf(|address| address == ADDRESS)
            .times(1)
            .return_once(|_| Ok(Coordinates::new(14.36639, 35.91972).expect("valid point")));

        let point = make_service(records, geocoder)
            .resolve_address(UserRecordId::new(1))
            .await
            .expect("resolved");

        assert_eq!(point.as_lon_lat(), [14.36639, 35.91972]);
    }

    #[tokio::test]
    async fn missing_record_skips_provider() {
        let mut records = MockUserRecordsQuery::new();
        records
            .expect_get_by_id()
            .times(1)
            .return_once(|id| Err(UserRecordError::not_found(id)));
        let mut geocoder = MockGeocodingProvider::new();
        geocoder.expect_forward_geocode().never();

        let error = make_service(records, geocoder)
            .resolve_address(UserRecordId::new(999))
            .await
            .expect_err("missing record");

        assert_eq!(error, UserRecordError::not_found(UserRecordId::new(999)));
    }

    #[rstest]
    #[case(GeocodingProviderError::timeout("operation timed out"))]
    #[case(GeocodingProviderError::status(401_u16, "Not Authorized - Invalid Token"))]
    #[case(GeocodingProviderError::no_match("feature collection is empty"))]
    #[case(GeocodingProviderError::not_configured())]
    #[tokio::test]
    async fn provider_failures_become_lookup_failed(#[case] failure: GeocodingProviderError) {
        let expected = UserRecordError::lookup_failed(failure.to_string());
        let mut records = MockUserRecordsQuery::new();
        records
            .expect_get_by_id()
            .return_once(|id| Ok(stored_record(id.get())));
        let mut geocoder = MockGeocodingProvider::new();
        geocoder
            .expect_forward_geocode()
            .times(1)
            .return_once(move |_| Err(failure));

        let error = make_service(records, geocoder)
            .resolve_address(UserRecordId::new(1))
            .await
            .expect_err("lookup failure");

        assert_eq!(error, expected);
    }
}
