//! Listings service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::listings::{
        data::NewListing,
        errors::ListingsServiceError,
        records::{ListingRecord, ListingUuid},
        repository::PgListingsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgListingsService {
    db: Db,
    repository: PgListingsRepository,
}

impl PgListingsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgListingsRepository::new(),
        }
    }
}

#[async_trait]
impl ListingsService for PgListingsService {
    async fn fetch_listing_by_id(
        &self,
        listing: ListingUuid,
    ) -> Result<ListingRecord, ListingsServiceError> {
        let mut tx = self.db.begin().await?;

        let listing = self.repository.get_listing(&mut tx, listing).await?;

        tx.commit().await?;

        Ok(listing)
    }

    async fn create_listing(
        &self,
        listing: NewListing,
    ) -> Result<ListingRecord, ListingsServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_listing(&mut tx, listing.uuid, listing.host_uuid, listing.price)
            .await?;

        tx.commit().await?;

        Ok(created)
    }
}

#[automock]
#[async_trait]
/// The listing lookup capability the booking core consumes, plus the
/// seeding surface used by administration.
pub trait ListingsService: Send + Sync {
    /// Retrieve a single listing with its owning host.
    async fn fetch_listing_by_id(
        &self,
        listing: ListingUuid,
    ) -> Result<ListingRecord, ListingsServiceError>;

    /// Creates a new listing for a host.
    async fn create_listing(
        &self,
        listing: NewListing,
    ) -> Result<ListingRecord, ListingsServiceError>;
}
