//! Bookings service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{Span, info};

use crate::{
    database::Db,
    domain::{
        bookings::{
            data::NewBooking,
            errors::{BadRequestError, BookingsServiceError},
            pricing,
            records::{BookingRecord, BookingUuid},
            repository::PgBookingsRepository,
        },
        listings::{PgListingsRepository, records::ListingUuid},
        users::records::Identity,
    },
};

#[derive(Debug, Clone)]
pub struct PgBookingsService {
    db: Db,
    bookings: PgBookingsRepository,
    listings: PgListingsRepository,
}

impl PgBookingsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            bookings: PgBookingsRepository::new(),
            listings: PgListingsRepository::new(),
        }
    }
}

#[async_trait]
impl BookingsService for PgBookingsService {
    #[tracing::instrument(
        name = "bookings.service.create_booking",
        skip(self, booking),
        fields(
            listing_uuid = %listing,
            guest = %guest.username,
            booking_uuid = tracing::field::Empty
        ),
        err
    )]
    async fn create_booking(
        &self,
        listing: ListingUuid,
        guest: &Identity,
        booking: NewBooking,
    ) -> Result<BookingRecord, BookingsServiceError> {
        let valid = booking.validate()?;

        let mut tx = self.db.begin().await?;

        // A missing listing is reported as a bad request, never a
        // not-found; the error must not reveal which listing ids exist.
        let listing = self
            .listings
            .get_listing(&mut tx, listing)
            .await
            .map_err(|error| match error {
                sqlx::Error::RowNotFound => BadRequestError::UnknownListing.into(),
                error => BookingsServiceError::from(error),
            })?;

        let total_cost = pricing::stay_cost(listing.price, valid.start_date, valid.end_date)?;

        let uuid = BookingUuid::new();

        let record = self
            .bookings
            .create_booking(&mut tx, uuid, listing.uuid, guest, &valid, total_cost)
            .await?;

        tx.commit().await?;

        Span::current().record("booking_uuid", tracing::field::display(record.uuid));

        info!(booking_uuid = %record.uuid, "created booking");

        Ok(record)
    }

    async fn list_bookings_from_user(
        &self,
        guest: &Identity,
    ) -> Result<Vec<BookingRecord>, BookingsServiceError> {
        let mut tx = self.db.begin().await?;

        let bookings = self
            .bookings
            .list_bookings_from_user(&mut tx, guest.uuid)
            .await?;

        tx.commit().await?;

        Ok(bookings)
    }

    async fn list_bookings_for_user_listings(
        &self,
        host: &Identity,
    ) -> Result<Vec<BookingRecord>, BookingsServiceError> {
        let mut tx = self.db.begin().await?;

        let bookings = self
            .bookings
            .list_bookings_for_user_listings(&mut tx, host.uuid)
            .await?;

        tx.commit().await?;

        Ok(bookings)
    }
}

#[automock]
#[async_trait]
/// Booking lifecycle and query operations.
pub trait BookingsService: Send + Sync {
    /// Validates and persists a reservation against a listing.
    ///
    /// All-or-nothing: when validation or pricing fails, nothing is
    /// written. The returned record carries the generated id, the stored
    /// total cost and the host's username.
    async fn create_booking(
        &self,
        listing: ListingUuid,
        guest: &Identity,
        booking: NewBooking,
    ) -> Result<BookingRecord, BookingsServiceError>;

    /// Every booking the given user placed as a guest, earliest first.
    async fn list_bookings_from_user(
        &self,
        guest: &Identity,
    ) -> Result<Vec<BookingRecord>, BookingsServiceError>;

    /// Every booking placed against a listing the given user hosts,
    /// earliest first and shaped identically to the guest view.
    async fn list_bookings_for_user_listings(
        &self,
        host: &Identity,
    ) -> Result<Vec<BookingRecord>, BookingsServiceError>;
}
