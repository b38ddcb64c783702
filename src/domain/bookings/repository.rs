//! Bookings Repository

use jiff_sqlx::{Date as SqlxDate, Timestamp as SqlxTimestamp};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    bookings::{
        data::ValidBooking,
        records::{BookingRecord, BookingUuid, PaymentMethod},
    },
    listings::records::ListingUuid,
    users::records::{Identity, UserUuid},
};

const CREATE_BOOKING_SQL: &str = include_str!("sql/create_booking.sql");
const LIST_BOOKINGS_FROM_USER_SQL: &str = include_str!("sql/list_bookings_from_user.sql");
const LIST_BOOKINGS_FOR_USER_LISTINGS_SQL: &str =
    include_str!("sql/list_bookings_for_user_listings.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBookingsRepository;

impl PgBookingsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Inserts one booking row and returns it joined with the host's
    /// username. A single statement, so the row becomes visible with its
    /// id, timestamp and cost all at once.
    pub(crate) async fn create_booking(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        uuid: BookingUuid,
        listing: ListingUuid,
        guest: &Identity,
        booking: &ValidBooking,
        total_cost: u64,
    ) -> Result<BookingRecord, sqlx::Error> {
        let guests_i32 = i32::try_from(booking.guests).map_err(|e| sqlx::Error::ColumnDecode {
            index: "guests".to_string(),
            source: Box::new(e),
        })?;

        let total_cost_i64 = i64::try_from(total_cost).map_err(|e| sqlx::Error::ColumnDecode {
            index: "total_cost".to_string(),
            source: Box::new(e),
        })?;

        query_as::<Postgres, BookingRecord>(CREATE_BOOKING_SQL)
            .bind(uuid.into_uuid())
            .bind(listing.into_uuid())
            .bind(guest.uuid.into_uuid())
            .bind(&guest.username)
            .bind(SqlxDate::from(booking.start_date))
            .bind(SqlxDate::from(booking.end_date))
            .bind(guests_i32)
            .bind(booking.payment_method.as_str())
            .bind(total_cost_i64)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_bookings_from_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        guest: UserUuid,
    ) -> Result<Vec<BookingRecord>, sqlx::Error> {
        query_as::<Postgres, BookingRecord>(LIST_BOOKINGS_FROM_USER_SQL)
            .bind(guest.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_bookings_for_user_listings(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        host: UserUuid,
    ) -> Result<Vec<BookingRecord>, sqlx::Error> {
        query_as::<Postgres, BookingRecord>(LIST_BOOKINGS_FOR_USER_LISTINGS_SQL)
            .bind(host.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for BookingRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let total_cost = try_get_amount(row, "total_cost")?;

        let guests_i32: i32 = row.try_get("guests")?;

        let guests = u32::try_from(guests_i32).map_err(|e| sqlx::Error::ColumnDecode {
            index: "guests".to_string(),
            source: Box::new(e),
        })?;

        let payment_method: &str = row.try_get("payment_method")?;

        let payment_method =
            payment_method
                .parse::<PaymentMethod>()
                .map_err(|e| sqlx::Error::ColumnDecode {
                    index: "payment_method".to_string(),
                    source: Box::new(e),
                })?;

        Ok(Self {
            uuid: BookingUuid::from_uuid(row.try_get("uuid")?),
            listing_uuid: ListingUuid::from_uuid(row.try_get("listing_uuid")?),
            guest_uuid: UserUuid::from_uuid(row.try_get("guest_uuid")?),
            guest_username: row.try_get("guest_username")?,
            host_username: row.try_get("host_username")?,
            start_date: row.try_get::<SqlxDate, _>("start_date")?.to_jiff(),
            end_date: row.try_get::<SqlxDate, _>("end_date")?.to_jiff(),
            guests,
            payment_method,
            total_cost,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

fn try_get_amount(row: &PgRow, col: &str) -> Result<u64, sqlx::Error> {
    let amount_i64: i64 = row.try_get(col)?;

    u64::try_from(amount_i64).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}
