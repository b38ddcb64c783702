//! Listings Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::{
    listings::records::{ListingRecord, ListingUuid},
    users::records::UserUuid,
};

const GET_LISTING_SQL: &str = include_str!("sql/get_listing.sql");
const CREATE_LISTING_SQL: &str = include_str!("sql/create_listing.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgListingsRepository;

impl PgListingsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_listing(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        listing: ListingUuid,
    ) -> Result<ListingRecord, sqlx::Error> {
        query_as::<Postgres, ListingRecord>(GET_LISTING_SQL)
            .bind(listing.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn create_listing(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        listing: ListingUuid,
        host: UserUuid,
        price: u64,
    ) -> Result<ListingRecord, sqlx::Error> {
        let price_i64 = i64::try_from(price).map_err(|e| sqlx::Error::ColumnDecode {
            index: "price".to_string(),
            source: Box::new(e),
        })?;

        query_as::<Postgres, ListingRecord>(CREATE_LISTING_SQL)
            .bind(listing.into_uuid())
            .bind(host.into_uuid())
            .bind(price_i64)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for ListingRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let price = try_get_amount(row, "price")?;

        Ok(Self {
            uuid: ListingUuid::from_uuid(row.try_get("uuid")?),
            host_uuid: UserUuid::from_uuid(row.try_get("host_uuid")?),
            host_username: row.try_get("host_username")?,
            price,
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
