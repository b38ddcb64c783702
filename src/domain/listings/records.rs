//! Listing Records

use jiff::Timestamp;

use crate::{domain::users::records::UserUuid, uuids::TypedUuid};

/// Listing UUID
pub type ListingUuid = TypedUuid<ListingRecord>;

/// Listing Record
///
/// The host username is joined from the owning user on every read so the
/// booking views can carry it without a second lookup.
#[derive(Debug, Clone)]
pub struct ListingRecord {
    pub uuid: ListingUuid,
    pub host_uuid: UserUuid,
    pub host_username: String,
    pub price: u64,
    pub created_at: Timestamp,
}
