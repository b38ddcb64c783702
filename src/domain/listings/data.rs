//! Listings Data

use crate::domain::{listings::records::ListingUuid, users::records::UserUuid};

/// New Listing Data
///
/// `price` is the nightly rate in minor currency units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewListing {
    pub uuid: ListingUuid,
    pub host_uuid: UserUuid,
    pub price: u64,
}
