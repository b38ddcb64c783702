//! Booking Records

use std::str::FromStr;

use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    domain::{listings::records::ListingUuid, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Booking UUID
pub type BookingUuid = TypedUuid<BookingRecord>;

/// Booking Record
///
/// The persisted shape of one reservation, as returned by creation and by
/// both query views. `guest_username` is denormalized at creation;
/// `host_username` is joined through the listing's owner, so a single
/// rendering path serves either view. `total_cost` is computed once at
/// creation and stored, never recomputed on read.
#[derive(Debug, Clone)]
pub struct BookingRecord {
    pub uuid: BookingUuid,
    pub listing_uuid: ListingUuid,
    pub guest_uuid: UserUuid,
    pub guest_username: String,
    pub host_username: String,
    pub start_date: Date,
    pub end_date: Date,
    pub guests: u32,
    pub payment_method: PaymentMethod,
    pub total_cost: u64,
    pub created_at: Timestamp,
}

/// Payment method recorded against a booking.
///
/// Recorded, never charged. Stored as text so further tags are additive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Card,
}

impl PaymentMethod {
    /// The stored tag for this payment method.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
        }
    }
}

/// A stored payment method tag that is not recognized.
#[derive(Debug, Error)]
#[error("unknown payment method `{0}`")]
pub struct ParsePaymentMethodError(String);

impl FromStr for PaymentMethod {
    type Err = ParsePaymentMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(Self::Card),
            other => Err(ParsePaymentMethodError(other.to_string())),
        }
    }
}
