//! Bookings service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

/// A date string that could not be normalized to a calendar date.
#[derive(Debug, Error)]
#[error("invalid {field} `{value}`")]
pub struct InvalidDateError {
    pub field: &'static str,
    pub value: String,
    #[source]
    pub source: jiff::Error,
}

/// A date range that does not span at least one night.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("stay must span at least one night, got {nights}")]
pub struct InvalidRangeError {
    pub nights: i64,
}

/// Caller-supplied data failed validation.
///
/// This is the one error family the HTTP layer maps to a 4xx response; the
/// date and range refinements fold into it at the component boundary.
#[derive(Debug, Error)]
pub enum BadRequestError {
    #[error("missing required field(s): {}", fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },

    #[error(transparent)]
    InvalidDate(#[from] InvalidDateError),

    #[error(transparent)]
    InvalidRange(#[from] InvalidRangeError),

    #[error("guests must be a positive integer, got {guests}")]
    InvalidGuests { guests: i64 },

    #[error("no such listing")]
    UnknownListing,
}

/// Failures of the bookings service.
#[derive(Debug, Error)]
pub enum BookingsServiceError {
    #[error(transparent)]
    BadRequest(#[from] BadRequestError),

    #[error("booking already exists")]
    AlreadyExists,

    #[error("booking not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for BookingsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            _ => Self::Sql(error),
        }
    }
}

impl From<InvalidRangeError> for BookingsServiceError {
    fn from(error: InvalidRangeError) -> Self {
        Self::BadRequest(error.into())
    }
}
