//! Bookings Data

use jiff::civil::Date;
use serde::Deserialize;

use crate::domain::bookings::{
    dates,
    errors::{BadRequestError, InvalidRangeError},
    pricing,
    records::PaymentMethod,
};

/// New Booking Data
///
/// The candidate reservation exactly as the caller supplied it. Every field
/// is optional here; [`NewBooking::validate`] is the gate that turns it into
/// a [`ValidBooking`] or reports the first violation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewBooking {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub guests: Option<i64>,
    pub payment_method: Option<PaymentMethod>,
}

/// A booking request that passed validation: dates normalized, guest count
/// positive, payment method defaulted. Ready for pricing and persistence.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ValidBooking {
    pub(crate) start_date: Date,
    pub(crate) end_date: Date,
    pub(crate) guests: u32,
    pub(crate) payment_method: PaymentMethod,
}

impl NewBooking {
    /// Validates and normalizes the request.
    ///
    /// Fail-fast: the first violated rule is reported, with all absent
    /// required fields named together. Runs before any persistence call.
    pub(crate) fn validate(&self) -> Result<ValidBooking, BadRequestError> {
        let (start, end, guests) = match (&self.start_date, &self.end_date, self.guests) {
            (Some(start), Some(end), Some(guests)) => (start, end, guests),
            (start, end, guests) => {
                let mut fields = Vec::new();

                if start.is_none() {
                    fields.push("start_date");
                }

                if end.is_none() {
                    fields.push("end_date");
                }

                if guests.is_none() {
                    fields.push("guests");
                }

                return Err(BadRequestError::MissingFields { fields });
            }
        };

        let start_date = dates::parse_date("start_date", start)?;
        let end_date = dates::parse_date("end_date", end)?;

        if end_date <= start_date {
            return Err(InvalidRangeError {
                nights: pricing::nights(start_date, end_date),
            }
            .into());
        }

        if guests <= 0 {
            return Err(BadRequestError::InvalidGuests { guests });
        }

        let guests =
            u32::try_from(guests).map_err(|_| BadRequestError::InvalidGuests { guests })?;

        Ok(ValidBooking {
            start_date,
            end_date,
            guests,
            payment_method: self.payment_method.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn draft(start: &str, end: &str, guests: i64) -> NewBooking {
        NewBooking {
            start_date: Some(start.to_string()),
            end_date: Some(end.to_string()),
            guests: Some(guests),
            payment_method: None,
        }
    }

    #[test]
    fn valid_request_normalizes() {
        let valid = draft("2022-07-06", "2022-07-17", 5)
            .validate()
            .expect("request should validate");

        assert_eq!(valid.start_date, date(2022, 7, 6));
        assert_eq!(valid.end_date, date(2022, 7, 17));
        assert_eq!(valid.guests, 5);
        assert_eq!(valid.payment_method, PaymentMethod::Card);
    }

    #[test]
    fn explicit_payment_method_is_kept() {
        let mut booking = draft("2022-07-06", "2022-07-17", 5);
        booking.payment_method = Some(PaymentMethod::Card);

        let valid = booking.validate().expect("request should validate");

        assert_eq!(valid.payment_method, PaymentMethod::Card);
    }

    #[test]
    fn all_missing_fields_are_named_together() {
        let error = NewBooking::default().validate().expect_err("should fail");

        let BadRequestError::MissingFields { fields } = error else {
            panic!("expected MissingFields, got {error:?}");
        };

        assert_eq!(fields, vec!["start_date", "end_date", "guests"]);
    }

    #[test]
    fn missing_start_date_is_reported_before_parsing() {
        let booking = NewBooking {
            end_date: Some("not even a date".to_string()),
            ..NewBooking::default()
        };

        let error = booking.validate().expect_err("should fail");

        let BadRequestError::MissingFields { fields } = error else {
            panic!("expected MissingFields, got {error:?}");
        };

        assert_eq!(fields, vec!["start_date", "guests"]);
    }

    #[test]
    fn unparseable_date_names_the_field() {
        let error = draft("2022-07-06", "someday", 2)
            .validate()
            .expect_err("should fail");

        let BadRequestError::InvalidDate(invalid) = error else {
            panic!("expected InvalidDate, got {error:?}");
        };

        assert_eq!(invalid.field, "end_date");
    }

    #[test]
    fn equal_dates_are_an_invalid_range() {
        let error = draft("2022-07-06", "2022-07-06", 2)
            .validate()
            .expect_err("should fail");

        assert!(
            matches!(error, BadRequestError::InvalidRange(_)),
            "expected InvalidRange, got {error:?}"
        );
    }

    #[test]
    fn reversed_dates_are_an_invalid_range() {
        let error = draft("2022-07-17", "2022-07-06", 2)
            .validate()
            .expect_err("should fail");

        assert!(
            matches!(error, BadRequestError::InvalidRange(_)),
            "expected InvalidRange, got {error:?}"
        );
    }

    #[test]
    fn zero_guests_are_rejected() {
        let error = draft("2022-07-06", "2022-07-17", 0)
            .validate()
            .expect_err("should fail");

        assert!(
            matches!(error, BadRequestError::InvalidGuests { guests: 0 }),
            "expected InvalidGuests, got {error:?}"
        );
    }

    #[test]
    fn negative_guests_are_rejected() {
        let error = draft("2022-07-06", "2022-07-17", -3)
            .validate()
            .expect_err("should fail");

        assert!(
            matches!(error, BadRequestError::InvalidGuests { guests: -3 }),
            "expected InvalidGuests, got {error:?}"
        );
    }

    #[test]
    fn absurd_guest_counts_are_rejected() {
        let error = draft("2022-07-06", "2022-07-17", i64::MAX)
            .validate()
            .expect_err("should fail");

        assert!(
            matches!(error, BadRequestError::InvalidGuests { .. }),
            "expected InvalidGuests, got {error:?}"
        );
    }
}
