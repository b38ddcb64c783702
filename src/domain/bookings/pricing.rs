//! Stay pricing.

use jiff::civil::Date;

use crate::domain::bookings::errors::InvalidRangeError;

/// Platform service fee charged on top of the nightly price, in percent.
pub(crate) const SERVICE_FEE_PERCENT: u64 = 10;

/// Whole-day difference between two calendar dates.
pub(crate) fn nights(start_date: Date, end_date: Date) -> i64 {
    i64::from((end_date - start_date).get_days())
}

/// Total cost of a stay, in minor currency units.
///
/// `price` is the nightly rate. The service fee is applied per night and
/// the result rounds up, so a fractional unit is never under-collected.
pub(crate) fn stay_cost(
    price: u64,
    start_date: Date,
    end_date: Date,
) -> Result<u64, InvalidRangeError> {
    let span = nights(start_date, end_date);

    if span <= 0 {
        return Err(InvalidRangeError { nights: span });
    }

    let nights = span.unsigned_abs();

    Ok((nights * price * (100 + SERVICE_FEE_PERCENT)).div_ceil(100))
}
