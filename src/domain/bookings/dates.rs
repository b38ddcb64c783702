//! Calendar date normalization for booking requests.

use jiff::civil::Date;

use crate::domain::bookings::errors::InvalidDateError;

/// Wire format for booking dates.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a user-supplied date string as a calendar date.
///
/// A calendar date carries no time or zone, so the value stands for
/// midnight of the given day wherever it is interpreted.
pub(crate) fn parse_date(field: &'static str, value: &str) -> Result<Date, InvalidDateError> {
    Date::strptime(DATE_FORMAT, value).map_err(|source| InvalidDateError {
        field,
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn parses_iso_calendar_dates() {
        let parsed = parse_date("start_date", "2022-07-06").expect("date should parse");

        assert_eq!(parsed, date(2022, 7, 6));
    }

    #[test]
    fn rejects_empty_input() {
        let result = parse_date("start_date", "");

        assert!(result.is_err(), "empty string should not parse");
    }

    #[test]
    fn rejects_dates_that_do_not_exist() {
        let result = parse_date("end_date", "2021-02-30");

        assert!(result.is_err(), "Feb 30 is not a real calendar date");
    }

    #[test]
    fn rejects_other_orderings() {
        let result = parse_date("start_date", "07-06-2022");

        assert!(result.is_err(), "month-first input should not parse");
    }

    #[test]
    fn error_names_the_offending_field() {
        let error = parse_date("end_date", "whenever").expect_err("should fail");

        assert_eq!(error.field, "end_date");
        assert_eq!(error.value, "whenever");
    }
}
