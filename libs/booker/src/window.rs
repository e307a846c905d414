use chrono::{Days, NaiveDate};

/// Pad a date range by one day on each side
///
/// The booking service only matches bookings that check in strictly after
/// `checkin` and check out strictly before `checkout`, so an unpadded query
/// would miss bookings sharing a boundary day with the requested range.
///
/// Dates at the edge of the representable range are left untouched.
#[must_use]
pub fn widen_window(
	check_in: NaiveDate,
	check_out: NaiveDate,
) -> (NaiveDate, NaiveDate) {
	let from = check_in.checked_sub_days(Days::new(1)).unwrap_or(check_in);
	let until = check_out.checked_add_days(Days::new(1)).unwrap_or(check_out);

	(from, until)
}
