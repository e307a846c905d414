//! Wire types of the booking service
//!
//! Field names follow the service's own (all lowercase) naming

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Check-in and check-out dates of a booking
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BookingDates {
	pub checkin:  NaiveDate,
	pub checkout: NaiveDate,
}

/// The body of a booking as stored by the booking service
///
/// This is also the full payload used to create a new booking
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BookingData {
	pub firstname:       String,
	pub lastname:        String,
	pub totalprice:      i64,
	pub depositpaid:     bool,
	pub bookingdates:    BookingDates,
	#[serde(default)]
	pub additionalneeds: Option<String>,
}

/// A booking together with the identifier the booking service assigned it
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Booking {
	pub id:   u64,
	#[serde(flatten)]
	pub data: BookingData,
}

impl Booking {
	#[must_use]
	pub fn check_in(&self) -> NaiveDate { self.data.bookingdates.checkin }

	#[must_use]
	pub fn check_out(&self) -> NaiveDate { self.data.bookingdates.checkout }

	#[must_use]
	pub fn additional_needs(&self) -> &str {
		self.data.additionalneeds.as_deref().unwrap_or_default()
	}
}

/// A bare booking id as returned by the search endpoint
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct BookingIdentifier {
	pub bookingid: u64,
}

/// Response of the booking service after creating a booking
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreatedBooking {
	pub bookingid: u64,
	pub booking:   BookingData,
}

impl From<CreatedBooking> for Booking {
	fn from(value: CreatedBooking) -> Self {
		Self { id: value.bookingid, data: value.booking }
	}
}

/// Partial update of an existing booking
///
/// Absent fields are left out of the body so the service keeps their stored
/// values; the dates are only sent when both are known
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BookingPatch {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub additionalneeds: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bookingdates:    Option<BookingDates>,
}

impl BookingPatch {
	#[must_use]
	pub fn new(
		additional_needs: Option<String>,
		check_in: Option<NaiveDate>,
		check_out: Option<NaiveDate>,
	) -> Self {
		let bookingdates = match (check_in, check_out) {
			(Some(checkin), Some(checkout)) => {
				Some(BookingDates { checkin, checkout })
			},
			_ => None,
		};

		Self { additionalneeds: additional_needs, bookingdates }
	}
}

/// Whether a date range is free, along with the bookings that overlap it
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Availability {
	pub is_available: bool,
	pub bookings:     Vec<BookingIdentifier>,
}
