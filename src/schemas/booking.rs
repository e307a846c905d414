use booker::{Booking, BookingData, BookingDates, BookingIdentifier, BookingPatch};
use chrono::NaiveDate;
use common::Error;
use serde::{Deserialize, Serialize};

use crate::identity::PseudoIdentity;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an optional form/query date, treating blank values as absent
///
/// # Errors
/// Fails if a non-blank value is not a `YYYY-MM-DD` date
pub fn parse_date(
	field: &str,
	value: Option<&str>,
) -> Result<Option<NaiveDate>, Error> {
	let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
		return Ok(None);
	};

	NaiveDate::parse_from_str(value, DATE_FORMAT).map(Some).map_err(|_| {
		Error::InvalidParameters(format!(
			"Invalid {field} '{value}', expected YYYY-MM-DD"
		))
	})
}

/// Parse a booking id taken from the request path
///
/// # Errors
/// Fails if the id is blank or not a number
pub fn parse_booking_id(raw: &str) -> Result<u64, Error> {
	let raw = raw.trim();

	if raw.is_empty() {
		return Err(Error::MissingParameters(
			"Booking ID is required".to_string(),
		));
	}

	raw.parse::<u64>().map_err(|_| {
		Error::InvalidParameters(format!("Invalid booking ID '{raw}'"))
	})
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
	pub check_in_date:    Option<String>,
	pub check_out_date:   Option<String>,
	#[serde(default)]
	pub additional_needs: String,
}

impl CreateBookingRequest {
	/// Build the full booking service payload for this request
	///
	/// Names come from the pseudo-identity, price and deposit are fixed.
	///
	/// # Errors
	/// Fails if either date is missing or malformed
	pub fn to_booking_data(
		&self,
		identity: &PseudoIdentity,
	) -> Result<BookingData, Error> {
		let checkin =
			parse_date("checkInDate", self.check_in_date.as_deref())?;
		let checkout =
			parse_date("checkOutDate", self.check_out_date.as_deref())?;

		let (Some(checkin), Some(checkout)) = (checkin, checkout) else {
			return Err(Error::MissingParameters(
				"Missing required dates".to_string(),
			));
		};

		Ok(BookingData {
			firstname:       identity.first_name_or_default().to_string(),
			lastname:        identity.last_name_or_default().to_string(),
			totalprice:      0,
			depositpaid:     true,
			bookingdates:    BookingDates { checkin, checkout },
			additionalneeds: Some(self.additional_needs.clone()),
		})
	}
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
	pub check_in_date:    Option<String>,
	pub check_out_date:   Option<String>,
	pub additional_needs: Option<String>,
}

impl UpdateBookingRequest {
	/// Build the partial update for this request
	///
	/// Omitted additional needs stay untouched upstream.
	///
	/// # Errors
	/// Fails if a provided date is malformed
	pub fn to_patch(&self) -> Result<BookingPatch, Error> {
		let checkin =
			parse_date("checkInDate", self.check_in_date.as_deref())?;
		let checkout =
			parse_date("checkOutDate", self.check_out_date.as_deref())?;

		Ok(BookingPatch::new(self.additional_needs.clone(), checkin, checkout))
	}
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
	pub check_in_date:  Option<String>,
	pub check_out_date: Option<String>,
}

impl AvailabilityQuery {
	/// Both requested dates
	///
	/// # Errors
	/// Fails if either date is missing or malformed
	pub fn dates(&self) -> Result<(NaiveDate, NaiveDate), Error> {
		let check_in =
			parse_date("checkInDate", self.check_in_date.as_deref())?;
		let check_out =
			parse_date("checkOutDate", self.check_out_date.as_deref())?;

		match (check_in, check_out) {
			(Some(check_in), Some(check_out)) => Ok((check_in, check_out)),
			_ => {
				Err(Error::MissingParameters(
					"Missing required dates".to_string(),
				))
			},
		}
	}
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct BookingResponse {
	pub message: String,
	pub data:    Booking,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
	pub message:      String,
	pub is_available: bool,
	pub bookings:     Vec<BookingIdentifier>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MessageResponse {
	pub message: String,
}
