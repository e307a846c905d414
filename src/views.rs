//! Server rendered pages

use askama::Template;
use booker::Booking;
use chrono::Utc;

use crate::form::{BookingForm, FormFlow};
use crate::schemas::booking::DATE_FORMAT;

#[derive(Clone, Debug, Template)]
#[template(path = "sign_in.html")]
pub struct SignInTemplate {
	pub error: Option<String>,
}

/// A single booking as shown in the list
#[derive(Clone, Debug)]
pub struct BookingCard {
	pub id:               u64,
	pub check_in:         String,
	pub check_out:        String,
	pub additional_needs: String,
	pub confirm_delete:   bool,
}

impl BookingCard {
	#[must_use]
	pub fn new(booking: &Booking, confirm_delete: Option<u64>) -> Self {
		Self {
			id:               booking.id,
			check_in:         booking.check_in().format(DATE_FORMAT).to_string(),
			check_out:        booking.check_out().format(DATE_FORMAT).to_string(),
			additional_needs: booking.additional_needs().to_string(),
			confirm_delete:   confirm_delete == Some(booking.id),
		}
	}
}

#[derive(Clone, Debug, Template)]
#[template(path = "bookings.html")]
pub struct BookingsTemplate {
	pub bookings: Vec<BookingCard>,
}

#[derive(Clone, Debug, Template)]
#[template(path = "booking_form.html")]
pub struct BookingFormTemplate {
	pub title:                String,
	pub action:               String,
	pub submit_label:         &'static str,
	pub check_in:             String,
	pub check_out:            String,
	pub additional_needs:     String,
	pub today:                String,
	pub date_error:           Option<&'static str>,
	pub availability_message: Option<&'static str>,
	pub message:              String,
}

impl BookingFormTemplate {
	/// Render the state of a form session
	///
	/// `booking_id` must be set for the edit flow
	#[must_use]
	pub fn from_form(form: &BookingForm, booking_id: Option<u64>) -> Self {
		let (title, action, submit_label) = match (form.flow(), booking_id) {
			(FormFlow::Edit, Some(id)) => {
				(
					format!("Edit Booking #{id}"),
					format!("/bookings/{id}/edit"),
					"Save Changes",
				)
			},
			_ => {
				(
					"New Booking".to_string(),
					"/bookings/new".to_string(),
					"Create Booking",
				)
			},
		};

		Self {
			title,
			action,
			submit_label,
			check_in: form.check_in().to_string(),
			check_out: form.check_out().to_string(),
			additional_needs: form.additional_needs().to_string(),
			today: Utc::now().date_naive().format(DATE_FORMAT).to_string(),
			date_error: form.date_error(),
			availability_message: form.availability_message(),
			message: form.message().to_string(),
		}
	}

	/// Earliest date allowed for check-out
	#[must_use]
	pub fn min_check_out(&self) -> &str {
		if self.check_in.is_empty() { &self.today } else { &self.check_in }
	}
}
