//! State of a single create or edit booking form session
//!
//! A [`BookingForm`] is created for exactly one form session and handed to
//! the view rendering it; it is never stored or shared between sessions.
//! It tracks the entered values, which of them changed (edit flow only),
//! and the outcome of the latest availability check.

use booker::Booking;
use chrono::NaiveDate;

use crate::schemas::booking::{
	CreateBookingRequest,
	DATE_FORMAT,
	UpdateBookingRequest,
};
use crate::schemas::form::BookingFormSubmission;

pub const DATES_AVAILABLE: &str = "Dates are available!";
pub const DATES_UNAVAILABLE: &str =
	"Selected dates are not available. Please choose different dates.";
pub const INVALID_DATE_RANGE: &str =
	"Check-in date must be earlier than check-out date.";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormFlow {
	New,
	Edit,
}

/// Identifies one availability check issued by a [`BookingForm`]
///
/// Only the result for the most recently issued ticket is ever accepted.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct CheckTicket(u64);

#[derive(Clone, Debug)]
pub struct BookingForm {
	flow:             FormFlow,
	check_in:         String,
	check_out:        String,
	additional_needs: String,
	dates_changed:    bool,
	needs_changed:    bool,
	message:          String,
	latest_ticket:    u64,
	available:        Option<bool>,
}

impl Default for BookingForm {
	fn default() -> Self { Self::new() }
}

impl BookingForm {
	/// An empty form for a new booking
	#[must_use]
	pub fn new() -> Self {
		Self {
			flow:             FormFlow::New,
			check_in:         String::new(),
			check_out:        String::new(),
			additional_needs: String::new(),
			dates_changed:    false,
			needs_changed:    false,
			message:          String::new(),
			latest_ticket:    0,
			available:        None,
		}
	}

	/// A form pre-filled with an existing booking
	#[must_use]
	pub fn edit(booking: &Booking) -> Self {
		Self {
			flow: FormFlow::Edit,
			check_in: booking.check_in().format(DATE_FORMAT).to_string(),
			check_out: booking.check_out().format(DATE_FORMAT).to_string(),
			additional_needs: booking.additional_needs().to_string(),
			..Self::new()
		}
	}

	#[must_use]
	pub fn flow(&self) -> FormFlow { self.flow }

	#[must_use]
	pub fn check_in(&self) -> &str { &self.check_in }

	#[must_use]
	pub fn check_out(&self) -> &str { &self.check_out }

	#[must_use]
	pub fn additional_needs(&self) -> &str { &self.additional_needs }

	#[must_use]
	pub fn dates_changed(&self) -> bool { self.dates_changed }

	#[must_use]
	pub fn needs_changed(&self) -> bool { self.needs_changed }

	#[must_use]
	pub fn message(&self) -> &str { &self.message }

	pub fn set_check_in(&mut self, value: impl Into<String>) {
		self.check_in = value.into();
		self.mark_dates_changed();
	}

	pub fn set_check_out(&mut self, value: impl Into<String>) {
		self.check_out = value.into();
		self.mark_dates_changed();
	}

	pub fn set_additional_needs(&mut self, value: impl Into<String>) {
		self.additional_needs = value.into();

		if self.flow == FormFlow::Edit {
			self.needs_changed = true;
		}
	}

	pub fn set_message(&mut self, message: impl Into<String>) {
		self.message = message.into();
	}

	/// Any earlier availability result no longer applies to the new dates,
	/// and checks still in flight are superseded
	fn mark_dates_changed(&mut self) {
		if self.flow == FormFlow::Edit {
			self.dates_changed = true;
		}

		self.available = None;
		self.latest_ticket += 1;
	}

	/// Apply a posted form, only touching the fields whose value differs
	pub fn apply(&mut self, submission: &BookingFormSubmission) {
		if submission.check_in_date != self.check_in {
			self.set_check_in(submission.check_in_date.clone());
		}

		if submission.check_out_date != self.check_out {
			self.set_check_out(submission.check_out_date.clone());
		}

		if submission.additional_needs != self.additional_needs {
			self.set_additional_needs(submission.additional_needs.clone());
		}
	}

	/// Both dates, if both are filled in and well formed
	#[must_use]
	pub fn dates(&self) -> Option<(NaiveDate, NaiveDate)> {
		let parse = |v: &str| NaiveDate::parse_from_str(v, DATE_FORMAT).ok();

		Some((parse(&self.check_in)?, parse(&self.check_out)?))
	}

	/// Both dates are present and check-in is strictly before check-out
	#[must_use]
	pub fn is_date_valid(&self) -> bool {
		self.dates().is_some_and(|(check_in, check_out)| check_in < check_out)
	}

	/// The error to show next to the dates, if any
	#[must_use]
	pub fn date_error(&self) -> Option<&'static str> {
		let both_present = !self.check_in.is_empty() && !self.check_out.is_empty();

		(both_present && !self.is_date_valid()).then_some(INVALID_DATE_RANGE)
	}

	/// Whether the current dates warrant asking the booking service
	///
	/// New bookings are only checked once their dates are valid, edits
	/// whenever their dates were touched.
	#[must_use]
	pub fn should_check_availability(&self) -> bool {
		match self.flow {
			FormFlow::New => self.is_date_valid(),
			FormFlow::Edit => self.dates_changed && self.dates().is_some(),
		}
	}

	/// Start a new availability check, superseding all earlier ones
	pub fn begin_check(&mut self) -> CheckTicket {
		self.latest_ticket += 1;

		CheckTicket(self.latest_ticket)
	}

	/// Record the outcome of an availability check
	///
	/// Returns `false` and discards the result if a newer check was started
	/// or the dates changed since `ticket` was issued.
	pub fn record_availability(
		&mut self,
		ticket: CheckTicket,
		available: bool,
	) -> bool {
		if ticket.0 != self.latest_ticket {
			debug!("discarding superseded availability check {ticket:?}");

			return false;
		}

		self.available = Some(available);

		true
	}

	/// The availability status to show, once a check completed
	#[must_use]
	pub fn availability_message(&self) -> Option<&'static str> {
		let available = self.available?;

		let shown_available = match self.flow {
			FormFlow::New => available,
			FormFlow::Edit => available && self.is_date_valid(),
		};

		Some(if shown_available { DATES_AVAILABLE } else { DATES_UNAVAILABLE })
	}

	/// Whether the form may be submitted in its current state
	///
	/// Edits that only touch the additional needs are never blocked by a
	/// missing or stale availability check, edits that touch the dates always
	/// need a passing one.
	#[must_use]
	pub fn can_submit(&self) -> bool {
		let dates_ok = self.is_date_valid() && self.available == Some(true);

		match self.flow {
			FormFlow::New => dates_ok,
			FormFlow::Edit => {
				(self.needs_changed && !self.dates_changed) || dates_ok
			},
		}
	}

	/// Body for creating a booking from this form
	#[must_use]
	pub fn create_request(&self) -> CreateBookingRequest {
		CreateBookingRequest {
			check_in_date:    Some(self.check_in.clone()),
			check_out_date:   Some(self.check_out.clone()),
			additional_needs: self.additional_needs.clone(),
		}
	}

	/// Body for updating a booking from this form
	///
	/// Dates are only included when they were changed into a valid range.
	#[must_use]
	pub fn update_request(&self) -> UpdateBookingRequest {
		let include_dates = self.dates_changed && self.is_date_valid();

		UpdateBookingRequest {
			check_in_date:    include_dates.then(|| self.check_in.clone()),
			check_out_date:   include_dates.then(|| self.check_out.clone()),
			additional_needs: Some(self.additional_needs.clone()),
		}
	}
}
