use booker::{Booking, BookingData, BookingDates};
use booker_web::form::{
	BookingForm,
	DATES_AVAILABLE,
	DATES_UNAVAILABLE,
	FormFlow,
	INVALID_DATE_RANGE,
};
use booker_web::schemas::form::BookingFormSubmission;
use chrono::NaiveDate;

fn date(value: &str) -> NaiveDate {
	NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

fn booking() -> Booking {
	Booking {
		id:   7,
		data: BookingData {
			firstname:       "Jane".to_string(),
			lastname:        "Doe".to_string(),
			totalprice:      0,
			depositpaid:     true,
			bookingdates:    BookingDates {
				checkin:  date("2025-03-01"),
				checkout: date("2025-03-03"),
			},
			additionalneeds: Some("Crib".to_string()),
		},
	}
}

#[test]
fn new_form_is_empty() {
	let form = BookingForm::new();

	assert_eq!(form.flow(), FormFlow::New);
	assert_eq!(form.check_in(), "");
	assert!(!form.is_date_valid());
	assert!(!form.should_check_availability());
	assert!(!form.can_submit());
	assert_eq!(form.date_error(), None);
	assert_eq!(form.availability_message(), None);
}

#[test]
fn new_form_needs_ordered_dates() {
	let mut form = BookingForm::new();
	form.set_check_in("2025-03-05");
	form.set_check_out("2025-03-05");

	assert!(!form.is_date_valid());
	assert_eq!(form.date_error(), Some(INVALID_DATE_RANGE));
	assert!(!form.should_check_availability());

	form.set_check_out("2025-03-06");

	assert!(form.is_date_valid());
	assert_eq!(form.date_error(), None);
	assert!(form.should_check_availability());
}

#[test]
fn new_form_submits_after_passing_check() {
	let mut form = BookingForm::new();
	form.set_check_in("2025-03-01");
	form.set_check_out("2025-03-03");

	assert!(!form.can_submit());

	let ticket = form.begin_check();
	assert!(form.record_availability(ticket, true));

	assert_eq!(form.availability_message(), Some(DATES_AVAILABLE));
	assert!(form.can_submit());
}

#[test]
fn new_form_blocked_by_failing_check() {
	let mut form = BookingForm::new();
	form.set_check_in("2025-03-01");
	form.set_check_out("2025-03-03");

	let ticket = form.begin_check();
	form.record_availability(ticket, false);

	assert_eq!(form.availability_message(), Some(DATES_UNAVAILABLE));
	assert!(!form.can_submit());
}

#[test]
fn superseded_check_is_discarded() {
	let mut form = BookingForm::new();
	form.set_check_in("2025-03-01");
	form.set_check_out("2025-03-03");

	let first = form.begin_check();
	let second = form.begin_check();

	assert!(form.record_availability(second, false));
	assert!(!form.record_availability(first, true));

	assert_eq!(form.availability_message(), Some(DATES_UNAVAILABLE));
	assert!(!form.can_submit());
}

#[test]
fn changing_dates_invalidates_check() {
	let mut form = BookingForm::new();
	form.set_check_in("2025-03-01");
	form.set_check_out("2025-03-03");

	let ticket = form.begin_check();
	assert!(form.record_availability(ticket, true));

	form.set_check_out("2025-03-10");

	assert_eq!(form.availability_message(), None);
	assert!(!form.can_submit());

	let in_flight = form.begin_check();
	form.set_check_in("2025-03-02");

	assert!(!form.record_availability(in_flight, true));
	assert_eq!(form.availability_message(), None);
	assert!(!form.can_submit());
}

#[test]
fn edit_form_prefilled_and_unchanged() {
	let form = BookingForm::edit(&booking());

	assert_eq!(form.flow(), FormFlow::Edit);
	assert_eq!(form.check_in(), "2025-03-01");
	assert_eq!(form.check_out(), "2025-03-03");
	assert_eq!(form.additional_needs(), "Crib");
	assert!(!form.dates_changed());
	assert!(!form.needs_changed());
	assert!(!form.should_check_availability());
	assert!(!form.can_submit());
}

#[test]
fn edit_needs_only_submits_without_check() {
	let mut form = BookingForm::edit(&booking());
	form.set_additional_needs("Two cribs");

	assert!(form.needs_changed());
	assert!(!form.should_check_availability());
	assert!(form.can_submit());

	let request = form.update_request();

	assert_eq!(request.check_in_date, None);
	assert_eq!(request.check_out_date, None);
	assert_eq!(request.additional_needs.as_deref(), Some("Two cribs"));
}

#[test]
fn edit_dates_need_passing_check() {
	let mut form = BookingForm::edit(&booking());
	form.set_additional_needs("Two cribs");
	form.set_check_out("2025-03-05");

	assert!(form.dates_changed());
	assert!(form.should_check_availability());
	assert!(!form.can_submit());

	let ticket = form.begin_check();
	form.record_availability(ticket, true);

	assert!(form.can_submit());

	let request = form.update_request();

	assert_eq!(request.check_in_date.as_deref(), Some("2025-03-01"));
	assert_eq!(request.check_out_date.as_deref(), Some("2025-03-05"));
}

#[test]
fn edit_invalid_range_never_shows_available() {
	let mut form = BookingForm::edit(&booking());
	form.set_check_out("2025-02-20");

	let ticket = form.begin_check();
	form.record_availability(ticket, true);

	assert_eq!(form.availability_message(), Some(DATES_UNAVAILABLE));
	assert!(!form.can_submit());
	assert_eq!(form.update_request().check_in_date, None);
}

#[test]
fn apply_only_touches_changed_fields() {
	let mut form = BookingForm::edit(&booking());

	form.apply(&BookingFormSubmission {
		check_in_date: "2025-03-01".to_string(),
		check_out_date: "2025-03-03".to_string(),
		additional_needs: "Crib".to_string(),
		..BookingFormSubmission::default()
	});

	assert!(!form.dates_changed());
	assert!(!form.needs_changed());

	form.apply(&BookingFormSubmission {
		check_in_date: "2025-03-02".to_string(),
		check_out_date: "2025-03-03".to_string(),
		additional_needs: "Crib".to_string(),
		..BookingFormSubmission::default()
	});

	assert!(form.dates_changed());
	assert!(!form.needs_changed());
}
