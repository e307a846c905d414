//! Server rendered pages for signing in and managing bookings

use askama::Template;
use axum::Form;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::CookieJar;
use booker::{AuthTokenFetcher, Booking, BookingClient};
use common::{Error, Relay};
use serde::Deserialize;
use validator::Validate;

use crate::form::BookingForm;
use crate::identity::PseudoIdentity;
use crate::schemas::auth::SignInRequest;
use crate::schemas::booking::parse_booking_id;
use crate::schemas::form::{BookingFormSubmission, FormIntent};
use crate::views::{
	BookingCard,
	BookingFormTemplate,
	BookingsTemplate,
	SignInTemplate,
};

const NOT_SAVED: &str =
	"Booking not saved, please choose valid and available dates.";

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsPageQuery {
	pub confirm_delete: Option<u64>,
}

pub(crate) async fn sign_in_page() -> Result<Html<String>, Error> {
	Ok(Html(SignInTemplate { error: None }.render()?))
}

/// Store the visitor's pseudo-identity and send them to their bookings
#[instrument(skip(jar))]
pub(crate) async fn sign_in(
	jar: CookieJar,
	Form(request): Form<SignInRequest>,
) -> Result<Response, Error> {
	if let Err(err) = request.validate() {
		let error = Error::from(err).to_string();
		let page = SignInTemplate { error: Some(error) }.render()?;

		return Ok(Html(page).into_response());
	}

	let jar =
		PseudoIdentity::store(jar, &request.first_name, &request.last_name);

	info!("signed in as {} {}", request.first_name, request.last_name);

	Ok((jar, Redirect::to("/bookings")).into_response())
}

/// List every booking made under the visitor's pseudo-identity
#[instrument(skip(client))]
pub(crate) async fn bookings_page(
	State(client): State<BookingClient>,
	identity: PseudoIdentity,
	Query(query): Query<BookingsPageQuery>,
) -> Result<Html<String>, Error> {
	let bookings = match identity.names() {
		Some((first_name, last_name)) => {
			client
				.list(first_name, last_name)
				.await
				.relay("Failed to fetch bookings")?
		},
		None => vec![],
	};

	let bookings = bookings
		.iter()
		.map(|b| BookingCard::new(b, query.confirm_delete))
		.collect();

	Ok(Html(BookingsTemplate { bookings }.render()?))
}

pub(crate) async fn new_booking_page() -> Result<Html<String>, Error> {
	let page = BookingFormTemplate::from_form(&BookingForm::new(), None);

	Ok(Html(page.render()?))
}

/// Check or create a new booking
#[instrument(skip(client))]
pub(crate) async fn submit_new_booking(
	State(client): State<BookingClient>,
	identity: PseudoIdentity,
	Form(submission): Form<BookingFormSubmission>,
) -> Result<Response, Error> {
	let mut form = BookingForm::new();
	form.apply(&submission);

	run_availability_check(&client, &mut form).await?;

	if submission.intent == FormIntent::Check {
		return render_form(&form, None);
	}

	if !form.can_submit() {
		form.set_message(NOT_SAVED);

		return render_form(&form, None);
	}

	let payload = form.create_request().to_booking_data(&identity)?;
	let booking =
		client.create(&payload).await.relay("Failed to create booking")?;

	info!("created booking {} from form", booking.id);

	Ok(Redirect::to("/bookings").into_response())
}

/// Show the edit form for an existing booking
#[instrument(skip(client))]
pub(crate) async fn edit_booking_page(
	State(client): State<BookingClient>,
	Path(id): Path<String>,
) -> Result<Html<String>, Error> {
	let booking = get_booking(&client, &id).await?;

	let form = BookingForm::edit(&booking);
	let page = BookingFormTemplate::from_form(&form, Some(booking.id));

	Ok(Html(page.render()?))
}

/// Check or save changes to an existing booking
#[instrument(skip(client, tokens))]
pub(crate) async fn submit_edit_booking(
	State(client): State<BookingClient>,
	State(tokens): State<AuthTokenFetcher>,
	Path(id): Path<String>,
	Form(submission): Form<BookingFormSubmission>,
) -> Result<Response, Error> {
	let booking = get_booking(&client, &id).await?;

	let mut form = BookingForm::edit(&booking);
	form.apply(&submission);

	run_availability_check(&client, &mut form).await?;

	if submission.intent == FormIntent::Check {
		return render_form(&form, Some(booking.id));
	}

	if !form.can_submit() {
		form.set_message(NOT_SAVED);

		return render_form(&form, Some(booking.id));
	}

	let patch = form.update_request().to_patch()?;

	let token = tokens.fetch_token().await.relay("Failed to update booking")?;
	client
		.update(booking.id, &patch, &token)
		.await
		.relay("Failed to update booking")?;

	info!("updated booking {} from form", booking.id);

	Ok(Redirect::to("/bookings").into_response())
}

/// Delete a booking and return to the list
#[instrument(skip(client, tokens))]
pub(crate) async fn submit_delete_booking(
	State(client): State<BookingClient>,
	State(tokens): State<AuthTokenFetcher>,
	Path(id): Path<String>,
) -> Result<Redirect, Error> {
	let id = parse_booking_id(&id)?;

	let token = tokens.fetch_token().await.relay("Failed to delete booking")?;
	client.delete(id, &token).await.relay("Failed to delete booking")?;

	info!("deleted booking {id} from list");

	Ok(Redirect::to("/bookings"))
}

async fn get_booking(client: &BookingClient, id: &str) -> Result<Booking, Error> {
	let id = parse_booking_id(id)?;

	client
		.get(id)
		.await
		.relay("Failed to fetch booking")?
		.ok_or_else(|| Error::NotFound(format!("Booking #{id} not found")))
}

/// Ask the booking service about the form's dates if the form calls for it
async fn run_availability_check(
	client: &BookingClient,
	form: &mut BookingForm,
) -> Result<(), Error> {
	if !form.should_check_availability() {
		return Ok(());
	}

	let Some((check_in, check_out)) = form.dates() else {
		return Ok(());
	};

	let ticket = form.begin_check();
	let availability = client
		.check_availability(check_in, check_out)
		.await
		.relay("Failed to fetch bookings")?;

	form.record_availability(ticket, availability.is_available);

	Ok(())
}

fn render_form(
	form: &BookingForm,
	booking_id: Option<u64>,
) -> Result<Response, Error> {
	let page = BookingFormTemplate::from_form(form, booking_id);

	Ok(Html(page.render()?).into_response())
}
