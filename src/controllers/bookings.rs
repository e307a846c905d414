//! JSON routes relaying booking operations to the booking service

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use booker::{AuthTokenFetcher, BookingClient};
use common::{Error, Relay};

use crate::identity::PseudoIdentity;
use crate::schemas::booking::{
	AvailabilityQuery,
	AvailabilityResponse,
	BookingResponse,
	CreateBookingRequest,
	MessageResponse,
	UpdateBookingRequest,
	parse_booking_id,
};

/// Create a booking under the visitor's pseudo-identity
#[instrument(skip(client))]
pub(crate) async fn create_booking(
	State(client): State<BookingClient>,
	identity: PseudoIdentity,
	Json(request): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, Error> {
	let payload = request.to_booking_data(&identity)?;

	let booking =
		client.create(&payload).await.relay("Failed to create booking")?;

	info!(
		"created booking {} for {} {}",
		booking.id, booking.data.firstname, booking.data.lastname
	);

	let response = BookingResponse {
		message: "Booking Created Successfully".to_string(),
		data:    booking,
	};

	Ok((StatusCode::OK, Json(response)))
}

/// Check whether a stay overlaps any existing booking
#[instrument(skip(client))]
pub(crate) async fn check_availability(
	State(client): State<BookingClient>,
	Query(query): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, Error> {
	let (check_in, check_out) = query.dates()?;

	let availability = client
		.check_availability(check_in, check_out)
		.await
		.relay("Failed to fetch bookings")?;

	let response = AvailabilityResponse {
		message:      "success".to_string(),
		is_available: availability.is_available,
		bookings:     availability.bookings,
	};

	Ok((StatusCode::OK, Json(response)))
}

/// Partially update a booking
#[instrument(skip(client, tokens))]
pub(crate) async fn update_booking(
	State(client): State<BookingClient>,
	State(tokens): State<AuthTokenFetcher>,
	Path(id): Path<String>,
	Json(request): Json<UpdateBookingRequest>,
) -> Result<impl IntoResponse, Error> {
	let id = parse_booking_id(&id)?;
	let patch = request.to_patch()?;

	let token = tokens.fetch_token().await.relay("Failed to update booking")?;

	let booking = client
		.update(id, &patch, &token)
		.await
		.relay("Failed to update booking")?;

	info!("updated booking {id}");

	let response = BookingResponse {
		message: "Booking Updated Successfully".to_string(),
		data:    booking,
	};

	Ok((StatusCode::OK, Json(response)))
}

/// Delete a booking
#[instrument(skip(client, tokens))]
pub(crate) async fn delete_booking(
	State(client): State<BookingClient>,
	State(tokens): State<AuthTokenFetcher>,
	Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
	let id = parse_booking_id(&id)?;

	let token = tokens.fetch_token().await.relay("Failed to delete booking")?;

	client.delete(id, &token).await.relay("Failed to delete booking")?;

	info!("deleted booking {id}");

	let response = MessageResponse { message: "Booking Deleted".to_string() };

	Ok((StatusCode::OK, Json(response)))
}
