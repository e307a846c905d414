//! Defines controller functions that correspond to individual routes

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use booker::BookingClient;
use common::{Error, Relay};
use serde_json::{Value, json};

pub mod bookings;
pub mod pages;

/// Check if the webserver and the booking service are functional
pub(crate) async fn healthcheck(
	State(client): State<BookingClient>,
) -> Result<(StatusCode, Json<Value>), Error> {
	client.ping().await.relay("Booking service is unhealthy")?;

	Ok((StatusCode::OK, Json(json!({ "status": "ok" }))))
}
