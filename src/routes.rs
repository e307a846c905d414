use axum::Router;
use axum::routing::{get, patch, post};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;
use crate::controllers::bookings::{
	check_availability,
	create_booking,
	delete_booking,
	update_booking,
};
use crate::controllers::healthcheck;
use crate::controllers::pages::{
	bookings_page,
	edit_booking_page,
	new_booking_page,
	sign_in,
	sign_in_page,
	submit_delete_booking,
	submit_edit_booking,
	submit_new_booking,
};

/// Get the app router
pub fn get_app_router(state: AppState) -> Router {
	let request_timeout = state.config.request_timeout;

	Router::new()
		.route("/healthcheck", get(healthcheck))
		.nest("/api", api_routes())
		.merge(page_routes())
		.layer(
			ServiceBuilder::new()
				.layer(TraceLayer::new_for_http())
				.layer(TimeoutLayer::new(request_timeout))
				.layer(CompressionLayer::new()),
		)
		.with_state(state)
}

/// JSON routes relaying to the booking service
fn api_routes() -> Router<AppState> {
	Router::new()
		.route("/bookings", get(check_availability).post(create_booking))
		.route("/bookings/{id}", patch(update_booking).delete(delete_booking))
}

/// Server rendered pages
fn page_routes() -> Router<AppState> {
	Router::new()
		.route("/", get(sign_in_page).post(sign_in))
		.route("/bookings", get(bookings_page))
		.route("/bookings/new", get(new_booking_page).post(submit_new_booking))
		.route(
			"/bookings/{id}/edit",
			get(edit_booking_page).post(submit_edit_booking),
		)
		.route("/bookings/{id}/delete", post(submit_delete_booking))
}
