//! # Booker web
//!
//! Booking management frontend that relays every booking operation to an
//! external booking service

#[macro_use]
extern crate tracing;

use axum::extract::FromRef;
use booker::{AuthTokenFetcher, BookingClient};

mod config;

pub mod controllers;
pub mod form;
pub mod identity;
pub mod routes;
pub mod schemas;
pub mod views;

pub use config::*;

/// Common state of the app
#[derive(Clone)]
pub struct AppState {
	pub config:         Config,
	pub booking_client: BookingClient,
	pub token_fetcher:  AuthTokenFetcher,
}

impl AppState {
	/// Build the state for a given config, sharing one HTTP client between
	/// the booking client and the token fetcher
	#[must_use]
	pub fn new(config: Config) -> Self {
		let http_client = config.create_http_client();

		let booking_client = config.create_booking_client(&http_client);
		let token_fetcher = config.create_token_fetcher(&http_client);

		Self { config, booking_client, token_fetcher }
	}
}

impl FromRef<AppState> for Config {
	fn from_ref(input: &AppState) -> Self { input.config.clone() }
}

impl FromRef<AppState> for BookingClient {
	fn from_ref(input: &AppState) -> Self { input.booking_client.clone() }
}

impl FromRef<AppState> for AuthTokenFetcher {
	fn from_ref(input: &AppState) -> Self { input.token_fetcher.clone() }
}
