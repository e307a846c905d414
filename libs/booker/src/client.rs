use chrono::NaiveDate;
use futures::future::try_join_all;
use reqwest::header::{ACCEPT, COOKIE};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
	Availability,
	BookerError,
	Booking,
	BookingData,
	BookingIdentifier,
	BookingPatch,
	CreatedBooking,
	widen_window,
};

/// Thin wrapper around the booking service's REST endpoints
///
/// Cloning is cheap, all clones share the same connection pool
#[derive(Clone, Debug)]
pub struct BookingClient {
	http:     reqwest::Client,
	base_url: String,
}

impl BookingClient {
	/// Create a new [`BookingClient`] for the service at `base_url`
	#[must_use]
	pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
		let base_url = base_url.into().trim_end_matches('/').to_string();

		Self { http, base_url }
	}

	fn url(&self, path: &str) -> String { format!("{}{path}", self.base_url) }

	/// Turn a response into `T`, or into an error carrying the upstream
	/// status and body if it was not successful
	async fn parse<T: DeserializeOwned>(
		response: Response,
	) -> Result<T, BookerError> {
		let response = Self::ensure_success(response).await?;

		Ok(response.json::<T>().await?)
	}

	async fn ensure_success(response: Response) -> Result<Response, BookerError> {
		let status = response.status();

		if status.is_success() {
			return Ok(response);
		}

		let body = response.text().await?;

		Err(BookerError::UpstreamRejected { status: status.as_u16(), body })
	}

	/// Check that the booking service is up
	///
	/// # Errors
	/// Fails if the service is unreachable or unhealthy
	#[instrument(skip(self))]
	pub async fn ping(&self) -> Result<(), BookerError> {
		let response = self.http.get(self.url("/ping")).send().await?;

		Self::ensure_success(response).await?;

		Ok(())
	}

	/// Get all bookings made under the given name, ordered by check-in date
	///
	/// Every booking is fetched concurrently; if any of them fails the whole
	/// listing fails.
	///
	/// # Errors
	/// Fails if the lookup or any of the detail requests fails
	#[instrument(skip(self))]
	pub async fn list(
		&self,
		first_name: &str,
		last_name: &str,
	) -> Result<Vec<Booking>, BookerError> {
		if first_name.is_empty() || last_name.is_empty() {
			return Ok(vec![]);
		}

		let response = self
			.http
			.get(self.url("/booking"))
			.query(&[("firstname", first_name), ("lastname", last_name)])
			.send()
			.await?;

		let ids: Vec<BookingIdentifier> = Self::parse(response).await?;

		debug!("resolving {} bookings for {first_name} {last_name}", ids.len());

		let mut bookings =
			try_join_all(ids.iter().map(|id| self.fetch(id.bookingid))).await?;

		bookings.sort_by_key(Booking::check_in);

		Ok(bookings)
	}

	/// Fetch a single booking, treating every failure as an error
	async fn fetch(&self, id: u64) -> Result<Booking, BookerError> {
		let response =
			self.http.get(self.url(&format!("/booking/{id}"))).send().await?;

		let data: BookingData = Self::parse(response).await?;

		Ok(Booking { id, data })
	}

	/// Get a booking by its id, [`None`] if the service does not know it
	///
	/// # Errors
	/// Fails if the service is unreachable or responds with an error other
	/// than `404`
	#[instrument(skip(self))]
	pub async fn get(&self, id: u64) -> Result<Option<Booking>, BookerError> {
		let response =
			self.http.get(self.url(&format!("/booking/{id}"))).send().await?;

		if response.status() == StatusCode::NOT_FOUND {
			return Ok(None);
		}

		let data: BookingData = Self::parse(response).await?;

		Ok(Some(Booking { id, data }))
	}

	/// Create a new booking
	///
	/// # Errors
	/// Fails if the service is unreachable or rejects the booking
	#[instrument(skip(self))]
	pub async fn create(
		&self,
		booking: &BookingData,
	) -> Result<Booking, BookerError> {
		let response =
			self.http.post(self.url("/booking")).json(booking).send().await?;

		let created: CreatedBooking = Self::parse(response).await?;

		debug!("booking service assigned id {}", created.bookingid);

		Ok(created.into())
	}

	/// Partially update an existing booking
	///
	/// # Errors
	/// Fails if the service is unreachable or rejects the update
	#[instrument(skip(self, token))]
	pub async fn update(
		&self,
		id: u64,
		patch: &BookingPatch,
		token: &str,
	) -> Result<Booking, BookerError> {
		let response = self
			.http
			.patch(self.url(&format!("/booking/{id}")))
			.header(ACCEPT, "application/json")
			.header(COOKIE, format!("token={token}"))
			.json(patch)
			.send()
			.await?;

		let data: BookingData = Self::parse(response).await?;

		Ok(Booking { id, data })
	}

	/// Delete a booking
	///
	/// # Errors
	/// Fails if the service is unreachable or refuses the deletion
	#[instrument(skip(self, token))]
	pub async fn delete(&self, id: u64, token: &str) -> Result<(), BookerError> {
		let response = self
			.http
			.delete(self.url(&format!("/booking/{id}")))
			.header(ACCEPT, "application/json")
			.header(COOKIE, format!("token={token}"))
			.send()
			.await?;

		Self::ensure_success(response).await?;

		Ok(())
	}

	/// Ask the booking service which bookings fall inside the given range,
	/// using its own boundary semantics
	///
	/// # Errors
	/// Fails if the service is unreachable or rejects the query
	#[instrument(skip(self))]
	pub async fn find_overlapping(
		&self,
		checkin: NaiveDate,
		checkout: NaiveDate,
	) -> Result<Vec<BookingIdentifier>, BookerError> {
		let response = self
			.http
			.get(self.url("/booking"))
			.query(&[
				("checkin", checkin.to_string()),
				("checkout", checkout.to_string()),
			])
			.send()
			.await?;

		Self::parse(response).await
	}

	/// Check whether any booking overlaps the given stay
	///
	/// The range is padded with [`widen_window`] before querying so that
	/// bookings touching either boundary day count as overlapping.
	///
	/// # Errors
	/// Fails if the service is unreachable or rejects the query
	pub async fn check_availability(
		&self,
		check_in: NaiveDate,
		check_out: NaiveDate,
	) -> Result<Availability, BookerError> {
		let (from, until) = widen_window(check_in, check_out);

		let bookings = self.find_overlapping(from, until).await?;

		Ok(Availability { is_available: bookings.is_empty(), bookings })
	}
}
