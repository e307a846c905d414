//! In-process stand-in for the external booking service
//!
//! Mirrors the boundary semantics of the real service: a checkin/checkout
//! search only matches bookings that check in strictly after `checkin` and
//! check out strictly before `checkout`.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Json;
use axum_extra::extract::CookieJar;
use booker::{BookingData, BookingDates};
use chrono::NaiveDate;
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const VALID_TOKEN: &str = "abc123";

#[derive(Default)]
pub struct MockState {
	pub bookings:          BTreeMap<u64, BookingData>,
	pub next_id:           u64,
	/// Answer `/auth` like the real service does for bad credentials
	pub reject_credentials: bool,
	/// Make the detail endpoint fail for this id
	pub broken_booking:    Option<u64>,
	/// Every `(checkin, checkout)` search received
	pub window_queries:    Vec<(String, String)>,
	/// Number of name searches received
	pub name_queries:      usize,
	/// Number of requests received in total
	pub requests:          usize,
	/// Every patch body received
	pub patches:           Vec<Value>,
	/// Every create body received
	pub created:           Vec<Value>,
}

#[derive(Clone)]
pub struct MockBooker {
	pub base_url: String,
	state:        Arc<Mutex<MockState>>,
}

type Shared = Arc<Mutex<MockState>>;

impl MockBooker {
	/// Start a mock booking service on an ephemeral port
	pub async fn start() -> Self {
		let state = Arc::new(Mutex::new(MockState { next_id: 1, ..MockState::default() }));

		let app = Router::new()
			.route("/ping", get(ping))
			.route("/auth", post(auth))
			.route("/booking", get(search).post(create))
			.route(
				"/booking/{id}",
				get(detail).patch(update).delete(remove),
			)
			.with_state(state.clone());

		let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
		let base_url = format!("http://{}", listener.local_addr().unwrap());

		tokio::spawn(async move {
			axum::serve(listener, app).await.unwrap();
		});

		Self { base_url, state }
	}

	pub fn state(&self) -> MutexGuard<'_, MockState> { self.state.lock().unwrap() }

	/// Store a booking and return its id
	pub fn insert(
		&self,
		first_name: &str,
		last_name: &str,
		checkin: &str,
		checkout: &str,
		additional_needs: &str,
	) -> u64 {
		let mut state = self.state();

		let id = state.next_id;
		state.next_id += 1;

		state.bookings.insert(id, BookingData {
			firstname:       first_name.to_string(),
			lastname:        last_name.to_string(),
			totalprice:      100,
			depositpaid:     true,
			bookingdates:    BookingDates {
				checkin:  date(checkin),
				checkout: date(checkout),
			},
			additionalneeds: Some(additional_needs.to_string()),
		});

		id
	}
}

pub fn date(value: &str) -> NaiveDate {
	NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

fn has_valid_token(jar: &CookieJar) -> bool {
	jar.get("token").is_some_and(|c| c.value() == VALID_TOKEN)
}

async fn ping(State(state): State<Shared>) -> StatusCode {
	state.lock().unwrap().requests += 1;

	StatusCode::CREATED
}

async fn auth(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
	let mut state = state.lock().unwrap();
	state.requests += 1;

	if state.reject_credentials || body["username"] != "admin" {
		return Json(json!({ "reason": "Bad credentials" })).into_response();
	}

	Json(json!({ "token": VALID_TOKEN })).into_response()
}

async fn search(
	State(state): State<Shared>,
	Query(query): Query<HashMap<String, String>>,
) -> Response {
	let mut state = state.lock().unwrap();
	state.requests += 1;

	let ids: Vec<Value> = if let (Some(checkin), Some(checkout)) =
		(query.get("checkin"), query.get("checkout"))
	{
		state.window_queries.push((checkin.clone(), checkout.clone()));

		let (from, until) = (date(checkin), date(checkout));

		state
			.bookings
			.iter()
			.filter(|(_, b)| {
				b.bookingdates.checkin > from && b.bookingdates.checkout < until
			})
			.map(|(id, _)| json!({ "bookingid": id }))
			.collect()
	} else {
		state.name_queries += 1;

		let first = query.get("firstname").cloned().unwrap_or_default();
		let last = query.get("lastname").cloned().unwrap_or_default();

		state
			.bookings
			.iter()
			.filter(|(_, b)| b.firstname == first && b.lastname == last)
			.map(|(id, _)| json!({ "bookingid": id }))
			.collect()
	};

	Json(ids).into_response()
}

async fn detail(State(state): State<Shared>, Path(id): Path<u64>) -> Response {
	let mut state = state.lock().unwrap();
	state.requests += 1;

	if state.broken_booking == Some(id) {
		return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
			.into_response();
	}

	match state.bookings.get(&id) {
		Some(booking) => Json(booking.clone()).into_response(),
		None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
	}
}

async fn create(
	State(state): State<Shared>,
	Json(body): Json<Value>,
) -> Response {
	let mut state = state.lock().unwrap();
	state.requests += 1;
	state.created.push(body.clone());

	let Ok(booking) = serde_json::from_value::<BookingData>(body) else {
		return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
			.into_response();
	};

	let id = state.next_id;
	state.next_id += 1;
	state.bookings.insert(id, booking.clone());

	Json(json!({ "bookingid": id, "booking": booking })).into_response()
}

async fn update(
	State(state): State<Shared>,
	jar: CookieJar,
	Path(id): Path<u64>,
	Json(body): Json<Value>,
) -> Response {
	let mut state = state.lock().unwrap();
	state.requests += 1;

	if !has_valid_token(&jar) {
		return (StatusCode::FORBIDDEN, "Forbidden").into_response();
	}

	state.patches.push(body.clone());

	let Some(booking) = state.bookings.get_mut(&id) else {
		return (StatusCode::NOT_FOUND, "Not Found").into_response();
	};

	if let Some(needs) = body["additionalneeds"].as_str() {
		booking.additionalneeds = Some(needs.to_string());
	}

	if let Ok(dates) =
		serde_json::from_value::<BookingDates>(body["bookingdates"].clone())
	{
		booking.bookingdates = dates;
	}

	Json(booking.clone()).into_response()
}

async fn remove(
	State(state): State<Shared>,
	jar: CookieJar,
	Path(id): Path<u64>,
) -> Response {
	let mut state = state.lock().unwrap();
	state.requests += 1;

	if !has_valid_token(&jar) {
		return (StatusCode::FORBIDDEN, "Forbidden").into_response();
	}

	match state.bookings.remove(&id) {
		Some(_) => (StatusCode::CREATED, "Created").into_response(),
		None => (StatusCode::NOT_FOUND, "Not Found").into_response(),
	}
}
