use std::time::Duration;

use axum::http::StatusCode;
use axum_test::TestServer;
use booker::Credentials;
use booker_web::{AppState, Config, routes};

pub mod mock_booker;
pub mod wrappers;

pub use mock_booker::MockBooker;

#[allow(dead_code)]
pub struct TestEnv {
	pub app:    TestServer,
	pub booker: MockBooker,
}

impl TestEnv {
	/// Get a test environment relaying to a fresh mock booking service
	///
	/// # Panics
	/// Panics if building the test server fails
	pub async fn new() -> Self {
		let booker = MockBooker::start().await;
		let booker_url = booker.base_url.clone();

		Self::relaying_to(booker, booker_url)
	}

	/// Get a test environment whose app relays to a booking service that
	/// cannot be reached
	///
	/// # Panics
	/// Panics if building the test server fails
	#[allow(dead_code)]
	pub async fn unreachable() -> Self {
		let booker = MockBooker::start().await;

		Self::relaying_to(booker, "http://127.0.0.1:1".to_string())
	}

	fn relaying_to(booker: MockBooker, booker_url: String) -> Self {
		let config = Config {
			booker_url,
			credentials:     Credentials {
				username: "admin".to_string(),
				password: "password123".to_string(),
			},
			bind_address:    "127.0.0.1:0".to_string(),
			request_timeout: Duration::from_secs(5),
		};

		let state = AppState::new(config);
		let app = routes::get_app_router(state);

		let test_server =
			TestServer::builder().save_cookies().build(app).unwrap();

		TestEnv { app: test_server, booker }
	}

	/// Sign in under the given pseudo-identity, the cookies are kept for
	/// every following request
	#[allow(dead_code)]
	pub async fn sign_in(&self, first_name: &str, last_name: &str) {
		self.app
			.post("/")
			.form(&[("firstName", first_name), ("lastName", last_name)])
			.await
			.assert_status(StatusCode::SEE_OTHER);
	}
}
