use std::time::Duration;

use booker::{AuthTokenFetcher, BookingClient, Credentials};
use url::Url;

#[derive(Clone, Debug)]
pub struct Config {
	pub booker_url:  String,
	pub credentials: Credentials,

	pub bind_address:    String,
	pub request_timeout: Duration,
}

impl Config {
	fn get_env_var(var: &str) -> String {
		std::env::var(var).unwrap_or_else(|_| panic!("{var} must be set"))
	}

	fn get_env_var_or(var: &str, default: &str) -> String {
		std::env::var(var).unwrap_or_else(|_| default.to_string())
	}

	/// Create a new [`Config`] from environment variables
	///
	/// # Panics
	/// Panics if an environment variable is missing or malformed
	#[must_use]
	pub fn from_env() -> Self {
		let booker_url = Self::get_env_var("BOOKER_URL");
		let booker_url = Url::parse(&booker_url)
			.unwrap_or_else(|e| panic!("BOOKER_URL must be a valid url -- {e}"))
			.as_str()
			.trim_end_matches('/')
			.to_string();

		let credentials = Credentials {
			username: Self::get_env_var("AUTH_USERNAME"),
			password: Self::get_env_var("AUTH_PASSWORD"),
		};

		let bind_address = Self::get_env_var_or("BIND_ADDRESS", "0.0.0.0:80");
		let request_timeout = Duration::from_secs(
			Self::get_env_var_or("REQUEST_TIMEOUT_SECONDS", "10")
				.parse::<u64>()
				.expect("REQUEST_TIMEOUT_SECONDS must be a number"),
		);

		Self { booker_url, credentials, bind_address, request_timeout }
	}

	/// Create the HTTP client used for every call to the booking service
	///
	/// # Panics
	/// Panics if the TLS backend cannot be initialized
	#[must_use]
	pub fn create_http_client(&self) -> reqwest::Client {
		reqwest::Client::builder()
			.user_agent(concat!(
				env!("CARGO_PKG_NAME"),
				"/",
				env!("CARGO_PKG_VERSION")
			))
			.build()
			.expect("COULD NOT BUILD HTTP CLIENT")
	}

	#[must_use]
	pub fn create_booking_client(&self, http: &reqwest::Client) -> BookingClient {
		BookingClient::new(http.clone(), &self.booker_url)
	}

	#[must_use]
	pub fn create_token_fetcher(
		&self,
		http: &reqwest::Client,
	) -> AuthTokenFetcher {
		AuthTokenFetcher::new(
			http.clone(),
			&self.booker_url,
			self.credentials.clone(),
		)
	}
}
