use serde::{Deserialize, Serialize};

use crate::BookerError;

/// Fixed credentials used to obtain tokens from the booking service
#[derive(Clone, Deserialize, Serialize)]
pub struct Credentials {
	pub username: String,
	pub password: String,
}

impl std::fmt::Debug for Credentials {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Credentials")
			.field("username", &self.username)
			.field("password", &"<redacted>")
			.finish()
	}
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
	token: Option<String>,
}

/// Exchanges the configured [`Credentials`] for a short lived token
///
/// Tokens are never cached, every call performs a fresh exchange.
#[derive(Clone, Debug)]
pub struct AuthTokenFetcher {
	http:        reqwest::Client,
	base_url:    String,
	credentials: Credentials,
}

impl AuthTokenFetcher {
	#[must_use]
	pub fn new(
		http: reqwest::Client,
		base_url: impl Into<String>,
		credentials: Credentials,
	) -> Self {
		let base_url = base_url.into().trim_end_matches('/').to_string();

		Self { http, base_url, credentials }
	}

	/// Obtain a new token
	///
	/// The booking service answers bad credentials with a successful status
	/// and a `reason` instead of a `token`, which is reported as
	/// [`BookerError::AuthFailed`] as well.
	///
	/// # Errors
	/// Fails if the service is unreachable or refuses the credentials
	#[instrument(skip(self))]
	pub async fn fetch_token(&self) -> Result<String, BookerError> {
		let response = self
			.http
			.post(format!("{}/auth", self.base_url))
			.json(&self.credentials)
			.send()
			.await?;

		let status = response.status();
		let body = response.text().await?;

		if !status.is_success() {
			return Err(BookerError::AuthFailed(body));
		}

		match serde_json::from_str::<AuthResponse>(&body) {
			Ok(AuthResponse { token: Some(token) }) => {
				debug!("obtained token for {}", self.credentials.username);

				Ok(token)
			},
			_ => Err(BookerError::AuthFailed(body)),
		}
	}
}
