//! Pseudo-identity of the current visitor
//!
//! Visitors "sign in" by entering a first and last name which are stored in
//! two plain cookies. These values are unsigned, never verified and can be
//! set to anything by the client: they only decide which bookings are
//! listed and whose name a new booking is made under. This is NOT an
//! authentication mechanism.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};

pub const FIRST_NAME_COOKIE: &str = "firstName";
pub const LAST_NAME_COOKIE: &str = "lastName";

/// Names used for bookings created without a pseudo-identity
pub const DEFAULT_FIRST_NAME: &str = "booking";
pub const DEFAULT_LAST_NAME: &str = "admin";

/// The first and last name a visitor claims to have
///
/// ```rs
/// pub async fn foo_route(identity: PseudoIdentity) -> impl IntoResponse {
///     println!("{:?}", identity.names());
///
///     ()
/// }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PseudoIdentity {
	pub first_name: Option<String>,
	pub last_name:  Option<String>,
}

impl<S> FromRequestParts<S> for PseudoIdentity
where
	S: Send + Sync,
{
	type Rejection = Infallible;

	async fn from_request_parts(
		parts: &mut Parts,
		_state: &S,
	) -> Result<Self, Self::Rejection> {
		let jar = CookieJar::from_headers(&parts.headers);

		Ok(Self::from_jar(&jar))
	}
}

impl PseudoIdentity {
	/// Read the identity cookies, ignoring empty values
	#[must_use]
	pub fn from_jar(jar: &CookieJar) -> Self {
		let read = |name: &str| {
			jar.get(name)
				.map(|c| c.value().trim().to_string())
				.filter(|v| !v.is_empty())
		};

		Self {
			first_name: read(FIRST_NAME_COOKIE),
			last_name:  read(LAST_NAME_COOKIE),
		}
	}

	/// Both names, if the visitor provided both
	#[must_use]
	pub fn names(&self) -> Option<(&str, &str)> {
		match (&self.first_name, &self.last_name) {
			(Some(first), Some(last)) => Some((first, last)),
			_ => None,
		}
	}

	#[must_use]
	pub fn first_name_or_default(&self) -> &str {
		self.first_name.as_deref().unwrap_or(DEFAULT_FIRST_NAME)
	}

	#[must_use]
	pub fn last_name_or_default(&self) -> &str {
		self.last_name.as_deref().unwrap_or(DEFAULT_LAST_NAME)
	}

	/// Store a new identity in the given jar
	#[must_use]
	pub fn store(jar: CookieJar, first_name: &str, last_name: &str) -> CookieJar {
		jar.add(Self::cookie(FIRST_NAME_COOKIE, first_name))
			.add(Self::cookie(LAST_NAME_COOKIE, last_name))
	}

	fn cookie(name: &'static str, value: &str) -> Cookie<'static> {
		Cookie::build((name, value.trim().to_string()))
			.path("/")
			.same_site(SameSite::Lax)
			.into()
	}
}
