//! Library-wide error types and [`From`] impls

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use booker::BookerError;
use thiserror::Error;

/// Message shown to callers for every failure they cannot act upon
pub const SUPPORT_MESSAGE: &str =
	"Internal Server Error. Please contact support.";

/// Top level application error, can be converted into a [`Response`]
#[derive(Debug, Error)]
pub enum Error {
	/// Opaque internal server error
	#[error("Internal Server Error. Please contact support.")]
	InternalServerError,
	/// Some required data in the request was missing
	#[error("{0}")]
	MissingParameters(String),
	/// Some data in the request could not be parsed
	#[error("{0}")]
	InvalidParameters(String),
	/// Resource not found
	#[error("{0}")]
	NotFound(String),
	/// The booking service refused a relayed request
	#[error("{message}")]
	Upstream {
		message: String,
		status:  StatusCode,
		body:    String,
	},
	/// Resource could not be validated
	#[error("{0}")]
	ValidationError(String),
}

/// Convert an error into a [`Response`]
impl IntoResponse for Error {
	fn into_response(self) -> Response {
		let message = self.to_string();

		let (status, data) = match self {
			Self::InternalServerError => {
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					serde_json::json!({ "message": message }),
				)
			},
			Self::MissingParameters(_) | Self::InvalidParameters(_) => {
				(StatusCode::BAD_REQUEST, serde_json::json!({ "message": message }))
			},
			Self::NotFound(_) => {
				(StatusCode::NOT_FOUND, serde_json::json!({ "message": message }))
			},
			Self::ValidationError(_) => {
				(
					StatusCode::UNPROCESSABLE_ENTITY,
					serde_json::json!({ "message": message }),
				)
			},
			Self::Upstream { status, body, .. } => {
				warn!("booking service responded with {status} -- {body}");

				(status, serde_json::json!({ "message": message, "error": body }))
			},
		};

		(status, axum::Json(data)).into_response()
	}
}

/// A list of possible internal errors
///
/// API end users should never see these details
#[derive(Debug, Error)]
pub enum InternalServerError {
	/// The booking service was unreachable or failed in a way the caller
	/// cannot act upon
	#[error("booking service error -- {0}")]
	BookerError(BookerError),
	/// Error rendering a page
	#[error("template error -- {0:?}")]
	TemplateError(askama::Error),
}

// Map internal server errors to application errors
impl From<InternalServerError> for Error {
	fn from(value: InternalServerError) -> Self {
		error!("internal server error -- {value}");

		Self::InternalServerError
	}
}

/// Map template errors to application errors
impl From<askama::Error> for Error {
	fn from(value: askama::Error) -> Self {
		InternalServerError::TemplateError(value).into()
	}
}

/// Map validation errors to application errors
impl From<validator::ValidationErrors> for Error {
	fn from(err: validator::ValidationErrors) -> Self {
		let errs = err.field_errors();
		let repr = errs
			.values()
			.map(|v| {
				v.iter()
					.map(ToString::to_string)
					.collect::<Vec<String>>()
					.join("\n")
			})
			.collect::<Vec<String>>()
			.join("\n");

		Self::ValidationError(repr)
	}
}

fn relay_error(err: BookerError, message: &str) -> Error {
	match err {
		BookerError::UpstreamRejected { status, body } => {
			let status =
				StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);

			Error::Upstream { message: message.to_string(), status, body }
		},
		err => InternalServerError::BookerError(err).into(),
	}
}

/// Relay booking service failures to the caller
///
/// Rejections keep their upstream status and body under the given message,
/// every other failure is logged and collapses into
/// [`Error::InternalServerError`]
pub trait Relay<T> {
	/// # Errors
	/// Fails if `self` is an error
	fn relay(self, message: &str) -> Result<T, Error>;
}

impl<T> Relay<T> for Result<T, BookerError> {
	fn relay(self, message: &str) -> Result<T, Error> {
		self.map_err(|err| relay_error(err, message))
	}
}
