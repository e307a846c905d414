use thiserror::Error;

/// Any failure talking to the booking service
#[derive(Debug, Error)]
pub enum BookerError {
	/// The service could not be reached or answered with garbage
	#[error("booking service unavailable -- {0}")]
	UpstreamUnavailable(#[from] reqwest::Error),
	/// The service answered with a non-success status
	#[error("booking service responded with {status} -- {body}")]
	UpstreamRejected { status: u16, body: String },
	/// Exchanging the configured credentials for a token failed
	#[error("failed to obtain token -- {0}")]
	AuthFailed(String),
}
