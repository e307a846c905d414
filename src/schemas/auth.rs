use serde::{Deserialize, Serialize};
use validator::Validate;

/// Sign-in form, setting the visitor's pseudo-identity
#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
	#[validate(length(
		min = 1,
		max = 64,
		message = "first name must be between 1 and 64 characters long",
		code = "first-name-length"
	))]
	pub first_name: String,
	#[validate(length(
		min = 1,
		max = 64,
		message = "last name must be between 1 and 64 characters long",
		code = "last-name-length"
	))]
	pub last_name:  String,
}
