use serde::{Deserialize, Serialize};

/// What the visitor asked for when posting a booking form
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormIntent {
	/// Only check whether the selected dates are free
	Check,
	/// Save the booking
	#[default]
	Submit,
}

/// The fields of a create or edit booking form as posted by the browser
///
/// Date inputs post an empty string when nothing was selected
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingFormSubmission {
	#[serde(default)]
	pub check_in_date:    String,
	#[serde(default)]
	pub check_out_date:   String,
	#[serde(default)]
	pub additional_needs: String,
	#[serde(default)]
	pub intent:           FormIntent,
}
