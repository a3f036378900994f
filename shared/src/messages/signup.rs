// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};

/// Path of the registration endpoint, relative to the API base
pub const SIGNUP_API_ROUTE: &str = "/api/auth/signup";

pub const USERNAME_LENGTH_LIMIT: usize = 64;
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Data from the client when trying to register an account
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SignupRequest {
	pub email: String,
	pub username: String,
	pub password: String,
}

/// Body the server sends alongside a failed registration
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ApiErrorResponse {
	#[serde(default)]
	pub error: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn request_serializes_three_fields() {
		let request = SignupRequest {
			email: String::from("a@b.com"),
			username: String::from("a"),
			password: String::from("hunter22"),
		};
		let json = serde_json::to_value(&request).unwrap();
		let object = json.as_object().unwrap();
		assert_eq!(object.len(), 3);
		assert_eq!(object["email"], "a@b.com");
		assert_eq!(object["username"], "a");
		assert_eq!(object["password"], "hunter22");
		assert!(!object.contains_key("confirmPassword"));
	}

	#[test]
	fn error_body_without_message() {
		let body: ApiErrorResponse = serde_json::from_str(r#"{"status":409}"#).unwrap();
		assert_eq!(body.error, None);
	}

	#[test]
	fn error_body_with_message() {
		let body: ApiErrorResponse = serde_json::from_str(r#"{"error":"Username taken"}"#).unwrap();
		assert_eq!(body.error.as_deref(), Some("Username taken"));
	}
}
