// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::SubmissionError;
use gloo_net::http::Request;
use portal_shared::messages::signup::{ApiErrorResponse, SignupRequest};

/// The remote side of registration
pub trait RegistrationApi {
	/// Sends a single registration request. `Ok` means the server accepted the registration.
	async fn register(&self, request: &SignupRequest) -> Result<(), SubmissionError>;
}

/// Registration over HTTP, posting the request as JSON
pub struct HttpRegistrationApi {
	endpoint: String,
}

impl HttpRegistrationApi {
	pub fn new(endpoint: String) -> Self {
		Self { endpoint }
	}
}

impl RegistrationApi for HttpRegistrationApi {
	async fn register(&self, request: &SignupRequest) -> Result<(), SubmissionError> {
		let response = Request::post(&self.endpoint).json(request)?.send().await?;
		if response.ok() {
			return Ok(());
		}

		let status = response.status();
		// The body of a failed response is best-effort; an unreadable one is treated like an empty one.
		let body = response.text().await.unwrap_or_default();
		Err(classify_failure(status, &body))
	}
}

/// Interprets the body of a non-success response from the registration endpoint.
pub fn classify_failure(status: u16, body: &str) -> SubmissionError {
	match serde_json::from_str::<ApiErrorResponse>(body) {
		Ok(ApiErrorResponse { error: Some(message) }) if !message.is_empty() => {
			SubmissionError::ServerRejected(message)
		}
		_ => SubmissionError::ServerRejectedNoMessage { status },
	}
}
