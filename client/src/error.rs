// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use gloo_net::Error as GlooError;
use std::fmt;

pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Ways a registration request can fail once it has passed validation
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmissionError {
	/// The server refused the registration and said why
	ServerRejected(String),
	/// The server refused the registration without a usable message
	ServerRejectedNoMessage { status: u16 },
	/// The request never produced a server response
	TransportFailure(String),
}

impl SubmissionError {
	/// The text shown to the user in the form's error banner
	pub fn user_message(&self) -> &str {
		match self {
			Self::ServerRejected(message) => message,
			Self::ServerRejectedNoMessage { .. } => UNEXPECTED_ERROR_MESSAGE,
			Self::TransportFailure(_) => FALLBACK_ERROR_MESSAGE,
		}
	}
}

impl From<GlooError> for SubmissionError {
	fn from(error: GlooError) -> Self {
		Self::TransportFailure(error.to_string())
	}
}

impl fmt::Display for SubmissionError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::ServerRejected(message) => write!(f, "The server rejected the registration: {}", message),
			Self::ServerRejectedNoMessage { status } => {
				write!(f, "The server rejected the registration with status {} and no message", status)
			}
			Self::TransportFailure(error) => write!(f, "Failed to reach the registration endpoint: {}", error),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn server_message_shown_verbatim() {
		let error = SubmissionError::ServerRejected(String::from("Username taken"));
		assert_eq!(error.user_message(), "Username taken");
	}

	#[test]
	fn generic_messages() {
		assert_eq!(
			SubmissionError::ServerRejectedNoMessage { status: 500 }.user_message(),
			UNEXPECTED_ERROR_MESSAGE
		);
		assert_eq!(
			SubmissionError::TransportFailure(String::from("connection refused")).user_message(),
			FALLBACK_ERROR_MESSAGE
		);
	}

	#[test]
	fn diagnostics_keep_details() {
		let error = SubmissionError::TransportFailure(String::from("connection refused"));
		assert!(error.to_string().contains("connection refused"));
		assert!(!error.user_message().contains("connection refused"));
	}
}
