// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::SubmissionError;
use portal_shared::messages::signup::SignupRequest;
use portal_shared::validation::{validate, FieldErrors, RegistrationField, RegistrationInput};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SubmissionState {
	/// Set from the moment a validated submission starts until it settles
	pub is_loading: bool,
	/// Banner message for the last failed submission; empty when there is nothing to show
	pub error: String,
}

/// Why a submission attempt did not result in a request
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitBlocked {
	/// A submission is already in flight
	Busy,
	/// The input failed validation; the field errors say why
	Invalid,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PasswordToggle {
	Password,
	ConfirmPassword,
}

impl PasswordToggle {
	pub fn field(self) -> RegistrationField {
		match self {
			Self::Password => RegistrationField::Password,
			Self::ConfirmPassword => RegistrationField::ConfirmPassword,
		}
	}
}

/// Whether each password field shows its contents as plain text
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct VisibilityState {
	pub password: bool,
	pub confirm_password: bool,
}

impl VisibilityState {
	fn flag_mut(&mut self, toggle: PasswordToggle) -> &mut bool {
		match toggle {
			PasswordToggle::Password => &mut self.password,
			PasswordToggle::ConfirmPassword => &mut self.confirm_password,
		}
	}

	pub fn is_revealed(&self, toggle: PasswordToggle) -> bool {
		match toggle {
			PasswordToggle::Password => self.password,
			PasswordToggle::ConfirmPassword => self.confirm_password,
		}
	}
}

/// Everything the sign-up view knows about itself
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SignupState {
	pub input: RegistrationInput,
	pub field_errors: FieldErrors,
	pub submission: SubmissionState,
	pub visibility: VisibilityState,
}

impl SignupState {
	pub fn set_field(&mut self, field: RegistrationField, value: String) {
		*self.input.value_mut(field) = value;
	}

	/// Starts a submission attempt from the current input.
	///
	/// Returns the request to send when the input is valid and no other submission is running. Every attempt that is
	/// allowed to start replaces the field errors and clears the banner, so only the outcome of the latest attempt is
	/// ever displayed.
	pub fn begin_submit(&mut self) -> Result<SignupRequest, SubmitBlocked> {
		if self.submission.is_loading {
			return Err(SubmitBlocked::Busy);
		}
		self.submission.error.clear();
		match validate(&self.input) {
			Ok(request) => {
				self.field_errors = FieldErrors::default();
				self.submission.is_loading = true;
				Ok(request)
			}
			Err(errors) => {
				self.field_errors = errors;
				Err(SubmitBlocked::Invalid)
			}
		}
	}

	pub fn fail(&mut self, error: &SubmissionError) {
		self.submission.error = error.user_message().to_string();
	}

	pub fn finish(&mut self) {
		self.submission.is_loading = false;
	}

	pub fn reveal(&mut self, toggle: PasswordToggle) {
		*self.visibility.flag_mut(toggle) = true;
	}

	pub fn conceal(&mut self, toggle: PasswordToggle) {
		*self.visibility.flag_mut(toggle) = false;
	}

	pub fn toggle(&mut self, toggle: PasswordToggle) {
		if self.visibility.is_revealed(toggle) {
			self.conceal(toggle);
		} else {
			self.reveal(toggle);
		}
	}

	/// The `type` attribute for the password input controlled by the toggle
	pub fn input_type(&self, toggle: PasswordToggle) -> &'static str {
		if self.visibility.is_revealed(toggle) {
			"text"
		} else {
			"password"
		}
	}
}
