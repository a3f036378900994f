// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rules applied to registration input before it is sent to the server.

use crate::messages::signup::{SignupRequest, PASSWORD_MIN_LENGTH, USERNAME_LENGTH_LIMIT};
use std::collections::BTreeMap;
use std::fmt;

/// Raw values of the sign-up form fields
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RegistrationInput {
	pub email: String,
	pub username: String,
	pub password: String,
	pub confirm_password: String,
}

impl RegistrationInput {
	pub fn value(&self, field: RegistrationField) -> &str {
		match field {
			RegistrationField::Email => &self.email,
			RegistrationField::Username => &self.username,
			RegistrationField::Password => &self.password,
			RegistrationField::ConfirmPassword => &self.confirm_password,
		}
	}

	pub fn value_mut(&mut self, field: RegistrationField) -> &mut String {
		match field {
			RegistrationField::Email => &mut self.email,
			RegistrationField::Username => &mut self.username,
			RegistrationField::Password => &mut self.password,
			RegistrationField::ConfirmPassword => &mut self.confirm_password,
		}
	}
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum RegistrationField {
	Email,
	Username,
	Password,
	ConfirmPassword,
}

impl RegistrationField {
	pub const ALL: [Self; 4] = [Self::Email, Self::Username, Self::Password, Self::ConfirmPassword];

	/// The field name as used in form element IDs and error maps
	pub fn name(self) -> &'static str {
		match self {
			Self::Email => "email",
			Self::Username => "username",
			Self::Password => "password",
			Self::ConfirmPassword => "confirmPassword",
		}
	}
}

impl fmt::Display for RegistrationField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.name())
	}
}

/// Validation messages keyed by the field they belong to. Fields without an entry passed validation.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldErrors(BTreeMap<RegistrationField, String>);

impl FieldErrors {
	pub fn get(&self, field: RegistrationField) -> Option<&str> {
		self.0.get(&field).map(String::as_str)
	}

	pub fn set(&mut self, field: RegistrationField, message: impl Into<String>) {
		self.0.insert(field, message.into());
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = (RegistrationField, &str)> {
		self.0.iter().map(|(field, message)| (*field, message.as_str()))
	}
}

/// Checks the form input, producing the request to send or the per-field problems that prevent sending it.
///
/// Email and username are trimmed in the accepted request; the password is passed through untouched and the
/// confirmation is only compared against it.
pub fn validate(input: &RegistrationInput) -> Result<SignupRequest, FieldErrors> {
	let mut errors = FieldErrors::default();

	let email = input.email.trim();
	if email.is_empty() {
		errors.set(RegistrationField::Email, "Email is required");
	} else if !is_well_formed_email(email) {
		errors.set(RegistrationField::Email, "Please enter a valid email address");
	}

	let username = input.username.trim();
	if username.is_empty() {
		errors.set(RegistrationField::Username, "Username is required");
	} else if username.chars().count() > USERNAME_LENGTH_LIMIT {
		errors.set(RegistrationField::Username, "Username is too long");
	}

	if input.password.is_empty() {
		errors.set(RegistrationField::Password, "Password is required");
	} else if input.password.chars().count() < PASSWORD_MIN_LENGTH {
		errors.set(
			RegistrationField::Password,
			format!("Password must be at least {} characters", PASSWORD_MIN_LENGTH),
		);
	}

	if input.confirm_password.is_empty() {
		errors.set(RegistrationField::ConfirmPassword, "Please confirm your password");
	} else if input.confirm_password != input.password {
		errors.set(RegistrationField::ConfirmPassword, "Passwords do not match");
	}

	if !errors.is_empty() {
		return Err(errors);
	}

	Ok(SignupRequest {
		email: email.to_string(),
		username: username.to_string(),
		password: input.password.clone(),
	})
}

fn is_well_formed_email(email: &str) -> bool {
	if email.chars().any(char::is_whitespace) {
		return false;
	}
	let Some((local, domain)) = email.split_once('@') else {
		return false;
	};
	if local.is_empty() || domain.contains('@') {
		return false;
	}
	let labels: Vec<&str> = domain.split('.').collect();
	labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}
