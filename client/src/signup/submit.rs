// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::state::{SignupState, SubmitBlocked};
use super::store::{LoadingGuard, SignupStore, ViewStore};
use crate::api::RegistrationApi;
use crate::error::SubmissionError;
use std::cell::Cell;
use std::rc::Rc;

pub const SIGNIN_ROUTE: &str = "/signin";

pub trait Navigator {
	fn navigate(&self, route: &str);
}

/// Navigates through the application router for as long as the originating view is mounted
pub struct RouterNavigator {
	mounted: Rc<Cell<bool>>,
}

impl RouterNavigator {
	pub fn for_view(store: &ViewStore) -> Self {
		Self {
			mounted: store.mounted_flag(),
		}
	}
}

impl Navigator for RouterNavigator {
	fn navigate(&self, route: &str) {
		if self.mounted.get() {
			sycamore_router::navigate(route);
		} else {
			log::debug!("Skipping navigation to {} from an unmounted view", route);
		}
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
	/// Another submission was still running, so nothing was done
	Busy,
	/// Validation failed and no request was made
	Rejected,
	/// The account was created and the user was sent to sign in
	Registered,
	Failed(SubmissionError),
	/// The view went away before the submission could start
	Detached,
}

/// Runs one submission of the sign-up form.
///
/// At most one request is made. The loading flag is held for the whole request and released after the outcome has
/// been applied.
pub async fn submit<S, A, N>(store: &S, api: &A, navigator: &N) -> SubmitOutcome
where
	S: SignupStore,
	A: RegistrationApi,
	N: Navigator,
{
	let request = match store.update(SignupState::begin_submit) {
		Some(Ok(request)) => request,
		Some(Err(SubmitBlocked::Busy)) => {
			log::debug!("Ignoring sign-up submission while another is in progress");
			return SubmitOutcome::Busy;
		}
		Some(Err(SubmitBlocked::Invalid)) => {
			log::debug!("Sign-up input failed validation");
			return SubmitOutcome::Rejected;
		}
		None => return SubmitOutcome::Detached,
	};

	let _loading = LoadingGuard::new(store);
	log::debug!("Submitting registration for user {}", request.username);

	match api.register(&request).await {
		Ok(()) => {
			log::info!("Registered user {}", request.username);
			navigator.navigate(SIGNIN_ROUTE);
			SubmitOutcome::Registered
		}
		Err(error) => {
			log::warn!("{}", error);
			store.update(|state| state.fail(&error));
			SubmitOutcome::Failed(error)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::{FALLBACK_ERROR_MESSAGE, UNEXPECTED_ERROR_MESSAGE};
	use futures::executor::block_on;
	use portal_shared::messages::signup::SignupRequest;
	use portal_shared::validation::RegistrationField;
	use std::cell::RefCell;

	/// Registration endpoint stand-in that records what it was sent and whether the form was loading at the time
	struct FakeApi<'a> {
		store: &'a RefCell<SignupState>,
		response: Result<(), SubmissionError>,
		requests: RefCell<Vec<SignupRequest>>,
		loading_during_request: Cell<bool>,
	}

	impl<'a> FakeApi<'a> {
		fn new(store: &'a RefCell<SignupState>, response: Result<(), SubmissionError>) -> Self {
			Self {
				store,
				response,
				requests: RefCell::new(Vec::new()),
				loading_during_request: Cell::new(false),
			}
		}
	}

	impl RegistrationApi for FakeApi<'_> {
		async fn register(&self, request: &SignupRequest) -> Result<(), SubmissionError> {
			self.requests.borrow_mut().push(request.clone());
			self.loading_during_request
				.set(self.store.borrow().submission.is_loading);
			self.response.clone()
		}
	}

	#[derive(Default)]
	struct FakeNavigator {
		routes: RefCell<Vec<String>>,
	}

	impl Navigator for FakeNavigator {
		fn navigate(&self, route: &str) {
			self.routes.borrow_mut().push(route.to_string());
		}
	}

	fn store_with(email: &str, username: &str, password: &str, confirm_password: &str) -> RefCell<SignupState> {
		let mut state = SignupState::default();
		state.set_field(RegistrationField::Email, email.to_string());
		state.set_field(RegistrationField::Username, username.to_string());
		state.set_field(RegistrationField::Password, password.to_string());
		state.set_field(RegistrationField::ConfirmPassword, confirm_password.to_string());
		RefCell::new(state)
	}

	fn valid_store() -> RefCell<SignupState> {
		store_with("a@b.com", "alice", "password1", "password1")
	}

	#[test]
	fn mismatched_passwords_make_no_request() {
		let store = store_with("a@b.com", "a", "p1", "p2");
		let api = FakeApi::new(&store, Ok(()));
		let navigator = FakeNavigator::default();

		let outcome = block_on(submit(&store, &api, &navigator));

		assert_eq!(outcome, SubmitOutcome::Rejected);
		assert!(api.requests.borrow().is_empty());
		assert!(navigator.routes.borrow().is_empty());
		let state = store.snapshot();
		assert!(state.field_errors.get(RegistrationField::ConfirmPassword).is_some());
		assert!(!state.submission.is_loading);
	}

	#[test]
	fn empty_email_makes_no_request() {
		let store = store_with("", "alice", "password1", "password1");
		let api = FakeApi::new(&store, Ok(()));
		let navigator = FakeNavigator::default();

		assert_eq!(block_on(submit(&store, &api, &navigator)), SubmitOutcome::Rejected);
		assert!(api.requests.borrow().is_empty());
		assert!(store.snapshot().field_errors.get(RegistrationField::Email).is_some());
	}

	#[test]
	fn success_sends_one_request_and_navigates() {
		let store = valid_store();
		let api = FakeApi::new(&store, Ok(()));
		let navigator = FakeNavigator::default();

		let outcome = block_on(submit(&store, &api, &navigator));

		assert_eq!(outcome, SubmitOutcome::Registered);
		let requests = api.requests.borrow();
		assert_eq!(requests.len(), 1);
		let body = serde_json::to_value(&requests[0]).unwrap();
		assert_eq!(
			body,
			serde_json::json!({"email": "a@b.com", "username": "alice", "password": "password1"})
		);
		assert!(api.loading_during_request.get());
		assert_eq!(*navigator.routes.borrow(), [SIGNIN_ROUTE]);
		let state = store.snapshot();
		assert!(!state.submission.is_loading);
		assert!(state.submission.error.is_empty());
	}

	#[test]
	fn server_message_shown_in_banner() {
		let store = valid_store();
		let api = FakeApi::new(&store, Err(SubmissionError::ServerRejected(String::from("Username taken"))));
		let navigator = FakeNavigator::default();

		let outcome = block_on(submit(&store, &api, &navigator));

		assert!(matches!(outcome, SubmitOutcome::Failed(SubmissionError::ServerRejected(_))));
		assert!(navigator.routes.borrow().is_empty());
		let state = store.snapshot();
		assert_eq!(state.submission.error, "Username taken");
		assert!(!state.submission.is_loading);
		assert!(api.loading_during_request.get());
	}

	#[test]
	fn missing_server_message_uses_generic_text() {
		let store = valid_store();
		let api = FakeApi::new(&store, Err(SubmissionError::ServerRejectedNoMessage { status: 500 }));
		let navigator = FakeNavigator::default();

		block_on(submit(&store, &api, &navigator));

		let state = store.snapshot();
		assert_eq!(state.submission.error, UNEXPECTED_ERROR_MESSAGE);
		assert!(!state.submission.is_loading);
	}

	#[test]
	fn transport_failure_uses_fallback_text() {
		let store = valid_store();
		let api = FakeApi::new(&store, Err(SubmissionError::TransportFailure(String::from("fetch failed"))));
		let navigator = FakeNavigator::default();

		block_on(submit(&store, &api, &navigator));

		let state = store.snapshot();
		assert_eq!(state.submission.error, FALLBACK_ERROR_MESSAGE);
		assert!(!state.submission.is_loading);
	}

	#[test]
	fn resubmits_after_failure() {
		let store = valid_store();
		let failing = FakeApi::new(&store, Err(SubmissionError::ServerRejected(String::from("Username taken"))));
		let navigator = FakeNavigator::default();
		block_on(submit(&store, &failing, &navigator));

		store.update(|state| state.set_field(RegistrationField::Username, String::from("alice2")));
		let succeeding = FakeApi::new(&store, Ok(()));
		assert_eq!(block_on(submit(&store, &succeeding, &navigator)), SubmitOutcome::Registered);
		assert_eq!(succeeding.requests.borrow()[0].username, "alice2");
		assert!(store.snapshot().submission.error.is_empty());
	}

	#[test]
	fn busy_form_makes_no_request() {
		let store = valid_store();
		store.update(|state| state.submission.is_loading = true);
		let api = FakeApi::new(&store, Ok(()));
		let navigator = FakeNavigator::default();

		assert_eq!(block_on(submit(&store, &api, &navigator)), SubmitOutcome::Busy);
		assert!(api.requests.borrow().is_empty());
		assert!(store.snapshot().submission.is_loading);
	}
}
