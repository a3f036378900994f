// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::HttpRegistrationApi;
use crate::components::form_messages::{ErrorBanner, FieldError};
use crate::components::icons::{ArrowRightIcon, LoadingSpinner};
use crate::components::password_input::PasswordInput;
use crate::config::ClientConfig;
use crate::dom::input_value;
use crate::page_utils::set_page_title;
use crate::signup::state::PasswordToggle;
use crate::signup::store::{SignupStore, ViewStore};
use crate::signup::submit::{submit, RouterNavigator, SIGNIN_ROUTE};
use portal_shared::messages::signup::SIGNUP_API_ROUTE;
use portal_shared::validation::RegistrationField;
use sycamore::futures::spawn_local;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn SignUpView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating sign-up view");
	set_page_title("Sign Up");

	let config: &ClientConfig = use_context(ctx);
	let store = create_ref(ctx, ViewStore::new(ctx));

	let is_loading = create_memo(ctx, move || store.signal().get().submission.is_loading);
	let banner = create_memo(ctx, move || store.signal().get().submission.error.clone());
	let field_error = move |field: RegistrationField| {
		create_memo(ctx, move || store.signal().get().field_errors.get(field).map(str::to_string))
	};
	let email_error = field_error(RegistrationField::Email);
	let username_error = field_error(RegistrationField::Username);

	let text_input_handler = move |field: RegistrationField| {
		move |event: WebEvent| {
			if let Some(value) = input_value(&event) {
				store.update(|state| state.set_field(field, value));
			}
		}
	};

	let endpoint = config.endpoint(SIGNUP_API_ROUTE);
	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		// Submission continues in the background after the view goes away; the store drops its updates from then on.
		let store = store.clone();
		let api = HttpRegistrationApi::new(endpoint.clone());
		let navigator = RouterNavigator::for_view(&store);
		spawn_local(async move {
			let outcome = submit(&store, &api, &navigator).await;
			log::debug!("Sign-up submission finished: {:?}", outcome);
		});
	};

	view! {
		ctx,
		div(id="signup") {
			h2 { "Let's get started!" }
			ErrorBanner(message=banner)
			form(id="signup_form", on:submit=form_submission_handler) {
				input(
					id=RegistrationField::Email.name(),
					type="text",
					title="Email",
					placeholder="Email",
					on:input=text_input_handler(RegistrationField::Email)
				)
				FieldError(field=RegistrationField::Email, message=email_error)
				input(
					id=RegistrationField::Username.name(),
					type="text",
					title="Username",
					placeholder="Username",
					on:input=text_input_handler(RegistrationField::Username)
				)
				FieldError(field=RegistrationField::Username, message=username_error)
				PasswordInput(store=store, toggle=PasswordToggle::Password, title="Password", placeholder="Password")
				PasswordInput(
					store=store,
					toggle=PasswordToggle::ConfirmPassword,
					title="Confirm Password",
					placeholder="Confirm password"
				)
				button(id="signup_submit", type="submit", disabled=*is_loading.get()) {
					span(class="signup_submit_text") { "Continue" }
					(if *is_loading.get() {
						view! { ctx, LoadingSpinner(size=12) }
					} else {
						view! { ctx, ArrowRightIcon(size=20) }
					})
				}
			}
			p(id="signup_signin_link") {
				"Already a member? "
				a(href=SIGNIN_ROUTE) { "Log in" }
			}
		}
	}
}
