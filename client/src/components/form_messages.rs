// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use portal_shared::validation::RegistrationField;
use sycamore::prelude::*;

#[derive(Prop)]
pub struct ErrorBannerProps<'a> {
	message: &'a ReadSignal<String>,
}

/// Submission failure shown above a form. Renders nothing while the message is empty.
#[component]
pub fn ErrorBanner<'a, G: Html>(ctx: Scope<'a>, props: ErrorBannerProps<'a>) -> View<G> {
	view! {
		ctx,
		(if props.message.get().is_empty() {
			view! { ctx, }
		} else {
			let message = (*props.message.get()).clone();
			view! {
				ctx,
				div(class="form_error_banner") { (message) }
			}
		})
	}
}

#[derive(Prop)]
pub struct FieldErrorProps<'a> {
	field: RegistrationField,
	message: &'a ReadSignal<Option<String>>,
}

/// Validation message shown beneath the input it belongs to
#[component]
pub fn FieldError<'a, G: Html>(ctx: Scope<'a>, props: FieldErrorProps<'a>) -> View<G> {
	let id = format!("{}_error", props.field.name());
	view! {
		ctx,
		(if let Some(message) = (*props.message.get()).clone() {
			let id = id.clone();
			view! {
				ctx,
				div(id=id, class="input_error") { (message) }
			}
		} else {
			view! { ctx, }
		})
	}
}
