// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::form_messages::FieldError;
use super::icons::{EyeIcon, EyeOffIcon};
use crate::dom::input_value;
use crate::signup::state::PasswordToggle;
use crate::signup::store::{SignupStore, ViewStore};
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[derive(Prop)]
pub struct PasswordInputProps<'a> {
	store: &'a ViewStore,
	toggle: PasswordToggle,
	title: &'static str,
	placeholder: &'static str,
}

/// A password field with a button switching it between masked and plain text
#[component]
pub fn PasswordInput<'a, G: Html>(ctx: Scope<'a>, props: PasswordInputProps<'a>) -> View<G> {
	let store = props.store;
	let toggle = props.toggle;
	let field = toggle.field();

	let input_type = create_memo(ctx, move || store.signal().get().input_type(toggle));
	let revealed = create_memo(ctx, move || store.signal().get().visibility.is_revealed(toggle));
	let error = create_memo(ctx, move || store.signal().get().field_errors.get(field).map(str::to_string));

	let input_handler = move |event: WebEvent| {
		if let Some(value) = input_value(&event) {
			store.update(|state| state.set_field(field, value));
		}
	};

	view! {
		ctx,
		div(class="password_input") {
			input(
				id=field.name(),
				type=*input_type.get(),
				spellcheck="false",
				title=props.title,
				placeholder=props.placeholder,
				on:input=input_handler
			)
			(if *revealed.get() {
				view! {
					ctx,
					span(class="password_toggle click", title="Hide password", on:click=move |_event: WebEvent| {
						store.update(|state| state.conceal(toggle));
					}) {
						EyeIcon(size=20)
					}
				}
			} else {
				view! {
					ctx,
					span(class="password_toggle click", title="Show password", on:click=move |_event: WebEvent| {
						store.update(|state| state.reveal(toggle));
					}) {
						EyeOffIcon(size=20)
					}
				}
			})
		}
		FieldError(field=field, message=error)
	}
}
