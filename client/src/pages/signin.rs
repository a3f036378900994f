// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::page_utils::set_page_title;
use sycamore::prelude::*;

/// Destination after registering. Signing in itself is handled by the authentication service.
#[component]
pub fn SignInView<G: Html>(ctx: Scope) -> View<G> {
	log::debug!("Activating sign-in view");
	set_page_title("Sign In");

	view! {
		ctx,
		div(id="signin") {
			h2 { "Sign in" }
			p { "Sign in with the username and password you registered with." }
			p {
				"Not a member yet? "
				a(href="/signup") { "Create an account" }
			}
		}
	}
}
