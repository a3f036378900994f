// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use wasm_bindgen::JsCast;
use web_sys::{Event as WebEvent, HtmlInputElement};

/// Current value of the input element an event was fired on
pub fn input_value(event: &WebEvent) -> Option<String> {
	let input: HtmlInputElement = event.target()?.dyn_into().ok()?;
	Some(input.value())
}
