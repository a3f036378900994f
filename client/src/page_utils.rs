// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use web_sys::window;

const APP_TITLE: &str = "Portal";

pub fn set_page_title(page_title: &str) {
	if let Some(window) = window() {
		if let Some(document) = window.document() {
			document.set_title(&format!("{} | {}", page_title, APP_TITLE));
		}
	}
}
