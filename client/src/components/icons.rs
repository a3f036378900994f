// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Decorative glyphs used by the forms. They hold no state; click handling belongs to the element wrapping them.

use sycamore::prelude::*;

#[derive(Prop)]
pub struct IconProps {
	size: u32,
}

fn icon_style(size: u32) -> String {
	format!("font-size: {}px; width: {}px; height: {}px;", size, size, size)
}

#[component]
pub fn EyeIcon<G: Html>(ctx: Scope, props: IconProps) -> View<G> {
	view! {
		ctx,
		span(class="icon icon_eye", style=icon_style(props.size)) { "\u{1F441}" }
	}
}

#[component]
pub fn EyeOffIcon<G: Html>(ctx: Scope, props: IconProps) -> View<G> {
	view! {
		ctx,
		span(class="icon icon_eye_off", style=icon_style(props.size)) { "\u{25CC}" }
	}
}

#[component]
pub fn ArrowRightIcon<G: Html>(ctx: Scope, props: IconProps) -> View<G> {
	view! {
		ctx,
		span(class="icon icon_arrow_right", style=icon_style(props.size)) { "\u{2192}" }
	}
}

#[component]
pub fn LoadingSpinner<G: Html>(ctx: Scope, props: IconProps) -> View<G> {
	view! {
		ctx,
		span(class="loading_spinner", style=icon_style(props.size))
	}
}
