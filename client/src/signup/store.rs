// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::state::SignupState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use sycamore::prelude::*;

/// Owner of a sign-up form's state. All changes go through `update`.
pub trait SignupStore {
	fn snapshot(&self) -> SignupState;

	/// Applies a change to the state. Returns `None` without running the change when the state's owner is gone.
	fn update<R>(&self, change: impl FnOnce(&mut SignupState) -> R) -> Option<R>;
}

impl SignupStore for RefCell<SignupState> {
	fn snapshot(&self) -> SignupState {
		self.borrow().clone()
	}

	fn update<R>(&self, change: impl FnOnce(&mut SignupState) -> R) -> Option<R> {
		Some(change(&mut *self.borrow_mut()))
	}
}

/// State backing a mounted sign-up view.
///
/// The state lives in a reference-counted signal so that work outliving the view (an in-flight request) keeps it
/// alive; once the view's scope is cleaned up, updates are dropped.
#[derive(Clone)]
pub struct ViewStore {
	state: RcSignal<SignupState>,
	mounted: Rc<Cell<bool>>,
}

impl ViewStore {
	pub fn new(ctx: Scope<'_>) -> Self {
		let mounted = Rc::new(Cell::new(true));
		on_cleanup(ctx, {
			let mounted = Rc::clone(&mounted);
			move || mounted.set(false)
		});
		Self {
			state: create_rc_signal(SignupState::default()),
			mounted,
		}
	}

	pub fn signal(&self) -> &RcSignal<SignupState> {
		&self.state
	}

	pub fn is_mounted(&self) -> bool {
		self.mounted.get()
	}

	pub fn mounted_flag(&self) -> Rc<Cell<bool>> {
		Rc::clone(&self.mounted)
	}
}

impl SignupStore for ViewStore {
	fn snapshot(&self) -> SignupState {
		(*self.state.get_untracked()).clone()
	}

	fn update<R>(&self, change: impl FnOnce(&mut SignupState) -> R) -> Option<R> {
		if !self.is_mounted() {
			return None;
		}
		let mut state = self.state.modify();
		Some(change(&mut *state))
	}
}

/// Marks the end of a submission when dropped, however the submission ends.
pub struct LoadingGuard<'a, S: SignupStore> {
	store: &'a S,
}

impl<'a, S: SignupStore> LoadingGuard<'a, S> {
	pub fn new(store: &'a S) -> Self {
		Self { store }
	}
}

impl<S: SignupStore> Drop for LoadingGuard<'_, S> {
	fn drop(&mut self) {
		self.store.update(SignupState::finish);
	}
}
