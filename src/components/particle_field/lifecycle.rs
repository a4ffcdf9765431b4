//! Mount-scoped ownership of view state.
//!
//! Browser callbacks (animation frames, pointer listeners) hold clones of a
//! [`ViewScope`]. Once the view unmounts, the scope's [`CancelToken`] is
//! cancelled and the state is dropped, so any callback that still fires finds
//! nothing to mutate.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Shared "may this callback still run" flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn cancel(&self) {
		self.0.set(true);
	}

	pub fn is_cancelled(&self) -> bool {
		self.0.get()
	}
}

/// State owned by a mounted view and shared with its callbacks.
pub struct ViewScope<S> {
	state: Rc<RefCell<Option<S>>>,
	token: CancelToken,
}

impl<S> Clone for ViewScope<S> {
	fn clone(&self) -> Self {
		Self {
			state: self.state.clone(),
			token: self.token.clone(),
		}
	}
}

impl<S> ViewScope<S> {
	pub fn mount(state: S) -> Self {
		Self {
			state: Rc::new(RefCell::new(Some(state))),
			token: CancelToken::new(),
		}
	}

	pub fn token(&self) -> CancelToken {
		self.token.clone()
	}

	pub fn is_mounted(&self) -> bool {
		!self.token.is_cancelled()
	}

	/// Run `f` against the state, or return `None` after unmount.
	///
	/// Re-entrant calls (a callback firing while another holds the state)
	/// also return `None` instead of panicking.
	pub fn update<R>(&self, f: impl FnOnce(&mut S) -> R) -> Option<R> {
		if self.token.is_cancelled() {
			return None;
		}
		let mut slot = self.state.try_borrow_mut().ok()?;
		slot.as_mut().map(f)
	}

	pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Option<R> {
		if self.token.is_cancelled() {
			return None;
		}
		let slot = self.state.try_borrow().ok()?;
		slot.as_ref().map(f)
	}

	/// Cancel the token and release the state. Idempotent.
	pub fn unmount(&self) -> Option<S> {
		self.token.cancel();
		self.state.try_borrow_mut().ok().and_then(|mut slot| slot.take())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn updates_apply_while_mounted() {
		let scope = ViewScope::mount(0u32);
		assert_eq!(scope.update(|n| *n += 1), Some(()));
		assert_eq!(scope.read(|n| *n), Some(1));
	}

	#[test]
	fn stale_callbacks_do_nothing_after_unmount() {
		let scope = ViewScope::mount(vec![1, 2, 3]);
		let stale = scope.clone();

		assert_eq!(scope.unmount(), Some(vec![1, 2, 3]));
		assert!(!stale.is_mounted());
		assert_eq!(stale.update(|v| v.push(4)), None);
		assert_eq!(stale.read(|v| v.len()), None);
		assert_eq!(scope.unmount(), None);
	}

	#[test]
	fn token_is_shared_between_clones() {
		let scope = ViewScope::mount(());
		let token = scope.token();
		scope.clone().unmount();
		assert!(token.is_cancelled());
	}

	#[test]
	fn reentrant_update_is_skipped() {
		let scope = ViewScope::mount(0u32);
		let inner = scope.clone();
		let nested = scope.update(|_| inner.update(|n| *n += 1));
		assert_eq!(nested, Some(None));
		assert_eq!(scope.read(|n| *n), Some(0));
	}
}
