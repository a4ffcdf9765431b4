//! Single-open-item expansion for lists of cards.

/// Tracks the one expanded item of a list, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expansion<K> {
	expanded: Option<K>,
}

impl<K> Default for Expansion<K> {
	fn default() -> Self {
		Self { expanded: None }
	}
}

impl<K: Copy + PartialEq> Expansion<K> {
	pub fn new() -> Self {
		Self::default()
	}

	/// Collapse `id` if it is expanded, otherwise expand it in place of any other.
	pub fn toggle(&mut self, id: K) {
		self.expanded = if self.expanded == Some(id) {
			None
		} else {
			Some(id)
		};
	}

	pub fn collapse(&mut self) {
		self.expanded = None;
	}

	pub fn expanded(&self) -> Option<K> {
		self.expanded
	}

	pub fn is_expanded(&self, id: K) -> bool {
		self.expanded == Some(id)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn toggling_the_open_item_collapses_it() {
		let mut e = Expansion::new();
		e.toggle(3u32);
		assert_eq!(e.expanded(), Some(3));
		e.toggle(3);
		assert_eq!(e.expanded(), None);
	}

	#[test]
	fn toggling_another_item_switches_directly() {
		let mut e = Expansion::new();
		e.toggle(1u32);
		e.toggle(2);
		assert_eq!(e.expanded(), Some(2));
		assert!(!e.is_expanded(1));
	}

	#[test]
	fn at_most_one_item_is_expanded() {
		let ids = [1u32, 2, 3];
		let mut e = Expansion::new();
		for step in [1u32, 1, 2, 3, 3, 2, 1, 1, 2] {
			let before = e.expanded();
			e.toggle(step);
			let open = ids.iter().filter(|id| e.is_expanded(**id)).count();
			assert!(open <= 1);
			if before == Some(step) {
				assert_eq!(e.expanded(), None);
			} else {
				assert_eq!(e.expanded(), Some(step));
			}
		}
	}

	#[test]
	fn collapse_clears_any_selection() {
		let mut e = Expansion::new();
		e.toggle("rag");
		e.collapse();
		assert_eq!(e.expanded(), None);
	}
}
