//! Image gallery selection: which collection is open and which image is shown.

use log::{debug, warn};

/// An ordered set of items shown together in one gallery.
#[derive(Clone, Debug, PartialEq)]
pub struct Collection<T> {
	pub id: u32,
	pub items: Vec<T>,
}

/// Gallery over a fixed list of collections.
///
/// While a collection is open, `current_index` is always a valid index into
/// its items. Navigation wraps in both directions.
#[derive(Clone, Debug)]
pub struct Gallery<T> {
	collections: Vec<Collection<T>>,
	selected: Option<usize>,
	current_index: usize,
}

impl<T> Gallery<T> {
	pub fn new(collections: Vec<Collection<T>>) -> Self {
		Self {
			collections,
			selected: None,
			current_index: 0,
		}
	}

	/// Open collection `id` at its first item, also when it is already open.
	///
	/// Unknown ids and empty collections are rejected and leave the state
	/// unchanged.
	pub fn open(&mut self, id: u32) -> bool {
		match self.collections.iter().position(|c| c.id == id) {
			Some(pos) if !self.collections[pos].items.is_empty() => {
				self.selected = Some(pos);
				self.current_index = 0;
				debug!("gallery: opened collection {}", id);
				true
			}
			Some(_) => {
				warn!("gallery: collection {} has no items", id);
				false
			}
			None => {
				warn!("gallery: unknown collection {}", id);
				false
			}
		}
	}

	pub fn close(&mut self) {
		if let Some(c) = self.selected_collection() {
			debug!("gallery: closed collection {}", c.id);
		}
		self.selected = None;
	}

	pub fn next(&mut self) {
		if let Some(len) = self.open_len() {
			self.current_index = (self.current_index + 1) % len;
		}
	}

	pub fn previous(&mut self) {
		if let Some(len) = self.open_len() {
			self.current_index = (self.current_index + len - 1) % len;
		}
	}

	/// Jump straight to `index` (thumbnail click). Out of range is a no-op.
	pub fn jump_to(&mut self, index: usize) -> bool {
		match self.open_len() {
			Some(len) if index < len => {
				self.current_index = index;
				true
			}
			_ => false,
		}
	}

	pub fn selected(&self) -> Option<u32> {
		self.selected_collection().map(|c| c.id)
	}

	pub fn is_open(&self) -> bool {
		self.selected.is_some()
	}

	/// Only meaningful while a collection is open.
	pub fn current_index(&self) -> usize {
		self.current_index
	}

	pub fn selected_collection(&self) -> Option<&Collection<T>> {
		self.selected.and_then(|pos| self.collections.get(pos))
	}

	pub fn current(&self) -> Option<&T> {
		self.selected_collection()
			.and_then(|c| c.items.get(self.current_index))
	}

	/// One-based "current / total" counter for the open collection.
	pub fn position_label(&self) -> Option<String> {
		self.open_len()
			.map(|len| format!("{} / {}", self.current_index + 1, len))
	}

	/// Whether previous/next controls make sense for the open collection.
	pub fn has_navigation(&self) -> bool {
		self.open_len().is_some_and(|len| len > 1)
	}

	fn open_len(&self) -> Option<usize> {
		self.selected_collection().map(|c| c.items.len())
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn gallery() -> Gallery<char> {
		Gallery::new(vec![
			Collection {
				id: 1,
				items: vec!['x', 'y', 'z'],
			},
			Collection {
				id: 2,
				items: vec!['A', 'B', 'C', 'D'],
			},
			Collection {
				id: 3,
				items: vec![],
			},
		])
	}

	#[test]
	fn walks_the_documented_scenario() {
		let mut g = gallery();
		assert!(g.open(2));
		assert_eq!(g.current_index(), 0);
		g.next();
		assert_eq!(g.current_index(), 1);
		g.next();
		assert_eq!(g.current_index(), 2);
		assert!(g.jump_to(0));
		assert_eq!(g.current_index(), 0);
		g.previous();
		assert_eq!(g.current_index(), 3);
		assert_eq!(g.current(), Some(&'D'));
		g.close();
		assert_eq!(g.selected(), None);
		assert_eq!(g.current(), None);
	}

	#[test]
	fn next_wraps_after_a_full_cycle() {
		let mut g = gallery();
		g.open(2);
		for _ in 0..4 {
			g.next();
		}
		assert_eq!(g.current_index(), 0);
	}

	#[test]
	fn previous_from_first_wraps_to_last() {
		let mut g = gallery();
		g.open(2);
		g.previous();
		assert_eq!(g.current_index(), 3);
	}

	#[test]
	fn opening_resets_the_index() {
		let mut g = gallery();
		g.open(2);
		g.jump_to(2);
		g.close();
		g.open(1);
		assert_eq!(g.current_index(), 0);

		g.next();
		g.open(1);
		assert_eq!(g.current_index(), 0);
	}

	#[test]
	fn rejects_unknown_and_empty_collections() {
		let mut g = gallery();
		assert!(!g.open(9));
		assert!(!g.open(3));
		assert!(!g.is_open());

		g.open(1);
		assert!(!g.open(9));
		assert_eq!(g.selected(), Some(1));
	}

	#[test]
	fn navigation_while_closed_is_a_no_op() {
		let mut g = gallery();
		g.next();
		g.previous();
		assert!(!g.jump_to(0));
		assert_eq!(g.current_index(), 0);
		assert_eq!(g.position_label(), None);
	}

	#[test]
	fn jump_out_of_range_is_ignored() {
		let mut g = gallery();
		g.open(1);
		g.next();
		assert!(!g.jump_to(3));
		assert_eq!(g.current_index(), 1);
	}

	#[test]
	fn labels_are_one_based() {
		let mut g = gallery();
		g.open(2);
		g.previous();
		assert_eq!(g.position_label().as_deref(), Some("4 / 4"));
		assert!(g.has_navigation());
	}

	#[test]
	fn single_item_collections_hide_navigation() {
		let mut g = Gallery::new(vec![Collection { id: 5, items: vec![()] }]);
		g.open(5);
		assert!(!g.has_navigation());
		g.next();
		assert_eq!(g.current_index(), 0);
	}
}
