//! Selection state for galleries and expandable card lists.

mod expansion;
mod gallery;

pub use expansion::Expansion;
pub use gallery::{Collection, Gallery};
