//! UI components.

pub mod contact;
pub mod pages;
pub mod particle_field;
pub mod selection;
