//! Ambient particle background for the landing page.
//!
//! Renders a full-viewport canvas with:
//! - A fixed population of drifting particles that bounce off the viewport edges
//! - A synchronized twinkle (radius and opacity pulse)
//! - A soft glow that follows the pointer on a damped spring
//!
//! The animation loop and pointer listener are tied to the component's mount
//! lifetime and torn down on unmount.
//!
//! # Example
//!
//! ```ignore
//! view! {
//!     <div class="relative overflow-hidden">
//!         <ParticleBackground />
//!     </div>
//! }
//! ```

mod component;
pub mod lifecycle;
pub mod particles;
pub mod pointer;
mod render;
pub mod theme;

pub use component::ParticleBackground;
pub use particles::{Particle, ParticleField, Viewport};
pub use theme::Theme;
