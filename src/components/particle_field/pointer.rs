//! Pointer tracking and the glow that follows it.

use super::theme::GlowStyle;

/// A pointer-move event in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerMoved {
	pub x: f64,
	pub y: f64,
}

/// Last observed pointer position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
	pub x: f64,
	pub y: f64,
}

impl PointerState {
	pub fn apply(&mut self, event: PointerMoved) {
		self.x = event.x;
		self.y = event.y;
	}
}

/// Glow center that chases the pointer on a damped spring.
///
/// Purely decorative: it reads the pointer and never touches the particles.
#[derive(Clone, Debug)]
pub struct GlowFollower {
	pub x: f64,
	pub y: f64,
	vx: f64,
	vy: f64,
	stiffness: f64,
	damping: f64,
}

impl GlowFollower {
	pub fn new(style: &GlowStyle) -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			vx: 0.0,
			vy: 0.0,
			stiffness: style.stiffness,
			damping: style.damping,
		}
	}

	/// Integrate the spring towards `target` over `dt` seconds (semi-implicit Euler).
	pub fn tick(&mut self, target: &PointerState, dt: f64) {
		let ax = self.stiffness * (target.x - self.x) - self.damping * self.vx;
		let ay = self.stiffness * (target.y - self.y) - self.damping * self.vy;
		self.vx += ax * dt;
		self.vy += ay * dt;
		self.x += self.vx * dt;
		self.y += self.vy * dt;
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::components::particle_field::theme::Theme;

	#[test]
	fn last_move_wins() {
		let mut pointer = PointerState::default();
		pointer.apply(PointerMoved { x: 10.0, y: 20.0 });
		pointer.apply(PointerMoved { x: 300.0, y: 40.0 });
		assert_eq!(pointer, PointerState { x: 300.0, y: 40.0 });
	}

	#[test]
	fn glow_settles_on_the_pointer() {
		let mut glow = GlowFollower::new(&Theme::default().glow);
		let target = PointerState { x: 400.0, y: 250.0 };
		for _ in 0..600 {
			glow.tick(&target, 0.016);
		}
		assert!((glow.x - 400.0).abs() < 0.5);
		assert!((glow.y - 250.0).abs() < 0.5);
	}

	#[test]
	fn glow_lags_behind_a_jump() {
		let mut glow = GlowFollower::new(&Theme::default().glow);
		glow.tick(&PointerState { x: 1000.0, y: 0.0 }, 0.016);
		assert!(glow.x > 0.0 && glow.x < 100.0);
		assert_eq!(glow.y, 0.0);
	}
}
