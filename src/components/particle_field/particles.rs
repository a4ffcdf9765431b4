//! Ambient particle simulation.
//!
//! A fixed set of points drifts across the viewport. Each tick moves every
//! particle by its velocity and flips a velocity component when the position
//! *before* the move lies on or outside the matching edge, so a particle can
//! overshoot an edge by one step before it turns around.

use rand::Rng;
use web_sys::Window;

use super::theme::ParticleStyle;

/// Viewport size used when the host reports none.
pub const FALLBACK_VIEWPORT: Viewport = Viewport {
	width: 1920.0,
	height: 1080.0,
};

/// Pixel dimensions captured once when the view mounts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

impl Viewport {
	/// Resolve reported dimensions, falling back per axis when a value is
	/// missing, zero or not finite.
	pub fn resolve(width: Option<f64>, height: Option<f64>) -> Self {
		let usable = |v: Option<f64>| v.filter(|v| v.is_finite() && *v > 0.0);
		Self {
			width: usable(width).unwrap_or(FALLBACK_VIEWPORT.width),
			height: usable(height).unwrap_or(FALLBACK_VIEWPORT.height),
		}
	}

	pub fn from_window(window: &Window) -> Self {
		Self::resolve(
			window.inner_width().ok().and_then(|v| v.as_f64()),
			window.inner_height().ok().and_then(|v| v.as_f64()),
		)
	}
}

/// A single drifting point.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Creation order, stable for the particle's lifetime
	pub id: usize,
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
}

/// Fixed-size particle population bounded by the viewport.
pub struct ParticleField {
	particles: Vec<Particle>,
	viewport: Viewport,
	/// Seconds since the field was created, drives the twinkle.
	elapsed: f64,
}

impl ParticleField {
	pub fn new<R: Rng + ?Sized>(style: &ParticleStyle, viewport: Viewport, rng: &mut R) -> Self {
		let speed = style.max_speed;
		let particles = (0..style.count)
			.map(|id| Particle {
				id,
				x: rng.random::<f64>() * viewport.width,
				y: rng.random::<f64>() * viewport.height,
				vx: (rng.random::<f64>() - 0.5) * 2.0 * speed,
				vy: (rng.random::<f64>() - 0.5) * 2.0 * speed,
			})
			.collect();

		Self {
			particles,
			viewport,
			elapsed: 0.0,
		}
	}

	/// Build a field from explicit particles.
	pub fn from_particles(particles: Vec<Particle>, viewport: Viewport) -> Self {
		Self {
			particles,
			viewport,
			elapsed: 0.0,
		}
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	pub fn elapsed(&self) -> f64 {
		self.elapsed
	}

	/// Move every particle one step.
	pub fn tick(&mut self) {
		let Viewport { width, height } = self.viewport;
		for p in &mut self.particles {
			let (x, y) = (p.x, p.y);
			p.x = x + p.vx;
			p.y = y + p.vy;
			if x <= 0.0 || x >= width {
				p.vx = -p.vx;
			}
			if y <= 0.0 || y >= height {
				p.vy = -p.vy;
			}
		}
	}

	/// Advance one animation frame of `dt` seconds.
	pub fn advance(&mut self, dt: f64) {
		self.tick();
		self.elapsed += dt;
	}
}

/// Eased 0..1..0 pulse over one twinkle period.
fn pulse(style: &ParticleStyle, elapsed: f64) -> f64 {
	let phase = (elapsed / style.twinkle_period).rem_euclid(1.0);
	let t = if phase < 0.5 { phase * 2.0 } else { 2.0 - phase * 2.0 };
	t * t * (3.0 - 2.0 * t)
}

/// Radius multiplier and opacity for `elapsed` seconds into the animation.
pub fn twinkle(style: &ParticleStyle, elapsed: f64) -> (f64, f64) {
	let s = pulse(style, elapsed);
	(
		1.0 + (style.twinkle_scale - 1.0) * s,
		style.opacity_min + (style.opacity_max - style.opacity_min) * s,
	)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;
	use crate::components::particle_field::theme::Theme;

	fn seeded_field() -> ParticleField {
		let style = Theme::default().particles;
		let mut rng = SmallRng::seed_from_u64(7);
		ParticleField::new(&style, Viewport::resolve(Some(800.0), Some(600.0)), &mut rng)
	}

	fn single(x: f64, y: f64, vx: f64, vy: f64) -> ParticleField {
		ParticleField::from_particles(
			vec![Particle { id: 0, x, y, vx, vy }],
			Viewport { width: 100.0, height: 100.0 },
		)
	}

	#[test]
	fn count_is_fixed_across_ticks() {
		let mut field = seeded_field();
		assert_eq!(field.particles().len(), 50);
		for _ in 0..10_000 {
			field.tick();
		}
		assert_eq!(field.particles().len(), 50);
	}

	#[test]
	fn ids_follow_creation_order() {
		let field = seeded_field();
		let ids: Vec<usize> = field.particles().iter().map(|p| p.id).collect();
		assert_eq!(ids, (0..50).collect::<Vec<_>>());
	}

	#[test]
	fn initial_state_is_within_bounds() {
		let field = seeded_field();
		for p in field.particles() {
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!((-0.25..0.25).contains(&p.vx));
			assert!((-0.25..0.25).contains(&p.vy));
		}
	}

	#[test]
	fn reflection_uses_position_before_the_move() {
		let mut field = single(0.0, 50.0, -0.2, 0.1);
		field.tick();
		let p = &field.particles()[0];
		assert_eq!(p.x, -0.2);
		assert_eq!(p.vx, 0.2);
		assert_eq!(p.vy, 0.1);
	}

	#[test]
	fn far_edge_reflects_after_overshoot() {
		let mut field = single(99.9, 100.0, 0.2, 0.2);
		field.tick();
		let p = &field.particles()[0];
		// x was inside, y was on the edge
		assert!((p.x - 100.1).abs() < 1e-9);
		assert_eq!(p.vx, 0.2);
		assert_eq!(p.y, 100.2);
		assert_eq!(p.vy, -0.2);

		field.tick();
		let p = &field.particles()[0];
		assert_eq!(p.vx, -0.2);
	}

	#[test]
	fn interior_particles_keep_their_velocity() {
		let mut field = single(50.0, 50.0, 0.1, -0.1);
		field.tick();
		assert_eq!(field.particles()[0].vx, 0.1);
		assert_eq!(field.particles()[0].vy, -0.1);
	}

	#[test]
	fn viewport_falls_back_per_axis() {
		assert_eq!(
			Viewport::resolve(None, Some(700.0)),
			Viewport { width: 1920.0, height: 700.0 }
		);
		assert_eq!(Viewport::resolve(Some(0.0), Some(f64::NAN)), FALLBACK_VIEWPORT);
	}

	#[test]
	fn advance_accumulates_time() {
		let mut field = seeded_field();
		field.advance(0.5);
		field.advance(0.25);
		assert_eq!(field.elapsed(), 0.75);
	}

	#[test]
	fn twinkle_peaks_mid_cycle() {
		let style = Theme::default().particles;
		assert_eq!(twinkle(&style, 0.0), (1.0, 0.3));
		let (scale, alpha) = twinkle(&style, 1.5);
		assert!((scale - 1.5).abs() < 1e-9);
		assert!((alpha - 0.6).abs() < 1e-9);
		let (scale, _) = twinkle(&style, 3.0);
		assert!((scale - 1.0).abs() < 1e-9);
	}
}
