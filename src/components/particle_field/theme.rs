//! Visual tuning for the particle background.
//!
//! Colors, particle sizing, twinkle timing and the spring constants of the
//! pointer glow all live here so the simulation and renderer stay free of
//! magic numbers.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Purple-500, the site accent.
pub const ACCENT: Color = Color::rgb(168, 85, 247);

/// Ambient particle configuration.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	/// Number of particles, fixed for the lifetime of the view
	pub count: usize,
	/// Particle color (alpha comes from the twinkle)
	pub color: Color,
	/// Resting particle radius in pixels
	pub radius: f64,
	/// Upper bound of the per-axis speed, in pixels per tick
	pub max_speed: f64,
	/// Length of one twinkle cycle in seconds
	pub twinkle_period: f64,
	/// Radius multiplier at the peak of the twinkle
	pub twinkle_scale: f64,
	/// Opacity at rest
	pub opacity_min: f64,
	/// Opacity at the peak of the twinkle
	pub opacity_max: f64,
}

/// Pointer-following glow configuration.
#[derive(Clone, Debug)]
pub struct GlowStyle {
	/// Gradient radius in pixels
	pub radius: f64,
	/// Color at the center of the glow
	pub color: Color,
	/// Spring stiffness pulling the glow towards the pointer
	pub stiffness: f64,
	/// Velocity damping of the spring
	pub damping: f64,
}

/// Complete visual theme for the background canvas.
#[derive(Clone, Debug)]
pub struct Theme {
	pub background: Color,
	pub particles: ParticleStyle,
	pub glow: GlowStyle,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			background: Color::rgb(0, 0, 0),
			particles: ParticleStyle {
				count: 50,
				color: ACCENT,
				radius: 2.0,
				max_speed: 0.25,
				twinkle_period: 3.0,
				twinkle_scale: 1.5,
				opacity_min: 0.3,
				opacity_max: 0.6,
			},
			glow: GlowStyle {
				radius: 192.0,
				color: ACCENT.with_alpha(0.1),
				stiffness: 50.0,
				damping: 20.0,
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(ACCENT.to_css(), "#a855f7");
	}

	#[test]
	fn translucent_colors_render_as_rgba() {
		assert_eq!(ACCENT.with_alpha(0.1).to_css(), "rgba(168, 85, 247, 0.1)");
	}

	#[test]
	fn default_theme_has_fifty_particles() {
		assert_eq!(Theme::default().particles.count, 50);
	}
}
