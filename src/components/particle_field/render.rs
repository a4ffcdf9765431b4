//! Canvas rendering for the particle background.
//!
//! Drawn back to front: background fill, particles, then the pointer glow.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::particles::{ParticleField, twinkle};
use super::pointer::GlowFollower;
use super::theme::Theme;

/// Renders one frame of the background.
pub fn render(
	field: &ParticleField,
	glow: &GlowFollower,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
) -> Result<(), JsValue> {
	draw_background(field, ctx, theme);
	draw_particles(field, ctx, theme)?;
	draw_glow(glow, ctx, theme)
}

fn draw_background(field: &ParticleField, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let viewport = field.viewport();
	ctx.set_fill_style_str(&theme.background.to_css());
	ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);
}

fn draw_particles(
	field: &ParticleField,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
) -> Result<(), JsValue> {
	let style = &theme.particles;
	// Every particle shares one twinkle clock.
	let (scale, alpha) = twinkle(style, field.elapsed());
	ctx.set_fill_style_str(&style.color.with_alpha(alpha).to_css());

	for p in field.particles() {
		ctx.begin_path();
		ctx.arc(p.x, p.y, style.radius * scale, 0.0, PI * 2.0)?;
		ctx.fill();
	}
	Ok(())
}

fn draw_glow(
	glow: &GlowFollower,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
) -> Result<(), JsValue> {
	let style = &theme.glow;
	let gradient = ctx.create_radial_gradient(glow.x, glow.y, 0.0, glow.x, glow.y, style.radius)?;
	gradient.add_color_stop(0.0, &style.color.to_css())?;
	gradient.add_color_stop(1.0, &style.color.with_alpha(0.0).to_css())?;

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.begin_path();
	ctx.arc(glow.x, glow.y, style.radius, 0.0, PI * 2.0)?;
	ctx.fill();
	Ok(())
}
