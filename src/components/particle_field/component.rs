//! Leptos component wrapping the particle background canvas.
//!
//! On mount the component sizes a canvas to the viewport, seeds the particle
//! field and starts a `requestAnimationFrame` loop plus a window `mousemove`
//! listener. Both are owned by a [`FieldSession`] that is dropped in the
//! component's cleanup, which cancels the pending frame, removes the listener
//! and releases the state.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::lifecycle::{CancelToken, ViewScope};
use super::particles::{ParticleField, Viewport};
use super::pointer::{GlowFollower, PointerMoved, PointerState};
use super::render;
use super::theme::Theme;
use crate::error::{PortfolioError, Result};

/// Fixed simulation step per animation frame, in seconds.
const FRAME_DT: f64 = 0.016;

/// Everything a frame needs: simulation, pointer, glow and drawing target.
struct FieldContext {
	field: ParticleField,
	pointer: PointerState,
	glow: GlowFollower,
	theme: Theme,
	ctx: CanvasRenderingContext2d,
}

impl FieldContext {
	fn frame(&mut self) -> std::result::Result<(), JsValue> {
		self.field.advance(FRAME_DT);
		self.glow.tick(&self.pointer, FRAME_DT);
		render::render(&self.field, &self.glow, &self.ctx, &self.theme)
	}
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Self-rescheduling animation frame loop.
///
/// Each frame checks the token before running and before requesting the next
/// frame. Dropping the loop cancels the token and any pending request.
struct FrameLoop {
	callback: FrameCallback,
	pending: Rc<Cell<Option<i32>>>,
	token: CancelToken,
}

impl FrameLoop {
	fn start(
		window: &Window,
		token: CancelToken,
		mut frame: impl FnMut() -> bool + 'static,
	) -> std::result::Result<Self, JsValue> {
		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let pending = Rc::new(Cell::new(None));
		let (callback_inner, pending_inner, token_inner) =
			(callback.clone(), pending.clone(), token.clone());

		*callback.borrow_mut() = Some(Closure::new(move || {
			pending_inner.set(None);
			if token_inner.is_cancelled() || !frame() || token_inner.is_cancelled() {
				return;
			}
			let Some(window) = web_sys::window() else {
				return;
			};
			if let Some(ref cb) = *callback_inner.borrow() {
				match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
					Ok(id) => pending_inner.set(Some(id)),
					Err(e) => error!("particle field: failed to schedule frame: {:?}", e),
				}
			}
		}));

		if let Some(ref cb) = *callback.borrow() {
			pending.set(Some(
				window.request_animation_frame(cb.as_ref().unchecked_ref())?,
			));
		}

		Ok(Self {
			callback,
			pending,
			token,
		})
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.token.cancel();
		if let (Some(id), Some(window)) = (self.pending.take(), web_sys::window()) {
			let _ = window.cancel_animation_frame(id);
		}
		// Breaks the closure's reference to itself.
		self.callback.borrow_mut().take();
	}
}

/// Window `mousemove` subscription, removed on drop.
struct PointerListener {
	window: Window,
	callback: Closure<dyn FnMut(MouseEvent)>,
}

impl PointerListener {
	fn attach(window: &Window, scope: ViewScope<FieldContext>) -> std::result::Result<Self, JsValue> {
		let callback = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			let moved = PointerMoved {
				x: ev.client_x() as f64,
				y: ev.client_y() as f64,
			};
			scope.update(|c| c.pointer.apply(moved));
		});
		window.add_event_listener_with_callback("mousemove", callback.as_ref().unchecked_ref())?;
		Ok(Self {
			window: window.clone(),
			callback,
		})
	}
}

impl Drop for PointerListener {
	fn drop(&mut self) {
		let _ = self
			.window
			.remove_event_listener_with_callback("mousemove", self.callback.as_ref().unchecked_ref());
	}
}

/// A running particle background. Dropping it tears everything down.
struct FieldSession {
	scope: ViewScope<FieldContext>,
	_frames: FrameLoop,
	_pointer: PointerListener,
}

impl FieldSession {
	fn start(canvas: HtmlCanvasElement) -> Result<Self> {
		let window: Window = web_sys::window().ok_or(PortfolioError::NoWindow)?;
		let viewport = Viewport::from_window(&window);
		canvas.set_width(viewport.width as u32);
		canvas.set_height(viewport.height as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.map_err(PortfolioError::js)?
			.ok_or_else(|| PortfolioError::Canvas("2d context unavailable".into()))?
			.dyn_into()
			.map_err(|_| PortfolioError::Canvas("not a 2d context".into()))?;

		let theme = Theme::default();
		let mut rng = SmallRng::seed_from_u64(js_sys::Math::random().to_bits());
		let scope = ViewScope::mount(FieldContext {
			field: ParticleField::new(&theme.particles, viewport, &mut rng),
			pointer: PointerState::default(),
			glow: GlowFollower::new(&theme.glow),
			theme,
			ctx,
		});

		let pointer = PointerListener::attach(&window, scope.clone()).map_err(PortfolioError::js)?;
		let scope_frame = scope.clone();
		let frames = FrameLoop::start(&window, scope.token(), move || {
			match scope_frame.update(FieldContext::frame) {
				Some(Ok(())) => true,
				Some(Err(e)) => {
					error!("particle field: render failed, stopping animation: {:?}", e);
					false
				}
				None => false,
			}
		})
		.map_err(PortfolioError::js)?;

		info!(
			"particle field: started {}x{}",
			viewport.width, viewport.height
		);
		Ok(Self {
			scope,
			_frames: frames,
			_pointer: pointer,
		})
	}
}

impl Drop for FieldSession {
	fn drop(&mut self) {
		self.scope.unmount();
		info!("particle field: stopped");
	}
}

/// Full-viewport canvas with drifting particles and a pointer glow.
///
/// Dimensions are captured once on mount; the canvas does not follow window
/// resizes.
#[component]
pub fn ParticleBackground() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let session = StoredValue::new_local(None::<FieldSession>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if session.try_with_value(Option::is_some).unwrap_or(true) {
			return;
		}
		match FieldSession::start(canvas) {
			Ok(s) => session.set_value(Some(s)),
			Err(e) => error!("particle field: failed to start: {}", e),
		}
	});

	on_cleanup(move || {
		session.try_update_value(|s| {
			s.take();
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			style="position: absolute; inset: 0; display: block; pointer-events: none; z-index: 0;"
		/>
	}
}
