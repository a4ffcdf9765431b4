//! Error types for the portfolio site.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while loading content or wiring browser APIs.
#[derive(Error, Debug)]
pub enum PortfolioError {
	/// No `window` object (non-browser rendering context).
	#[error("no window available")]
	NoWindow,

	/// A canvas or DOM call failed.
	#[error("canvas error: {0}")]
	Canvas(String),

	/// Site content JSON could not be parsed.
	#[error("content error: {0}")]
	Content(#[from] serde_json::Error),
}

impl PortfolioError {
	/// Wrap a failed web API call.
	pub fn js(value: JsValue) -> Self {
		Self::Canvas(format!("{:?}", value))
	}
}

/// Result type for portfolio operations.
pub type Result<T> = std::result::Result<T, PortfolioError>;
