//! portfolio-site: a single-page personal portfolio rendered client-side.
//!
//! The landing page sits on an animated particle field with a pointer-following
//! glow. Other pages present projects, experience, education, hobbies with
//! photo galleries, and a contact form with a simulated send.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, error, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod content;
pub mod error;

pub use components::pages::Page;
pub use content::Portfolio;
pub use error::{PortfolioError, Result};

use components::pages::{NavBar, page_view};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio: logging initialized");
}

/// Read a content override from a script element with id="portfolio-data".
fn content_override() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("portfolio-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Site content: the DOM override when present and valid, else the embedded copy.
fn load_portfolio() -> Portfolio {
	if let Some(json) = content_override() {
		match Portfolio::from_json(&json) {
			Ok(portfolio) => {
				info!("portfolio: using content from #portfolio-data");
				return portfolio;
			}
			Err(e) => warn!("portfolio: ignoring #portfolio-data: {}", e),
		}
	}

	match Portfolio::embedded() {
		Ok(portfolio) => {
			info!(
				"portfolio: loaded {} projects, {} hobbies",
				portfolio.projects.len(),
				portfolio.hobbies.len()
			);
			portfolio
		}
		Err(e) => {
			error!("portfolio: embedded content is invalid: {}", e);
			Portfolio::default()
		}
	}
}

/// Main application component.
/// Loads site content and switches between pages from the nav bar.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let content = Arc::new(load_portfolio());
	let page = RwSignal::new(Page::default());
	let title = content.owner.title.clone();
	let description = content.owner.tagline.clone();

	view! {
		<Html attr:lang="en" attr:class="dark" attr:data-theme="dark" />
		<Title text=title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta name="description" content=description />

		<div class="site">
			<NavBar page=page />
			{move || page_view(page.get(), &content, page)}
		</div>
	}
}
