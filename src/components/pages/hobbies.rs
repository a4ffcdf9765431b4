//! Hobbies page with a modal photo gallery per hobby.

use leptos::prelude::*;

use crate::components::selection::Gallery;
use crate::content::{Image, Portfolio};

/// Thumbnails shown on a hobby card before the gallery is opened.
const PREVIEW_COUNT: usize = 6;

#[component]
pub fn HobbiesPage(content: Portfolio) -> impl IntoView {
	let gallery = RwSignal::new(Gallery::new(content.hobby_collections()));

	let cards = content
		.hobbies
		.into_iter()
		.map(|hobby| {
			let id = hobby.id;
			let previews = hobby
				.images
				.iter()
				.take(PREVIEW_COUNT)
				.map(|img| {
					view! { <img src=img.src.clone() alt=img.alt.clone() class="hobby-preview" /> }
				})
				.collect_view();
			let hint = format!("Click to view gallery ({} photos)", hobby.images.len());
			view! {
				<article
					class="glass hobby-card"
					on:click=move |_| {
						gallery.update(|g| {
							g.open(id);
						})
					}
				>
					<div class=format!("hobby-accent {}", hobby.gradient)></div>
					<h3>{hobby.title}</h3>
					<p>{hobby.description}</p>
					<div class="hobby-previews">{previews}</div>
					<p class="hint">{hint}</p>
				</article>
			}
		})
		.collect_view();

	view! {
		<div class="page hobbies">
			<header class="page-header">
				<h1 class="gradient-text">"Hobbies & Interests"</h1>
				<p>"What I enjoy outside of work"</p>
			</header>
			<div class="hobby-grid">{cards}</div>
			<GalleryModal gallery=gallery />
		</div>
	}
}

/// Full-screen viewer for the open collection. Renders nothing while closed.
#[component]
fn GalleryModal(gallery: RwSignal<Gallery<Image>>) -> impl IntoView {
	let thumbnails = move || {
		gallery.with(|g| {
			let current = g.current_index();
			g.selected_collection().map(|c| {
				c.items
					.iter()
					.enumerate()
					.map(|(index, img)| {
						let class = if index == current { "thumb active" } else { "thumb" };
						view! {
							<button
								class=class
								on:click=move |ev| {
									ev.stop_propagation();
									gallery.update(|g| {
										g.jump_to(index);
									});
								}
							>
								<img src=img.src.clone() alt=img.alt.clone() />
							</button>
						}
					})
					.collect_view()
			})
		})
	};

	let current = move || {
		gallery.with(|g| g.current().cloned()).map(|img| {
			view! { <img src=img.src alt=img.alt class="gallery-image" /> }
		})
	};

	view! {
		<Show when=move || gallery.with(Gallery::is_open)>
			<div class="modal-backdrop" on:click=move |_| gallery.update(Gallery::close)>
				<div class="gallery" on:click=|ev| ev.stop_propagation()>
					<button class="modal-close" on:click=move |_| gallery.update(Gallery::close)>
						"✕"
					</button>
					<Show when=move || gallery.with(Gallery::has_navigation)>
						<button class="gallery-prev" on:click=move |_| gallery.update(Gallery::previous)>
							"‹"
						</button>
						<button class="gallery-next" on:click=move |_| gallery.update(Gallery::next)>
							"›"
						</button>
					</Show>
					<div class="gallery-main">{current}</div>
					<div class="gallery-counter">{move || gallery.with(Gallery::position_label)}</div>
					<div class="gallery-thumbs">{thumbnails}</div>
				</div>
			</div>
		</Show>
	}
}
