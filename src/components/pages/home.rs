use leptos::prelude::*;

use super::{Page, tags};
use crate::components::particle_field::ParticleBackground;
use crate::content::Portfolio;

/// Landing page: hero over the particle field, bio, and skills.
#[component]
pub fn HomePage(content: Portfolio, nav: RwSignal<Page>) -> impl IntoView {
	let owner = content.owner;
	let full_name = format!("{} {}", owner.first_name, owner.last_name);

	let bio = owner
		.bio
		.iter()
		.map(|paragraph| view! { <p>{paragraph.clone()}</p> })
		.collect_view();

	let skills = content
		.skills
		.iter()
		.map(|group| {
			view! {
				<div class="skill-group">
					<h3>{group.title.clone()}</h3>
					<div class="tags">{tags(&group.items, "tag")}</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<div class="home">
			<ParticleBackground />
			<main class="hero">
				<img src=owner.photo alt=full_name class="profile-photo" width=224 height=224 />
				<h1 class="name-font">
					<span class="gradient-text">{owner.first_name}</span>
					<br />
					<span>{owner.last_name}</span>
				</h1>
				<div class="hero-actions">
					<a href=owner.resume target="_blank" rel="noopener noreferrer" class="btn-primary">
						"View Resume"
					</a>
					<button class="btn-glass" on:click=move |_| nav.set(Page::Contact)>
						"Get in Touch"
					</button>
				</div>
				<section class="glass bio">{bio}</section>
				<section class="glass skills">
					<h2 class="gradient-text">"Skills & Technologies"</h2>
					<div class="skill-grid">{skills}</div>
				</section>
			</main>
		</div>
	}
}
