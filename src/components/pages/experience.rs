use leptos::prelude::*;

use super::bullets;
use crate::components::selection::Expansion;
use crate::content::Experience;

/// Work history; one card at a time can show its full description.
#[component]
pub fn ExperiencePage(experience: Vec<Experience>) -> impl IntoView {
	let expansion = RwSignal::new(Expansion::<u32>::new());

	let cards = experience
		.into_iter()
		.map(|job| {
			let id = job.id;
			let is_open = move || expansion.with(|e| e.is_expanded(id));
			let description = job.description;
			view! {
				<article class="glass experience-card">
					<div class=format!("experience-accent {}", job.gradient)></div>
					<header>
						<h3>{job.position}</h3>
						<p class="company">{job.company}</p>
						{job.current.then(|| view! { <span class="badge-current">"Current"</span> })}
					</header>
					<ul class="meta">
						<li>{job.location}</li>
						<li>{job.period}</li>
						<li>{job.duration}</li>
						<li>{job.kind}</li>
						<li>{job.work_type}</li>
					</ul>
					{move || is_open().then(|| view! { <ul class="experience-details">{bullets(&description)}</ul> })}
					<button class="btn-link" on:click=move |_| expansion.update(|e| e.toggle(id))>
						{move || if is_open() { "Show Less" } else { "Show More" }}
					</button>
				</article>
			}
		})
		.collect_view();

	view! {
		<div class="page experience">
			<header class="page-header">
				<h1 class="gradient-text">"Professional Experience"</h1>
				<p>"My journey in data science and analytics"</p>
			</header>
			<div class="timeline">{cards}</div>
		</div>
	}
}
