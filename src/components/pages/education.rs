use leptos::prelude::*;

use super::bullets;
use crate::content::Education;

#[component]
pub fn EducationPage(education: Vec<Education>) -> impl IntoView {
	let cards = education
		.into_iter()
		.map(|school| {
			view! {
				<article class="glass education-card">
					<div class=format!("education-accent {}", school.gradient)></div>
					<h3>{school.degree}</h3>
					<p class="university">{school.university}</p>
					<ul class="meta">
						<li>{school.location}</li>
						<li>{school.period}</li>
					</ul>
					<h4>"Highlights"</h4>
					<ul>{bullets(&school.achievements)}</ul>
				</article>
			}
		})
		.collect_view();

	view! {
		<div class="page education">
			<header class="page-header">
				<h1 class="gradient-text">"Education"</h1>
				<p>"Academic background and achievements"</p>
			</header>
			<div class="education-grid">{cards}</div>
		</div>
	}
}
