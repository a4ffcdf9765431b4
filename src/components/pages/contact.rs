use leptos::prelude::*;

use crate::components::contact::ContactFormPanel;
use crate::content::Portfolio;

#[component]
pub fn ContactPage(content: Portfolio) -> impl IntoView {
	let owner = content.owner;
	let mailto = format!("mailto:{}", owner.email);

	let social = content
		.social
		.into_iter()
		.map(|link| {
			view! {
				<a
					href=link.href
					target="_blank"
					rel="noopener noreferrer"
					class=format!("social-link {}", link.gradient)
				>
					{link.name}
				</a>
			}
		})
		.collect_view();

	view! {
		<div class="page contact">
			<header class="page-header">
				<h1 class="gradient-text">"Let's Connect"</h1>
				<p>"I'm always open to discussing new opportunities, collaborations, or just having a chat about data science and technology."</p>
			</header>
			<div class="contact-grid">
				<section class="glass">
					<h2>"Send a Message"</h2>
					<ContactFormPanel />
				</section>
				<section class="contact-side">
					<div class="glass contact-info">
						<h2>"Contact Information"</h2>
						<p>
							<span class="label">"Email"</span>
							<a href=mailto>{owner.email}</a>
						</p>
						<p>
							<span class="label">"Location"</span>
							<span>{owner.location}</span>
						</p>
					</div>
					<div class="glass">
						<h2>"Connect With Me"</h2>
						<div class="social-links">{social}</div>
					</div>
				</section>
			</div>
		</div>
	}
}
