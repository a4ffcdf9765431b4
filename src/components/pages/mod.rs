//! Site pages and the navigation bar that switches between them.

mod contact;
mod education;
mod experience;
mod hobbies;
mod home;
mod projects;

use leptos::prelude::*;

pub use contact::ContactPage;
pub use education::EducationPage;
pub use experience::ExperiencePage;
pub use hobbies::HobbiesPage;
pub use home::HomePage;
pub use projects::{ProjectView, ProjectsPage};

use crate::content::Portfolio;

/// The pages of the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Page {
	#[default]
	Home,
	Projects,
	Experience,
	Education,
	Hobbies,
	Contact,
}

impl Page {
	/// Pages listed in the nav bar, in display order.
	pub const LINKS: [Page; 5] = [
		Page::Projects,
		Page::Experience,
		Page::Education,
		Page::Hobbies,
		Page::Contact,
	];

	pub fn label(self) -> &'static str {
		match self {
			Page::Home => "Home",
			Page::Projects => "Projects",
			Page::Experience => "Experience",
			Page::Education => "Education",
			Page::Hobbies => "Hobbies",
			Page::Contact => "Contact",
		}
	}
}

/// Render `page` from `content`.
pub fn page_view(page: Page, content: &Portfolio, nav: RwSignal<Page>) -> AnyView {
	match page {
		Page::Home => view! { <HomePage content=content.clone() nav=nav /> }.into_any(),
		Page::Projects => view! { <ProjectsPage projects=content.projects.clone() /> }.into_any(),
		Page::Experience => {
			view! { <ExperiencePage experience=content.experience.clone() /> }.into_any()
		}
		Page::Education => {
			view! { <EducationPage education=content.education.clone() /> }.into_any()
		}
		Page::Hobbies => view! { <HobbiesPage content=content.clone() /> }.into_any(),
		Page::Contact => view! { <ContactPage content=content.clone() /> }.into_any(),
	}
}

/// Top navigation with a collapsible menu for narrow screens.
#[component]
pub fn NavBar(page: RwSignal<Page>) -> impl IntoView {
	let menu_open = RwSignal::new(false);

	let links = Page::LINKS
		.into_iter()
		.map(|target| {
			view! {
				<li>
					<button
						class=move || if page.get() == target { "nav-link active" } else { "nav-link" }
						on:click=move |_| {
							page.set(target);
							menu_open.set(false);
						}
					>
						{target.label()}
					</button>
				</li>
			}
		})
		.collect_view();

	view! {
		<nav class="site-nav">
			<button class="nav-brand" on:click=move |_| page.set(Page::Home)>
				"Portfolio"
			</button>
			<button
				class="nav-menu-toggle"
				aria-label="Toggle menu"
				on:click=move |_| menu_open.update(|open| *open = !*open)
			>
				{move || if menu_open.get() { "✕" } else { "☰" }}
			</button>
			<ul class=move || if menu_open.get() { "nav-links open" } else { "nav-links" }>
				{links}
			</ul>
		</nav>
	}
}

/// Bulleted list items.
fn bullets(items: &[String]) -> impl IntoView + use<> {
	items
		.iter()
		.map(|item| {
			view! {
				<li class="bullet">
					<span class="bullet-dot">"•"</span>
					<span>{item.clone()}</span>
				</li>
			}
		})
		.collect_view()
}

/// Inline tags with a shared class.
fn tags(items: &[String], class: &'static str) -> impl IntoView + use<> {
	items
		.iter()
		.map(|item| view! { <span class=class>{item.clone()}</span> })
		.collect_view()
}
