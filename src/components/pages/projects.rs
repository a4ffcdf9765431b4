//! Projects page, shown as a card gallery or as a numbered workflow.

use std::sync::Arc;

use leptos::prelude::*;

use super::{bullets, tags};
use crate::components::selection::Expansion;
use crate::content::Project;

/// Characters of a project title shown on a workflow node.
const WORKFLOW_TITLE_LEN: usize = 20;

/// How the projects page lays out its projects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectView {
	/// Cards that expand in place.
	#[default]
	Gallery,
	/// Numbered nodes that open a modal.
	Workflow,
}

impl ProjectView {
	fn label(self) -> &'static str {
		match self {
			ProjectView::Gallery => "Gallery View",
			ProjectView::Workflow => "Workflow View",
		}
	}
}

#[component]
pub fn ProjectsPage(projects: Vec<Project>) -> impl IntoView {
	let mode = RwSignal::new(ProjectView::default());
	let expansion = RwSignal::new(Expansion::<u32>::new());
	let projects = Arc::new(projects);

	let toggle = [ProjectView::Gallery, ProjectView::Workflow]
		.into_iter()
		.map(|target| {
			view! {
				<button
					class=move || if mode.get() == target { "view-toggle active" } else { "view-toggle" }
					on:click=move |_| mode.set(target)
				>
					{target.label()}
				</button>
			}
		})
		.collect_view();

	let body = move || match mode.get() {
		ProjectView::Gallery => gallery(&projects, expansion).into_any(),
		ProjectView::Workflow => workflow(projects.clone(), expansion).into_any(),
	};

	view! {
		<div class="page projects">
			<header class="page-header">
				<h1 class="gradient-text">"My Projects"</h1>
				<p>"Explore my data science and machine learning projects"</p>
				<div class="view-toggles">{toggle}</div>
			</header>
			{body}
		</div>
	}
}

fn gallery(projects: &[Project], expansion: RwSignal<Expansion<u32>>) -> impl IntoView + use<> {
	let cards = projects
		.iter()
		.map(|project| {
			let id = project.id;
			let is_open = move || expansion.with(|e| e.is_expanded(id));
			let details = project.clone();
			view! {
				<article class="glass project-card">
					<div class=format!("project-badge {}", project.gradient)>{id.to_string()}</div>
					<p class="meta">{project.date.clone()}</p>
					<h3>{project.title.clone()}</h3>
					<p>{project.summary.clone()}</p>
					{move || is_open().then(|| project_details(&details))}
					<button class="btn-link" on:click=move |_| expansion.update(|e| e.toggle(id))>
						{move || if is_open() { "Show Less" } else { "View Details" }}
					</button>
				</article>
			}
		})
		.collect_view();

	view! { <div class="project-grid">{cards}</div> }
}

fn workflow(projects: Arc<Vec<Project>>, expansion: RwSignal<Expansion<u32>>) -> impl IntoView {
	let nodes = projects
		.iter()
		.map(|project| {
			let id = project.id;
			view! {
				<button
					class=format!("workflow-node {}", project.gradient)
					title=project.title.clone()
					on:click=move |_| expansion.update(|e| e.toggle(id))
				>
					<span class="node-number">{id.to_string()}</span>
					<span class="node-title">{project.short_title(WORKFLOW_TITLE_LEN)}</span>
				</button>
			}
		})
		.collect_view();

	let modal = move || {
		let id = expansion.with(|e| e.expanded())?;
		let project = projects.iter().find(|p| p.id == id)?;
		Some(view! {
			<div class="modal-backdrop" on:click=move |_| expansion.update(Expansion::collapse)>
				<div class="modal glass" on:click=|ev| ev.stop_propagation()>
					<button class="modal-close" on:click=move |_| expansion.update(Expansion::collapse)>
						"✕"
					</button>
					<div class=format!("project-badge {}", project.gradient)>{id.to_string()}</div>
					<p class="meta">{project.date.clone()}</p>
					<h2>{project.title.clone()}</h2>
					<p>{project.summary.clone()}</p>
					{project_details(project)}
				</div>
			</div>
		})
	};

	view! {
		<div class="workflow">
			<p class="workflow-hint">"Click on any project node to see details"</p>
			<div class="workflow-nodes">{nodes}</div>
			{modal}
		</div>
	}
}

fn project_details(project: &Project) -> impl IntoView + use<> {
	let metric_class = format!("metric {}", project.gradient);
	let metrics = project
		.metrics
		.iter()
		.map(|m| view! { <span class=metric_class.clone()>{m.clone()}</span> })
		.collect_view();

	view! {
		<div class="project-details">
			<h4>"Description:"</h4>
			<ul>{bullets(&project.details)}</ul>
			<h4>"Technologies:"</h4>
			<div class="tags">{tags(&project.technologies, "tag")}</div>
			<h4>"Key Metrics:"</h4>
			<div class="tags">{metrics}</div>
		</div>
	}
}
