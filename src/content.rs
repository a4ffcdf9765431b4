//! Site content: the data the pages render.
//!
//! Content is JSON. The copy compiled into the binary comes from
//! `content/portfolio.json`; a page can replace it with a
//! `<script id="portfolio-data" type="application/json">` element.

use serde::Deserialize;

use crate::components::selection::Collection;
use crate::error::Result;

const EMBEDDED: &str = include_str!("../content/portfolio.json");

/// Who the site is about.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Owner {
	pub first_name: String,
	pub last_name: String,
	/// Document title.
	pub title: String,
	/// Document description.
	pub tagline: String,
	pub photo: String,
	pub resume: String,
	pub email: String,
	pub location: String,
	pub bio: Vec<String>,
}

/// A titled group of skill tags.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SkillGroup {
	pub title: String,
	pub items: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Project {
	pub id: u32,
	pub title: String,
	pub date: String,
	pub summary: String,
	pub details: Vec<String>,
	pub technologies: Vec<String>,
	pub metrics: Vec<String>,
	/// CSS gradient classes for the accent.
	pub gradient: String,
}

impl Project {
	/// Title cut to `max` characters with a trailing `...` when longer.
	pub fn short_title(&self, max: usize) -> String {
		if self.title.chars().count() > max {
			let head: String = self.title.chars().take(max).collect();
			format!("{}...", head)
		} else {
			self.title.clone()
		}
	}
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Experience {
	pub id: u32,
	pub company: String,
	pub position: String,
	pub location: String,
	/// Employment type, e.g. "Internship".
	pub kind: String,
	pub period: String,
	pub duration: String,
	pub work_type: String,
	pub description: Vec<String>,
	pub gradient: String,
	#[serde(default)]
	pub current: bool,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Education {
	pub degree: String,
	pub university: String,
	pub location: String,
	pub period: String,
	pub gradient: String,
	pub achievements: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Image {
	pub src: String,
	pub alt: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Hobby {
	pub id: u32,
	pub title: String,
	pub description: String,
	pub gradient: String,
	pub images: Vec<Image>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SocialLink {
	pub name: String,
	pub href: String,
	pub gradient: String,
}

/// Complete site content.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Portfolio {
	pub owner: Owner,
	#[serde(default)]
	pub skills: Vec<SkillGroup>,
	#[serde(default)]
	pub projects: Vec<Project>,
	#[serde(default)]
	pub experience: Vec<Experience>,
	#[serde(default)]
	pub education: Vec<Education>,
	#[serde(default)]
	pub hobbies: Vec<Hobby>,
	#[serde(default)]
	pub social: Vec<SocialLink>,
}

impl Portfolio {
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	/// The content compiled into the binary.
	pub fn embedded() -> Result<Self> {
		Self::from_json(EMBEDDED)
	}

	/// One gallery collection per hobby.
	pub fn hobby_collections(&self) -> Vec<Collection<Image>> {
		self.hobbies
			.iter()
			.map(|h| Collection {
				id: h.id,
				items: h.images.clone(),
			})
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::error::PortfolioError;

	#[test]
	fn embedded_content_parses() {
		let p = Portfolio::embedded().unwrap();
		assert_eq!(p.owner.first_name, "Sharanya");
		assert_eq!(p.projects.len(), 5);
		assert_eq!(p.experience.len(), 3);
		assert_eq!(p.education.len(), 2);
		assert_eq!(p.skills.len(), 4);
		assert_eq!(p.social.len(), 3);
		assert!(p.experience[0].current);
	}

	#[test]
	fn hobbies_become_gallery_collections() {
		let p = Portfolio::embedded().unwrap();
		let sizes: Vec<(u32, usize)> = p
			.hobby_collections()
			.iter()
			.map(|c| (c.id, c.items.len()))
			.collect();
		assert_eq!(sizes, vec![(1, 11), (2, 4)]);
	}

	#[test]
	fn sections_default_to_empty() {
		let p = Portfolio::from_json(
			r#"{"owner": {"first_name": "A", "last_name": "B", "title": "t", "tagline": "",
			"photo": "", "resume": "", "email": "", "location": "", "bio": []}}"#,
		)
		.unwrap();
		assert!(p.projects.is_empty());
		assert!(p.hobbies.is_empty());
	}

	#[test]
	fn malformed_json_is_a_content_error() {
		assert!(matches!(
			Portfolio::from_json("{ not json"),
			Err(PortfolioError::Content(_))
		));
	}

	#[test]
	fn short_titles_truncate_by_character() {
		let mut project = Project {
			title: "Taxi Demand Prediction".into(),
			..Project::default()
		};
		assert_eq!(project.short_title(20), "Taxi Demand Predicti...");
		project.title = "Short".into();
		assert_eq!(project.short_title(20), "Short");
	}
}
