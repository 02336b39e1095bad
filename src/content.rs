use serde::Deserialize;
use thiserror::Error;

use crate::carousel::CarouselItem;

const EMBEDDED_CONTENT: &str = include_str!("../content/portfolio.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("portfolio content is not valid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("portfolio content lists no projects")]
    NoProjects,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Owner {
    pub brand: String,
    pub name: String,
    pub intro: String,
    pub hero_image: String,
    pub portrait: String,
    pub role: String,
    pub about: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub tag: String,
    pub description: String,
    pub image: String,
    pub link: String,
}

impl Project {
    pub fn badge_class(&self) -> &'static str {
        match self.tag.as_str() {
            "Web Development" => "bg-blue-500",
            "UI/UX Design" => "bg-purple-500",
            "Dashboard" => "bg-green-500",
            _ => "bg-yellow-500",
        }
    }
}

impl CarouselItem for Project {
    fn item_id(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Skill {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub phone_href: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub icon: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Portfolio {
    pub owner: Owner,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub contact: Contact,
    pub socials: Vec<SocialLink>,
}

impl Portfolio {
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_CONTENT)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = serde_json::from_str(raw)?;
        if portfolio.projects.is_empty() {
            return Err(ContentError::NoProjects);
        }
        Ok(portfolio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::Carousel;

    #[test]
    fn embedded_content_decodes() {
        let portfolio = Portfolio::embedded().expect("embedded content should decode");

        assert_eq!(portfolio.projects.len(), 4);
        assert_eq!(portfolio.skills.len(), 9);
        assert_eq!(portfolio.socials.len(), 3);
    }

    #[test]
    fn embedded_projects_form_a_valid_carousel() {
        let portfolio = Portfolio::embedded().expect("embedded content should decode");
        let carousel = Carousel::new(portfolio.projects).expect("project ids are unique");

        assert_eq!(carousel.center_item().title, "E-commerce Platform");
    }

    #[test]
    fn badge_colour_follows_tag() {
        let portfolio = Portfolio::embedded().expect("embedded content should decode");
        let badges: Vec<&str> = portfolio
            .projects
            .iter()
            .map(Project::badge_class)
            .collect();

        assert_eq!(
            badges,
            vec!["bg-blue-500", "bg-purple-500", "bg-green-500", "bg-yellow-500"]
        );
    }

    #[test]
    fn empty_project_list_is_rejected() {
        let raw = EMBEDDED_CONTENT.replacen("\"projects\": [", "\"unused\": [", 1);
        assert!(matches!(
            Portfolio::from_json(&raw),
            Err(ContentError::Parse(_))
        ));

        let mut value: serde_json::Value =
            serde_json::from_str(EMBEDDED_CONTENT).expect("embedded content is JSON");
        value["projects"] = serde_json::Value::Array(Vec::new());
        assert!(matches!(
            Portfolio::from_json(&value.to_string()),
            Err(ContentError::NoProjects)
        ));
    }
}
