use std::{fmt, sync::LazyLock};

use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::{Dictionary, Language};

pub static CONTENT: LazyLock<Content> = LazyLock::new(|| match Content::load() {
    Ok(content) => content,
    Err(e) => {
        log::error!("couldn't load site content: {e}");
        Content::default()
    }
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse {file}: {reason}")]
    Parse { file: String, reason: String },
}

pub(crate) fn parse_asset<T: DeserializeOwned>(name: &str) -> Result<T, ContentError> {
    let file = Assets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    serde_json::from_slice(&file.data).map_err(|e| ContentError::Parse {
        file: name.to_string(),
        reason: e.to_string(),
    })
}

/// User-facing text that is either a literal or a translation key with its English fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Localized {
    Keyed { key: String, text: String },
    Literal(String),
}

impl Localized {
    pub fn fallback(&self) -> &str {
        match self {
            Self::Keyed { text, .. } => text,
            Self::Literal(text) => text,
        }
    }

    pub fn resolve<'a>(&'a self, dict: &'a Dictionary, language: Language) -> &'a str {
        match self {
            Self::Keyed { key, text } => dict.translate(key, text, language),
            Self::Literal(text) => text,
        }
    }
}

impl From<&str> for Localized {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    pub name: Localized,
    pub image: String,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: u32,
    pub period: String,
    pub institution: Localized,
    pub degree: Localized,
    pub location: String,
    pub description: Localized,
    pub icon: String,
    pub achievements: Vec<Localized>,
    #[serde(default)]
    pub courses: Vec<Localized>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkProject {
    pub name: Localized,
    pub description: Localized,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: u32,
    pub title: Localized,
    pub company: String,
    pub period: String,
    pub description: Localized,
    pub skills: Vec<String>,
    pub achievements: Vec<Localized>,
    pub projects: Vec<WorkProject>,
    pub team: Localized,
    pub location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }

    pub fn label(&self) -> Localized {
        let text = match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        };
        Localized::Keyed {
            key: format!("skills.level.{}", self.as_str()),
            text: text.to_string(),
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub level: SkillLevel,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub id: String,
    pub label: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screenshot {
    pub src: String,
    pub alt: String,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub screenshots: Vec<Screenshot>,
    pub category: String,
    pub technologies: Vec<String>,
    pub github: Option<String>,
    pub demo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub icon: String,
    pub title: Localized,
    pub description: Localized,
}

#[derive(Debug, Clone, Default)]
pub struct Content {
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub services: Vec<Service>,
}

impl Content {
    pub fn load() -> Result<Self, ContentError> {
        Ok(Self {
            education: parse_asset("education.json")?,
            experience: parse_asset("experience.json")?,
            skills: parse_asset("skills.json")?,
            projects: parse_asset("projects.json")?,
            services: parse_asset("services.json")?,
        })
    }

    pub fn skill_count(&self) -> usize {
        self.skills.iter().map(|c| c.skills.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let content = Content::load().expect("embedded content should parse");
        assert_eq!(content.experience.len(), 4);
        assert_eq!(content.education.len(), 3);
        assert_eq!(content.projects.len(), 6);
        assert_eq!(content.services.len(), 6);
        assert_eq!(content.skills.len(), 7);
        assert!(content.skill_count() > 30);
    }

    #[test]
    fn test_content_collections_are_populated() {
        let content = Content::load().unwrap();
        for entry in &content.experience {
            assert!(!entry.achievements.is_empty(), "{}", entry.company);
            assert!(!entry.projects.is_empty(), "{}", entry.company);
        }
        for category in &content.skills {
            assert!(!category.skills.is_empty(), "{}", category.id);
        }
        for project in &content.projects {
            assert!(!project.technologies.is_empty(), "{}", project.title);
        }
    }

    #[test]
    fn test_ids_unique_within_collection() {
        let content = Content::load().unwrap();
        let mut ids = content.projects.iter().map(|p| p.id).collect::<Vec<_>>();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), content.projects.len());

        let mut ids = content.experience.iter().map(|e| e.id).collect::<Vec<_>>();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), content.experience.len());
    }

    #[test]
    fn test_localized_accepts_both_shapes() {
        let keyed: Localized =
            serde_json::from_str(r#"{ "key": "nav.home", "text": "Home" }"#).unwrap();
        assert_eq!(
            keyed,
            Localized::Keyed {
                key: "nav.home".to_string(),
                text: "Home".to_string()
            }
        );
        let literal: Localized = serde_json::from_str(r#""Rabat, Morocco""#).unwrap();
        assert_eq!(literal, Localized::from("Rabat, Morocco"));
        assert_eq!(literal.fallback(), "Rabat, Morocco");
    }

    #[test]
    fn test_certificate_names_mix_literals_and_keys() {
        let content = Content::load().unwrap();
        let certificates = content
            .education
            .iter()
            .flat_map(|e| e.certificates.iter())
            .collect::<Vec<_>>();
        assert!(certificates
            .iter()
            .any(|c| matches!(c.name, Localized::Literal(_))));
        assert!(certificates
            .iter()
            .any(|c| matches!(c.name, Localized::Keyed { .. })));
    }

    #[test]
    fn test_missing_asset() {
        let err = parse_asset::<Vec<Project>>("nope.json").unwrap_err();
        assert_eq!(err, ContentError::NotFound("nope.json".to_string()));
    }

    #[test]
    fn test_skill_level_order_and_labels() {
        assert!(SkillLevel::Beginner < SkillLevel::Expert);
        let level: SkillLevel = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(level, SkillLevel::Advanced);
        assert_eq!(level.to_string(), "advanced");
        match level.label() {
            Localized::Keyed { key, text } => {
                assert_eq!(key, "skills.level.advanced");
                assert_eq!(text, "Advanced");
            }
            Localized::Literal(_) => panic!("level labels should be translatable"),
        }
    }
}
