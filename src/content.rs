use std::sync::LazyLock;

use chrono::NaiveDate;
use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

pub static PROFILE: LazyLock<Profile> = LazyLock::new(|| load_or_default("profile.json"));
pub static TESTIMONIALS: LazyLock<Vec<Testimonial>> =
    LazyLock::new(|| load_or_default("testimonials.json"));
pub static SKILL_GROUPS: LazyLock<Vec<SkillGroup>> =
    LazyLock::new(|| load_or_default("skills.json"));
pub static EXPERIENCE: LazyLock<Vec<Experience>> =
    LazyLock::new(|| load_or_default("experience.json"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse {file}: {reason}")]
    Parse { file: String, reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub github: String,
    pub linkedin: String,
    pub resume: String,
    pub photo: String,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        let digits = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect::<String>();
        format!("tel:{digits}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub image: String,
    pub quote: String,
    pub rating: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub logo: String,
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
    pub location: String,
    pub arrangement: String,
    pub overview: String,
    pub responsibilities: Vec<String>,
    pub technologies: Vec<String>,
}

impl Experience {
    /// "Mar 2024 - Present" style range.
    pub fn period(&self) -> String {
        let end = self
            .end
            .map(|d| d.format("%b %Y").to_string())
            .unwrap_or_else(|| "Present".to_string());
        format!("{} - {}", self.start.format("%b %Y"), end)
    }
}

pub fn parse<T: DeserializeOwned>(file: &str, data: &[u8]) -> Result<T, ContentError> {
    serde_json::from_slice(data).map_err(|e| ContentError::Parse {
        file: file.to_string(),
        reason: e.to_string(),
    })
}

pub fn load<T: DeserializeOwned>(file: &str) -> Result<T, ContentError> {
    let embedded = Assets::get(file).ok_or_else(|| ContentError::NotFound(file.to_string()))?;
    parse(file, &embedded.data)
}

fn load_or_default<T: DeserializeOwned + Default>(file: &str) -> T {
    load(file).unwrap_or_else(|e| {
        log::error!("{e}");
        T::default()
    })
}
