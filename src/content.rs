use std::{collections::HashSet, sync::LazyLock};

use chrono::{DateTime, Datelike};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::projects::ProjectDescriptor;

const CONTENT_FILE: &str = "site.json";

static SITE_CONTENT: LazyLock<SiteContent> = LazyLock::new(|| {
    SiteContent::load().expect("Embedded site content should be valid")
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content file {0} not found")]
    Missing(String),
    #[error("Couldn't parse site content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate project id {0}")]
    DuplicateProjectId(u32),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    pub initials: String,
    pub role: String,
    pub tagline: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    pub heading: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// One entry of the contact info column. Either text part may be absent, in
/// which case only the icon is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetail {
    pub icon: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub icon: String,
    pub href: String,
}

/// Everything the page displays that isn't controller state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub owner: Owner,
    #[serde(default)]
    pub about: AboutContent,
    #[serde(default)]
    pub projects: Vec<ProjectDescriptor>,
    #[serde(default)]
    pub contact_details: Vec<ContactDetail>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

impl SiteContent {
    pub fn load() -> Result<Self, ContentError> {
        let file =
            Assets::get(CONTENT_FILE).ok_or_else(|| ContentError::Missing(CONTENT_FILE.into()))?;
        Self::from_json(&file.data)
    }

    pub fn from_json(data: &[u8]) -> Result<Self, ContentError> {
        let content: SiteContent = serde_json::from_slice(data)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(ContentError::DuplicateProjectId(project.id));
            }
        }
        Ok(())
    }
}

pub fn site_content() -> &'static SiteContent {
    &SITE_CONTENT
}

/// Year the site was built, shown in the copyright line.
pub fn build_year() -> i32 {
    year_of(env!("BUILD_TIME")).unwrap_or(2025)
}

fn year_of(timestamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|t| t.year())
}
