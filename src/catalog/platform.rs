use std::fmt::{Display, Formatter};
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Hash, Ord, PartialOrd, Eq, PartialEq)]
#[serde(transparent)]
pub struct PlatformId(pub String);

impl Display for PlatformId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlatformId {
    fn from(id: &str) -> Self {
        PlatformId(id.to_string())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    pub id: PlatformId,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    pub main_category: String,
    #[serde(default)]
    pub sub_category: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String
}

/// A platform as submitted by a form, before an id has been assigned.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformDraft {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    pub main_category: String,
    #[serde(default)]
    pub sub_category: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String
}

impl PlatformDraft {
    pub fn into_platform(self, id: PlatformId) -> Platform {
        Platform {
            id,
            name: self.name,
            url: self.url,
            description: self.description,
            main_category: self.main_category,
            sub_category: self.sub_category,
            icon: self.icon,
            color: self.color
        }
    }
}

impl From<&Platform> for PlatformDraft {
    fn from(platform: &Platform) -> Self {
        PlatformDraft {
            name: platform.name.clone(),
            url: platform.url.clone(),
            description: platform.description.clone(),
            main_category: platform.main_category.clone(),
            sub_category: platform.sub_category.clone(),
            icon: platform.icon.clone(),
            color: platform.color.clone()
        }
    }
}

/// Hands out timestamp-derived platform ids.
///
/// Ids are the current UTC time in milliseconds. When the clock has not moved
/// since the previous id, or the candidate is already taken, the value is
/// bumped until it is unique.
#[derive(Debug, Default)]
pub struct IdSource {
    last: i64
}

impl IdSource {
    pub fn new() -> Self {
        IdSource::default()
    }

    pub fn next(&mut self, existing: &[Platform]) -> PlatformId {
        let mut candidate = Utc::now().timestamp_millis().max(self.last + 1);

        while existing.iter().any(|p| p.id.0 == candidate.to_string()) {
            candidate += 1;
        }

        self.last = candidate;
        PlatformId(candidate.to_string())
    }
}
