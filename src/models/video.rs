use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::blog::truncate_chars;
use super::{Author, VideoCategory, VideoSource};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub video_id: String,
    /// Stored as free text so documents written with an unknown
    /// provider still decode; rendering treats anything unparseable
    /// as an unsupported source.
    #[serde(default)]
    pub video_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub author: Option<Author>,
}

impl Video {
    pub fn source(&self) -> Option<VideoSource> {
        self.video_type.parse().ok()
    }

    pub fn category_label(&self) -> Option<String> {
        let raw = self.category.as_deref().filter(|c| !c.is_empty())?;
        match raw.parse::<VideoCategory>() {
            Ok(category) => Some(category.label().to_string()),
            Err(_) => Some(raw.to_string()),
        }
    }

    pub fn excerpt(&self) -> String {
        truncate_chars(self.description.trim(), 120)
    }
}
