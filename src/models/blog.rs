use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Author;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blog {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub author: Option<Author>,
}

impl Blog {
    /// Card teaser: the summary when present, otherwise the leading
    /// slice of the content.
    pub fn excerpt(&self) -> String {
        if let Some(summary) = self.summary.as_deref().filter(|s| !s.trim().is_empty()) {
            return summary.trim().to_string();
        }
        truncate_chars(self.content.trim(), 150)
    }
}

pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog_with(summary: Option<&str>, content: &str) -> Blog {
        Blog {
            id: "b1".to_string(),
            title: "Title".to_string(),
            summary: summary.map(str::to_string),
            content: content.to_string(),
            tags: vec![],
            published: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            author: None,
        }
    }

    #[test]
    fn excerpt_prefers_summary() {
        let blog = blog_with(Some("A short summary"), "Long content body");
        assert_eq!(blog.excerpt(), "A short summary");
    }

    #[test]
    fn excerpt_falls_back_to_truncated_content() {
        let blog = blog_with(None, &"x".repeat(200));
        let excerpt = blog.excerpt();
        assert_eq!(excerpt.chars().count(), 153, "150 chars plus ellipsis");
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let text = "é".repeat(200);
        let out = truncate_chars(&text, 150);
        assert!(out.starts_with('é'));
        assert!(out.ends_with("..."));
    }
}
