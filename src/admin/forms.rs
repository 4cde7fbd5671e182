use askama::{Error as RenderError, Template};
use serde_json::{Map, Value};

use crate::common::ValidationError;
use crate::models::{join_tags, parse_tags, parse_video_url, Blog, Video, VideoCategory};
use crate::store::Fields;
use crate::views::admin::{BlogFormTemplate, CategorySelect, VideoFormTemplate};

use super::AdminContent;

#[derive(Debug, Clone, Default)]
pub struct BlogForm {
    pub id: Option<String>,
    pub title: String,
    pub summary: String,
    pub content: String,
    /// Comma separated, as typed.
    pub tags: String,
}

#[derive(Debug, Clone, Default)]
pub struct VideoForm {
    pub id: Option<String>,
    pub title: String,
    pub video_url: String,
    pub description: String,
    pub category: String,
    pub tags: String,
}

impl AdminContent for Blog {
    type Form = BlogForm;

    const TABLE_HEADING: &'static str = "Manage Blogs";
    const NEW_LABEL: &'static str = "New Blog Post";
    const NEW_TAB: &'static str = "new-blog";

    fn form_id(form: &BlogForm) -> Option<&str> {
        form.id.as_deref()
    }

    fn payload(form: &BlogForm, published: bool) -> Result<Fields, ValidationError> {
        let title = form.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        let content = form.content.trim();
        if content.is_empty() {
            return Err(ValidationError::MissingContent);
        }

        let mut fields = Map::new();
        fields.insert("title".to_string(), Value::String(title.to_string()));
        fields.insert(
            "summary".to_string(),
            Value::String(form.summary.trim().to_string()),
        );
        fields.insert("content".to_string(), Value::String(content.to_string()));
        fields.insert("tags".to_string(), tags_value(&form.tags));
        fields.insert("published".to_string(), Value::Bool(published));
        Ok(fields)
    }

    fn form_from(item: &Blog) -> BlogForm {
        BlogForm {
            id: Some(item.id.clone()),
            title: item.title.clone(),
            summary: item.summary.clone().unwrap_or_default(),
            content: item.content.clone(),
            tags: join_tags(&item.tags),
        }
    }

    fn form_html(form: Option<&BlogForm>) -> Result<String, RenderError> {
        let blank = BlogForm::default();
        let form = form.unwrap_or(&blank);
        let is_edit = form.id.is_some();

        BlogFormTemplate {
            heading: if is_edit {
                "Edit Blog Post"
            } else {
                "Create New Blog Post"
            },
            submit_label: if is_edit { "Update Post" } else { "Publish Post" },
            id: form.id.clone().unwrap_or_default(),
            is_edit,
            title: form.title.clone(),
            summary: form.summary.clone(),
            content: form.content.clone(),
            tags: form.tags.clone(),
        }
        .render()
    }
}

impl AdminContent for Video {
    type Form = VideoForm;

    const TABLE_HEADING: &'static str = "Manage Videos";
    const NEW_LABEL: &'static str = "New Video";
    const NEW_TAB: &'static str = "new-video";

    fn form_id(form: &VideoForm) -> Option<&str> {
        form.id.as_deref()
    }

    fn payload(form: &VideoForm, published: bool) -> Result<Fields, ValidationError> {
        let title = form.title.trim();
        if title.is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        let description = form.description.trim();
        if description.is_empty() {
            return Err(ValidationError::MissingDescription);
        }
        let video_url = form.video_url.trim();
        if video_url.is_empty() {
            return Err(ValidationError::MissingVideoUrl);
        }
        let (source, video_id) =
            parse_video_url(video_url).ok_or(ValidationError::InvalidVideoUrl)?;

        let mut fields = Map::new();
        fields.insert("title".to_string(), Value::String(title.to_string()));
        fields.insert(
            "video_url".to_string(),
            Value::String(video_url.to_string()),
        );
        fields.insert("video_id".to_string(), Value::String(video_id));
        fields.insert(
            "video_type".to_string(),
            Value::String(source.as_str().to_string()),
        );
        fields.insert(
            "description".to_string(),
            Value::String(description.to_string()),
        );
        fields.insert(
            "category".to_string(),
            Value::String(form.category.trim().to_lowercase()),
        );
        fields.insert("tags".to_string(), tags_value(&form.tags));
        fields.insert("published".to_string(), Value::Bool(published));
        Ok(fields)
    }

    fn form_from(item: &Video) -> VideoForm {
        VideoForm {
            id: Some(item.id.clone()),
            title: item.title.clone(),
            video_url: item.video_url.clone(),
            description: item.description.clone(),
            category: item.category.clone().unwrap_or_default(),
            tags: join_tags(&item.tags),
        }
    }

    fn form_html(form: Option<&VideoForm>) -> Result<String, RenderError> {
        let blank = VideoForm::default();
        let form = form.unwrap_or(&blank);
        let is_edit = form.id.is_some();

        let categories = VideoCategory::all()
            .iter()
            .map(|category| CategorySelect {
                value: category.as_str(),
                label: category.label(),
                selected: form.category.eq_ignore_ascii_case(category.as_str()),
            })
            .collect();

        VideoFormTemplate {
            heading: if is_edit { "Edit Video" } else { "Add New Video" },
            submit_label: if is_edit { "Update Video" } else { "Publish Video" },
            id: form.id.clone().unwrap_or_default(),
            is_edit,
            title: form.title.clone(),
            video_url: form.video_url.clone(),
            description: form.description.clone(),
            categories,
            tags: form.tags.clone(),
        }
        .render()
    }
}

fn tags_value(input: &str) -> Value {
    Value::Array(parse_tags(input).into_iter().map(Value::String).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blog_payload_requires_title_and_content() {
        let form = BlogForm {
            content: "Body".to_string(),
            ..Default::default()
        };
        assert_eq!(
            Blog::payload(&form, true),
            Err(ValidationError::MissingTitle)
        );

        let form = BlogForm {
            title: "Title".to_string(),
            content: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            Blog::payload(&form, true),
            Err(ValidationError::MissingContent)
        );
    }

    #[test]
    fn blog_payload_parses_tags_and_sets_published() {
        let form = BlogForm {
            title: " Hello ".to_string(),
            content: "World".to_string(),
            tags: "a, b , ,c".to_string(),
            ..Default::default()
        };
        let fields = Blog::payload(&form, false).unwrap();
        assert_eq!(fields["title"], serde_json::json!("Hello"));
        assert_eq!(fields["tags"], serde_json::json!(["a", "b", "c"]));
        assert_eq!(fields["published"], serde_json::json!(false));
    }

    #[test]
    fn video_payload_derives_source_and_id_from_url() {
        let form = VideoForm {
            title: "T".to_string(),
            description: "D".to_string(),
            video_url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
            category: "Tutorial".to_string(),
            ..Default::default()
        };
        let fields = Video::payload(&form, true).unwrap();
        assert_eq!(fields["video_type"], serde_json::json!("youtube"));
        assert_eq!(fields["video_id"], serde_json::json!("dQw4w9WgXcQ"));
        assert_eq!(fields["category"], serde_json::json!("tutorial"));
    }

    #[test]
    fn video_payload_rejects_bad_urls_before_any_write() {
        let base = VideoForm {
            title: "T".to_string(),
            description: "D".to_string(),
            ..Default::default()
        };

        let form = VideoForm {
            video_url: String::new(),
            ..base.clone()
        };
        assert_eq!(
            Video::payload(&form, true),
            Err(ValidationError::MissingVideoUrl)
        );

        let form = VideoForm {
            video_url: "https://example.com/clip/1".to_string(),
            ..base
        };
        assert_eq!(
            Video::payload(&form, true),
            Err(ValidationError::InvalidVideoUrl)
        );
    }

    #[test]
    fn edit_form_round_trips_tag_string() {
        let form = BlogForm {
            title: "T".to_string(),
            content: "C".to_string(),
            tags: "a, b , ,c".to_string(),
            ..Default::default()
        };
        let fields = Blog::payload(&form, true).unwrap();
        assert_eq!(fields["tags"], serde_json::json!(["a", "b", "c"]));

        let tags: Vec<String> = vec!["a".into(), "b".into(), "c".into()];
        assert_eq!(join_tags(&tags), "a, b, c");
    }
}
