#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use content_hub::admin::{BlogForm, VideoForm};
use content_hub::auth::LocalProvider;
use content_hub::common::StoreError;
use content_hub::router::{RenderSink, Update, ViewBody};
use content_hub::shell::BuiltinShells;
use content_hub::store::{Document, DocumentStore, Fields, Query};
use content_hub::{ContentHub, HubConfig};

pub const ADMIN_EMAIL: &str = "admin@test.com";
pub const ADMIN_PASSWORD: &str = "hunter2-but-longer";

/// Render sink that records every frame for assertions.
#[derive(Default)]
pub struct RecordingSink {
    updates: Mutex<Vec<Update>>,
}

impl RecordingSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn updates(&self) -> Vec<Update> {
        self.updates.lock().expect("sink lock poisoned").clone()
    }

    pub fn clear(&self) {
        self.updates.lock().expect("sink lock poisoned").clear();
    }

    /// HTML of the most recent content frame.
    pub fn last_content(&self) -> Option<String> {
        self.updates().iter().rev().find_map(|update| match update {
            Update::Navigation {
                body: ViewBody::Content(html),
                ..
            } => Some(html.clone()),
            _ => None,
        })
    }

    pub fn visibility_updates(&self) -> Vec<(Vec<String>, bool)> {
        self.updates()
            .iter()
            .filter_map(|update| match update {
                Update::Visibility {
                    visible,
                    no_results,
                    ..
                } => Some((visible.clone(), *no_results)),
                _ => None,
            })
            .collect()
    }
}

impl RenderSink for RecordingSink {
    fn apply(&self, update: Update) {
        self.updates
            .lock()
            .expect("sink lock poisoned")
            .push(update);
    }
}

pub fn test_hub() -> ContentHub {
    ContentHub::in_memory(HubConfig::with_admin(ADMIN_EMAIL))
}

pub const BACKEND_FAILURE: &str = "connection refused by backend";

/// Store where every operation fails with the same backend message.
pub struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn add(&self, _collection: &str, _fields: Fields) -> Result<Document, StoreError> {
        Err(StoreError::Backend(BACKEND_FAILURE.to_string()))
    }

    async fn get(&self, _collection: &str, _id: &str) -> Result<Option<Document>, StoreError> {
        Err(StoreError::Backend(BACKEND_FAILURE.to_string()))
    }

    async fn update(
        &self,
        _collection: &str,
        _id: &str,
        _fields: Fields,
    ) -> Result<Document, StoreError> {
        Err(StoreError::Backend(BACKEND_FAILURE.to_string()))
    }

    async fn delete(&self, _collection: &str, _id: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend(BACKEND_FAILURE.to_string()))
    }

    async fn query(&self, _collection: &str, _query: &Query) -> Result<Vec<Document>, StoreError> {
        Err(StoreError::Backend(BACKEND_FAILURE.to_string()))
    }
}

pub fn failing_hub() -> ContentHub {
    ContentHub::new(
        HubConfig::with_admin(ADMIN_EMAIL),
        Arc::new(FailingStore),
        Arc::new(LocalProvider::new()),
        Arc::new(BuiltinShells::new()),
    )
}

pub async fn sign_in_admin(hub: &ContentHub) {
    hub.identity
        .sign_up(ADMIN_EMAIL, ADMIN_PASSWORD, "Admin")
        .await
        .expect("admin sign-up should succeed");
}

fn to_fields(value: Value) -> Fields {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

pub async fn seed_blog(
    hub: &ContentHub,
    title: &str,
    content: &str,
    tags: &[&str],
    published: bool,
) -> String {
    hub.store
        .add(
            "blogs",
            to_fields(json!({
                "title": title,
                "content": content,
                "tags": tags,
                "published": published,
                "author": { "uid": "seed", "name": "Admin" },
            })),
        )
        .await
        .expect("seeding a blog should succeed")
        .id
}

pub async fn seed_video(hub: &ContentHub, title: &str, category: &str, published: bool) -> String {
    hub.store
        .add(
            "videos",
            to_fields(json!({
                "title": title,
                "video_url": "https://youtu.be/dQw4w9WgXcQ",
                "video_id": "dQw4w9WgXcQ",
                "video_type": "youtube",
                "description": format!("About {title}"),
                "category": category,
                "tags": ["demo"],
                "published": published,
                "author": { "uid": "seed", "name": "Admin" },
            })),
        )
        .await
        .expect("seeding a video should succeed")
        .id
}

pub fn blog_form(title: &str, content: &str, tags: &str) -> BlogForm {
    BlogForm {
        id: None,
        title: title.to_string(),
        summary: String::new(),
        content: content.to_string(),
        tags: tags.to_string(),
    }
}

pub fn video_form(title: &str, video_url: &str, category: &str) -> VideoForm {
    VideoForm {
        id: None,
        title: title.to_string(),
        video_url: video_url.to_string(),
        description: format!("About {title}"),
        category: category.to_string(),
        tags: String::new(),
    }
}
