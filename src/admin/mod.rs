pub use controller::{AdminContent, PendingDelete};
pub use forms::{BlogForm, VideoForm};

mod controller;
mod forms;

use crate::app::ContentHub;
use crate::common::ValidationError;
use crate::models::{Blog, Video};
use crate::views::format::escape_html;
use crate::views::fragments::error_block;

use controller::Crud;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AdminTab {
    Blogs,
    Videos,
    NewBlog,
    NewVideo,
    Settings,
}

impl AdminTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blogs => "blogs",
            Self::Videos => "videos",
            Self::NewBlog => "new-blog",
            Self::NewVideo => "new-video",
            Self::Settings => "settings",
        }
    }
}

impl std::fmt::Display for AdminTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AdminTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "blogs" => Ok(Self::Blogs),
            "videos" => Ok(Self::Videos),
            "new-blog" => Ok(Self::NewBlog),
            "new-video" => Ok(Self::NewVideo),
            "settings" => Ok(Self::Settings),
            _ => Err(format!("invalid admin tab: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SubmitAction {
    Publish,
    SaveDraft,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// Validation failed; nothing was written.
    Invalid(ValidationError),
    /// The write itself failed.
    Failed,
}

/// The admin panel behind the router's admin gate. Tab loads render
/// HTML; mutations go through the typed methods and report through
/// the notifier.
pub struct AdminPanel {
    hub: ContentHub,
}

impl AdminPanel {
    pub(crate) fn new(hub: ContentHub) -> Self {
        Self { hub }
    }

    pub async fn load(&self, tab: AdminTab) -> String {
        match tab {
            AdminTab::Blogs => Crud::<Blog>::new(&self.hub).table_html().await,
            AdminTab::Videos => Crud::<Video>::new(&self.hub).table_html().await,
            AdminTab::NewBlog => form_or_error(Blog::form_html(None)),
            AdminTab::NewVideo => form_or_error(Video::form_html(None)),
            AdminTab::Settings => settings_html(&self.hub.config.site_name),
        }
    }

    pub async fn edit_blog(&self, id: &str) -> Option<String> {
        Crud::<Blog>::new(&self.hub).edit_form_html(id).await
    }

    pub async fn edit_video(&self, id: &str) -> Option<String> {
        Crud::<Video>::new(&self.hub).edit_form_html(id).await
    }

    pub async fn save_blog(&self, form: &BlogForm, action: SubmitAction) -> SaveOutcome {
        Crud::<Blog>::new(&self.hub).save(form, action).await
    }

    pub async fn save_video(&self, form: &VideoForm, action: SubmitAction) -> SaveOutcome {
        Crud::<Video>::new(&self.hub).save(form, action).await
    }

    pub fn delete_blog(&self, id: &str) -> PendingDelete<Blog> {
        Crud::<Blog>::new(&self.hub).begin_delete(id)
    }

    pub fn delete_video(&self, id: &str) -> PendingDelete<Video> {
        Crud::<Video>::new(&self.hub).begin_delete(id)
    }

    /// The settings tab is presentation only for now; saving just
    /// acknowledges.
    pub fn save_settings(&self) {
        self.hub.notifier.success("Settings saved successfully!");
    }
}

fn form_or_error(result: Result<String, askama::Error>) -> String {
    match result {
        Ok(html) => html,
        Err(e) => {
            log::error!("Failed to render admin form: {e}");
            error_block("Error rendering the admin panel.")
        }
    }
}

fn settings_html(site_name: &str) -> String {
    format!(
        r#"<div class="admin-header">
    <h2>Site Settings</h2>
</div>
<form id="settings-form" class="content-form">
    <div class="form-group">
        <label for="settings-site-name">Site Name</label>
        <input type="text" id="settings-site-name" value="{}">
    </div>
    <div class="form-footer">
        <button type="submit" class="btn btn-primary">Save Settings</button>
    </div>
</form>"#,
        escape_html(site_name)
    )
}
