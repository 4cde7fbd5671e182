use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::common::TemplateError;

/// Source of page shells: the static outer markup of each page, with
/// `{{slot}}` placeholders for the dynamic parts.
#[async_trait]
pub trait TemplateSource: Send + Sync {
    async fn fetch(&self, name: &str) -> Result<String, TemplateError>;
}

/// Reads `{root}/{name}.html` from disk.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl TemplateSource for DirSource {
    async fn fetch(&self, name: &str) -> Result<String, TemplateError> {
        let path = self.root.join(format!("{name}.html"));
        tokio::fs::read_to_string(&path).await.map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                TemplateError::NotFound(name.to_string())
            } else {
                TemplateError::Io {
                    name: name.to_string(),
                    source,
                }
            }
        })
    }
}

/// Embedded default shells for the seven pages. Used when no
/// template directory is configured, and by the tests.
pub struct BuiltinShells {
    pages: HashMap<&'static str, &'static str>,
}

impl BuiltinShells {
    pub fn new() -> Self {
        let mut pages = HashMap::new();
        pages.insert("home", HOME_SHELL);
        pages.insert("blogs", BLOGS_SHELL);
        pages.insert("videos", VIDEOS_SHELL);
        pages.insert("auth", AUTH_SHELL);
        pages.insert("contact", CONTACT_SHELL);
        pages.insert("terms", TERMS_SHELL);
        pages.insert("admin", ADMIN_SHELL);
        Self { pages }
    }
}

impl Default for BuiltinShells {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TemplateSource for BuiltinShells {
    async fn fetch(&self, name: &str) -> Result<String, TemplateError> {
        self.pages
            .get(name)
            .map(|shell| shell.to_string())
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))
    }
}

/// Merges rendered fragments into a shell's `{{slot}}` placeholders.
/// Values are inserted as-is; callers escape or render them first.
/// Unknown placeholders are left untouched.
pub fn merge_slots(shell: &str, slots: &[(&str, &str)]) -> String {
    let mut out = shell.to_string();
    for (name, html) in slots {
        out = out.replace(&format!("{{{{{name}}}}}"), html);
        out = out.replace(&format!("{{{{ {name} }}}}"), html);
    }
    out
}

const HOME_SHELL: &str = r#"<section class="hero">
    <h1>Welcome to {{site_name}}</h1>
    <p>Your destination for blogs and videos</p>
</section>
<section class="stats">
    <div class="stat"><span class="stat-value">{{blog_count}}</span><span class="stat-label">Blogs</span></div>
    <div class="stat"><span class="stat-value">{{video_count}}</span><span class="stat-label">Videos</span></div>
    <div class="stat"><span class="stat-value">{{user_count}}</span><span class="stat-label">Members</span></div>
</section>
<section class="featured">
    <h2>Featured Blogs</h2>
    <div class="content-grid" id="featured-blogs">{{featured_blogs}}</div>
</section>
<section class="featured">
    <h2>Featured Videos</h2>
    <div class="content-grid" id="featured-videos">{{featured_videos}}</div>
</section>
"#;

const BLOGS_SHELL: &str = r#"<section class="blog-section">
{{content}}
</section>
"#;

const VIDEOS_SHELL: &str = r#"<section class="video-section">
{{content}}
</section>
"#;

const AUTH_SHELL: &str = r#"<section class="auth-section">
{{content}}
</section>
"#;

const CONTACT_SHELL: &str = r#"<section class="contact-section">
    <h2 class="section-title">Contact Us</h2>
    <form id="contact-form" class="contact-form">
        <div class="form-group">
            <label for="contact-name">Name *</label>
            <input type="text" id="contact-name" required>
        </div>
        <div class="form-group">
            <label for="contact-email">Email *</label>
            <input type="email" id="contact-email" required>
        </div>
        <div class="form-group">
            <label for="contact-message">Message *</label>
            <textarea id="contact-message" rows="6" required></textarea>
        </div>
        <button type="submit" class="btn btn-primary">Send Message</button>
    </form>
</section>
"#;

const TERMS_SHELL: &str = r#"<section class="terms-section">
    <h2 class="section-title">Terms &amp; Policies</h2>
    <article class="terms-body">
        <h3>Use of this site</h3>
        <p>Content published here is provided as-is for personal, non-commercial use.</p>
        <h3>Accounts</h3>
        <p>You are responsible for keeping your credentials private. Accounts that abuse the service may be removed.</p>
        <h3>Privacy</h3>
        <p>We store only what the features need: your profile, your submissions and your messages.</p>
    </article>
</section>
"#;

const ADMIN_SHELL: &str = r#"<section class="admin-section">
    <nav class="admin-tabs">
        <button class="tab-btn" data-tab="blogs">Blogs</button>
        <button class="tab-btn" data-tab="videos">Videos</button>
        <button class="tab-btn" data-tab="new-blog">New Blog</button>
        <button class="tab-btn" data-tab="new-video">New Video</button>
        <button class="tab-btn" data-tab="settings">Settings</button>
    </nav>
    <div class="admin-content">
{{content}}
    </div>
</section>
"#;
