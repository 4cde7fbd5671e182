use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Site name used in document titles and the home hero.
    pub site_name: String,

    /// The one account granted access to the admin panel.
    /// Empty means nobody is an admin.
    pub admin_email: String,

    /// Prefix for share links built from a page path.
    pub base_url: String,

    /// Directory of page shell templates. `None` falls back to the
    /// built-in shells.
    pub template_dir: Option<PathBuf>,

    /// Delay between the last search keystroke and the filter pass.
    pub search_debounce: Duration,
}

impl HubConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let search_debounce = std::env::var("HUB_SEARCH_DEBOUNCE_MS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.search_debounce);

        Self {
            site_name: std::env::var("HUB_SITE_NAME").unwrap_or(defaults.site_name),
            admin_email: std::env::var("HUB_ADMIN_EMAIL").unwrap_or(defaults.admin_email),
            base_url: std::env::var("HUB_BASE_URL").unwrap_or(defaults.base_url),
            template_dir: std::env::var("HUB_TEMPLATE_DIR").ok().map(PathBuf::from),
            search_debounce,
        }
    }

    pub fn with_admin(admin_email: impl Into<String>) -> Self {
        Self {
            admin_email: admin_email.into(),
            ..Self::default()
        }
    }
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            site_name: "Content Hub".to_string(),
            admin_email: String::new(),
            base_url: String::new(),
            template_dir: None,
            search_debounce: Duration::from_millis(300),
        }
    }
}
