use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Blogs,
    Videos,
    Auth,
    Contact,
    Terms,
    Admin,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Blogs => "blogs",
            Self::Videos => "videos",
            Self::Auth => "auth",
            Self::Contact => "contact",
            Self::Terms => "terms",
            Self::Admin => "admin",
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::Home
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "blogs" => Ok(Self::Blogs),
            "videos" => Ok(Self::Videos),
            "auth" => Ok(Self::Auth),
            "contact" => Ok(Self::Contact),
            "terms" => Ok(Self::Terms),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("invalid page: {}", s)),
        }
    }
}

/// One history entry: a page plus the optional detail id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub page: Page,
    pub id: Option<String>,
}

impl NavState {
    pub fn page(page: Page) -> Self {
        Self { page, id: None }
    }

    pub fn detail(page: Page, id: impl Into<String>) -> Self {
        Self {
            page,
            id: Some(id.into()),
        }
    }

    /// Decodes `/`, `/{page}` and `/{page}/{id}`. Unknown pages fall
    /// back to home; only the content pages carry a detail id.
    pub fn parse(path: &str) -> Self {
        let mut segments = path.split('/').filter(|s| !s.is_empty());

        let page = segments
            .next()
            .and_then(|s| s.parse::<Page>().ok())
            .unwrap_or_default();

        let id = match page {
            Page::Blogs | Page::Videos => segments.next().map(str::to_string),
            _ => None,
        };

        Self { page, id }
    }

    /// Inverse of [`NavState::parse`].
    pub fn path(&self) -> String {
        match (&self.page, &self.id) {
            (Page::Home, _) => "/".to_string(),
            (page, Some(id)) => format!("/{}/{}", page.as_str(), id),
            (page, None) => format!("/{}", page.as_str()),
        }
    }

    /// Deterministic document title for this entry.
    pub fn title(&self, site_name: &str) -> String {
        let suffix = match (self.page, self.id.is_some()) {
            (Page::Home, _) => "Home",
            (Page::Blogs, true) => "Blog Post",
            (Page::Blogs, false) => "Blogs",
            (Page::Videos, true) => "Video",
            (Page::Videos, false) => "Videos",
            (Page::Auth, _) => "Sign In",
            (Page::Contact, _) => "Contact Us",
            (Page::Terms, _) => "Terms & Policies",
            (Page::Admin, _) => "Admin Panel",
        };
        format!("{site_name} | {suffix}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_root_listing_and_detail_paths() {
        assert_eq!(NavState::parse("/"), NavState::page(Page::Home));
        assert_eq!(NavState::parse(""), NavState::page(Page::Home));
        assert_eq!(NavState::parse("/blogs"), NavState::page(Page::Blogs));
        assert_eq!(
            NavState::parse("/videos/abc123"),
            NavState::detail(Page::Videos, "abc123")
        );
    }

    #[test]
    fn unknown_pages_fall_back_to_home() {
        assert_eq!(NavState::parse("/nope"), NavState::page(Page::Home));
        assert_eq!(NavState::parse("/nope/id"), NavState::page(Page::Home));
    }

    #[test]
    fn only_content_pages_carry_an_id() {
        assert_eq!(NavState::parse("/contact/42"), NavState::page(Page::Contact));
    }

    #[test]
    fn path_round_trips() {
        for state in [
            NavState::page(Page::Home),
            NavState::page(Page::Terms),
            NavState::detail(Page::Blogs, "b-1"),
            NavState::detail(Page::Videos, "v-9"),
        ] {
            assert_eq!(NavState::parse(&state.path()), state);
        }
    }

    #[test]
    fn titles_distinguish_listing_from_detail() {
        assert_eq!(
            NavState::page(Page::Blogs).title("Content Hub"),
            "Content Hub | Blogs"
        );
        assert_eq!(
            NavState::detail(Page::Blogs, "x").title("Content Hub"),
            "Content Hub | Blog Post"
        );
        assert_eq!(NavState::page(Page::Home).title("Hub"), "Hub | Home");
    }
}
