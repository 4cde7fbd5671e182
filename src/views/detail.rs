use askama::Template;

use super::format::encode_uri_component;

#[derive(Debug, Clone, PartialEq)]
pub struct ShareLink {
    pub network: &'static str,
    pub label: &'static str,
    pub href: String,
}

pub fn facebook_share(url: &str) -> ShareLink {
    ShareLink {
        network: "facebook",
        label: "Share",
        href: format!(
            "https://www.facebook.com/sharer/sharer.php?u={}",
            encode_uri_component(url)
        ),
    }
}

pub fn twitter_share(title: &str, url: &str) -> ShareLink {
    ShareLink {
        network: "twitter",
        label: "Tweet",
        href: format!(
            "https://twitter.com/intent/tweet?text={}&url={}",
            encode_uri_component(title),
            encode_uri_component(url)
        ),
    }
}

pub fn linkedin_share(title: &str, url: &str) -> ShareLink {
    ShareLink {
        network: "linkedin",
        label: "Post",
        href: format!(
            "https://www.linkedin.com/shareArticle?mini=true&url={}&title={}",
            encode_uri_component(url),
            encode_uri_component(title)
        ),
    }
}

/// Detail page view model. Body and embed HTML are pre-rendered and
/// already escaped; everything else is plain text the template
/// escapes on output.
#[derive(Template, Debug, Clone)]
#[template(path = "detail.html")]
pub struct DetailView {
    pub title: String,
    pub author: String,
    pub date: String,
    pub category_label: String,
    pub has_category: bool,
    pub tags_joined: String,
    pub has_tags: bool,
    pub embed_html: String,
    pub has_embed: bool,
    pub body_html: String,
    pub shares: Vec<ShareLink>,
    pub back_page: &'static str,
    pub back_label: &'static str,
}
