use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};

use crate::router::Page;
use crate::views::detail::{facebook_share, linkedin_share, twitter_share, DetailView};
use crate::views::format::{format_blog_content, format_date, format_paragraphs};
use crate::views::fragments::{embed_html, video_thumb, UNSUPPORTED_VIDEO};
use crate::views::CardView;

use super::{author_display, Author, Blog, Video};

/// How the category dropdown filters cards.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CategoryMode {
    /// The selected value must appear among the card's tags (blogs,
    /// which carry no category field of their own).
    TagSubstring,
    /// The selected value must equal the card's category (videos).
    Exact,
}

/// Descriptor shared by the two content types. The listing, detail
/// and admin components are generic over this trait instead of being
/// written once per type.
pub trait ContentDoc: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    const COLLECTION: &'static str;
    const PAGE: Page;
    /// Lowercase singular noun for messages ("blog post", "video").
    const NOUN: &'static str;
    /// Capitalized variant for sentence starts.
    const NOUN_TITLE: &'static str;
    const SECTION_TITLE: &'static str;
    const SEARCH_PLACEHOLDER: &'static str;
    const EMPTY_LISTING: &'static str;
    const EMPTY_FEATURED: &'static str;
    const EMPTY_ADMIN: &'static str;
    const BACK_LABEL: &'static str;
    const ACTION_LABEL: &'static str;
    const CATEGORY_MODE: CategoryMode;

    fn id(&self) -> &str;
    fn title(&self) -> &str;
    fn published(&self) -> bool;
    fn created_at(&self) -> DateTime<Utc>;
    fn author(&self) -> Option<&Author>;
    fn tags(&self) -> &[String];
    fn excerpt(&self) -> String;

    /// `(value, label)` pairs for the public category dropdown.
    fn category_options() -> &'static [(&'static str, &'static str)];

    fn card(&self) -> CardView;

    /// Full detail view; `page_url` is the absolute URL used for the
    /// share links.
    fn detail(&self, page_url: &str) -> DetailView;
}

impl ContentDoc for Blog {
    const COLLECTION: &'static str = "blogs";
    const PAGE: Page = Page::Blogs;
    const NOUN: &'static str = "blog post";
    const NOUN_TITLE: &'static str = "Blog post";
    const SECTION_TITLE: &'static str = "Our Blog";
    const SEARCH_PLACEHOLDER: &'static str = "Search blogs...";
    const EMPTY_LISTING: &'static str = "No blog posts yet. Check back soon!";
    const EMPTY_FEATURED: &'static str = "No blogs available yet.";
    const EMPTY_ADMIN: &'static str = "No blogs found. Create your first blog!";
    const BACK_LABEL: &'static str = "Back to All Blogs";
    const ACTION_LABEL: &'static str = "Read More";
    const CATEGORY_MODE: CategoryMode = CategoryMode::TagSubstring;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn published(&self) -> bool {
        self.published
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn author(&self) -> Option<&Author> {
        self.author.as_ref()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn excerpt(&self) -> String {
        Blog::excerpt(self)
    }

    fn category_options() -> &'static [(&'static str, &'static str)] {
        &[
            ("technology", "Technology"),
            ("design", "Design"),
            ("business", "Business"),
            ("lifestyle", "Lifestyle"),
            ("health", "Health"),
        ]
    }

    fn card(&self) -> CardView {
        CardView {
            id: self.id.clone(),
            title: self.title.clone(),
            author: author_display(self.author.as_ref()).to_string(),
            date: format_date(Some(self.created_at)),
            excerpt: Blog::excerpt(self),
            tags: self.tags.clone(),
            tags_attr: join_lowercase(&self.tags),
            category: String::new(),
            thumb_html: String::new(),
            action_label: Self::ACTION_LABEL,
        }
    }

    fn detail(&self, page_url: &str) -> DetailView {
        DetailView {
            title: self.title.clone(),
            author: author_display(self.author.as_ref()).to_string(),
            date: format_date(Some(self.created_at)),
            category_label: String::new(),
            has_category: false,
            tags_joined: self.tags.join(", "),
            has_tags: !self.tags.is_empty(),
            embed_html: String::new(),
            has_embed: false,
            body_html: format_blog_content(&self.content),
            shares: vec![
                facebook_share(page_url),
                twitter_share(&self.title, page_url),
                linkedin_share(&self.title, page_url),
            ],
            back_page: Self::PAGE.as_str(),
            back_label: Self::BACK_LABEL,
        }
    }
}

impl ContentDoc for Video {
    const COLLECTION: &'static str = "videos";
    const PAGE: Page = Page::Videos;
    const NOUN: &'static str = "video";
    const NOUN_TITLE: &'static str = "Video";
    const SECTION_TITLE: &'static str = "Our Videos";
    const SEARCH_PLACEHOLDER: &'static str = "Search videos...";
    const EMPTY_LISTING: &'static str = "No videos yet. Check back soon!";
    const EMPTY_FEATURED: &'static str = "No videos available yet.";
    const EMPTY_ADMIN: &'static str = "No videos found. Upload your first video!";
    const BACK_LABEL: &'static str = "Back to All Videos";
    const ACTION_LABEL: &'static str = "Watch Video";
    const CATEGORY_MODE: CategoryMode = CategoryMode::Exact;

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn published(&self) -> bool {
        self.published
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn author(&self) -> Option<&Author> {
        self.author.as_ref()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn excerpt(&self) -> String {
        Video::excerpt(self)
    }

    fn category_options() -> &'static [(&'static str, &'static str)] {
        &[
            ("tutorial", "Tutorial"),
            ("entertainment", "Entertainment"),
            ("education", "Education"),
            ("technology", "Technology"),
            ("lifestyle", "Lifestyle"),
        ]
    }

    fn card(&self) -> CardView {
        CardView {
            id: self.id.clone(),
            title: self.title.clone(),
            author: author_display(self.author.as_ref()).to_string(),
            date: format_date(Some(self.created_at)),
            excerpt: Video::excerpt(self),
            tags: self.tags.clone(),
            tags_attr: join_lowercase(&self.tags),
            category: self.category.as_deref().unwrap_or_default().to_lowercase(),
            thumb_html: video_thumb(self.source()),
            action_label: Self::ACTION_LABEL,
        }
    }

    fn detail(&self, page_url: &str) -> DetailView {
        let embed = match self.source() {
            Some(source) => embed_html(source, &self.video_id),
            None => UNSUPPORTED_VIDEO.to_string(),
        };

        DetailView {
            title: self.title.clone(),
            author: author_display(self.author.as_ref()).to_string(),
            date: format_date(Some(self.created_at)),
            category_label: self.category_label().unwrap_or_default(),
            has_category: self.category_label().is_some(),
            tags_joined: self.tags.join(", "),
            has_tags: !self.tags.is_empty(),
            embed_html: embed,
            has_embed: true,
            body_html: format_paragraphs(&self.description),
            shares: vec![facebook_share(page_url), twitter_share(&self.title, page_url)],
            back_page: Self::PAGE.as_str(),
            back_label: Self::BACK_LABEL,
        }
    }
}

fn join_lowercase(tags: &[String]) -> String {
    tags.iter()
        .map(|t| t.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}
