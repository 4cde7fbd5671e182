use askama::Template;

/// String-only card model: dates, bylines and teasers are formatted
/// before they reach the template.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub author: String,
    pub date: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    /// Lowercased, space-joined tags for the filter data attribute.
    pub tags_attr: String,
    /// Lowercased category value, empty when the type has none.
    pub category: String,
    /// Pre-rendered thumbnail block, empty when the type has none.
    pub thumb_html: String,
    pub action_label: &'static str,
}

#[derive(Template)]
#[template(path = "cards.html")]
pub struct CardsTemplate {
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

#[derive(Template)]
#[template(path = "listing.html")]
pub struct ListingTemplate {
    pub section_title: &'static str,
    pub search_placeholder: &'static str,
    pub categories: Vec<CategoryOption>,
    /// Pre-rendered card grid (or placeholder/error fragment).
    pub grid_html: String,
}
