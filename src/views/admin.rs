use askama::Template;

/// One management table row; drafts and published items alike.
#[derive(Debug, Clone)]
pub struct AdminRow {
    pub id: String,
    pub title: String,
    pub date: String,
    pub status: &'static str,
}

#[derive(Template)]
#[template(path = "admin/table.html")]
pub struct AdminTableTemplate {
    pub heading: &'static str,
    pub new_label: &'static str,
    pub new_tab: &'static str,
    pub rows: Vec<AdminRow>,
    pub empty_message: &'static str,
}

#[derive(Template)]
#[template(path = "admin/blog_form.html")]
pub struct BlogFormTemplate {
    pub heading: &'static str,
    pub submit_label: &'static str,
    pub id: String,
    pub is_edit: bool,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub tags: String,
}

#[derive(Debug, Clone)]
pub struct CategorySelect {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "admin/video_form.html")]
pub struct VideoFormTemplate {
    pub heading: &'static str,
    pub submit_label: &'static str,
    pub id: String,
    pub is_edit: bool,
    pub title: String,
    pub video_url: String,
    pub description: String,
    pub categories: Vec<CategorySelect>,
    pub tags: String,
}
