use crate::models::VideoSource;

use super::format::escape_html;

pub const UNSUPPORTED_VIDEO: &str =
    r#"<div class="video-error"><p>Unsupported video type.</p></div>"#;

pub fn error_block(message: &str) -> String {
    format!(
        r#"<div class="error-message"><p>{}</p></div>"#,
        escape_html(message)
    )
}

pub fn empty_block(message: &str) -> String {
    format!(
        r#"<div class="no-content"><p>{}</p></div>"#,
        escape_html(message)
    )
}

pub fn back_button(back_page: &str, back_label: &str) -> String {
    format!(
        r#"<button class="btn btn-secondary back-btn" data-page="{}">{}</button>"#,
        escape_html(back_page),
        escape_html(back_label)
    )
}

/// Not-found state of a detail page, with a control back to the
/// listing.
pub fn not_found_block(message: &str, back_page: &str, back_label: &str) -> String {
    format!(
        r#"<div class="not-found"><p>{}</p>{}</div>"#,
        escape_html(message),
        back_button(back_page, back_label)
    )
}

/// Provider-colored thumbnail with a play overlay; no image fetch
/// involved. Unknown providers get the neutral background.
pub fn video_thumb(source: Option<VideoSource>) -> String {
    let color = match source {
        Some(VideoSource::Youtube) => "#202020",
        Some(VideoSource::Vimeo) => "#1ab7ea",
        None => "#ddd",
    };
    format!(
        r#"<div class="video-thumbnail"><div class="video-thumbnail-bg" style="background-color: {color};"></div><span class="play-icon"></span></div>"#
    )
}

/// Provider player iframe for a validated video id.
pub fn embed_html(source: VideoSource, video_id: &str) -> String {
    format!(
        r#"<iframe src="{}" frameborder="0" allowfullscreen></iframe>"#,
        escape_html(&source.embed_url(video_id))
    )
}
