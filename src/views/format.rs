use chrono::{DateTime, Utc};

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encodes everything outside the RFC 3986 unreserved set.
/// Used for share-link query parameters.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// "Month D, YYYY" byline date; `None` renders the explicit fallback
/// instead of an empty slot.
pub fn format_date(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => "Unknown Date".to_string(),
    }
}

/// Renders plain-text blog content as HTML: blank-line separated
/// paragraphs, `#`/`##`/`###` headings and `- ` bullet runs with an
/// optional intro line. Everything is escaped.
pub fn format_blog_content(content: &str) -> String {
    let normalized = content.replace("\r\n", "\n");
    normalized
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(format_block)
        .collect()
}

fn format_block(block: &str) -> String {
    if let Some(text) = block.strip_prefix("### ") {
        return format!("<h4>{}</h4>", escape_html(text.trim()));
    }
    if let Some(text) = block.strip_prefix("## ") {
        return format!("<h3>{}</h3>", escape_html(text.trim()));
    }
    if let Some(text) = block.strip_prefix("# ") {
        return format!("<h2>{}</h2>", escape_html(text.trim()));
    }

    let mut intro: Vec<&str> = Vec::new();
    let mut items: Vec<String> = Vec::new();
    for line in block.lines() {
        match line.trim_start().strip_prefix("- ") {
            Some(item) => items.push(item.trim().to_string()),
            None if items.is_empty() => intro.push(line.trim()),
            // Wrapped continuation of the previous bullet.
            None => {
                if let Some(last) = items.last_mut() {
                    last.push(' ');
                    last.push_str(line.trim());
                }
            }
        }
    }

    if !items.is_empty() {
        let mut out = String::new();
        if !intro.is_empty() {
            out.push_str(&format!("<p>{}</p>", escape_html(&intro.join(" "))));
        }
        out.push_str("<ul>");
        for item in &items {
            out.push_str(&format!("<li>{}</li>", escape_html(item)));
        }
        out.push_str("</ul>");
        return out;
    }

    format!("<p>{}</p>", escape_html(block))
}

/// Blank-line separated paragraphs, no heading or list handling.
/// Used for video descriptions.
pub fn format_paragraphs(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n");
    normalized
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| format!("<p>{}</p>", escape_html(block)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"A" & 'B'</b>"#),
            "&lt;b&gt;&quot;A&quot; &amp; &#39;B&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn encodes_reserved_uri_characters() {
        assert_eq!(encode_uri_component("a b&c?d=e"), "a%20b%26c%3Fd%3De");
        assert_eq!(encode_uri_component("safe-._~09AZ"), "safe-._~09AZ");
    }

    #[test]
    fn formats_dates_without_zero_padding() {
        let date = Utc.with_ymd_and_hms(2026, 3, 5, 12, 0, 0).unwrap();
        assert_eq!(format_date(Some(date)), "March 5, 2026");
        assert_eq!(format_date(None), "Unknown Date");
    }

    #[test]
    fn blog_content_handles_headings_paragraphs_and_lists() {
        let content = "# Welcome\n\nFirst paragraph.\n\nShopping:\n- one\n- two\n\n## Next";
        let html = format_blog_content(content);
        assert_eq!(
            html,
            "<h2>Welcome</h2><p>First paragraph.</p>\
             <p>Shopping:</p><ul><li>one</li><li>two</li></ul><h3>Next</h3>"
        );
    }

    #[test]
    fn blog_content_escapes_user_text() {
        let html = format_blog_content("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        assert_eq!(
            format_paragraphs("one\n\ntwo\r\n\r\nthree"),
            "<p>one</p><p>two</p><p>three</p>"
        );
        assert_eq!(format_paragraphs(""), "");
    }
}
