/// Splits a comma separated tag string, trimming whitespace and
/// dropping empty entries.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inverse of [`parse_tags`], used to prefill edit forms.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}
