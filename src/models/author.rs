use serde::{Deserialize, Serialize};

/// Author snapshot embedded in a content document at creation time.
/// Deliberately denormalized: renaming an account later does not
/// rewrite existing content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub uid: String,
    pub name: String,
}

/// Byline for an optional author snapshot.
pub fn author_display(author: Option<&Author>) -> &str {
    author
        .map(|a| a.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or("Admin")
}
