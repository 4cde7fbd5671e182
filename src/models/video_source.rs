use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoSource {
    Youtube,
    Vimeo,
}

impl VideoSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Youtube => "youtube",
            Self::Vimeo => "vimeo",
        }
    }

    /// Embeddable player URL for a provider-native video id.
    pub fn embed_url(&self, video_id: &str) -> String {
        match self {
            Self::Youtube => format!("https://www.youtube.com/embed/{video_id}"),
            Self::Vimeo => format!("https://player.vimeo.com/video/{video_id}"),
        }
    }
}

impl std::fmt::Display for VideoSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for VideoSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "youtube" => Ok(Self::Youtube),
            "vimeo" => Ok(Self::Vimeo),
            _ => Err(format!("invalid video source: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoCategory {
    Tutorial,
    Entertainment,
    Education,
    Technology,
    Lifestyle,
    Other,
}

impl VideoCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tutorial => "tutorial",
            Self::Entertainment => "entertainment",
            Self::Education => "education",
            Self::Technology => "technology",
            Self::Lifestyle => "lifestyle",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Tutorial => "Tutorial",
            Self::Entertainment => "Entertainment",
            Self::Education => "Education",
            Self::Technology => "Technology",
            Self::Lifestyle => "Lifestyle",
            Self::Other => "Other",
        }
    }

    pub fn all() -> &'static [VideoCategory] {
        &[
            Self::Tutorial,
            Self::Entertainment,
            Self::Education,
            Self::Technology,
            Self::Lifestyle,
            Self::Other,
        ]
    }
}

impl std::fmt::Display for VideoCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for VideoCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tutorial" => Ok(Self::Tutorial),
            "entertainment" => Ok(Self::Entertainment),
            "education" => Ok(Self::Education),
            "technology" => Ok(Self::Technology),
            "lifestyle" => Ok(Self::Lifestyle),
            "other" => Ok(Self::Other),
            _ => Err(format!("invalid video category: {}", s)),
        }
    }
}

/// How the video id is carved out of the URL remainder once a prefix
/// matched.
#[derive(Debug, Clone, Copy)]
enum Extract {
    /// Value of a query parameter (`watch?v=...`).
    QueryParam(&'static str),
    /// Leading path segment, up to the next delimiter.
    PathSegment,
    /// Leading run of digits.
    Digits,
    /// Last all-digit path segment (`channels/{name}/{digits}`).
    LastDigits,
}

struct UrlPattern {
    prefix: &'static str,
    source: VideoSource,
    extract: Extract,
}

/// Recognized URL shapes, tried in order. Prefixes are matched after
/// the scheme and a leading `www.` are stripped.
const URL_PATTERNS: &[UrlPattern] = &[
    UrlPattern {
        prefix: "youtube.com/watch",
        source: VideoSource::Youtube,
        extract: Extract::QueryParam("v"),
    },
    UrlPattern {
        prefix: "m.youtube.com/watch",
        source: VideoSource::Youtube,
        extract: Extract::QueryParam("v"),
    },
    UrlPattern {
        prefix: "youtube.com/embed/",
        source: VideoSource::Youtube,
        extract: Extract::PathSegment,
    },
    UrlPattern {
        prefix: "youtube.com/v/",
        source: VideoSource::Youtube,
        extract: Extract::PathSegment,
    },
    UrlPattern {
        prefix: "youtu.be/",
        source: VideoSource::Youtube,
        extract: Extract::PathSegment,
    },
    UrlPattern {
        prefix: "player.vimeo.com/video/",
        source: VideoSource::Vimeo,
        extract: Extract::Digits,
    },
    UrlPattern {
        prefix: "vimeo.com/channels/",
        source: VideoSource::Vimeo,
        extract: Extract::LastDigits,
    },
    UrlPattern {
        prefix: "vimeo.com/groups/",
        source: VideoSource::Vimeo,
        extract: Extract::LastDigits,
    },
    UrlPattern {
        prefix: "vimeo.com/album/",
        source: VideoSource::Vimeo,
        extract: Extract::LastDigits,
    },
    UrlPattern {
        prefix: "vimeo.com/",
        source: VideoSource::Vimeo,
        extract: Extract::Digits,
    },
];

/// Identifies the provider and provider-native video id in a URL.
/// Pure and deterministic; anything unrecognized yields `None`.
pub fn parse_video_url(url: &str) -> Option<(VideoSource, String)> {
    let trimmed = url.trim();
    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    let rest = rest.strip_prefix("www.").unwrap_or(rest);

    for pattern in URL_PATTERNS {
        let Some(remainder) = strip_prefix_ignore_case(rest, pattern.prefix) else {
            continue;
        };
        let id = match pattern.extract {
            Extract::QueryParam(name) => query_param(remainder, name)?,
            Extract::PathSegment => leading_segment(remainder),
            Extract::Digits => leading_digits(remainder),
            Extract::LastDigits => last_digit_segment(remainder)?,
        };
        if valid_id(pattern.source, id) {
            return Some((pattern.source, id.to_string()));
        }
        return None;
    }
    None
}

/// Case-insensitive prefix match that keeps the remainder's original
/// case (YouTube ids are case-sensitive).
fn strip_prefix_ignore_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    if input.len() >= prefix.len() && input[..prefix.len()].eq_ignore_ascii_case(prefix) {
        Some(&input[prefix.len()..])
    } else {
        None
    }
}

fn query_param<'a>(remainder: &'a str, name: &str) -> Option<&'a str> {
    let query = remainder.split_once('?')?.1;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.split('#').next().unwrap_or(value))
}

fn leading_segment(remainder: &str) -> &str {
    remainder
        .split(['/', '?', '&', '#'])
        .next()
        .unwrap_or(remainder)
}

fn leading_digits(remainder: &str) -> &str {
    let end = remainder
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(remainder.len());
    &remainder[..end]
}

fn last_digit_segment(remainder: &str) -> Option<&str> {
    remainder
        .split(['?', '#'])
        .next()
        .unwrap_or(remainder)
        .split('/')
        .filter(|seg| !seg.is_empty() && seg.chars().all(|c| c.is_ascii_digit()))
        .last()
}

fn valid_id(source: VideoSource, id: &str) -> bool {
    match source {
        // Standard 11-character video id alphabet.
        VideoSource::Youtube => {
            id.len() == 11
                && id
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        }
        VideoSource::Vimeo => !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()),
    }
}
