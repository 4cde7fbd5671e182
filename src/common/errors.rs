use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Document {id:?} not found in {collection:?}")]
    NotFound { collection: String, id: String },

    #[error("Invalid document {id:?}: {source}")]
    Decode {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage error: {0}")]
    Backend(String),
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("An account with {0:?} already exists")]
    EmailTaken(String),

    #[error("No account registered for {0:?}")]
    UnknownEmail(String),

    #[error("Password must be at least {0} characters")]
    WeakPassword(usize),

    #[error("Authentication error: {0}")]
    Backend(String),
}

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Page template {0:?} not found")]
    NotFound(String),

    #[error("Failed to read page template {name:?}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Form-level rejections. Display strings double as user-facing
/// notification messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required")]
    MissingTitle,

    #[error("Content is required")]
    MissingContent,

    #[error("Description is required")]
    MissingDescription,

    #[error("Video URL is required")]
    MissingVideoUrl,

    #[error("Invalid video URL. Please enter a valid YouTube or Vimeo URL.")]
    InvalidVideoUrl,

    #[error("Please fill in all required fields")]
    MissingFields,

    #[error("Passwords do not match!")]
    PasswordMismatch,
}

/// Failures that abort a whole page render. Store errors inside an
/// otherwise healthy page degrade to inline fragments instead.
#[derive(Error, Debug)]
pub enum PageError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}
