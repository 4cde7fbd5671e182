use serde_json::{Map, Value};

use crate::app::ContentHub;
use crate::common::{PageError, ValidationError};
use crate::models::ContactMessage;

pub(crate) async fn render(hub: &ContentHub) -> Result<String, PageError> {
    Ok(hub.templates.fetch("contact").await?)
}

/// Handles contact form submissions for the rendered page.
pub struct ContactController {
    hub: ContentHub,
}

impl ContactController {
    pub(crate) fn new(hub: ContentHub) -> Self {
        Self { hub }
    }

    /// Validates and persists a message. Returns whether it was
    /// stored; the caller resets the form on success.
    pub async fn submit(&self, message: &ContactMessage) -> bool {
        if !message.is_complete() {
            self.hub
                .notifier
                .error(ValidationError::MissingFields.to_string());
            return false;
        }

        let mut fields = Map::new();
        fields.insert(
            "name".to_string(),
            Value::String(message.name.trim().to_string()),
        );
        fields.insert(
            "email".to_string(),
            Value::String(message.email.trim().to_string()),
        );
        fields.insert(
            "message".to_string(),
            Value::String(message.message.trim().to_string()),
        );

        match self.hub.store.add("contacts", fields).await {
            Ok(_) => {
                self.hub
                    .notifier
                    .success("Message sent successfully! We'll get back to you soon.");
                true
            }
            Err(e) => {
                self.hub
                    .notifier
                    .error(format!("Error sending message: {e}"));
                false
            }
        }
    }
}
