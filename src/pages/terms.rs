use crate::app::ContentHub;
use crate::common::PageError;

/// Static page: the shell is the content.
pub(crate) async fn render(hub: &ContentHub) -> Result<String, PageError> {
    Ok(hub.templates.fetch("terms").await?)
}
