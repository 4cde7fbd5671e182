use askama::Template;

use crate::app::ContentHub;
use crate::common::{PageError, StoreError};
use crate::models::ContentDoc;
use crate::router::NavState;
use crate::shell::merge_slots;
use crate::views::fragments::{back_button, error_block, not_found_block};

/// Detail page for one document. Store failures degrade to inline
/// fragments; only shell or template failures abort the render.
pub(crate) async fn render<C: ContentDoc>(hub: &ContentHub, id: &str) -> Result<String, PageError> {
    let shell = hub.templates.fetch(C::PAGE.as_str()).await?;

    let fragment = match hub.store.get(C::COLLECTION, id).await {
        Err(e) => {
            log::error!("Failed to load {} {id}: {e}", C::NOUN);
            load_error_fragment::<C>(&e)
        }
        Ok(None) => not_found_block(
            &format!(
                "{} not found! It may have been removed or is not available.",
                C::NOUN_TITLE
            ),
            C::PAGE.as_str(),
            C::BACK_LABEL,
        ),
        Ok(Some(doc)) => match doc.decode::<C>() {
            Err(e) => {
                log::error!("Failed to decode {} {id}: {e}", C::NOUN);
                load_error_fragment::<C>(&e)
            }
            Ok(item) => {
                let page_url = format!(
                    "{}{}",
                    hub.config.base_url,
                    NavState::detail(C::PAGE, id).path()
                );
                item.detail(&page_url).render()?
            }
        },
    };

    Ok(merge_slots(&shell, &[("content", &fragment)]))
}

fn load_error_fragment<C: ContentDoc>(e: &StoreError) -> String {
    format!(
        "{}{}",
        error_block(&format!("Error loading {}: {e}", C::NOUN)),
        back_button(C::PAGE.as_str(), C::BACK_LABEL)
    )
}
