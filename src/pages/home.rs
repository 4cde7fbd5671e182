use askama::Template;

use crate::app::ContentHub;
use crate::common::PageError;
use crate::models::{Blog, ContentDoc, Video};
use crate::shell::merge_slots;
use crate::store::Query;
use crate::views::format::escape_html;
use crate::views::fragments::{empty_block, error_block};
use crate::views::CardsTemplate;

/// Landing page: site stats plus the three most recent published
/// items of each type.
pub(crate) async fn render(hub: &ContentHub) -> Result<String, PageError> {
    let shell = hub.templates.fetch("home").await?;

    let blog_count = count_or_zero(hub, Blog::COLLECTION, &Query::published()).await;
    let video_count = count_or_zero(hub, Video::COLLECTION, &Query::published()).await;
    let user_count = count_or_zero(hub, "users", &Query::default()).await;

    let featured_blogs = featured::<Blog>(hub).await?;
    let featured_videos = featured::<Video>(hub).await?;

    Ok(merge_slots(
        &shell,
        &[
            ("site_name", escape_html(&hub.config.site_name).as_str()),
            ("blog_count", blog_count.as_str()),
            ("video_count", video_count.as_str()),
            ("user_count", user_count.as_str()),
            ("featured_blogs", featured_blogs.as_str()),
            ("featured_videos", featured_videos.as_str()),
        ],
    ))
}

/// A stat never blocks the page: failures degrade to "0".
async fn count_or_zero(hub: &ContentHub, collection: &str, query: &Query) -> String {
    match hub.store.count(collection, query).await {
        Ok(count) => count.to_string(),
        Err(e) => {
            log::error!("Failed to count {collection}: {e}");
            "0".to_string()
        }
    }
}

async fn featured<C: ContentDoc>(hub: &ContentHub) -> Result<String, PageError> {
    let docs = match hub
        .store
        .query(C::COLLECTION, &Query::published().with_limit(3))
        .await
    {
        Ok(docs) => docs,
        Err(e) => {
            log::error!("Failed to load featured {}: {e}", C::COLLECTION);
            return Ok(error_block(&format!("Error loading {}: {e}", C::COLLECTION)));
        }
    };

    let items: Vec<C> = docs
        .iter()
        .filter_map(|doc| match doc.decode::<C>() {
            Ok(item) => Some(item),
            Err(e) => {
                log::warn!("Skipping malformed document in {}: {e}", C::COLLECTION);
                None
            }
        })
        .collect();

    if items.is_empty() {
        return Ok(empty_block(C::EMPTY_FEATURED));
    }

    let cards = items.iter().map(ContentDoc::card).collect();
    Ok(CardsTemplate { cards }.render()?)
}
