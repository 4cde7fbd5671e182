use std::sync::{Arc, Mutex};
use std::time::Duration;

use askama::Template;
use tokio::task::JoinHandle;

use crate::app::ContentHub;
use crate::common::PageError;
use crate::models::{CategoryMode, ContentDoc};
use crate::router::{Emitter, Update};
use crate::shell::merge_slots;
use crate::store::Query;
use crate::views::fragments::{empty_block, error_block};
use crate::views::{CardView, CardsTemplate, CategoryOption, ListingTemplate};

/// Renders the listing page for one content type and hands back the
/// live filter controller.
pub(crate) async fn init<C: ContentDoc>(
    hub: &ContentHub,
    emitter: Emitter,
) -> Result<(String, ListingController), PageError> {
    let shell = hub.templates.fetch(C::PAGE.as_str()).await?;

    let (grid_html, cards) = match hub.store.query(C::COLLECTION, &Query::published()).await {
        Err(e) => {
            log::error!("Failed to load {}: {e}", C::COLLECTION);
            (
                error_block(&format!("Error loading {}: {e}", C::COLLECTION)),
                Vec::new(),
            )
        }
        Ok(docs) => {
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
                (empty_block(C::EMPTY_LISTING), Vec::new())
            } else {
                let cards: Vec<CardView> = items.iter().map(ContentDoc::card).collect();
                let grid = CardsTemplate {
                    cards: cards.clone(),
                }
                .render()?;
                (grid, cards)
            }
        }
    };

    let categories = C::category_options()
        .iter()
        .map(|(value, label)| CategoryOption {
            value: value.to_string(),
            label: label.to_string(),
        })
        .collect();

    let body = ListingTemplate {
        section_title: C::SECTION_TITLE,
        search_placeholder: C::SEARCH_PLACEHOLDER,
        categories,
        grid_html,
    }
    .render()?;

    let html = merge_slots(&shell, &[("content", &body)]);
    let controller = ListingController::new(
        cards,
        C::CATEGORY_MODE,
        emitter,
        hub.config.search_debounce,
    );
    Ok((html, controller))
}

/// Lowercased search index built once per page load; filtering never
/// refetches.
struct CardIndexEntry {
    id: String,
    title: String,
    excerpt: String,
    tags: String,
    category: String,
}

#[derive(Debug, Clone, Default)]
struct FilterState {
    search: String,
    category: String,
}

/// Client-side search and category filtering for a rendered listing.
/// Search input is debounced; category changes apply immediately.
/// Emitted visibility patches are dropped once the page has been
/// navigated away from.
pub struct ListingController {
    cards: Arc<Vec<CardIndexEntry>>,
    mode: CategoryMode,
    state: Arc<Mutex<FilterState>>,
    emitter: Emitter,
    debounce: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl ListingController {
    fn new(cards: Vec<CardView>, mode: CategoryMode, emitter: Emitter, debounce: Duration) -> Self {
        let entries = cards
            .into_iter()
            .map(|card| CardIndexEntry {
                id: card.id,
                title: card.title.to_lowercase(),
                excerpt: card.excerpt.to_lowercase(),
                // Already lowercased when the card was built.
                tags: card.tags_attr,
                category: card.category,
            })
            .collect();

        Self {
            cards: Arc::new(entries),
            mode,
            state: Arc::new(Mutex::new(FilterState::default())),
            emitter,
            debounce,
            pending: Mutex::new(None),
        }
    }

    /// Records the new search term and schedules a filter pass after
    /// the debounce window. A newer keystroke cancels the older pass.
    pub fn set_search(&self, term: &str) {
        if let Ok(mut state) = self.state.lock() {
            state.search = term.to_string();
        }

        let cards = self.cards.clone();
        let state = self.state.clone();
        let mode = self.mode;
        let emitter = self.emitter.clone();
        let delay = self.debounce;

        if let Ok(mut pending) = self.pending.lock() {
            if let Some(task) = pending.take() {
                task.abort();
            }
            *pending = Some(tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                emit_filtered(&cards, &state, mode, &emitter);
            }));
        }
    }

    /// Category selection filters without debounce.
    pub fn set_category(&self, value: &str) {
        if let Ok(mut state) = self.state.lock() {
            state.category = value.to_string();
        }
        self.apply();
    }

    /// Runs a filter pass with the current inputs.
    pub fn apply(&self) {
        emit_filtered(&self.cards, &self.state, self.mode, &self.emitter);
    }

    /// Ids that would be visible under the current inputs.
    pub fn visible_ids(&self) -> Vec<String> {
        let snapshot = self
            .state
            .lock()
            .map(|state| state.clone())
            .unwrap_or_default();
        filter_cards(&self.cards, &snapshot, self.mode).0
    }
}

fn emit_filtered(
    cards: &[CardIndexEntry],
    state: &Mutex<FilterState>,
    mode: CategoryMode,
    emitter: &Emitter,
) {
    let snapshot = state.lock().map(|state| state.clone()).unwrap_or_default();
    let (visible, no_results) = filter_cards(cards, &snapshot, mode);
    emitter.emit(Update::Visibility {
        generation: emitter.generation(),
        visible,
        no_results,
    });
}

fn filter_cards(
    cards: &[CardIndexEntry],
    state: &FilterState,
    mode: CategoryMode,
) -> (Vec<String>, bool) {
    let search = state.search.trim().to_lowercase();
    let category = state.category.trim().to_lowercase();

    let visible: Vec<String> = cards
        .iter()
        .filter(|card| {
            let search_ok = search.is_empty()
                || card.title.contains(&search)
                || card.excerpt.contains(&search)
                || card.tags.contains(&search);

            let category_ok = category.is_empty()
                || match mode {
                    CategoryMode::Exact => card.category == category,
                    CategoryMode::TagSubstring => card.tags.contains(&category),
                };

            search_ok && category_ok
        })
        .map(|card| card.id.clone())
        .collect();

    // The dedicated empty-listing placeholder covers the no-cards
    // case; "no results" is strictly a filtering outcome.
    let no_results = visible.is_empty() && !cards.is_empty();
    (visible, no_results)
}
