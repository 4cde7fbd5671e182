use std::marker::PhantomData;

use askama::{Error as RenderError, Template};
use serde_json::{Map, Value};

use crate::app::ContentHub;
use crate::common::ValidationError;
use crate::models::ContentDoc;
use crate::store::{Fields, Query};
use crate::views::admin::{AdminRow, AdminTableTemplate};
use crate::views::format::format_date;
use crate::views::fragments::error_block;

use super::{SaveOutcome, SubmitAction};

/// Admin-side descriptor: forms, validation and payload building for
/// one content type. The CRUD flow itself is written once, below.
pub trait AdminContent: ContentDoc {
    type Form: Clone + Send + Sync;

    const TABLE_HEADING: &'static str;
    const NEW_LABEL: &'static str;
    const NEW_TAB: &'static str;

    /// The document id carried by an edit form; `None` means create.
    fn form_id(form: &Self::Form) -> Option<&str>;

    /// Validates the form and builds the mutable-field payload.
    /// Nothing is written when this fails.
    fn payload(form: &Self::Form, published: bool) -> Result<Fields, ValidationError>;

    /// Prefills an edit form from a stored document.
    fn form_from(item: &Self) -> Self::Form;

    /// Renders the blank (`None`) or prefilled form.
    fn form_html(form: Option<&Self::Form>) -> Result<String, RenderError>;
}

/// Generic CRUD flow over one collection. Every outcome is reported
/// through the hub notifier.
pub(crate) struct Crud<C: AdminContent> {
    hub: ContentHub,
    _marker: PhantomData<C>,
}

impl<C: AdminContent> Crud<C> {
    pub(crate) fn new(hub: &ContentHub) -> Self {
        Self {
            hub: hub.clone(),
            _marker: PhantomData,
        }
    }

    /// Management table over all documents, drafts included.
    pub(crate) async fn table_html(&self) -> String {
        let docs = match self.hub.store.query(C::COLLECTION, &Query::recent()).await {
            Ok(docs) => docs,
            Err(e) => {
                log::error!("Failed to load {} for admin: {e}", C::COLLECTION);
                return error_block(&format!("Error loading {}: {e}", C::COLLECTION));
            }
        };

        let rows: Vec<AdminRow> = docs
            .iter()
            .filter_map(|doc| match doc.decode::<C>() {
                Ok(item) => Some(AdminRow {
                    id: item.id().to_string(),
                    title: item.title().to_string(),
                    date: format_date(Some(item.created_at())),
                    status: if item.published() { "Published" } else { "Draft" },
                }),
                Err(e) => {
                    log::warn!("Skipping malformed document in {}: {e}", C::COLLECTION);
                    None
                }
            })
            .collect();

        let template = AdminTableTemplate {
            heading: C::TABLE_HEADING,
            new_label: C::NEW_LABEL,
            new_tab: C::NEW_TAB,
            rows,
            empty_message: C::EMPTY_ADMIN,
        };

        match template.render() {
            Ok(html) => html,
            Err(e) => {
                log::error!("Failed to render admin table: {e}");
                error_block("Error rendering the admin panel.")
            }
        }
    }

    /// Prefilled edit form, or `None` (with a notice) when the
    /// document cannot be loaded.
    pub(crate) async fn edit_form_html(&self, id: &str) -> Option<String> {
        let item = match self.hub.store.get(C::COLLECTION, id).await {
            Ok(Some(doc)) => match doc.decode::<C>() {
                Ok(item) => item,
                Err(e) => {
                    log::error!("Failed to decode {} {id}: {e}", C::NOUN);
                    self.hub
                        .notifier
                        .error(format!("Error loading {} for editing.", C::NOUN));
                    return None;
                }
            },
            Ok(None) => {
                self.hub
                    .notifier
                    .error(format!("{} not found.", C::NOUN_TITLE));
                return None;
            }
            Err(e) => {
                self.hub
                    .notifier
                    .error(format!("Error loading {}: {e}", C::NOUN));
                return None;
            }
        };

        let form = C::form_from(&item);
        match C::form_html(Some(&form)) {
            Ok(html) => Some(html),
            Err(e) => {
                log::error!("Failed to render {} form: {e}", C::NOUN);
                self.hub
                    .notifier
                    .error(format!("Error loading {} for editing.", C::NOUN));
                None
            }
        }
    }

    /// Publish and save-draft run the same validation and the same
    /// write path; only the `published` flag differs.
    pub(crate) async fn save(&self, form: &C::Form, action: SubmitAction) -> SaveOutcome {
        let published = action == SubmitAction::Publish;
        let mut payload = match C::payload(form, published) {
            Ok(payload) => payload,
            Err(e) => {
                self.hub.notifier.error(e.to_string());
                return SaveOutcome::Invalid(e);
            }
        };

        let result = match C::form_id(form) {
            // Update never touches id, created_at or the author
            // snapshot; the payload carries mutable fields only.
            Some(id) => self.hub.store.update(C::COLLECTION, id, payload).await,
            None => {
                if let Some(identity) = self.hub.session.current() {
                    let mut author = Map::new();
                    author.insert("uid".to_string(), Value::String(identity.uid.clone()));
                    author.insert(
                        "name".to_string(),
                        Value::String(identity.display().to_string()),
                    );
                    payload.insert("author".to_string(), Value::Object(author));
                }
                self.hub.store.add(C::COLLECTION, payload).await
            }
        };

        match result {
            Ok(_) => {
                let verb = if published {
                    "published"
                } else {
                    "saved as draft"
                };
                self.hub
                    .notifier
                    .success(format!("{} {verb} successfully!", C::NOUN_TITLE));
                SaveOutcome::Saved
            }
            Err(e) => {
                self.hub
                    .notifier
                    .error(format!("Error saving {}: {e}", C::NOUN));
                SaveOutcome::Failed
            }
        }
    }

    /// First phase of deletion; nothing is touched until the pending
    /// handle is confirmed.
    pub(crate) fn begin_delete(&self, id: &str) -> PendingDelete<C> {
        PendingDelete {
            hub: self.hub.clone(),
            id: id.to_string(),
            _marker: PhantomData,
        }
    }
}

/// A delete that has been requested but not yet confirmed.
pub struct PendingDelete<C: AdminContent> {
    hub: ContentHub,
    id: String,
    _marker: PhantomData<C>,
}

impl<C: AdminContent> PendingDelete<C> {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Second phase: actually delete. Returns whether the document
    /// was removed.
    pub async fn confirm(self) -> bool {
        match self.hub.store.delete(C::COLLECTION, &self.id).await {
            Ok(()) => {
                self.hub
                    .notifier
                    .success(format!("{} deleted successfully!", C::NOUN_TITLE));
                true
            }
            Err(e) => {
                self.hub
                    .notifier
                    .error(format!("Error deleting {}: {e}", C::NOUN));
                false
            }
        }
    }

    /// Abandons the request. Explicitly a no-op.
    pub fn cancel(self) {}
}
