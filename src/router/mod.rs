pub use nav::{NavState, Page};

mod nav;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::admin::{AdminPanel, AdminTab};
use crate::app::ContentHub;
use crate::common::PageError;
use crate::models::{Blog, Video};
use crate::pages::auth::AuthController;
use crate::pages::contact::ContactController;
use crate::pages::listing::ListingController;
use crate::pages::{auth, contact, detail, home, listing, terms};
use crate::shell::merge_slots;
use crate::views::fragments::error_block;

/// Body of a navigation frame.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewBody {
    Loading,
    Content(String),
    Error(String),
}

/// Ordered render instructions delivered to the embedder's sink.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    /// Replace the content region. Emitted twice per navigation:
    /// once with `Loading`, then with `Content` or `Error`.
    Navigation {
        generation: u64,
        title: String,
        active: Page,
        path: String,
        body: ViewBody,
    },
    /// Patch card visibility after a filter pass.
    Visibility {
        generation: u64,
        visible: Vec<String>,
        no_results: bool,
    },
}

impl Update {
    pub fn generation(&self) -> u64 {
        match self {
            Update::Navigation { generation, .. } => *generation,
            Update::Visibility { generation, .. } => *generation,
        }
    }
}

/// Where rendered frames go. The embedder owns the actual surface
/// (a DOM bridge, a test recorder, a terminal).
pub trait RenderSink: Send + Sync {
    fn apply(&self, update: Update);
}

/// Sink handle scoped to one navigation. Late frames from a
/// superseded navigation are dropped instead of clobbering the
/// current page.
#[derive(Clone)]
pub struct Emitter {
    generation: u64,
    current: Arc<AtomicU64>,
    sink: Arc<dyn RenderSink>,
}

impl Emitter {
    fn new(generation: u64, current: Arc<AtomicU64>, sink: Arc<dyn RenderSink>) -> Self {
        Self {
            generation,
            current,
            sink,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }

    /// Applies the update unless this navigation has been superseded.
    /// Returns whether the frame was delivered.
    pub fn emit(&self, update: Update) -> bool {
        if !self.is_current() {
            log::debug!(
                "Dropping stale frame from navigation {}",
                self.generation
            );
            return false;
        }
        self.sink.apply(update);
        true
    }
}

/// Live controller of the page most recently rendered, when the page
/// has one.
pub enum PageHandle {
    None,
    Listing(ListingController),
    Auth(AuthController),
    Contact(ContactController),
    Admin(AdminPanel),
}

enum HistoryOp {
    Push,
    Replay,
}

/// Owns the navigation lifecycle: title/path/active-nav bookkeeping,
/// the loading-then-content frame order, the history stack and the
/// admin gate.
pub struct Router {
    hub: ContentHub,
    sink: Arc<dyn RenderSink>,
    current: Arc<AtomicU64>,
    history: Vec<NavState>,
    cursor: usize,
}

impl Router {
    pub fn new(hub: ContentHub, sink: Arc<dyn RenderSink>) -> Self {
        Self {
            hub,
            sink,
            current: Arc::new(AtomicU64::new(0)),
            history: Vec::new(),
            cursor: 0,
        }
    }

    /// Initial dispatch from a raw path (deep link).
    pub async fn start(&mut self, path: &str) -> PageHandle {
        self.dispatch(NavState::parse(path), HistoryOp::Push).await
    }

    pub async fn navigate(&mut self, state: NavState) -> PageHandle {
        self.dispatch(state, HistoryOp::Push).await
    }

    pub fn current_state(&self) -> Option<&NavState> {
        self.history.get(self.cursor)
    }

    /// Replays the previous history entry, if any.
    pub async fn back(&mut self) -> Option<PageHandle> {
        if self.history.is_empty() || self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        let state = self.history[self.cursor].clone();
        Some(self.dispatch(state, HistoryOp::Replay).await)
    }

    /// Replays the next history entry, if any.
    pub async fn forward(&mut self) -> Option<PageHandle> {
        if self.cursor + 1 >= self.history.len() {
            return None;
        }
        self.cursor += 1;
        let state = self.history[self.cursor].clone();
        Some(self.dispatch(state, HistoryOp::Replay).await)
    }

    async fn dispatch(&mut self, state: NavState, op: HistoryOp) -> PageHandle {
        // Admin gate: no partial admin render, ever. Fall through to
        // home with an error notice instead.
        if state.page == Page::Admin && !self.hub.session.is_admin() {
            self.hub
                .notifier
                .error("Access denied. Admin privileges required.");
            return Box::pin(self.dispatch(NavState::page(Page::Home), op)).await;
        }

        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        let emitter = Emitter::new(generation, self.current.clone(), self.sink.clone());
        let title = state.title(&self.hub.config.site_name);
        let path = state.path();

        // The loading frame goes out before any adapter is awaited.
        emitter.emit(Update::Navigation {
            generation,
            title: title.clone(),
            active: state.page,
            path: path.clone(),
            body: ViewBody::Loading,
        });

        let (body, handle) = match self.render_page(&state, &emitter).await {
            Ok((html, handle)) => (ViewBody::Content(html), handle),
            Err(e) => {
                log::error!("Failed to render {} page: {e}", state.page);
                (ViewBody::Error(error_block(&e.to_string())), PageHandle::None)
            }
        };

        let delivered = emitter.emit(Update::Navigation {
            generation,
            title,
            active: state.page,
            path,
            body,
        });

        if delivered {
            match op {
                HistoryOp::Push => {
                    self.history.truncate(self.cursor + 1);
                    self.history.push(state);
                    self.cursor = self.history.len() - 1;
                }
                HistoryOp::Replay => {}
            }
        }

        handle
    }

    async fn render_page(
        &self,
        state: &NavState,
        emitter: &Emitter,
    ) -> Result<(String, PageHandle), PageError> {
        let hub = &self.hub;
        match (state.page, &state.id) {
            (Page::Home, _) => Ok((home::render(hub).await?, PageHandle::None)),

            (Page::Blogs, Some(id)) => {
                Ok((detail::render::<Blog>(hub, id).await?, PageHandle::None))
            }
            (Page::Blogs, None) => {
                let (html, controller) = listing::init::<Blog>(hub, emitter.clone()).await?;
                Ok((html, PageHandle::Listing(controller)))
            }

            (Page::Videos, Some(id)) => {
                Ok((detail::render::<Video>(hub, id).await?, PageHandle::None))
            }
            (Page::Videos, None) => {
                let (html, controller) = listing::init::<Video>(hub, emitter.clone()).await?;
                Ok((html, PageHandle::Listing(controller)))
            }

            (Page::Auth, _) => Ok((
                auth::render(hub).await?,
                PageHandle::Auth(AuthController::new(hub.clone())),
            )),

            (Page::Contact, _) => Ok((
                contact::render(hub).await?,
                PageHandle::Contact(ContactController::new(hub.clone())),
            )),

            (Page::Terms, _) => Ok((terms::render(hub).await?, PageHandle::None)),

            (Page::Admin, _) => {
                let panel = AdminPanel::new(hub.clone());
                let shell = hub.templates.fetch(Page::Admin.as_str()).await?;
                let content = panel.load(AdminTab::Blogs).await;
                Ok((
                    merge_slots(&shell, &[("content", &content)]),
                    PageHandle::Admin(panel),
                ))
            }
        }
    }
}
