use std::sync::Arc;

use crate::admin::AdminPanel;
use crate::auth::{IdentityProvider, LocalProvider, Session};
use crate::config::HubConfig;
use crate::notify::Notifier;
use crate::pages::auth::AuthController;
use crate::pages::contact::ContactController;
use crate::router::{RenderSink, Router};
use crate::shell::{BuiltinShells, DirSource, TemplateSource};
use crate::store::{DocumentStore, MemoryStore};

/// Shared handle to every adapter and the session context. Cloning
/// is cheap; all components receive the same instances.
#[derive(Clone)]
pub struct ContentHub {
    pub config: Arc<HubConfig>,
    pub store: Arc<dyn DocumentStore>,
    pub identity: Arc<dyn IdentityProvider>,
    pub templates: Arc<dyn TemplateSource>,
    pub notifier: Arc<Notifier>,
    pub session: Session,
}

impl ContentHub {
    pub fn new(
        config: HubConfig,
        store: Arc<dyn DocumentStore>,
        identity: Arc<dyn IdentityProvider>,
        templates: Arc<dyn TemplateSource>,
    ) -> Self {
        let session = Session::new(identity.as_ref(), config.admin_email.clone());
        Self {
            config: Arc::new(config),
            store,
            identity,
            templates,
            notifier: Arc::new(Notifier::new()),
            session,
        }
    }

    /// Fully in-process hub: memory store, local identity provider
    /// and shells from the configured directory or the built-ins.
    pub fn in_memory(config: HubConfig) -> Self {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
        let identity = Arc::new(
            LocalProvider::new().with_profile_store(store.clone(), &config.admin_email),
        );
        let templates: Arc<dyn TemplateSource> = match &config.template_dir {
            Some(dir) => Arc::new(DirSource::new(dir.clone())),
            None => Arc::new(BuiltinShells::new()),
        };
        Self::new(config, store, identity, templates)
    }

    pub fn router(&self, sink: Arc<dyn RenderSink>) -> Router {
        Router::new(self.clone(), sink)
    }

    pub fn admin_panel(&self) -> AdminPanel {
        AdminPanel::new(self.clone())
    }

    pub fn auth_controller(&self) -> AuthController {
        AuthController::new(self.clone())
    }

    pub fn contact_controller(&self) -> ContactController {
        ContactController::new(self.clone())
    }
}
