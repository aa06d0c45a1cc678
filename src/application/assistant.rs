//! Shared services and session bootstrap.

use std::sync::Arc;

use super::errors::BootstrapError;
use super::manager::ConversationManager;
use crate::adapters::{
    FileSessionStore, InMemorySessionStore, RandomAvailability, SystemClock,
    TracingEventPublisher,
};
use crate::config::{AppConfig, AssistantConfig, StorageBackend};
use crate::domain::catalog::ServiceCatalog;
use crate::domain::foundation::SessionId;
use crate::domain::intent::{IntentEngine, IntentTuning};
use crate::domain::knowledge::KnowledgeBase;
use crate::domain::pricing::TaxPolicy;
use crate::ports::{AvailabilitySource, Clock, EventPublisher, SessionStore};

/// Read-only services shared by every session.
///
/// Cloning is cheap; each clone points at the same services.
#[derive(Clone)]
pub struct Assistant {
    pub catalog: Arc<ServiceCatalog>,
    pub knowledge: Arc<KnowledgeBase>,
    pub engine: Arc<IntentEngine>,
    pub policy: Arc<TaxPolicy>,
    pub settings: Arc<AssistantConfig>,
    pub store: Arc<dyn SessionStore>,
    pub publisher: Arc<dyn EventPublisher>,
    pub availability: Arc<dyn AvailabilitySource>,
    pub clock: Arc<dyn Clock>,
}

impl Assistant {
    /// Builds the knowledge base and intent engine over `catalog`.
    ///
    /// Starts with an in-memory store, tracing analytics, randomized
    /// availability and the system clock; swap them with the `with_*`
    /// methods.
    pub fn new(
        catalog: ServiceCatalog,
        policy: TaxPolicy,
        tuning: IntentTuning,
        settings: AssistantConfig,
    ) -> Self {
        let knowledge = Arc::new(KnowledgeBase::build(&catalog, &policy));
        let engine = Arc::new(IntentEngine::new(Arc::clone(&knowledge), tuning));

        Self {
            catalog: Arc::new(catalog),
            knowledge,
            engine,
            policy: Arc::new(policy),
            settings: Arc::new(settings),
            store: Arc::new(InMemorySessionStore::new()),
            publisher: Arc::new(TracingEventPublisher::new()),
            availability: Arc::new(RandomAvailability::default()),
            clock: Arc::new(SystemClock),
        }
    }

    /// Wires production adapters from configuration.
    pub async fn from_config(config: &AppConfig) -> Result<Self, BootstrapError> {
        config.validate()?;

        let catalog = match &config.catalog.path {
            Some(path) => ServiceCatalog::from_path(path).await?,
            None => ServiceCatalog::bundled()?,
        };

        let store: Arc<dyn SessionStore> = match (config.storage.backend, &config.storage.directory) {
            (StorageBackend::File, Some(directory)) => Arc::new(FileSessionStore::new(directory)),
            _ => Arc::new(InMemorySessionStore::new()),
        };

        let assistant = Self::new(
            catalog,
            config.tax.clone(),
            config.intent.clone(),
            config.assistant.clone(),
        )
        .with_store(store);

        tracing::info!(
            categories = assistant.catalog.categories.len(),
            knowledge_items = assistant.knowledge.len(),
            storage = ?config.storage.backend,
            "Assistant ready"
        );
        Ok(assistant)
    }

    pub fn with_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.store = store;
        self
    }

    pub fn with_publisher(mut self, publisher: Arc<dyn EventPublisher>) -> Self {
        self.publisher = publisher;
        self
    }

    pub fn with_availability(mut self, availability: Arc<dyn AvailabilitySource>) -> Self {
        self.availability = availability;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// A fresh, empty conversation.
    pub fn open_session(&self, session_id: SessionId) -> ConversationManager {
        ConversationManager::new(self.clone(), session_id)
    }

    /// A conversation restored from the session store.
    pub async fn resume_session(&self, session_id: SessionId) -> ConversationManager {
        ConversationManager::resume(self.clone(), session_id).await
    }
}
