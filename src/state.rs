use std::sync::Arc;

use crate::application::services::{LinkService, RedirectService, StatsService};
use crate::domain::event_logger::EventLogger;
use crate::infrastructure::persistence::InMemoryLinkRepository;

/// Shared state injected into every handler.
///
/// All services share one [`InMemoryLinkRepository`]; the repository is the
/// only place records are stored.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<InMemoryLinkRepository>>,
    pub redirect_service: Arc<RedirectService<InMemoryLinkRepository>>,
    pub stats_service: Arc<StatsService<InMemoryLinkRepository>>,
    pub link_repository: Arc<InMemoryLinkRepository>,
    pub events: EventLogger,
    /// Public base URL used to build short links, without trailing slash.
    pub base_url: String,
}

impl AppState {
    /// Wires services around a registry.
    pub fn new(
        link_repository: Arc<InMemoryLinkRepository>,
        events: EventLogger,
        base_url: impl Into<String>,
        default_validity_minutes: u32,
    ) -> Self {
        let link_service = LinkService::new(link_repository.clone(), events.clone())
            .with_default_validity(default_validity_minutes);
        let redirect_service = RedirectService::new(link_repository.clone(), events.clone());
        let stats_service = StatsService::new(link_repository.clone());

        Self {
            link_service: Arc::new(link_service),
            redirect_service: Arc::new(redirect_service),
            stats_service: Arc::new(stats_service),
            link_repository,
            events,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}
