use crate::generation::generator::GenerationService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no inference credential is configured; generation requests
    /// then fail with a missing-credential error after input validation.
    pub generator: Option<GenerationService>,
}
