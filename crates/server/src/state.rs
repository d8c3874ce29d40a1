use std::sync::Arc;

use axum::http::StatusCode;

/// Shared handler state: the storage backend plus response policy.
pub struct AppState<D> {
    pub backend: Arc<D>,
    pub delete_status: StatusCode,
}

impl<D> AppState<D> {
    pub fn new(backend: Arc<D>) -> Self {
        Self { backend, delete_status: StatusCode::NO_CONTENT }
    }

    /// Answer successful deletes with 205 Reset Content instead of 204.
    pub fn with_legacy_reset_content(mut self, legacy: bool) -> Self {
        self.delete_status = if legacy { StatusCode::RESET_CONTENT } else { StatusCode::NO_CONTENT };
        self
    }
}

// Manual impl: `D` itself need not be Clone.
impl<D> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self { backend: Arc::clone(&self.backend), delete_status: self.delete_status }
    }
}
