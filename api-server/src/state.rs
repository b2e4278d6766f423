//! Application state

use std::sync::Arc;

use tasktrack_core::task::TaskUseCase;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    task_usecase: Arc<dyn TaskUseCase>,
}

impl AppState {
    /// Create a new AppState around the injected use case
    pub fn new(task_usecase: Arc<dyn TaskUseCase>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { task_usecase }),
        }
    }

    /// Get reference to the task use case
    pub fn task_usecase(&self) -> &dyn TaskUseCase {
        self.inner.task_usecase.as_ref()
    }
}
