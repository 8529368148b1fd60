use std::fmt;
use std::sync::Arc;

use onboard_core::model::StepId;

/// Callback fired when a step's action button is pressed.
///
/// The checklist never changes state on its own; whatever should happen is
/// up to the injected closure.
#[derive(Clone)]
pub struct StepActionHandler {
    inner: Arc<dyn Fn(StepId) + Send + Sync>,
}

impl StepActionHandler {
    pub fn new(f: impl Fn(StepId) + Send + Sync + 'static) -> Self {
        Self { inner: Arc::new(f) }
    }

    #[must_use]
    pub fn noop() -> Self {
        Self::new(|_| {})
    }

    pub fn trigger(&self, id: StepId) {
        tracing::debug!(step_id = %id, "step action pressed");
        (self.inner)(id);
    }
}

impl PartialEq for StepActionHandler {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for StepActionHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepActionHandler").finish_non_exhaustive()
    }
}
