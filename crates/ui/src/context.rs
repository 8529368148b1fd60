use std::sync::Arc;

use onboard_core::model::{Catalog, StepId};

use crate::action::StepActionHandler;
use crate::theme::ChecklistTheme;

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Catalog;
    fn theme(&self) -> ChecklistTheme;
    fn on_step_action(&self, id: StepId);
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Catalog,
    theme: ChecklistTheme,
    step_action: StepActionHandler,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let catalog = app.catalog();
        let theme = app.theme();

        let handler_app = Arc::clone(app);
        let step_action = StepActionHandler::new(move |id| handler_app.on_step_action(id));

        Self {
            catalog,
            theme,
            step_action,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Catalog {
        self.catalog.clone()
    }

    #[must_use]
    pub fn theme(&self) -> ChecklistTheme {
        self.theme
    }

    #[must_use]
    pub fn step_action(&self) -> StepActionHandler {
        self.step_action.clone()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
