pub mod action;
pub mod app;
pub mod components;
pub mod context;
pub mod routes;
pub mod theme;
pub mod views;
pub mod vm;

pub use action::StepActionHandler;
pub use app::App;
pub use context::{AppContext, UiApp, build_app_context};
pub use theme::{ChecklistTheme, Density, ThemePreset, UnknownThemeError};
