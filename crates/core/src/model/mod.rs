mod catalog;
mod ids;
mod step;

pub use catalog::{Catalog, CatalogError};
pub use ids::{ParseIdError, StepId};
pub use step::{Step, StepError, StepIcon, StepStatus};
