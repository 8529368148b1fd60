use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::StepId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StepError {
    #[error("step {id} has an empty title")]
    EmptyTitle { id: StepId },
}

//
// ─── STATUS & ICON ─────────────────────────────────────────────────────────────
//

/// Display status of a step. There are no transitions at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

impl StepStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StepStatus::Completed => "completed",
            StepStatus::Active => "active",
            StepStatus::Pending => "pending",
        }
    }

    /// Position of the status in the conventional flow order.
    fn rank(self) -> u8 {
        match self {
            StepStatus::Completed => 0,
            StepStatus::Active => 1,
            StepStatus::Pending => 2,
        }
    }

    pub(crate) fn follows_in_flow(self, previous: StepStatus) -> bool {
        self.rank() >= previous.rank()
    }
}

/// Closed set of glyphs a step (or theme) can ask for.
///
/// The UI crate owns the mapping from identifier to drawn glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepIcon {
    Building,
    Wallet,
    FileText,
    Plus,
    Mail,
    Settings,
    Check,
    CircleCheck,
}

impl StepIcon {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StepIcon::Building => "building",
            StepIcon::Wallet => "wallet",
            StepIcon::FileText => "file-text",
            StepIcon::Plus => "plus",
            StepIcon::Mail => "mail",
            StepIcon::Settings => "settings",
            StepIcon::Check => "check",
            StepIcon::CircleCheck => "circle-check",
        }
    }
}

//
// ─── STEP ──────────────────────────────────────────────────────────────────────
//

/// One unit of the onboarding flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    id: StepId,
    title: String,
    description: String,
    status: StepStatus,
    icon: StepIcon,
    action: Option<String>,
    details: Vec<String>,
}

impl Step {
    /// Creates a step without an action or details.
    ///
    /// # Errors
    ///
    /// Returns `StepError::EmptyTitle` if the title is empty or whitespace-only.
    pub fn new(
        id: StepId,
        title: impl Into<String>,
        description: impl Into<String>,
        status: StepStatus,
        icon: StepIcon,
    ) -> Result<Self, StepError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(StepError::EmptyTitle { id });
        }

        Ok(Self {
            id,
            title: title.trim().to_owned(),
            description: description.into().trim().to_owned(),
            status,
            icon,
            action: None,
            details: Vec::new(),
        })
    }

    /// Builds a step from literals known to be valid.
    pub(crate) fn trusted(
        id: StepId,
        title: &str,
        description: &str,
        status: StepStatus,
        icon: StepIcon,
    ) -> Self {
        Self {
            id,
            title: title.to_owned(),
            description: description.to_owned(),
            status,
            icon,
            action: None,
            details: Vec::new(),
        }
    }

    /// Sets the action label. Blank labels are treated as absent.
    #[must_use]
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        let action = action.into();
        self.action = Some(action.trim().to_owned()).filter(|a| !a.is_empty());
        self
    }

    #[must_use]
    pub fn with_details<I, S>(mut self, details: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.details = details.into_iter().map(Into::into).collect();
        self
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> StepId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn status(&self) -> StepStatus {
        self.status
    }

    #[must_use]
    pub fn icon(&self) -> StepIcon {
        self.icon
    }

    #[must_use]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Sub-bullets in display order. Empty means the step has none.
    #[must_use]
    pub fn details(&self) -> &[String] {
        &self.details
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == StepStatus::Completed
    }
}
