use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::model::ids::StepId;
use crate::model::step::{Step, StepError, StepIcon, StepStatus};
use crate::progress::{ChecklistProgress, completion_percentage};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("step ids must be positive")]
    ZeroId,

    #[error("duplicate step id {0}")]
    DuplicateId(StepId),

    #[error(transparent)]
    Step(#[from] StepError),

    #[error("invalid catalog file: {0}")]
    Parse(#[from] toml::de::Error),
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// The ordered list of steps shown to the user.
///
/// Order is the input order; the catalog never sorts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    steps: Vec<Step>,
}

impl Catalog {
    /// Builds a catalog from steps in display order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::ZeroId` for an id of 0 and
    /// `CatalogError::DuplicateId` when two steps share an id.
    pub fn new(steps: Vec<Step>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(steps.len());
        for step in &steps {
            if step.id().value() == 0 {
                return Err(CatalogError::ZeroId);
            }
            if !seen.insert(step.id()) {
                return Err(CatalogError::DuplicateId(step.id()));
            }
        }
        Ok(Self { steps })
    }

    /// Parses a TOML catalog (`[[steps]]` tables).
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed TOML or unknown
    /// status/icon names, and the validation errors of [`Catalog::new`].
    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(raw)?;
        let steps = file
            .steps
            .into_iter()
            .map(StepRecord::into_step)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(steps)
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: StepId) -> Option<&Step> {
        self.steps.iter().find(|step| step.id() == id)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.steps.iter().filter(|step| step.is_completed()).count()
    }

    #[must_use]
    pub fn percentage(&self) -> u8 {
        completion_percentage(&self.steps)
    }

    #[must_use]
    pub fn progress(&self) -> ChecklistProgress {
        ChecklistProgress::from_steps(&self.steps)
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.status() == StepStatus::Active)
            .count()
    }

    /// True when completed steps precede active ones, which precede pending
    /// ones. Not enforced; callers may warn about it.
    #[must_use]
    pub fn is_conventionally_ordered(&self) -> bool {
        self.steps
            .windows(2)
            .all(|pair| pair[1].status().follows_in_flow(pair[0].status()))
    }

    /// The shipped onboarding flow for the payment platform.
    #[must_use]
    pub fn default_onboarding() -> Self {
        let steps = vec![
            step(
                1,
                "Account Setup",
                "Complete your profile and verification",
                StepStatus::Completed,
                StepIcon::Building,
            )
            .with_details(["✓ Verify Your Email", "✓ Business Information"]),
            step(
                2,
                "Payment Methods",
                "Configure your payment options",
                StepStatus::Completed,
                StepIcon::Wallet,
            )
            .with_details([
                "✓ Choose WalletConnect or Manual Payments",
                "✓ Configure Blockchain Networks",
            ]),
            step(
                3,
                "Create Invoice",
                "Generate your first payment link",
                StepStatus::Active,
                StepIcon::FileText,
            )
            .with_action("Start")
            .with_details(["Generate Your First Payment Link"]),
            step(
                4,
                "Wallet Top-Up",
                "$10 credit included for gas fees",
                StepStatus::Pending,
                StepIcon::Plus,
            )
            .with_details(["Add funds for future transactions"]),
        ];
        Self { steps }
    }
}

fn step(id: u64, title: &str, description: &str, status: StepStatus, icon: StepIcon) -> Step {
    Step::trusted(StepId::new(id), title, description, status, icon)
}

//
// ─── FILE FORMAT ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    steps: Vec<StepRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct StepRecord {
    id: u64,
    title: String,
    #[serde(default)]
    description: String,
    status: StepStatus,
    icon: StepIcon,
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    details: Vec<String>,
}

impl StepRecord {
    fn into_step(self) -> Result<Step, StepError> {
        let step = Step::new(
            StepId::new(self.id),
            self.title,
            self.description,
            self.status,
            self.icon,
        )?
        .with_details(self.details);
        Ok(match self.action {
            Some(action) => step.with_action(action),
            None => step,
        })
    }
}
