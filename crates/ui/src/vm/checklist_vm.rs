use onboard_core::model::{Catalog, Step, StepIcon, StepId, StepStatus};

use crate::theme::ChecklistTheme;

/// Line drawn from a step down to the next one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectorStyle {
    Accent,
    Neutral,
}

impl ConnectorStyle {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            ConnectorStyle::Accent => "checklist-connector checklist-connector--accent",
            ConnectorStyle::Neutral => "checklist-connector checklist-connector--neutral",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepRowVm {
    pub id: StepId,
    pub status: StepStatus,
    pub title: String,
    pub description: String,
    /// Glyph actually drawn: the theme's check for completed steps, the
    /// step's own icon otherwise.
    pub icon: StepIcon,
    pub connector: Option<ConnectorStyle>,
    pub action_label: Option<String>,
    pub details: Vec<String>,
}

impl StepRowVm {
    #[must_use]
    pub fn row_class(&self) -> String {
        format!("checklist-step checklist-step--{}", self.status.as_str())
    }

    #[must_use]
    pub fn icon_class(&self) -> String {
        format!("checklist-step-icon checklist-step-icon--{}", self.status.as_str())
    }

    #[must_use]
    pub fn title_class(&self) -> &'static str {
        match self.status {
            StepStatus::Active => "checklist-step-title checklist-step-title--accent",
            StepStatus::Completed | StepStatus::Pending => "checklist-step-title",
        }
    }

    #[must_use]
    pub fn description_class(&self) -> &'static str {
        match self.status {
            StepStatus::Active => "checklist-step-description checklist-step-description--accent",
            StepStatus::Completed | StepStatus::Pending => "checklist-step-description",
        }
    }

    #[must_use]
    pub fn detail_class(&self) -> &'static str {
        match self.status {
            StepStatus::Completed => "checklist-step-detail checklist-step-detail--success",
            StepStatus::Active => "checklist-step-detail checklist-step-detail--accent",
            StepStatus::Pending => "checklist-step-detail checklist-step-detail--muted",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChecklistVm {
    pub percentage: u8,
    pub percentage_label: String,
    pub progress_style: String,
    pub rows: Vec<StepRowVm>,
}

#[must_use]
pub fn map_step_row(step: &Step, is_last: bool, theme: &ChecklistTheme) -> StepRowVm {
    let status = step.status();
    let icon = match status {
        StepStatus::Completed => theme.completed_icon,
        StepStatus::Active | StepStatus::Pending => step.icon(),
    };
    let connector = (!is_last).then_some(match status {
        StepStatus::Completed => ConnectorStyle::Accent,
        StepStatus::Active | StepStatus::Pending => ConnectorStyle::Neutral,
    });
    let action_label = match status {
        StepStatus::Active => step.action().map(str::to_string),
        StepStatus::Completed | StepStatus::Pending => None,
    };

    StepRowVm {
        id: step.id(),
        status,
        title: step.title().to_string(),
        description: step.description().to_string(),
        icon,
        connector,
        action_label,
        details: step.details().to_vec(),
    }
}

/// Maps a catalog to render-ready rows in catalog order.
#[must_use]
pub fn map_checklist(catalog: &Catalog, theme: &ChecklistTheme) -> ChecklistVm {
    let steps = catalog.steps();
    let percentage = catalog.percentage();
    let rows = steps
        .iter()
        .enumerate()
        .map(|(index, step)| map_step_row(step, index + 1 == steps.len(), theme))
        .collect();

    ChecklistVm {
        percentage,
        percentage_label: format!("{percentage}% completed"),
        progress_style: format!("width: {percentage}%"),
        rows,
    }
}
