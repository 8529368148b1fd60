use crate::model::Step;

/// Percentage of completed steps, rounded half away from zero.
///
/// An empty slice is 0%.
#[must_use]
pub fn completion_percentage(steps: &[Step]) -> u8 {
    let total = steps.len();
    if total == 0 {
        return 0;
    }
    let completed = steps.iter().filter(|step| step.is_completed()).count();
    let rounded = (completed * 100 + total / 2) / total;
    u8::try_from(rounded).unwrap_or(100)
}

/// Aggregated view of checklist progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistProgress {
    pub completed: usize,
    pub total: usize,
    pub percentage: u8,
    pub is_complete: bool,
}

impl ChecklistProgress {
    #[must_use]
    pub fn from_steps(steps: &[Step]) -> Self {
        let completed = steps.iter().filter(|step| step.is_completed()).count();
        Self {
            completed,
            total: steps.len(),
            percentage: completion_percentage(steps),
            is_complete: !steps.is_empty() && completed == steps.len(),
        }
    }
}
