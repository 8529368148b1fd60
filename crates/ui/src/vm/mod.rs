mod checklist_vm;

pub use checklist_vm::{ChecklistVm, ConnectorStyle, StepRowVm, map_checklist, map_step_row};
