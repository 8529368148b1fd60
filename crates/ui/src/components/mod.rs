mod checklist;
mod icons;

pub use checklist::ProgressChecklist;
pub use icons::StepGlyph;
