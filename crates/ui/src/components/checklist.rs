use dioxus::prelude::*;
use onboard_core::model::Catalog;

use crate::action::StepActionHandler;
use crate::components::StepGlyph;
use crate::theme::ChecklistTheme;
use crate::vm::{StepRowVm, map_checklist};

/// Onboarding progress card.
///
/// Percentage and rows are derived from `catalog` on every render.
#[component]
pub fn ProgressChecklist(
    catalog: Catalog,
    theme: ChecklistTheme,
    on_step_action: StepActionHandler,
) -> Element {
    let vm = map_checklist(&catalog, &theme);

    rsx! {
        section { class: "{theme.root_class()}",
            header { class: "checklist-header",
                div { class: "checklist-heading",
                    h2 { class: "checklist-title", "Getting Started" }
                    div { class: "checklist-summary",
                        p { class: "checklist-summary-label", "Progress" }
                        p { class: "checklist-summary-value", "{vm.percentage_label}" }
                    }
                }
                div { class: "checklist-progress-track",
                    div { class: "checklist-progress-fill", style: "{vm.progress_style}" }
                }
            }

            div { class: "checklist-steps",
                for row in vm.rows {
                    StepRow {
                        key: "{row.id}",
                        row: row.clone(),
                        glyph_size: theme.glyph_size,
                        on_step_action: on_step_action.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn StepRow(row: StepRowVm, glyph_size: u32, on_step_action: StepActionHandler) -> Element {
    let step_id = row.id;

    rsx! {
        div { class: "{row.row_class()}",
            if let Some(connector) = row.connector {
                div { class: connector.class() }
            }

            div { class: "{row.icon_class()}",
                StepGlyph { icon: row.icon, size: glyph_size }
            }

            div { class: "checklist-step-body",
                div { class: "checklist-step-heading",
                    h3 { class: row.title_class(), "{row.title}" }
                    if let Some(label) = row.action_label.clone() {
                        button {
                            class: "checklist-step-action",
                            r#type: "button",
                            onclick: move |_| on_step_action.trigger(step_id),
                            "{label}"
                        }
                    }
                }
                p { class: row.description_class(), "{row.description}" }
                if !row.details.is_empty() {
                    div { class: "checklist-step-details",
                        for detail in row.details.iter() {
                            p { class: row.detail_class(), "{detail}" }
                        }
                    }
                }
            }
        }
    }
}
