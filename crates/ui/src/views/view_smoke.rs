use std::sync::Arc;

use onboard_core::model::{Catalog, Step, StepIcon, StepId, StepStatus};

use crate::action::StepActionHandler;
use crate::context::{UiApp, build_app_context};
use crate::theme::ChecklistTheme;

use super::test_harness::{
    ActionLog, render_checklist, setup_checklist_harness, setup_index_harness, test_app,
};

fn step(id: u64, title: &str, status: StepStatus) -> Step {
    Step::new(StepId::new(id), title, "desc", status, StepIcon::Plus).unwrap()
}

#[test]
fn index_view_smoke_renders_page_and_checklist() {
    let mut harness = setup_index_harness(
        Catalog::default_onboarding(),
        ChecklistTheme::violet(),
        ActionLog::default(),
    );
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "Web3 Payment Platform",
        "Getting Started",
        "50% completed",
        "width: 50%",
        "Account Setup",
        "✓ Verify Your Email",
        "$10 credit included for gas fees",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(html.contains("checklist--violet"), "missing theme class in {html}");
}

#[test]
fn checklist_smoke_draws_connectors_between_rows_only() {
    let html = render_checklist(Catalog::default_onboarding(), ChecklistTheme::violet());
    assert_eq!(html.matches("class=\"checklist-connector ").count(), 3, "{html}");
    assert_eq!(html.matches("checklist-connector--accent").count(), 2, "{html}");

    let single = Catalog::new(vec![step(1, "Only", StepStatus::Completed)]).unwrap();
    let html = render_checklist(single, ChecklistTheme::violet());
    assert!(!html.contains("checklist-connector"), "unexpected connector in {html}");
}

#[test]
fn checklist_smoke_shows_action_only_for_active_step_with_label() {
    let html = render_checklist(Catalog::default_onboarding(), ChecklistTheme::violet());
    assert_eq!(html.matches("<button").count(), 1, "{html}");
    assert!(html.contains(">Start</button>"), "missing action label in {html}");

    let bare = Catalog::new(vec![
        step(1, "Done", StepStatus::Completed),
        step(2, "Current", StepStatus::Active),
    ])
    .unwrap();
    let html = render_checklist(bare, ChecklistTheme::violet());
    assert!(!html.contains("<button"), "unexpected button in {html}");
}

#[test]
fn checklist_smoke_renders_empty_catalog() {
    let html = render_checklist(Catalog::default(), ChecklistTheme::violet());
    assert!(html.contains("0% completed"), "missing percentage in {html}");
    assert!(!html.contains("checklist-step "), "unexpected rows in {html}");
}

#[test]
fn checklist_smoke_keeps_input_order() {
    let catalog = Catalog::new(vec![
        step(3, "Third", StepStatus::Pending),
        step(1, "First", StepStatus::Pending),
        step(2, "Second", StepStatus::Pending),
    ])
    .unwrap();
    let html = render_checklist(catalog, ChecklistTheme::violet());
    let third = html.find("Third").expect("third rendered");
    let first = html.find("First").expect("first rendered");
    let second = html.find("Second").expect("second rendered");
    assert!(third < first && first < second, "order changed in {html}");
}

#[test]
fn checklist_smoke_uses_theme_glyph_for_completed_steps() {
    let html = render_checklist(Catalog::default_onboarding(), ChecklistTheme::violet());
    assert_eq!(html.matches("data-icon=\"check\"").count(), 2, "{html}");
    assert_eq!(html.matches("checklist-step-icon--active").count(), 1, "{html}");
    assert_eq!(html.matches("checklist-step-icon--completed").count(), 2, "{html}");
    assert_eq!(html.matches("checklist-step-icon--pending").count(), 1, "{html}");
    assert!(html.contains("data-icon=\"file-text\""), "{html}");
    assert!(html.contains("data-icon=\"plus\""), "{html}");
    assert!(!html.contains("data-icon=\"building\""), "{html}");

    let html = render_checklist(Catalog::default_onboarding(), ChecklistTheme::emerald());
    assert_eq!(html.matches("data-icon=\"circle-check\"").count(), 2, "{html}");
    assert!(html.contains("checklist--compact"), "{html}");
}

#[test]
fn checklist_smoke_omits_details_block_when_absent() {
    let catalog = Catalog::new(vec![
        step(1, "Plain", StepStatus::Active),
        step(2, "Detailed", StepStatus::Pending).with_details(["Add funds"]),
    ])
    .unwrap();
    let html = render_checklist(catalog, ChecklistTheme::violet());
    assert_eq!(html.matches("checklist-step-details").count(), 1, "{html}");
    assert!(html.contains("checklist-step-detail--muted"), "{html}");
}

#[test]
fn rendering_does_not_fire_actions() {
    let actions = ActionLog::default();
    let mut harness = setup_checklist_harness(
        Catalog::default_onboarding(),
        ChecklistTheme::violet(),
        actions.handler(),
    );
    harness.rebuild();
    super::test_harness::drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains(">Start</button>"), "missing action in {html}");
    assert!(actions.calls().is_empty());
}

#[test]
fn clicking_action_fires_handler_once_with_step_id() {
    let actions = ActionLog::default();
    let mut harness = setup_checklist_harness(
        Catalog::default_onboarding(),
        ChecklistTheme::violet(),
        actions.handler(),
    );
    let targets = harness.rebuild_with_click_targets();
    assert_eq!(targets.len(), 1, "expected a single action button");
    let before = harness.render();

    harness.click(targets[0]);

    assert_eq!(actions.calls(), vec![StepId::new(3)]);
    assert_eq!(harness.render(), before);
}

#[test]
fn clicking_each_action_reports_its_own_step() {
    let catalog = Catalog::new(vec![
        step(7, "Verify", StepStatus::Active).with_action("Verify"),
        step(8, "Configure", StepStatus::Active).with_action("Configure"),
    ])
    .unwrap();
    let actions = ActionLog::default();
    let mut harness =
        setup_checklist_harness(catalog, ChecklistTheme::violet(), actions.handler());
    let targets = harness.rebuild_with_click_targets();
    assert_eq!(targets.len(), 2);

    harness.click(targets[1]);
    harness.click(targets[0]);

    assert_eq!(actions.calls(), vec![StepId::new(8), StepId::new(7)]);
}

#[test]
fn context_step_action_reaches_app_once() {
    let actions = ActionLog::default();
    let app: Arc<dyn UiApp> = test_app(
        Catalog::default_onboarding(),
        ChecklistTheme::violet(),
        actions.clone(),
    );
    let ctx = build_app_context(&app);

    ctx.step_action().trigger(StepId::new(3));

    assert_eq!(actions.calls(), vec![StepId::new(3)]);
    assert_eq!(ctx.catalog(), Catalog::default_onboarding());
}

#[test]
fn noop_handler_is_accepted() {
    let mut harness = setup_checklist_harness(
        Catalog::default_onboarding(),
        ChecklistTheme::emerald(),
        StepActionHandler::noop(),
    );
    harness.rebuild();
    assert!(harness.render().contains("Create Invoice"));
}
