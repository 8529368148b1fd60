use std::any::Any;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use dioxus::core::{ElementId, Mutation, NoOpMutations};
use dioxus::prelude::*;
use dioxus_html::{PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};
use onboard_core::model::{Catalog, StepId};

use crate::action::StepActionHandler;
use crate::components::ProgressChecklist;
use crate::context::{UiApp, build_app_context};
use crate::theme::ChecklistTheme;
use crate::views::IndexView;

/// Records every step action it receives.
#[derive(Clone, Default)]
pub struct ActionLog {
    calls: Arc<Mutex<Vec<StepId>>>,
}

impl ActionLog {
    pub fn handler(&self) -> StepActionHandler {
        let log = self.clone();
        StepActionHandler::new(move |id| log.record(id))
    }

    pub fn record(&self, id: StepId) {
        self.calls.lock().expect("action log").push(id);
    }

    pub fn calls(&self) -> Vec<StepId> {
        self.calls.lock().expect("action log").clone()
    }
}

pub struct TestApp {
    catalog: Catalog,
    theme: ChecklistTheme,
    actions: ActionLog,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Catalog {
        self.catalog.clone()
    }

    fn theme(&self) -> ChecklistTheme {
        self.theme
    }

    fn on_step_action(&self, id: StepId) {
        self.actions.record(id);
    }
}

#[derive(Props, Clone)]
struct ChecklistHarnessProps {
    catalog: Catalog,
    theme: ChecklistTheme,
    on_step_action: StepActionHandler,
}

impl PartialEq for ChecklistHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ChecklistHarness(props: ChecklistHarnessProps) -> Element {
    rsx! {
        ProgressChecklist {
            catalog: props.catalog.clone(),
            theme: props.theme,
            on_step_action: props.on_step_action.clone(),
        }
    }
}

#[derive(Props, Clone)]
struct IndexHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for IndexHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn IndexHarness(props: IndexHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { IndexView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    /// Builds the tree and returns the elements that listen for clicks.
    pub fn rebuild_with_click_targets(&mut self) -> Vec<ElementId> {
        let mutations = self.dom.rebuild_to_vec();
        drive_dom(&mut self.dom);
        mutations
            .edits
            .iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if name == "click" => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn click(&mut self, target: ElementId) {
        dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));
        let data: Rc<dyn Any> = Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default()));
        self.dom
            .runtime()
            .handle_event("click", Event::new(data, true), target);
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_checklist_harness(
    catalog: Catalog,
    theme: ChecklistTheme,
    on_step_action: StepActionHandler,
) -> ViewHarness {
    let dom = VirtualDom::new_with_props(
        ChecklistHarness,
        ChecklistHarnessProps {
            catalog,
            theme,
            on_step_action,
        },
    );
    ViewHarness { dom }
}

pub fn setup_index_harness(
    catalog: Catalog,
    theme: ChecklistTheme,
    actions: ActionLog,
) -> ViewHarness {
    let dom = VirtualDom::new_with_props(
        IndexHarness,
        IndexHarnessProps {
            app: test_app(catalog, theme, actions),
        },
    );
    ViewHarness { dom }
}

pub fn test_app(catalog: Catalog, theme: ChecklistTheme, actions: ActionLog) -> Arc<TestApp> {
    Arc::new(TestApp {
        catalog,
        theme,
        actions,
    })
}

/// Renders the checklist once and returns its HTML.
pub fn render_checklist(catalog: Catalog, theme: ChecklistTheme) -> String {
    let mut harness = setup_checklist_harness(catalog, theme, StepActionHandler::noop());
    harness.rebuild();
    harness.render()
}
