use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;

const DESCRIPTION: &str = "Track your payment platform onboarding progress.";

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Web3 Payment Platform" }
        document::Meta { name: "description", content: DESCRIPTION }

        AppShell {
            Router::<Route> {}
        }
    }
}

/// Page-level wrapper; a render failure anywhere below shows a fallback
/// panel instead of a blank window.
#[component]
pub fn AppShell(children: Element) -> Element {
    rsx! {
        div { class: "app-root app-root--onboarding",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "The onboarding checklist could not be shown" }
                        pre { "{errors:?}" }
                    }
                },
                {children}
            }
        }
    }
}
