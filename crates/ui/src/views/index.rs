use dioxus::prelude::*;

use crate::components::ProgressChecklist;
use crate::context::AppContext;

#[component]
pub fn IndexView() -> Element {
    let ctx = use_context::<AppContext>();

    rsx! {
        div { class: "page page--onboarding",
            div { class: "page-inner",
                div { class: "page-hero",
                    h1 { class: "page-title", "Web3 Payment Platform" }
                    p { class: "page-tagline",
                        "Get started with crypto payments in just a few simple steps. Complete your onboarding to unlock seamless blockchain transactions."
                    }
                }

                ProgressChecklist {
                    catalog: ctx.catalog(),
                    theme: ctx.theme(),
                    on_step_action: ctx.step_action(),
                }
            }
        }
    }
}
