use dioxus::prelude::*;
use onboard_core::model::StepIcon;

fn glyph_paths(icon: StepIcon) -> &'static [&'static str] {
    match icon {
        StepIcon::Building => &[
            "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z",
            "M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2",
            "M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2",
            "M10 6h4M10 10h4M10 14h4M10 18h4",
        ],
        StepIcon::Wallet => &[
            "M19 7V4a1 1 0 0 0-1-1H5a2 2 0 0 0 0 4h15a1 1 0 0 1 1 1v4h-3a2 2 0 0 0 0 4h3a1 1 0 0 0 1-1v-2a1 1 0 0 0-1-1",
            "M3 5v14a2 2 0 0 0 2 2h15a1 1 0 0 0 1-1v-4",
        ],
        StepIcon::FileText => &[
            "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z",
            "M14 2v4a2 2 0 0 0 2 2h4",
            "M10 9H8M16 13H8M16 17H8",
        ],
        StepIcon::Plus => &["M5 12h14", "M12 5v14"],
        StepIcon::Mail => &[
            "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2Z",
            "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
        ],
        StepIcon::Settings => &[
            "M12 9a3 3 0 1 0 0 6a3 3 0 1 0 0-6",
            "M12 2v3M12 19v3M4.2 4.2l2.1 2.1M17.7 17.7l2.1 2.1M2 12h3M19 12h3M4.2 19.8l2.1-2.1M17.7 6.3l2.1-2.1",
        ],
        StepIcon::Check => &["M20 6 9 17l-5-5"],
        StepIcon::CircleCheck => &[
            "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20",
            "m9 12 2 2 4-4",
        ],
    }
}

#[component]
pub fn StepGlyph(icon: StepIcon, size: u32) -> Element {
    rsx! {
        svg {
            class: "checklist-glyph",
            "data-icon": icon.as_str(),
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for d in glyph_paths(icon) {
                path { d: *d }
            }
        }
    }
}
