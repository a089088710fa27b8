use dioxus::prelude::*;

/// Neutral message shown in place of a section's list while it loads or after
/// its fetch failed.
#[component]
pub fn SectionNotice(text: String) -> Element {
    rsx!(
        p { class: "mt-10 text-center text-emerald-700/80",
            "{text}"
        }
    )
}
