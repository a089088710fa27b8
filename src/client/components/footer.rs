use chrono::{Datelike, Utc};
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let year = Utc::now().year();

    rsx!(
        footer { class: "py-10 text-center text-emerald-700/80 bg-emerald-50",
            "© {year} CutCraft Studio · Soft green + orange vibes"
        }
    )
}
