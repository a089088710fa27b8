use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Page not found | CutCraft Studio" }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                h1 { class: "text-3xl font-bold",
                    "Page not found"
                }
                p { class: "text-emerald-700/80",
                    "Nothing lives at /{path}."
                }
                Link {
                    to: Route::Home {},
                    class: "px-4 py-2 rounded-lg bg-emerald-600 text-white hover:bg-emerald-700",
                    "Back to CutCraft Studio"
                }
            }
        }
    )
}
