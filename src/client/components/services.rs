use dioxus::prelude::*;

pub const SERVICES: [&str; 3] = ["Short-form", "Long-form", "Ads"];

#[component]
pub fn Services() -> Element {
    rsx!(
        section { id: "services", class: "py-16 bg-white",
            div { class: "max-w-6xl mx-auto px-4 grid md:grid-cols-3 gap-6",
                {SERVICES.iter().map(|service| rsx! {
                    div {
                        key: "{service}",
                        class: "rounded-xl border border-emerald-100 p-6 shadow-sm bg-gradient-to-b from-white to-emerald-50",
                        div { class: "h-10 w-10 rounded-lg bg-gradient-to-br from-orange-400 to-emerald-400 mb-4" }
                        div { class: "font-semibold",
                            "{service} Editing"
                        }
                        p { class: "text-emerald-700/80 mt-2",
                            "Clean cuts, seamless pacing, tasteful motion and color work, delivered fast."
                        }
                    }
                })}
            }
        }
    )
}
