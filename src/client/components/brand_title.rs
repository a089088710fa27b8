use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaVideo;
use dioxus_free_icons::Icon;

#[component]
pub fn BrandTitle() -> Element {
    rsx!(
        a { href: "#top",
            div { class: "flex items-center gap-2",
                div { class: "h-9 w-9 rounded-lg bg-gradient-to-br from-emerald-400 to-orange-400 grid place-items-center text-white",
                    Icon {
                        width: 18,
                        height: 18,
                        icon: FaVideo
                    }
                }
                span { class: "font-semibold text-emerald-900",
                    "CutCraft Studio"
                }
            }
        }
    )
}
