use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBars, FaRightFromBracket, FaRightToBracket};
use dioxus_free_icons::Icon;

use crate::client::components::BrandTitle;

/// In-page anchors shown in the navbar, as `(href, label)`.
pub const SECTION_LINKS: [(&str, &str); 4] = [
    ("#services", "Services"),
    ("#pricing", "Pricing"),
    ("#testimonials", "Testimonials"),
    ("#contact", "Contact"),
];

#[component]
pub fn Navbar(authed: bool, on_open_auth: EventHandler<()>, on_logout: EventHandler<()>) -> Element {
    let mut menu_open = use_signal(|| false);
    let show_menu = *menu_open.read();

    rsx! {
        div {
            class: "fixed top-0 left-0 right-0 z-50 backdrop-blur bg-white/70 border-b border-emerald-100",
            div {
                class: "max-w-6xl mx-auto px-4 py-3 flex items-center justify-between",
                BrandTitle {}
                div { class: "hidden md:flex items-center gap-6 text-emerald-800",
                    SectionLinks {}
                }
                div { class: "flex items-center gap-3",
                    if authed {
                        button {
                            class: "inline-flex items-center gap-2 px-3 py-2 rounded-md bg-emerald-600 text-white hover:bg-emerald-700",
                            onclick: move |_| on_logout.call(()),
                            Icon {
                                width: 16,
                                height: 16,
                                icon: FaRightFromBracket
                            }
                            "Logout"
                        }
                    } else {
                        button {
                            class: "inline-flex items-center gap-2 px-3 py-2 rounded-md border border-emerald-300 text-emerald-800 hover:bg-emerald-50",
                            onclick: move |_| on_open_auth.call(()),
                            Icon {
                                width: 16,
                                height: 16,
                                icon: FaRightToBracket
                            }
                            "Login"
                        }
                    }
                    button {
                        class: "md:hidden p-2 rounded-md border border-emerald-200",
                        aria_label: "Toggle menu",
                        onclick: move |_| menu_open.set(!show_menu),
                        Icon {
                            width: 18,
                            height: 18,
                            icon: FaBars
                        }
                    }
                }
            }
            if show_menu {
                div {
                    class: "md:hidden flex flex-col gap-3 px-4 pb-4 text-emerald-800",
                    onclick: move |_| menu_open.set(false),
                    SectionLinks {}
                }
            }
        }
    }
}

#[component]
fn SectionLinks() -> Element {
    rsx!(
        {SECTION_LINKS.iter().map(|(href, label)| rsx! {
            a {
                key: "{href}",
                href: *href,
                class: "hover:text-emerald-600",
                "{label}"
            }
        })}
    )
}
