use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaEnvelope, FaPlay, FaShieldHalved, FaStar};
use dioxus_free_icons::Icon;

#[component]
pub fn Hero() -> Element {
    rsx!(
        section { class: "pt-28 bg-gradient-to-b from-emerald-50 to-orange-50",
            div { class: "max-w-6xl mx-auto px-4 py-16 grid md:grid-cols-2 gap-10 items-center",
                div {
                    h1 { class: "text-4xl md:text-5xl font-extrabold text-emerald-900 leading-tight fade-in",
                        "Video edits that turn views into value"
                    }
                    p { class: "mt-4 text-emerald-800/80",
                        "Clean, conversion-focused editing for brands, creators, and startups. From snappy shorts to cinematic ads, we cut what matters."
                    }
                    div { class: "mt-6 flex flex-wrap gap-3",
                        a {
                            href: "#pricing",
                            class: "inline-flex items-center gap-2 px-4 py-3 rounded-lg bg-emerald-600 text-white hover:bg-emerald-700",
                            Icon {
                                width: 18,
                                height: 18,
                                icon: FaPlay
                            }
                            "Explore Plans"
                        }
                        a {
                            href: "#contact",
                            class: "inline-flex items-center gap-2 px-4 py-3 rounded-lg bg-white border border-orange-300 text-orange-700 hover:bg-orange-50",
                            Icon {
                                width: 18,
                                height: 18,
                                icon: FaEnvelope
                            }
                            "Get a Quote"
                        }
                    }
                    div { class: "mt-6 flex items-center gap-6 text-sm text-emerald-700",
                        div { class: "inline-flex items-center gap-2",
                            span { class: "text-emerald-500",
                                Icon {
                                    width: 16,
                                    height: 16,
                                    icon: FaShieldHalved
                                }
                            }
                            "NDA available"
                        }
                        div { class: "inline-flex items-center gap-2",
                            span { class: "text-orange-500",
                                Icon {
                                    width: 16,
                                    height: 16,
                                    icon: FaStar
                                }
                            }
                            "4.9 average rating"
                        }
                    }
                }
                div { class: "relative fade-in",
                    div { class: "aspect-video rounded-xl bg-gradient-to-br from-emerald-200 to-orange-200 shadow-lg" }
                    div { class: "absolute -bottom-5 -right-5 bg-white/80 backdrop-blur px-4 py-3 rounded-lg shadow border border-emerald-100 text-emerald-900",
                        div { class: "text-xs uppercase tracking-wider text-emerald-600",
                            "Turnaround"
                        }
                        div { class: "font-semibold",
                            "48 hours"
                        }
                    }
                }
            }
        }
    )
}
