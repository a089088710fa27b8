use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCheck;
use dioxus_free_icons::Icon;

use crate::{
    client::{api::ApiClient, components::SectionNotice, store::remote::RemoteData},
    model::pricing::PricingTier,
};

#[component]
pub fn PricingSection() -> Element {
    let api = use_context::<ApiClient>();

    // Fetched once per mount; the future is dropped with the section
    let tiers = use_resource(move || {
        let api = api.clone();
        async move { RemoteData::from_result("pricing", api.pricing().await) }
    });

    let content = match &*tiers.read_unchecked() {
        Some(RemoteData::Loaded(tiers)) => rsx!(PricingGrid { tiers: tiers.clone() }),
        Some(RemoteData::Failed(reason)) => rsx!(SectionNotice { text: reason.clone() }),
        Some(RemoteData::Loading) | None => rsx!(SectionNotice {
            text: "Loading plans…".to_string()
        }),
    };

    rsx!(
        section { id: "pricing", class: "py-20 bg-white",
            div { class: "max-w-6xl mx-auto px-4",
                h2 { class: "text-3xl font-bold text-emerald-900 text-center",
                    "Straightforward pricing"
                }
                p { class: "text-emerald-700/80 text-center mt-2",
                    "Pick a plan that fits your content goals."
                }
                {content}
            }
        }
    )
}

#[component]
pub fn PricingGrid(tiers: Vec<PricingTier>) -> Element {
    rsx!(
        div { class: "mt-10 grid md:grid-cols-3 gap-6",
            {tiers.iter().enumerate().map(|(i, tier)| rsx! {
                PricingCard { key: "{i}", tier: tier.clone() }
            })}
        }
    )
}

#[component]
pub fn PricingCard(tier: PricingTier) -> Element {
    let price = tier.display_price();
    let choose_label = tier.choose_label();

    rsx!(
        div {
            class: "pricing-card rounded-xl border border-emerald-100 p-6 shadow-sm hover:shadow-md transition bg-gradient-to-b from-emerald-50 to-white",
            div { class: "text-sm uppercase tracking-wider text-emerald-700",
                "{tier.name}"
            }
            div { class: "mt-2 text-4xl font-extrabold text-emerald-900",
                "{price}"
            }
            p { class: "mt-2 text-emerald-700/80",
                "{tier.description}"
            }
            ul { class: "mt-4 space-y-2",
                {tier.features.iter().enumerate().map(|(i, feature)| rsx! {
                    li {
                        key: "{i}",
                        class: "flex items-center gap-2 text-emerald-800",
                        span { class: "text-emerald-500",
                            Icon {
                                width: 18,
                                height: 18,
                                icon: FaCheck
                            }
                        }
                        "{feature}"
                    }
                })}
            }
            a {
                href: "#contact",
                class: "block text-center mt-6 w-full px-4 py-2 rounded-lg bg-orange-500 text-white hover:bg-orange-600",
                "{choose_label}"
            }
        }
    )
}
