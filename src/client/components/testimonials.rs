use dioxus::prelude::*;

use crate::{
    client::{api::ApiClient, components::SectionNotice, store::remote::RemoteData},
    model::testimonial::Testimonial,
};

#[component]
pub fn TestimonialsSection() -> Element {
    let api = use_context::<ApiClient>();

    let testimonials = use_resource(move || {
        let api = api.clone();
        async move { RemoteData::from_result("testimonials", api.testimonials().await) }
    });

    let content = match &*testimonials.read_unchecked() {
        Some(RemoteData::Loaded(items)) => rsx!(TestimonialGrid {
            testimonials: items.clone()
        }),
        Some(RemoteData::Failed(reason)) => rsx!(SectionNotice { text: reason.clone() }),
        Some(RemoteData::Loading) | None => rsx!(SectionNotice {
            text: "Loading testimonials…".to_string()
        }),
    };

    rsx!(
        section { id: "testimonials", class: "py-20 bg-emerald-50",
            div { class: "max-w-6xl mx-auto px-4",
                h2 { class: "text-3xl font-bold text-emerald-900 text-center",
                    "What clients say"
                }
                {content}
            }
        }
    )
}

#[component]
pub fn TestimonialGrid(testimonials: Vec<Testimonial>) -> Element {
    rsx!(
        div { class: "mt-10 grid md:grid-cols-3 gap-6",
            {testimonials.iter().enumerate().map(|(i, testimonial)| rsx! {
                div {
                    key: "{i}",
                    class: "testimonial-card rounded-xl bg-white p-6 border border-emerald-100 shadow-sm",
                    div { class: "flex items-center gap-3",
                        div { class: "h-10 w-10 rounded-full bg-gradient-to-br from-orange-300 to-emerald-300" }
                        div {
                            div { class: "font-semibold text-emerald-900",
                                "{testimonial.name}"
                            }
                            div { class: "text-sm text-emerald-700/80",
                                "{testimonial.role}"
                            }
                        }
                    }
                    p { class: "mt-4 text-emerald-800",
                        "“{testimonial.quote}”"
                    }
                }
            })}
        }
    )
}
