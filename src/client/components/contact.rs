use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaEnvelope;
use dioxus_free_icons::Icon;

use crate::client::{
    api::ApiClient,
    store::contact::{ContactForm, ContactStatus},
};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg border border-emerald-200 focus:outline-none focus:ring-2 focus:ring-emerald-400";

#[component]
pub fn ContactSection() -> Element {
    let api = use_context::<ApiClient>();
    let mut contact = use_signal(ContactForm::default);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();

        async move {
            let message = contact.write().begin_submit();
            let result = api.send_contact(&message).await;
            contact.write().settle(result);
        }
    };

    let fields = contact.read().clone();

    rsx!(
        section { id: "contact", class: "py-20 bg-white",
            div { class: "max-w-3xl mx-auto px-4",
                h2 { class: "text-3xl font-bold text-emerald-900 text-center",
                    "Tell us about your project"
                }
                form { class: "mt-8 grid gap-4", onsubmit,
                    input {
                        class: INPUT_CLASS,
                        placeholder: "Your name",
                        value: "{fields.name}",
                        oninput: move |evt| contact.write().name = evt.value(),
                    }
                    input {
                        r#type: "email",
                        class: INPUT_CLASS,
                        placeholder: "Email",
                        value: "{fields.email}",
                        oninput: move |evt| contact.write().email = evt.value(),
                    }
                    textarea {
                        rows: 5,
                        class: INPUT_CLASS,
                        placeholder: "What do you need edited?",
                        value: "{fields.message}",
                        oninput: move |evt| contact.write().message = evt.value(),
                    }
                    button { class: "px-4 py-3 rounded-lg bg-emerald-600 text-white hover:bg-emerald-700 inline-flex items-center gap-2",
                        Icon {
                            width: 18,
                            height: 18,
                            icon: FaEnvelope
                        }
                        "Send message"
                    }
                    ContactStatusMessage { status: fields.status }
                }
            }
        }
    )
}

#[component]
pub fn ContactStatusMessage(status: ContactStatus) -> Element {
    let class = match status {
        ContactStatus::Error => "text-orange-700",
        _ => "text-emerald-700",
    };

    rsx!(
        if let Some(text) = status.message() {
            div { class: class,
                "{text}"
            }
        }
    )
}
