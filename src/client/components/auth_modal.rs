use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaRightToBracket, FaXmark};
use dioxus_free_icons::Icon;

use crate::client::{
    api::ApiClient,
    store::{auth::AuthDialog, session::Session},
};

/// Login/register modal.
///
/// Successful submits establish `session` and close the dialog; failures stay
/// open with the error shown above the form.
#[component]
pub fn AuthModal(
    dialog: Signal<AuthDialog>,
    session: Signal<Session>,
    on_close: EventHandler<()>,
) -> Element {
    let api = use_context::<ApiClient>();
    let mut dialog = dialog;
    let mut session = session;

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();

        async move {
            let Some(request) = dialog.write().begin_submit() else {
                return;
            };

            let result = api.authenticate(request.mode, &request.credentials).await;
            dialog
                .write()
                .settle(request.id, result, &mut session.write());
        }
    };

    if !dialog.read().is_open() {
        return rsx! {};
    }

    let fields = dialog.read().form().clone();
    let title = fields.title();
    let submit_label = fields.submit_label();
    let toggle_label = fields.toggle_label();

    rsx!(
        div { class: "fixed inset-0 z-50 bg-black/30 backdrop-blur grid place-items-center",
            div { class: "w-full max-w-md bg-white rounded-xl p-6 border border-emerald-100 shadow-lg",
                div { class: "flex items-center justify-between",
                    h3 { class: "text-xl font-semibold text-emerald-900",
                        "{title}"
                    }
                    button {
                        class: "p-1 rounded-md text-emerald-700 hover:bg-emerald-50",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaXmark
                        }
                    }
                }
                if let Some(error) = fields.error.as_ref() {
                    div { class: "mt-3 px-3 py-2 rounded-md bg-orange-50 text-orange-700 text-sm",
                        "{error}"
                    }
                }
                form { class: "mt-4 grid gap-3", onsubmit,
                    input {
                        r#type: "email",
                        placeholder: "Email",
                        class: "px-4 py-3 rounded-lg border border-emerald-200",
                        value: "{fields.email}",
                        oninput: move |evt| dialog.write().form_mut().email = evt.value(),
                    }
                    input {
                        r#type: "password",
                        placeholder: "Password",
                        class: "px-4 py-3 rounded-lg border border-emerald-200",
                        value: "{fields.password}",
                        oninput: move |evt| dialog.write().form_mut().password = evt.value(),
                    }
                    button {
                        disabled: fields.loading,
                        class: "mt-2 px-4 py-3 rounded-lg bg-orange-500 text-white hover:bg-orange-600 disabled:opacity-60 inline-flex items-center gap-2",
                        Icon {
                            width: 18,
                            height: 18,
                            icon: FaRightToBracket
                        }
                        "{submit_label}"
                    }
                }
                div { class: "mt-3 text-sm text-emerald-700",
                    button {
                        class: "underline",
                        onclick: move |_| dialog.write().form_mut().toggle_mode(),
                        "{toggle_label}"
                    }
                }
            }
        }
    )
}
