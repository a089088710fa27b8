use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{
    components::{
        AuthModal, ContactSection, Footer, Hero, Navbar, PricingSection, Services,
        TestimonialsSection,
    },
    store::{auth::AuthDialog, session::Session, storage::platform_storage},
};

/// The landing page.
///
/// Owns the session and the auth dialog; every other section is either static
/// or keeps its own local state.
#[component]
pub fn Home() -> Element {
    let mut session = use_signal(|| Session::restore(platform_storage()));
    let mut auth_dialog = use_signal(AuthDialog::default);

    let authed = session.read().is_authenticated();

    rsx!(
        Title { "CutCraft Studio | Video editing that converts" }
        Meta {
            name: "description",
            content: "Clean, conversion-focused video editing for brands, creators, and startups."
        }
        div { id: "top", class: "min-h-screen bg-white text-emerald-900",
            Navbar {
                authed,
                on_open_auth: move |_| auth_dialog.write().open(),
                on_logout: move |_| {
                    // Failure is logged by Session::end
                    let _ = session.write().end();
                },
            }
            Hero {}
            Services {}
            PricingSection {}
            TestimonialsSection {}
            ContactSection {}
            Footer {}
            AuthModal {
                dialog: auth_dialog,
                session,
                on_close: move |_| auth_dialog.write().close(),
            }
        }
    )
}
