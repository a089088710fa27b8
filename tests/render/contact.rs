use cutcraft::client::{
    components::contact::{ContactStatusMessage, ContactStatusMessageProps},
    store::contact::ContactStatus,
};
use dioxus::prelude::*;

fn render_status(status: ContactStatus) -> String {
    let mut dom = VirtualDom::new_with_props(
        ContactStatusMessage,
        ContactStatusMessageProps::builder().status(status).build(),
    );
    dom.rebuild_in_place();

    dioxus_ssr::render(&dom)
}

#[test]
/// Expect the thank-you message after a successful send
fn sent_shows_thanks() {
    assert!(render_status(ContactStatus::Sent).contains("Thanks! We’ll get back within 24h."));
}

#[test]
/// Expect the generic error message after a failed send
fn error_shows_retry_hint() {
    let html = render_status(ContactStatus::Error);

    assert!(html.contains("Something went wrong. Try again."));
    assert!(html.contains("text-orange-700"));
}

#[test]
/// Expect nothing before the first submit
fn idle_shows_nothing() {
    let html = render_status(ContactStatus::Idle);

    assert!(!html.contains("Thanks"));
    assert!(!html.contains("Something went wrong"));
}
