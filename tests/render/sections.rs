use std::time::Duration;

use cutcraft::client::{
    api::ApiClient,
    components::{PricingSection, TestimonialsSection},
    config::Config,
};
use cutcraft_test_utils::prelude::*;
use dioxus::prelude::*;
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    Pricing,
    Testimonials,
}

#[component]
fn SectionHarness(backend_url: String, section: Section) -> Element {
    use_context_provider(|| ApiClient::new(&Config::from_backend_url(&backend_url).unwrap()));

    match section {
        Section::Pricing => rsx!(PricingSection {}),
        Section::Testimonials => rsx!(TestimonialsSection {}),
    }
}

/// Mount `section` against the mock backend and drive it until `marker`
/// shows up, then a few rounds more so any repeated fetch would happen.
async fn mount_until(test: &TestSetup, section: Section, marker: &str) -> String {
    let mut dom = VirtualDom::new_with_props(
        SectionHarness,
        SectionHarnessProps::builder()
            .backend_url(test.url())
            .section(section)
            .build(),
    );
    dom.rebuild_in_place();

    let mut extra_rounds = 3;
    for _ in 0..100 {
        if dioxus_ssr::render(&dom).contains(marker) {
            if extra_rounds == 0 {
                break;
            }
            extra_rounds -= 1;
        }

        let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
        dom.render_immediate_to_vec();
    }

    dioxus_ssr::render(&dom)
}

#[tokio::test]
/// Expect a single GET on mount and one card per tier
async fn pricing_section_fetches_once_and_renders_cards() {
    let mut test = TestSetup::new().await;
    let mock = test.with_pricing_endpoint(
        vec![
            mock_pricing_tier("Starter", 199, &["1 video"]),
            mock_pricing_tier("Growth", 499, &[]),
        ],
        1,
    );

    let html = mount_until(&test, Section::Pricing, "pricing-card").await;

    mock.assert();
    assert_eq!(html.matches("pricing-card").count(), 2);
    assert!(html.contains("Choose Growth"));
    assert!(!html.contains("Loading plans…"));
}

#[tokio::test]
/// Expect a failed pricing fetch to show a notice instead of cards
async fn pricing_section_shows_failure_notice() {
    let mut test = TestSetup::new().await;
    let mock = test.with_json_endpoint("GET", "/pricing", 500, &json!({}), 1);

    let notice = "The server returned an error (500).";
    let html = mount_until(&test, Section::Pricing, notice).await;

    mock.assert();
    assert!(html.contains(notice));
    assert_eq!(html.matches("pricing-card").count(), 0);
}

#[tokio::test]
/// Expect a single GET on mount and one card per testimonial
async fn testimonials_section_fetches_once_and_renders_cards() {
    let mut test = TestSetup::new().await;
    let mock = test.with_testimonials_endpoint(
        vec![mock_testimonial("Ana", "Founder", "Fast turnaround")],
        1,
    );

    let html = mount_until(&test, Section::Testimonials, "testimonial-card").await;

    mock.assert();
    assert_eq!(html.matches("testimonial-card").count(), 1);
    assert!(html.contains("“Fast turnaround”"));
}

#[tokio::test]
/// Expect a failed testimonials fetch to show a notice instead of cards
async fn testimonials_section_shows_failure_notice() {
    let mut test = TestSetup::new().await;
    let mock = test.with_json_endpoint(
        "GET",
        "/testimonials",
        503,
        &json!({"detail": "Testimonials are offline"}),
        1,
    );

    let html = mount_until(&test, Section::Testimonials, "Testimonials are offline").await;

    mock.assert();
    assert!(html.contains("Testimonials are offline"));
    assert_eq!(html.matches("testimonial-card").count(), 0);
}
