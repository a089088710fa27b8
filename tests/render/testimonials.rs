use cutcraft::{
    client::components::testimonials::{TestimonialGrid, TestimonialGridProps},
    model::testimonial::Testimonial,
};
use dioxus::prelude::*;

fn render_testimonials(testimonials: Vec<Testimonial>) -> String {
    let mut dom = VirtualDom::new_with_props(
        TestimonialGrid,
        TestimonialGridProps::builder()
            .testimonials(testimonials)
            .build(),
    );
    dom.rebuild_in_place();

    dioxus_ssr::render(&dom)
}

fn testimonial(name: &str, quote: &str) -> Testimonial {
    Testimonial {
        name: name.to_string(),
        role: "Creator".to_string(),
        quote: quote.to_string(),
    }
}

#[test]
/// Expect one card per testimonial, in backend order, with quoted text
fn renders_one_card_per_testimonial() {
    let html = render_testimonials(vec![
        testimonial("Maya", "Doubled our watch time."),
        testimonial("Jon", "Fast and painless."),
    ]);

    assert_eq!(html.matches("testimonial-card").count(), 2);
    assert!(html.find("Maya").unwrap() < html.find("Jon").unwrap());
    assert!(html.contains("“Fast and painless.”"));
    assert!(html.contains("Creator"));
}

#[test]
/// Expect no cards for an empty list
fn renders_no_cards_for_empty_list() {
    let html = render_testimonials(Vec::new());

    assert_eq!(html.matches("testimonial-card").count(), 0);
}
