use cutcraft_test_utils::prelude::*;
use serde_json::json;

use crate::util::api_client;

#[tokio::test]
/// Expect testimonials in the order the backend sent them
async fn returns_testimonials_in_order() {
    let mut test = TestSetup::new().await;
    let mock = test.with_testimonials_endpoint(
        vec![
            mock_testimonial("Maya", "Founder, Loop", "Doubled our watch time."),
            mock_testimonial("Jon", "YouTuber", "Fast and painless."),
        ],
        1,
    );

    let testimonials = api_client(&test).testimonials().await.unwrap();

    mock.assert();
    assert_eq!(testimonials.len(), 2);
    assert_eq!(testimonials[0].name, "Maya");
    assert_eq!(testimonials[1].quote, "Fast and painless.");
}

#[tokio::test]
/// Expect missing fields to decode as empty strings
async fn decodes_partial_testimonial() {
    let mut test = TestSetup::new().await;
    let mock = test.with_testimonials_endpoint(vec![json!({ "quote": "Great." })], 1);

    let testimonials = api_client(&test).testimonials().await.unwrap();

    mock.assert();
    assert_eq!(testimonials[0].quote, "Great.");
    assert!(testimonials[0].role.is_empty());
}
