use cutcraft::{client::store::remote::RemoteData, model::testimonial::Testimonial};
use cutcraft_test_utils::prelude::*;
use serde_json::json;

use crate::util::{api_client, unreachable_api_client};

#[tokio::test]
/// Expect a loaded section to hold one item per array element
async fn loaded_pricing_holds_every_tier() {
    let mut test = TestSetup::new().await;
    let mock = test.with_pricing_endpoint(
        vec![
            mock_pricing_tier("Starter", 199, &["1 video"]),
            mock_pricing_tier("Growth", 499, &[]),
            mock_pricing_tier("Studio", 999, &[]),
        ],
        1,
    );

    let data = RemoteData::from_result("pricing", api_client(&test).pricing().await);

    mock.assert();
    assert_eq!(data.items().len(), 3);
    assert_eq!(data.items()[2].name, "Studio");
}

#[tokio::test]
/// Expect a failed fetch to become a visible failure rather than an empty list
async fn failed_testimonials_are_visible() {
    let mut test = TestSetup::new().await;
    let mock = test.with_json_endpoint("GET", "/testimonials", 503, &json!({}), 1);

    let data: RemoteData<Testimonial> =
        RemoteData::from_result("testimonials", api_client(&test).testimonials().await);

    mock.assert();
    assert!(matches!(data, RemoteData::Failed(_)));
}

#[tokio::test]
/// Expect an unreachable backend to become a visible failure
async fn unreachable_backend_is_visible() {
    let data = RemoteData::from_result("pricing", unreachable_api_client().pricing().await);

    match data {
        RemoteData::Failed(reason) => assert!(reason.contains("Could not reach the server")),
        other => panic!("expected failure, got {:?}", other),
    }
}
