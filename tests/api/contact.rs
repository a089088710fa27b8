use cutcraft::{client::error::ApiError, model::contact::ContactMessage};
use cutcraft_test_utils::prelude::*;
use serde_json::json;

use crate::util::{api_client, unreachable_api_client};

fn message() -> ContactMessage {
    ContactMessage {
        name: "Ana".to_string(),
        email: TEST_EMAIL.to_string(),
        message: "Need a launch trailer".to_string(),
    }
}

fn message_json() -> serde_json::Value {
    json!({
        "name": "Ana",
        "email": TEST_EMAIL,
        "message": "Need a launch trailer",
    })
}

#[tokio::test]
/// Expect Ok when the backend answers `{"ok": true}` to the JSON body
async fn sends_json_and_accepts_ok() {
    let mut test = TestSetup::new().await;
    let mock = test.with_contact_endpoint(&message_json(), true, 1);

    let result = api_client(&test).send_contact(&message()).await;

    mock.assert();
    assert!(result.is_ok());
}

#[tokio::test]
/// Expect Rejected when the backend answers `{"ok": false}`
async fn rejects_ok_false() {
    let mut test = TestSetup::new().await;
    let mock = test.with_contact_endpoint(&message_json(), false, 1);

    let result = api_client(&test).send_contact(&message()).await;

    mock.assert();
    assert!(matches!(result, Err(ApiError::Rejected)));
}

#[tokio::test]
/// Expect Rejected when the acknowledgement has no `ok` field
async fn rejects_missing_ok() {
    let mut test = TestSetup::new().await;
    let mock = test.with_json_endpoint("POST", "/contact", 200, &json!({}), 1);

    let result = api_client(&test).send_contact(&message()).await;

    mock.assert();
    assert!(matches!(result, Err(ApiError::Rejected)));
}

#[tokio::test]
/// Expect the validation detail to be kept for a 422 response
async fn keeps_detail_on_validation_error() {
    let mut test = TestSetup::new().await;
    let mock = test.with_json_endpoint(
        "POST",
        "/contact",
        422,
        &json!({ "detail": "Email is not valid" }),
        1,
    );

    let result = api_client(&test).send_contact(&message()).await;

    mock.assert();
    match result {
        Err(ApiError::Status { status, detail }) => {
            assert_eq!(status, 422);
            assert_eq!(detail.as_deref(), Some("Email is not valid"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
/// Expect a request error when nothing is listening
async fn fails_when_backend_unreachable() {
    let result = unreachable_api_client().send_contact(&message()).await;

    assert!(matches!(result, Err(ApiError::Request(_))));
}
