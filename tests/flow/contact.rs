use cutcraft::client::store::contact::{ContactForm, ContactStatus};
use cutcraft_test_utils::prelude::*;
use serde_json::json;

use crate::util::{api_client, unreachable_api_client};

fn filled_form() -> ContactForm {
    ContactForm {
        name: "Ana".to_string(),
        email: TEST_EMAIL.to_string(),
        message: "Need a launch trailer".to_string(),
        status: ContactStatus::Idle,
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
/// Expect `{"ok": true}` to end in Sent with the fields kept
async fn ok_true_marks_sent() {
    let mut test = TestSetup::new().await;
    let mock = test.with_contact_endpoint(&message_json(), true, 1);
    let api = api_client(&test);
    let mut form = filled_form();

    let message = form.begin_submit();
    assert_eq!(form.status, ContactStatus::Sending);
    form.settle(api.send_contact(&message).await);

    mock.assert();
    assert_eq!(form.status, ContactStatus::Sent);
    assert_eq!(form.message, "Need a launch trailer");
}

#[tokio::test]
/// Expect `{"ok": false}` to end in Error
async fn ok_false_marks_error() {
    let mut test = TestSetup::new().await;
    let mock = test.with_contact_endpoint(&message_json(), false, 1);
    let api = api_client(&test);
    let mut form = filled_form();

    let message = form.begin_submit();
    form.settle(api.send_contact(&message).await);

    mock.assert();
    assert_eq!(form.status, ContactStatus::Error);
}

#[tokio::test]
/// Expect a network failure to end in Error
async fn network_failure_marks_error() {
    let api = unreachable_api_client();
    let mut form = filled_form();

    let message = form.begin_submit();
    form.settle(api.send_contact(&message).await);

    assert_eq!(form.status, ContactStatus::Error);
}

#[tokio::test]
/// Expect two submits before any response to send two messages
async fn duplicate_submissions_are_sent() {
    let mut test = TestSetup::new().await;
    let mock = test.with_contact_endpoint(&message_json(), true, 2);
    let api = api_client(&test);
    let mut form = filled_form();

    let first = form.begin_submit();
    let second = form.begin_submit();
    let (first_result, second_result) =
        tokio::join!(api.send_contact(&first), api.send_contact(&second));
    form.settle(first_result);
    form.settle(second_result);

    mock.assert();
    assert_eq!(form.status, ContactStatus::Sent);
}
