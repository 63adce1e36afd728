// Key issuance conformance

use crate::support::TestHarness;

use petfriends_client::fixtures::Credentials;
use petfriends_client::scenarios::auth;

use common::HttpStatusCode;

/// **VALUE**: The happy path of the whole suite - a recognized account
/// gets a key every authenticated scenario depends on.
///
/// **BUG THIS CATCHES**: Credential headers renamed or dropped by the
/// client would fail here first, instead of surfacing as fifteen
/// confusing downstream failures.
#[tokio::test]
async fn given_valid_account_when_requesting_key_then_key_is_issued() {
    let harness = TestHarness::start().await;

    auth::api_key_issued_for_valid_account(harness.context())
        .await
        .expect("valid account should be issued a key");
}

#[tokio::test]
async fn given_unknown_email_when_requesting_key_then_rejected() {
    let harness = TestHarness::start().await;

    auth::api_key_rejected_for_invalid_email(harness.context())
        .await
        .expect("unknown email should be refused with 403");
}

#[tokio::test]
async fn given_wrong_password_when_requesting_key_then_rejected() {
    let harness = TestHarness::start().await;

    auth::api_key_rejected_for_invalid_password(harness.context())
        .await
        .expect("wrong password should be refused with 403");
}

#[tokio::test]
async fn given_empty_credentials_when_requesting_key_then_rejected() {
    let harness = TestHarness::start().await;

    auth::api_key_rejected_for_empty_credentials(harness.context())
        .await
        .expect("empty credentials should be refused with 403");
}

/// **VALUE**: Verifies the rejection body arrives tagged as text, not
/// JSON - the tag is the contract the scenario layer branches on.
#[tokio::test]
async fn given_rejected_request_when_inspecting_body_then_tagged_text() {
    let harness = TestHarness::start().await;
    let credentials = Credentials::new("nobody@mail.com", "wrong");

    let response = harness
        .context()
        .client()
        .get_api_key(&credentials)
        .await
        .expect("transport should succeed");

    assert_eq!(response.status, HttpStatusCode::FORBIDDEN);
    assert!(!response.body.is_json(), "rejection body should be plain text");
    assert!(response.body.text_contains("403 Forbidden"));
}
