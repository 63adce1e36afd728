// Pet creation conformance

use crate::support::TestHarness;

use petfriends_client::api::PetFriendsClient;
use petfriends_client::error::ApiError;
use petfriends_client::fixtures;
use petfriends_client::scenarios::creation;

use std::path::Path;

#[tokio::test]
async fn given_valid_data_when_creating_then_pet_round_trips() {
    let harness = TestHarness::start().await;

    creation::pet_created_with_valid_data(harness.context())
        .await
        .expect("creation should succeed and appear in the owned listing");
}

#[tokio::test]
async fn given_unissued_key_when_creating_then_rejected() {
    let harness = TestHarness::start().await;

    creation::creation_rejected_for_invalid_key(harness.context())
        .await
        .expect("creation with an unissued key should be refused");
}

#[tokio::test]
async fn given_empty_name_when_creating_then_rejected() {
    let harness = TestHarness::start().await;

    creation::creation_rejected_for_empty_name(harness.context())
        .await
        .expect("creation with an empty name should be refused");
}

#[tokio::test]
async fn given_empty_animal_type_when_creating_then_rejected() {
    let harness = TestHarness::start().await;

    creation::creation_rejected_for_empty_animal_type(harness.context())
        .await
        .expect("creation with an empty animal type should be refused");
}

#[tokio::test]
async fn given_empty_age_when_creating_then_rejected() {
    let harness = TestHarness::start().await;

    creation::creation_rejected_for_empty_age(harness.context())
        .await
        .expect("creation with an empty age should be refused");
}

/// **VALUE**: Verifies against the double's ground truth (not its HTTP
/// surface) that a refused creation mutated nothing.
///
/// **WHY THIS MATTERS**: The scenario itself can only observe the
/// inventory through listings; this test closes the loop on the
/// state-unchanged property by reading the double's actual store.
#[tokio::test]
async fn given_unissued_key_when_creating_then_inventory_untouched() {
    let harness = TestHarness::start().await;
    let before = harness.service.total_pet_count();

    let response = harness
        .context()
        .client()
        .add_new_pet(
            &fixtures::invalid_auth_key(),
            "Барбоскин",
            "двортерьер",
            "4",
            harness.context().pet_photo(),
        )
        .await
        .expect("transport should succeed");

    assert!(response.is_forbidden());
    assert_eq!(harness.service.total_pet_count(), before);
}

/// An unreadable photo fixture aborts the scenario before the wire -
/// the unexpected-failure class, distinct from a failed check.
#[tokio::test]
async fn given_missing_photo_when_creating_then_photo_error() {
    let harness = TestHarness::start().await;
    let client = PetFriendsClient::new(&harness.service.uri())
        .expect("client should build");

    let result = client
        .add_new_pet(
            &harness.service.valid_auth_key(),
            "Барбоскин",
            "двортерьер",
            "4",
            Path::new("no/such/photo.jpg"),
        )
        .await;

    assert!(matches!(result, Err(ApiError::Photo { .. })));
}

/// A dead endpoint surfaces as a transport error, not as a response.
#[tokio::test]
async fn given_unreachable_service_when_calling_then_http_error() {
    let harness = TestHarness::start().await;
    // Port 9 (discard) is not listening.
    let client = PetFriendsClient::new("http://127.0.0.1:9/").expect("client should build");

    let result = client
        .get_api_key(harness.context().valid_credentials())
        .await;

    assert!(matches!(result, Err(ApiError::Http { .. })));
}
