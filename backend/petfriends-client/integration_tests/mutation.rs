// Update and delete conformance

use crate::support::TestHarness;

use petfriends_client::scenarios::mutation;

/// **VALUE**: On a fresh double the account owns nothing, so this
/// exercises the idempotent precondition (create one, re-query) before
/// the deletion itself.
#[tokio::test]
async fn given_no_owned_pets_when_deleting_then_precondition_provisions_one() {
    let harness = TestHarness::start().await;
    let auth_key = harness.service.valid_auth_key();
    assert_eq!(harness.service.owned_pet_count(&auth_key), 0);

    mutation::owned_pet_deleted_with_valid_key(harness.context())
        .await
        .expect("deletion should provision a pet, delete it, and verify absence");

    assert_eq!(
        harness.service.owned_pet_count(&auth_key),
        0,
        "the provisioned pet should be gone again"
    );
}

#[tokio::test]
async fn given_unissued_key_when_deleting_then_pet_survives() {
    let harness = TestHarness::start().await;

    mutation::deletion_rejected_for_invalid_key(harness.context())
        .await
        .expect("deletion with an unissued key should be refused");

    let auth_key = harness.service.valid_auth_key();
    assert_eq!(
        harness.service.owned_pet_count(&auth_key),
        1,
        "the provisioned pet should still exist"
    );
}

#[tokio::test]
async fn given_owned_pet_when_updating_then_new_name_is_echoed() {
    let harness = TestHarness::start().await;

    mutation::owned_pet_updated_with_valid_data(harness.context())
        .await
        .expect("update should succeed and echo the new name");
}

/// Second run hits the already-provisioned fast path of the
/// precondition instead of creating another pet.
#[tokio::test]
async fn given_repeated_update_scenario_when_run_twice_then_both_pass() {
    let harness = TestHarness::start().await;
    let auth_key = harness.service.valid_auth_key();

    mutation::owned_pet_updated_with_valid_data(harness.context())
        .await
        .expect("first update should pass");
    mutation::owned_pet_updated_with_valid_data(harness.context())
        .await
        .expect("second update should pass");

    assert_eq!(
        harness.service.owned_pet_count(&auth_key),
        1,
        "precondition must not provision a second pet"
    );
}

#[tokio::test]
async fn given_unissued_key_when_updating_then_rejected() {
    let harness = TestHarness::start().await;

    mutation::update_rejected_for_invalid_key(harness.context())
        .await
        .expect("update with an unissued key should be refused");
}
