// Listing conformance

use crate::support::TestHarness;

use petfriends_client::api::{PetFilter, PetList};
use petfriends_client::scenarios::listing;

#[tokio::test]
async fn given_valid_key_when_listing_all_then_listing_is_non_empty() {
    let harness = TestHarness::start().await;

    listing::all_pets_listed_for_valid_key(harness.context())
        .await
        .expect("global listing should be answered and non-empty");
}

#[tokio::test]
async fn given_unissued_key_when_listing_then_rejected() {
    let harness = TestHarness::start().await;

    listing::listing_rejected_for_invalid_key(harness.context())
        .await
        .expect("unissued key should be refused with 403");
}

/// **VALUE**: Verifies the filter actually narrows the listing.
///
/// **WHY THIS MATTERS**: The owned filter is what every mutation
/// scenario selects its victim from. If `my_pets` quietly returned the
/// global listing, delete/update scenarios would operate on foreign
/// pets and the round-trip checks would test the wrong inventory.
#[tokio::test]
async fn given_foreign_pets_when_listing_owned_then_they_are_excluded() {
    let harness = TestHarness::start().await;
    let auth_key = harness.service.valid_auth_key();
    let client = harness.context().client();

    let all = client
        .get_list_of_pets(&auth_key, PetFilter::All)
        .await
        .expect("transport should succeed")
        .body
        .decode::<PetList>()
        .expect("global listing should be JSON");
    assert_eq!(all.len(), 1, "double seeds exactly one foreign pet");

    let owned = client
        .get_list_of_pets(&auth_key, PetFilter::Owned)
        .await
        .expect("transport should succeed")
        .body
        .decode::<PetList>()
        .expect("owned listing should be JSON");
    assert!(owned.is_empty(), "fresh account owns nothing");
}
