//! Listing scenarios.

use super::{FORBIDDEN_MARKER, ScenarioContext, ScenarioResult, check, obtain_auth_key};
use crate::api::{PetFilter, PetList};
use crate::fixtures;

use common::HttpStatusCode;

/// With a valid key the global listing is answered and non-empty.
///
/// Relies on the service holding at least one pet globally, which the
/// creation scenarios guarantee over a full run.
pub async fn all_pets_listed_for_valid_key(context: &ScenarioContext) -> ScenarioResult {
    let auth_key = obtain_auth_key(context).await?;
    let response = context
        .client()
        .get_list_of_pets(&auth_key, PetFilter::All)
        .await?;

    check(
        response.status == HttpStatusCode::OK,
        "listing with a valid key is answered with 200",
    )?;
    match response.body.decode::<PetList>() {
        Some(list) => check(!list.is_empty(), "global pet listing is non-empty"),
        None => check(false, "listing body is JSON carrying a pets sequence"),
    }
}

/// An unissued key is refused. The service has been observed answering
/// either with an empty listing or with the plain-text refusal, so both
/// shapes pass - anything else fails.
pub async fn listing_rejected_for_invalid_key(context: &ScenarioContext) -> ScenarioResult {
    let response = context
        .client()
        .get_list_of_pets(&fixtures::invalid_auth_key(), PetFilter::All)
        .await?;

    check(
        response.status == HttpStatusCode::FORBIDDEN,
        "listing with an unissued key is answered with 403",
    )?;

    let acceptable = match response.body.decode::<PetList>() {
        Some(list) => list.is_empty(),
        None => response.body.text_contains(FORBIDDEN_MARKER),
    };
    check(
        acceptable,
        "rejection body is an empty listing or names 403 Forbidden",
    )
}
