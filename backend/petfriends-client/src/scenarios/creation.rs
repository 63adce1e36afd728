//! Pet creation scenarios.

use super::{
    ScenarioContext, ScenarioResult, check, check_failure, obtain_auth_key,
};
use crate::api::{Pet, PetFilter, PetList};
use crate::error::ScenarioError;
use crate::fixtures;

use common::HttpStatusCode;

const FIXTURE_NAME: &str = "Барбоскин";
const FIXTURE_TYPE: &str = "двортерьер";
const FIXTURE_AGE: &str = "4";

/// Valid data creates a pet whose name is echoed back, and the new pet
/// is immediately visible in the owned listing (round-trip).
pub async fn pet_created_with_valid_data(context: &ScenarioContext) -> ScenarioResult {
    let auth_key = obtain_auth_key(context).await?;

    let response = context
        .client()
        .add_new_pet(
            &auth_key,
            FIXTURE_NAME,
            FIXTURE_TYPE,
            FIXTURE_AGE,
            context.pet_photo(),
        )
        .await?;

    check(
        response.status == HttpStatusCode::OK,
        "creation with valid data is answered with 200",
    )?;
    let Some(created) = response.body.decode::<Pet>() else {
        return check(false, "creation body is the created pet");
    };
    check(
        created.name == FIXTURE_NAME,
        "created pet echoes the submitted name",
    )?;

    let listing = context
        .client()
        .get_list_of_pets(&auth_key, PetFilter::Owned)
        .await?;
    match listing.body.decode::<PetList>() {
        Some(owned) => check(
            owned.contains_id(&created.id),
            "owned listing contains the new pet",
        ),
        None => check(false, "owned listing body is JSON after a creation"),
    }
}

/// With an unissued key creation is refused and the inventory stays as
/// it was - observed through the owned listing before and after.
pub async fn creation_rejected_for_invalid_key(
    context: &ScenarioContext,
) -> ScenarioResult {
    let auth_key = obtain_auth_key(context).await?;
    let before = owned_pet_count(context, &auth_key).await?;

    let response = context
        .client()
        .add_new_pet(
            &fixtures::invalid_auth_key(),
            FIXTURE_NAME,
            FIXTURE_TYPE,
            FIXTURE_AGE,
            context.pet_photo(),
        )
        .await?;

    check(
        response.status == HttpStatusCode::FORBIDDEN,
        "creation with an unissued key is answered with 403",
    )?;
    let echoed = response
        .body
        .decode::<Pet>()
        .map(|pet| pet.name == FIXTURE_NAME)
        .unwrap_or(false);
    check(!echoed, "rejection body is not the created pet")?;

    let after = owned_pet_count(context, &auth_key).await?;
    check(
        before == after,
        "refused creation leaves the inventory unchanged",
    )
}

/// A pet without a name is refused.
pub async fn creation_rejected_for_empty_name(
    context: &ScenarioContext,
) -> ScenarioResult {
    expect_payload_rejected(context, "", FIXTURE_TYPE, FIXTURE_AGE, "an empty name").await
}

/// A pet without an animal type is refused.
pub async fn creation_rejected_for_empty_animal_type(
    context: &ScenarioContext,
) -> ScenarioResult {
    expect_payload_rejected(context, FIXTURE_NAME, "", FIXTURE_AGE, "an empty animal type")
        .await
}

/// A pet without an age is refused.
pub async fn creation_rejected_for_empty_age(
    context: &ScenarioContext,
) -> ScenarioResult {
    expect_payload_rejected(context, FIXTURE_NAME, FIXTURE_TYPE, "", "an empty age").await
}

async fn expect_payload_rejected(
    context: &ScenarioContext,
    name: &str,
    animal_type: &str,
    age: &str,
    label: &str,
) -> ScenarioResult {
    let auth_key = obtain_auth_key(context).await?;

    let response = context
        .client()
        .add_new_pet(&auth_key, name, animal_type, age, context.pet_photo())
        .await?;

    check(
        response.status == HttpStatusCode::FORBIDDEN,
        &format!("creation with {label} is answered with 403"),
    )?;
    let echoed = response
        .body
        .decode::<Pet>()
        .map(|pet| pet.name == name)
        .unwrap_or(false);
    check(!echoed, &format!("no pet is created for {label}"))
}

async fn owned_pet_count(
    context: &ScenarioContext,
    auth_key: &str,
) -> Result<usize, ScenarioError> {
    let response = context
        .client()
        .get_list_of_pets(auth_key, PetFilter::Owned)
        .await?;
    match response.body.decode::<PetList>() {
        Some(list) => Ok(list.len()),
        None => Err(check_failure("owned listing body is JSON for a valid key")),
    }
}
