//! Update and delete scenarios, with the shared owned-pet precondition.

use super::{
    FORBIDDEN_MARKER, ScenarioContext, ScenarioResult, check, check_failure,
    obtain_auth_key,
};
use crate::api::{Pet, PetFilter, PetList};
use crate::error::ScenarioError;
use crate::fixtures;

use common::HttpStatusCode;

const PRECONDITION_NAME: &str = "Суперкот";
const PRECONDITION_TYPE: &str = "кот";
const PRECONDITION_AGE: &str = "3";

const UPDATED_NAME: &str = "Мурзик";
const UPDATED_TYPE: &str = "Котэ";
const UPDATED_AGE: &str = "5";

/// An owned pet's info is replaced and the new name echoed back.
pub async fn owned_pet_updated_with_valid_data(
    context: &ScenarioContext,
) -> ScenarioResult {
    let auth_key = obtain_auth_key(context).await?;
    let pet = ensure_owned_pet(context, &auth_key).await?;

    let response = context
        .client()
        .update_pet_info(&auth_key, &pet.id, UPDATED_NAME, UPDATED_TYPE, UPDATED_AGE)
        .await?;

    check(
        response.status == HttpStatusCode::OK,
        "update with valid data is answered with 200",
    )?;
    match response.body.decode::<Pet>() {
        Some(updated) => check(
            updated.name == UPDATED_NAME,
            "updated pet reflects the new name",
        ),
        None => check(false, "update body is the updated pet"),
    }
}

/// An unissued key cannot update anyone's pet.
pub async fn update_rejected_for_invalid_key(
    context: &ScenarioContext,
) -> ScenarioResult {
    let auth_key = obtain_auth_key(context).await?;
    let pet = ensure_owned_pet(context, &auth_key).await?;

    let response = context
        .client()
        .update_pet_info(
            &fixtures::invalid_auth_key(),
            &pet.id,
            UPDATED_NAME,
            UPDATED_TYPE,
            UPDATED_AGE,
        )
        .await?;

    check(
        response.status == HttpStatusCode::FORBIDDEN,
        "update with an unissued key is answered with 403",
    )?;
    check(
        response.body.text_contains(FORBIDDEN_MARKER),
        "rejection body names 403 Forbidden",
    )
}

/// Deleting an owned pet succeeds and the id disappears from the owned
/// listing on the very next read.
pub async fn owned_pet_deleted_with_valid_key(
    context: &ScenarioContext,
) -> ScenarioResult {
    let auth_key = obtain_auth_key(context).await?;
    let pet = ensure_owned_pet(context, &auth_key).await?;

    let response = context.client().delete_pet(&auth_key, &pet.id).await?;
    check(
        response.status == HttpStatusCode::OK,
        "deletion of an owned pet is answered with 200",
    )?;

    let listing = context
        .client()
        .get_list_of_pets(&auth_key, PetFilter::Owned)
        .await?;
    match listing.body.decode::<PetList>() {
        Some(owned) => check(
            !owned.contains_id(&pet.id),
            "deleted pet is absent from the owned listing",
        ),
        None => check(false, "owned listing body is JSON after a deletion"),
    }
}

/// An unissued key cannot delete, and the pet survives the attempt.
pub async fn deletion_rejected_for_invalid_key(
    context: &ScenarioContext,
) -> ScenarioResult {
    let auth_key = obtain_auth_key(context).await?;
    let pet = ensure_owned_pet(context, &auth_key).await?;

    let response = context
        .client()
        .delete_pet(&fixtures::invalid_auth_key(), &pet.id)
        .await?;

    check(
        response.status == HttpStatusCode::FORBIDDEN,
        "deletion with an unissued key is answered with 403",
    )?;
    check(
        response.body.text_contains(FORBIDDEN_MARKER),
        "rejection body names 403 Forbidden",
    )?;

    let listing = context
        .client()
        .get_list_of_pets(&auth_key, PetFilter::Owned)
        .await?;
    match listing.body.decode::<PetList>() {
        Some(owned) => check(
            owned.contains_id(&pet.id),
            "refused deletion leaves the pet in place",
        ),
        None => check(false, "owned listing body is JSON after a refused deletion"),
    }
}

/// Idempotent precondition: make sure the account owns at least one pet,
/// creating a fixture pet only when the owned listing is empty.
pub(crate) async fn ensure_owned_pet(
    context: &ScenarioContext,
    auth_key: &str,
) -> Result<Pet, ScenarioError> {
    if let Some(pet) = first_owned_pet(context, auth_key).await? {
        return Ok(pet);
    }

    context
        .client()
        .add_new_pet(
            auth_key,
            PRECONDITION_NAME,
            PRECONDITION_TYPE,
            PRECONDITION_AGE,
            context.pet_photo(),
        )
        .await?;

    match first_owned_pet(context, auth_key).await? {
        Some(pet) => Ok(pet),
        None => Err(check_failure(
            "owned listing is non-empty after creating a pet",
        )),
    }
}

async fn first_owned_pet(
    context: &ScenarioContext,
    auth_key: &str,
) -> Result<Option<Pet>, ScenarioError> {
    let response = context
        .client()
        .get_list_of_pets(auth_key, PetFilter::Owned)
        .await?;
    match response.body.decode::<PetList>() {
        Some(list) => Ok(list.first().cloned()),
        None => Err(check_failure("owned listing body is JSON for a valid key")),
    }
}
