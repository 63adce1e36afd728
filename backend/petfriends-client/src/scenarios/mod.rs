//! Conformance scenarios.
//!
//! Each scenario drives exactly one client operation and checks the
//! service's answer against the documented contract: acquire a key if the
//! operation needs one, establish precondition state if the operation
//! needs some, invoke, then check status code and body shape/content.
//!
//! Scenarios are plain async functions over an injected [`ScenarioContext`];
//! [`catalog`] exposes them as an ordered, named list so the runner and
//! the hermetic test suite execute the identical set.

pub mod auth;
pub mod creation;
pub mod listing;
pub mod mutation;

use crate::api::{IssuedKey, PetFriendsClient};
use crate::config::SuiteConfig;
use crate::error::{ClientError, ScenarioError};
use crate::fixtures::Credentials;

use common::ErrorLocation;

use std::panic::Location;
use std::path::{Path, PathBuf};

use futures_util::FutureExt;
use futures_util::future::BoxFuture;

/// Substring every plain-text rejection body carries.
pub const FORBIDDEN_MARKER: &str = "403 Forbidden";

pub type ScenarioResult = Result<(), ScenarioError>;

/// Everything a scenario needs, built once per run and injected.
///
/// The context owns the transport session for the run's lifetime; no
/// state is shared between scenarios beyond it and the remote inventory
/// itself.
pub struct ScenarioContext {
    client: PetFriendsClient,
    valid_credentials: Credentials,
    invalid_credentials: Credentials,
    pet_photo: PathBuf,
}

impl ScenarioContext {
    pub fn new(config: &SuiteConfig) -> Result<Self, ClientError> {
        let client = PetFriendsClient::new(&config.service.base_url)?;

        Ok(Self {
            client,
            valid_credentials: Credentials::from(&config.accounts.valid),
            invalid_credentials: Credentials::from(&config.accounts.invalid),
            pet_photo: config.fixtures.pet_photo.clone(),
        })
    }

    pub fn client(&self) -> &PetFriendsClient {
        &self.client
    }

    pub fn valid_credentials(&self) -> &Credentials {
        &self.valid_credentials
    }

    pub fn invalid_credentials(&self) -> &Credentials {
        &self.invalid_credentials
    }

    pub fn pet_photo(&self) -> &Path {
        &self.pet_photo
    }
}

type ScenarioFn = for<'a> fn(&'a ScenarioContext) -> BoxFuture<'a, ScenarioResult>;

/// A named entry in the conformance catalog.
pub struct Scenario {
    pub name: &'static str,
    runner: ScenarioFn,
}

impl Scenario {
    pub async fn execute(&self, context: &ScenarioContext) -> ScenarioResult {
        (self.runner)(context).await
    }
}

fn entry(name: &'static str, runner: ScenarioFn) -> Scenario {
    Scenario { name, runner }
}

/// The full scenario set, in execution order.
///
/// Mutating scenarios come after the read-only ones and rely on serial
/// execution when the runner points them at a shared live inventory.
pub fn catalog() -> Vec<Scenario> {
    vec![
        entry("api_key_issued_for_valid_account", |ctx| {
            auth::api_key_issued_for_valid_account(ctx).boxed()
        }),
        entry("api_key_rejected_for_invalid_email", |ctx| {
            auth::api_key_rejected_for_invalid_email(ctx).boxed()
        }),
        entry("api_key_rejected_for_invalid_password", |ctx| {
            auth::api_key_rejected_for_invalid_password(ctx).boxed()
        }),
        entry("api_key_rejected_for_empty_credentials", |ctx| {
            auth::api_key_rejected_for_empty_credentials(ctx).boxed()
        }),
        entry("all_pets_listed_for_valid_key", |ctx| {
            listing::all_pets_listed_for_valid_key(ctx).boxed()
        }),
        entry("listing_rejected_for_invalid_key", |ctx| {
            listing::listing_rejected_for_invalid_key(ctx).boxed()
        }),
        entry("pet_created_with_valid_data", |ctx| {
            creation::pet_created_with_valid_data(ctx).boxed()
        }),
        entry("creation_rejected_for_invalid_key", |ctx| {
            creation::creation_rejected_for_invalid_key(ctx).boxed()
        }),
        entry("creation_rejected_for_empty_name", |ctx| {
            creation::creation_rejected_for_empty_name(ctx).boxed()
        }),
        entry("creation_rejected_for_empty_animal_type", |ctx| {
            creation::creation_rejected_for_empty_animal_type(ctx).boxed()
        }),
        entry("creation_rejected_for_empty_age", |ctx| {
            creation::creation_rejected_for_empty_age(ctx).boxed()
        }),
        entry("owned_pet_deleted_with_valid_key", |ctx| {
            mutation::owned_pet_deleted_with_valid_key(ctx).boxed()
        }),
        entry("deletion_rejected_for_invalid_key", |ctx| {
            mutation::deletion_rejected_for_invalid_key(ctx).boxed()
        }),
        entry("owned_pet_updated_with_valid_data", |ctx| {
            mutation::owned_pet_updated_with_valid_data(ctx).boxed()
        }),
        entry("update_rejected_for_invalid_key", |ctx| {
            mutation::update_rejected_for_invalid_key(ctx).boxed()
        }),
    ]
}

/// Build the error for a failed conformance expectation.
#[track_caller]
pub(crate) fn check_failure(expectation: &str) -> ScenarioError {
    ScenarioError::Check {
        expectation: expectation.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}

/// Record a conformance expectation.
#[track_caller]
pub(crate) fn check(condition: bool, expectation: &str) -> ScenarioResult {
    if condition {
        Ok(())
    } else {
        Err(check_failure(expectation))
    }
}

/// Fetch a fresh auth key for the valid account.
///
/// The ambient precondition of every authenticated scenario; a key
/// endpoint that refuses the valid account fails the run here rather
/// than obscuring the scenario under test.
pub(crate) async fn obtain_auth_key(
    context: &ScenarioContext,
) -> Result<String, ScenarioError> {
    let response = context
        .client()
        .get_api_key(context.valid_credentials())
        .await?;
    check(
        response.is_ok(),
        "key endpoint answers 200 for the valid account",
    )?;

    let Some(issued) = response.body.decode::<IssuedKey>() else {
        return Err(check_failure(
            "key endpoint returns a JSON body carrying a key field",
        ));
    };
    check(!issued.key.is_empty(), "issued key is non-empty")?;

    Ok(issued.key)
}
