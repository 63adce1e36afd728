//! Key issuance scenarios.

use super::{ScenarioContext, ScenarioResult, check};
use crate::api::IssuedKey;
use crate::fixtures::Credentials;

use common::HttpStatusCode;

/// A recognized account receives a usable key.
pub async fn api_key_issued_for_valid_account(
    context: &ScenarioContext,
) -> ScenarioResult {
    let response = context
        .client()
        .get_api_key(context.valid_credentials())
        .await?;

    check(
        response.status == HttpStatusCode::OK,
        "valid credentials are answered with 200",
    )?;
    match response.body.decode::<IssuedKey>() {
        Some(issued) => check(!issued.key.is_empty(), "issued key is non-empty"),
        None => check(false, "success body is JSON carrying a key field"),
    }
}

/// An email the service does not recognize is refused.
pub async fn api_key_rejected_for_invalid_email(
    context: &ScenarioContext,
) -> ScenarioResult {
    let credentials = Credentials::new(
        context.invalid_credentials().email(),
        context.valid_credentials().password().as_str(),
    );
    expect_key_rejected(context, &credentials, "an unknown email").await
}

/// A wrong password for a known email is refused.
pub async fn api_key_rejected_for_invalid_password(
    context: &ScenarioContext,
) -> ScenarioResult {
    let credentials = Credentials::new(
        context.valid_credentials().email(),
        context.invalid_credentials().password().as_str(),
    );
    expect_key_rejected(context, &credentials, "a wrong password").await
}

/// Entirely empty credentials are refused, not crashed on.
pub async fn api_key_rejected_for_empty_credentials(
    context: &ScenarioContext,
) -> ScenarioResult {
    expect_key_rejected(context, &Credentials::empty(), "empty credentials").await
}

async fn expect_key_rejected(
    context: &ScenarioContext,
    credentials: &Credentials,
    label: &str,
) -> ScenarioResult {
    let response = context.client().get_api_key(credentials).await?;

    check(
        response.status == HttpStatusCode::FORBIDDEN,
        &format!("{label} is answered with 403"),
    )?;
    check(
        response.body.field("key").is_none(),
        &format!("the rejection for {label} carries no key"),
    )
}
