//! Thin client over the PetFriends REST endpoints.
//!
//! Every operation resolves to the same uniform pair: an HTTP status code
//! and a defensively parsed body. Rejections (403) are returned as data
//! for the scenario layer to assert on; only transport-level failures
//! become errors.

mod models;
mod response;

pub use models::{IssuedKey, Pet, PetList};
pub use response::{ApiResponse, ResponseBody};

use crate::error::ApiError;
use crate::fixtures::Credentials;

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use log::debug;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);

const API_KEY_ENDPOINT: &str = "api/key";
const PETS_ENDPOINT: &str = "api/pets";

const EMAIL_HEADER_KEY: &str = "email";
const PASSWORD_HEADER_KEY: &str = "password";
const AUTH_KEY_HEADER_KEY: &str = "auth_key";

const FILTER_QUERY_KEY: &str = "filter";
const PHOTO_PART_NAME: &str = "pet_photo";

/// Which slice of the inventory a listing request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetFilter {
    /// Every pet the service knows about (`filter=`).
    All,
    /// Only pets owned by the authenticated account (`filter=my_pets`).
    Owned,
}

impl PetFilter {
    pub fn query_value(&self) -> &'static str {
        match self {
            PetFilter::All => "",
            PetFilter::Owned => "my_pets",
        }
    }
}

/// Client for one conformance run.
///
/// Owns the transport session; constructed once and injected into every
/// scenario. Holds no other state - each call is fully parameterized by
/// the caller.
#[derive(Clone)]
pub struct PetFriendsClient {
    base_url: Url,
    client: Client,
}

impl PetFriendsClient {
    pub fn new(base_url_str: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url_str)?;
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT_DURATION)
            .build()?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Exchange account credentials for an auth key.
    ///
    /// Credentials travel as request headers, verbatim - validity is
    /// decided entirely by the service.
    pub async fn get_api_key(
        &self,
        credentials: &Credentials,
    ) -> Result<ApiResponse, ApiError> {
        let url = self.base_url.join(API_KEY_ENDPOINT)?;
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .header(EMAIL_HEADER_KEY, credentials.email())
            .header(PASSWORD_HEADER_KEY, credentials.password().as_str())
            .send()
            .await?;

        Self::read_response(response).await
    }

    /// List pets, either the whole inventory or only the caller's own.
    pub async fn get_list_of_pets(
        &self,
        auth_key: &str,
        filter: PetFilter,
    ) -> Result<ApiResponse, ApiError> {
        let url = self.base_url.join(PETS_ENDPOINT)?;
        debug!("GET {url} (filter: {filter:?})");

        let response = self
            .client
            .get(url)
            .query(&[(FILTER_QUERY_KEY, filter.query_value())])
            .header(AUTH_KEY_HEADER_KEY, auth_key)
            .send()
            .await?;

        Self::read_response(response).await
    }

    /// Create a pet with a photo upload (multipart/form-data).
    ///
    /// The photo is read at call time; an unreadable fixture aborts the
    /// scenario with [`ApiError::Photo`] rather than reaching the wire.
    pub async fn add_new_pet(
        &self,
        auth_key: &str,
        name: &str,
        animal_type: &str,
        age: &str,
        photo_path: &Path,
    ) -> Result<ApiResponse, ApiError> {
        let url = self.base_url.join(PETS_ENDPOINT)?;
        let photo = photo_part(photo_path)?;

        let form = Form::new()
            .text("name", name.to_string())
            .text("animal_type", animal_type.to_string())
            .text("age", age.to_string())
            .part(PHOTO_PART_NAME, photo);

        debug!("POST {url} (name: {name})");

        let response = self
            .client
            .post(url)
            .header(AUTH_KEY_HEADER_KEY, auth_key)
            .multipart(form)
            .send()
            .await?;

        Self::read_response(response).await
    }

    /// Replace a pet's name, type and age (urlencoded PUT).
    pub async fn update_pet_info(
        &self,
        auth_key: &str,
        pet_id: &str,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> Result<ApiResponse, ApiError> {
        let url = self.base_url.join(&format!("{PETS_ENDPOINT}/{pet_id}"))?;
        debug!("PUT {url}");

        let response = self
            .client
            .put(url)
            .header(AUTH_KEY_HEADER_KEY, auth_key)
            .form(&[("name", name), ("animal_type", animal_type), ("age", age)])
            .send()
            .await?;

        Self::read_response(response).await
    }

    /// Remove a pet from the inventory.
    pub async fn delete_pet(
        &self,
        auth_key: &str,
        pet_id: &str,
    ) -> Result<ApiResponse, ApiError> {
        let url = self.base_url.join(&format!("{PETS_ENDPOINT}/{pet_id}"))?;
        debug!("DELETE {url}");

        let response = self
            .client
            .delete(url)
            .header(AUTH_KEY_HEADER_KEY, auth_key)
            .send()
            .await?;

        Self::read_response(response).await
    }

    /// Collapse a wire response into the uniform (status, body) pair.
    async fn read_response(response: reqwest::Response) -> Result<ApiResponse, ApiError> {
        let status = HttpStatusCode::from(response.status().as_u16());
        let raw = response.text().await?;

        Ok(ApiResponse {
            status,
            body: ResponseBody::from_raw(raw),
        })
    }
}

fn photo_part(path: &Path) -> Result<Part, ApiError> {
    let bytes = std::fs::read(path).map_err(|e| ApiError::Photo {
        path: path.to_path_buf(),
        location: ErrorLocation::from(Location::caller()),
        source: e,
    })?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from(PHOTO_PART_NAME));

    let part = Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(photo_mime(path))?;

    Ok(part)
}

/// MIME type from the fixture's file extension.
fn photo_mime(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}
