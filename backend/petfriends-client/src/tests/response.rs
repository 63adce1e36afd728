// Unit tests for response body tagging
// The tag (Json vs Text) is part of the service contract, so the
// defensive decode has to land on the right side for every body shape
// the service actually produces.

use crate::api::{ApiResponse, IssuedKey, Pet, PetList, ResponseBody};

use common::HttpStatusCode;

use serde_json::json;

// ============================================
// UNIT TESTS: Body Tagging
// ============================================

/// **VALUE**: Verifies a JSON payload lands on the Json side of the tag.
///
/// **WHY THIS MATTERS**: Success responses are JSON objects; scenarios
/// decode typed views out of them. If a valid object were misfiled as
/// text, every success-path check would fail.
#[test]
fn given_json_payload_when_parsing_then_body_is_tagged_json() {
    let body = ResponseBody::from_raw(String::from(r#"{"key": "abc123"}"#));

    assert!(body.is_json());
    assert_eq!(
        body.field("key").and_then(|v| v.as_str()),
        Some("abc123"),
        "field access should reach into the JSON object"
    );
}

/// **VALUE**: Verifies the service's plain-text refusal is tagged Text.
///
/// **WHY THIS MATTERS**: The refusal body starts with digits
/// ("403 Forbidden, ..."), which a sloppy decoder could half-read as a
/// JSON number. The trailing text must push the whole body to the Text
/// side, because scenarios branch on exactly that tag.
#[test]
fn given_plain_text_refusal_when_parsing_then_body_is_tagged_text() {
    let body = ResponseBody::from_raw(String::from(
        "403 Forbidden, please check your credentials",
    ));

    assert!(!body.is_json());
    assert!(body.text_contains("403 Forbidden"));
    assert!(body.field("key").is_none(), "text bodies have no fields");
}

#[test]
fn given_empty_body_when_parsing_then_body_is_tagged_text() {
    let body = ResponseBody::from_raw(String::new());

    assert!(!body.is_json());
    assert_eq!(body.as_text(), Some(""));
}

// ============================================
// UNIT TESTS: Typed Views
// ============================================

/// **VALUE**: Verifies typed decoding of the three wire shapes.
///
/// **BUG THIS CATCHES**: A renamed or retyped field in the serde structs
/// would silently turn every success body into "not a pet", failing the
/// suite for the wrong reason.
#[test]
fn given_service_shaped_json_when_decoding_then_typed_views_returned() {
    let key_body = ResponseBody::from_raw(String::from(r#"{"key": "0123abcd"}"#));
    let issued: IssuedKey = key_body.decode().expect("key body should decode");
    assert_eq!(issued.key, "0123abcd");

    let pet_body = ResponseBody::from_raw(
        json!({
            "id": "42",
            "name": "Барбоскин",
            "animal_type": "двортерьер",
            "age": "4"
        })
        .to_string(),
    );
    let pet: Pet = pet_body.decode().expect("pet body should decode");
    assert_eq!(pet.name, "Барбоскин");
    assert_eq!(pet.created_at, "", "absent optional fields default to empty");

    let list_body = ResponseBody::from_raw(
        json!({"pets": [{"id": "42", "name": "n", "animal_type": "t", "age": "1"}]})
            .to_string(),
    );
    let list: PetList = list_body.decode().expect("listing body should decode");
    assert_eq!(list.len(), 1);
    assert!(list.contains_id("42"));
    assert!(!list.contains_id("43"));
}

#[test]
fn given_text_body_when_decoding_then_nothing_is_returned() {
    let body = ResponseBody::from_raw(String::from("403 Forbidden"));

    assert!(body.decode::<Pet>().is_none());
    assert!(body.decode::<PetList>().is_none());
}

#[test]
fn given_mismatched_json_when_decoding_then_nothing_is_returned() {
    // JSON, but not pet-shaped - decode must refuse, not panic.
    let body = ResponseBody::from_raw(String::from(r#"{"unexpected": true}"#));

    assert!(body.is_json());
    assert!(body.decode::<Pet>().is_none());
}

// ============================================
// UNIT TESTS: Status Pairing
// ============================================

#[test]
fn given_status_codes_when_classifying_then_contract_predicates_hold() {
    let ok = ApiResponse {
        status: HttpStatusCode::OK,
        body: ResponseBody::from_raw(String::from("{}")),
    };
    assert!(ok.is_ok());
    assert!(!ok.is_forbidden());

    let forbidden = ApiResponse {
        status: HttpStatusCode::FORBIDDEN,
        body: ResponseBody::from_raw(String::from("403 Forbidden")),
    };
    assert!(forbidden.is_forbidden());
    assert!(forbidden.status.is_client_error());
    assert_eq!(forbidden.status, 403u16);
}
