//! Stateful in-process double of the PetFriends service.
//!
//! Implements the observable contract the suite tests against:
//! header-carried credentials and auth keys, JSON success bodies,
//! plain-text 403 refusals, and one in-memory inventory shared by
//! listing, creation, update and deletion.

use std::sync::{Arc, Mutex, MutexGuard};

use petfriends_client::config::AccountSet;

use serde_json::json;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use super::forms;

const FORBIDDEN_KEY_BODY: &str = "403 Forbidden, missing or invalid auth_key";
const FORBIDDEN_CREDENTIALS_BODY: &str =
    "403 Forbidden, invalid email/password combination";
const FORBIDDEN_PAYLOAD_BODY: &str = "403 Forbidden, pet fields must not be empty";

const VALID_ACCOUNT_KEY: &str =
    "ea738148a1f19838e1c5d1413877f3691a3731380e733e877b0ae729";
const FOREIGN_ACCOUNT_KEY: &str =
    "27ab39bc12f0d2a7c35a6eec517f86d8b9041ec82cd1fbd47d83cc90";

#[derive(Debug, Clone)]
struct Account {
    email: String,
    password: String,
    auth_key: String,
}

#[derive(Debug, Clone)]
struct StoredPet {
    id: String,
    name: String,
    animal_type: String,
    age: String,
    owner_key: String,
}

impl StoredPet {
    fn to_json(&self) -> serde_json::Value {
        json!({
            "id": self.id,
            "name": self.name,
            "animal_type": self.animal_type,
            "age": self.age,
            "created_at": "",
            "pet_photo": "",
        })
    }
}

#[derive(Debug, Default)]
struct Inventory {
    accounts: Vec<Account>,
    pets: Vec<StoredPet>,
    next_id: u64,
}

impl Inventory {
    fn account_by_credentials(&self, email: &str, password: &str) -> Option<&Account> {
        // Empty credentials never match, even if an account were
        // misconfigured with empty fields.
        if email.is_empty() || password.is_empty() {
            return None;
        }
        self.accounts
            .iter()
            .find(|account| account.email == email && account.password == password)
    }

    fn key_is_issued(&self, auth_key: &str) -> bool {
        self.accounts.iter().any(|account| account.auth_key == auth_key)
    }

    fn create_pet(&mut self, owner_key: &str, name: &str, animal_type: &str, age: &str) -> StoredPet {
        self.next_id += 1;
        let pet = StoredPet {
            id: format!("pet-{}", self.next_id),
            name: name.to_string(),
            animal_type: animal_type.to_string(),
            age: age.to_string(),
            owner_key: owner_key.to_string(),
        };
        self.pets.push(pet.clone());
        pet
    }
}

type Shared = Arc<Mutex<Inventory>>;

/// The running double plus a ground-truth handle into its inventory.
pub struct ServiceDouble {
    server: MockServer,
    state: Shared,
}

impl ServiceDouble {
    /// Start a double seeded with the default fixture accounts and one
    /// foreign-owned pet, so the global listing is never empty.
    pub async fn start() -> Self {
        let accounts = AccountSet::default();

        let mut inventory = Inventory::default();
        inventory.accounts.push(Account {
            email: accounts.valid.email.clone(),
            password: accounts.valid.password.clone(),
            auth_key: VALID_ACCOUNT_KEY.to_string(),
        });
        inventory.accounts.push(Account {
            email: String::from("stranger@mail.com"),
            password: String::from("qwerty"),
            auth_key: FOREIGN_ACCOUNT_KEY.to_string(),
        });
        inventory.create_pet(FOREIGN_ACCOUNT_KEY, "Шарик", "пёс", "7");

        let state = Arc::new(Mutex::new(inventory));
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/key"))
            .respond_with(KeyIssuance {
                state: state.clone(),
            })
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/pets"))
            .respond_with(Listing {
                state: state.clone(),
            })
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/pets"))
            .respond_with(Creation {
                state: state.clone(),
            })
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path_regex(r"^/api/pets/.+$"))
            .respond_with(Update {
                state: state.clone(),
            })
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path_regex(r"^/api/pets/.+$"))
            .respond_with(Deletion {
                state: state.clone(),
            })
            .mount(&server)
            .await;

        Self { server, state }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// The key the double issues to the default valid account.
    pub fn valid_auth_key(&self) -> String {
        VALID_ACCOUNT_KEY.to_string()
    }

    // Ground-truth inspection, bypassing the HTTP surface.

    pub fn total_pet_count(&self) -> usize {
        self.lock().pets.len()
    }

    pub fn owned_pet_count(&self, auth_key: &str) -> usize {
        self.lock()
            .pets
            .iter()
            .filter(|pet| pet.owner_key == auth_key)
            .count()
    }

    pub fn pet_exists(&self, id: &str) -> bool {
        self.lock().pets.iter().any(|pet| pet.id == id)
    }

    fn lock(&self) -> MutexGuard<'_, Inventory> {
        self.state.lock().expect("inventory lock should not be poisoned")
    }
}

// ============================================
// RESPONDERS
// ============================================

fn header<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    request.headers.get(name).and_then(|value| value.to_str().ok())
}

fn forbidden(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(403).set_body_string(body)
}

fn authorized_key(inventory: &Inventory, request: &Request) -> Option<String> {
    header(request, "auth_key")
        .filter(|key| inventory.key_is_issued(key))
        .map(str::to_string)
}

fn pet_id_of(request: &Request) -> Option<String> {
    request
        .url
        .path_segments()
        .and_then(|segments| segments.last())
        .map(str::to_string)
}

struct KeyIssuance {
    state: Shared,
}

impl Respond for KeyIssuance {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let inventory = self.state.lock().expect("inventory lock");
        let email = header(request, "email").unwrap_or_default();
        let password = header(request, "password").unwrap_or_default();

        match inventory.account_by_credentials(email, password) {
            Some(account) => {
                ResponseTemplate::new(200).set_body_json(json!({ "key": account.auth_key }))
            }
            None => forbidden(FORBIDDEN_CREDENTIALS_BODY),
        }
    }
}

struct Listing {
    state: Shared,
}

impl Respond for Listing {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let inventory = self.state.lock().expect("inventory lock");
        let Some(key) = authorized_key(&inventory, request) else {
            return forbidden(FORBIDDEN_KEY_BODY);
        };

        let mine_only = request
            .url
            .query_pairs()
            .any(|(name, value)| name == "filter" && value == "my_pets");

        let pets: Vec<_> = inventory
            .pets
            .iter()
            .filter(|pet| !mine_only || pet.owner_key == key)
            .map(StoredPet::to_json)
            .collect();

        ResponseTemplate::new(200).set_body_json(json!({ "pets": pets }))
    }
}

struct Creation {
    state: Shared,
}

impl Respond for Creation {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut inventory = self.state.lock().expect("inventory lock");
        let Some(key) = authorized_key(&inventory, request) else {
            return forbidden(FORBIDDEN_KEY_BODY);
        };

        let content_type = header(request, "content-type").unwrap_or_default().to_string();
        let fields = forms::multipart_text_fields(&content_type, &request.body);

        let name = fields.get("name").cloned().unwrap_or_default();
        let animal_type = fields.get("animal_type").cloned().unwrap_or_default();
        let age = fields.get("age").cloned().unwrap_or_default();

        if name.is_empty() || animal_type.is_empty() || age.is_empty() {
            return forbidden(FORBIDDEN_PAYLOAD_BODY);
        }

        let pet = inventory.create_pet(&key, &name, &animal_type, &age);
        ResponseTemplate::new(200).set_body_json(pet.to_json())
    }
}

struct Update {
    state: Shared,
}

impl Respond for Update {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut inventory = self.state.lock().expect("inventory lock");
        let Some(key) = authorized_key(&inventory, request) else {
            return forbidden(FORBIDDEN_KEY_BODY);
        };
        let Some(id) = pet_id_of(request) else {
            return forbidden(FORBIDDEN_KEY_BODY);
        };

        let fields = forms::urlencoded_fields(&request.body);

        match inventory
            .pets
            .iter_mut()
            .find(|pet| pet.id == id && pet.owner_key == key)
        {
            Some(pet) => {
                if let Some(name) = fields.get("name") {
                    pet.name = name.clone();
                }
                if let Some(animal_type) = fields.get("animal_type") {
                    pet.animal_type = animal_type.clone();
                }
                if let Some(age) = fields.get("age") {
                    pet.age = age.clone();
                }
                ResponseTemplate::new(200).set_body_json(pet.to_json())
            }
            None => forbidden(FORBIDDEN_KEY_BODY),
        }
    }
}

struct Deletion {
    state: Shared,
}

impl Respond for Deletion {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut inventory = self.state.lock().expect("inventory lock");
        let Some(key) = authorized_key(&inventory, request) else {
            return forbidden(FORBIDDEN_KEY_BODY);
        };
        let Some(id) = pet_id_of(request) else {
            return forbidden(FORBIDDEN_KEY_BODY);
        };

        let before = inventory.pets.len();
        inventory
            .pets
            .retain(|pet| !(pet.id == id && pet.owner_key == key));

        if inventory.pets.len() < before {
            ResponseTemplate::new(200).set_body_string("")
        } else {
            forbidden(FORBIDDEN_KEY_BODY)
        }
    }
}
