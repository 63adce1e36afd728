use serde::Deserialize;

/// Body of a successful key issuance.
#[derive(Debug, Clone, Deserialize)]
pub struct IssuedKey {
    pub key: String,
}

/// A pet record as the service returns it.
///
/// `age` stays a string because that is what the wire carries; the suite
/// never does arithmetic on it. Fields the service may omit default to
/// empty.
#[derive(Debug, Clone, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub animal_type: String,
    pub age: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub pet_photo: String,
}

/// Body of a successful listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PetList {
    pub pets: Vec<Pet>,
}

impl PetList {
    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn first(&self) -> Option<&Pet> {
        self.pets.first()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.pets.iter().any(|pet| pet.id == id)
    }
}
