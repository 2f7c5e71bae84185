use crate::model::Id;
use serde::{Deserialize, Serialize};

/// A civilization from the app's star-lore catalog, owned by one
/// constellation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Civilization {
    pub id: Id,
    pub name: String,
    pub constellation_id: Id,
    pub short_description: String,
    pub full_description: String,
    pub image_url: String,
    pub traits: Vec<String>,
    pub history: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Celestial coordinates as display strings, e.g. "03h 47m" / "+24° 07′".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkyCoordinates {
    pub ra: String,
    pub dec: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constellation {
    pub id: Id,
    pub name: String,
    pub latin_name: String,
    pub image: String,
    pub description: String,
    pub civilizations: Vec<Id>,
    pub stars: Vec<String>,
    pub coordinates: SkyCoordinates,
}
