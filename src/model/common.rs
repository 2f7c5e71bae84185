use serde::{Deserialize, Serialize};

pub type Id = String;

/// Placeholder id an edit form submits to request the create path.
/// Replaced with a generated id at save time.
pub const NEW_ID: &str = "new";

/// Ids minted for admin-created entities: millisecond timestamp string,
/// the same shape the mobile client generated.
pub fn generate_entity_id() -> Id {
    chrono::Utc::now().timestamp_millis().to_string()
}

/// RFC 3339 timestamp string used for all audit fields.
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Fixed icon set the category tiles can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub enum CategoryIcon {
    #[default]
    Star,
    CircleDot,
    Moon,
    Heart,
    Atom,
    Shield,
}
