use crate::model::{CategoryIcon, Id};
use serde::{Deserialize, Serialize};

/// Browsing category. Courses and meditations reference a category by its
/// display name, not its id, so renaming a category does not re-link them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub icon: CategoryIcon,
}
