use crate::model::Id;
use serde::{Deserialize, Serialize};

/// Course and meditation authors. `courses` and `meditations` are
/// denormalized back-references; deleting a course or meditation does not
/// rewrite them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    pub id: Id,
    pub name: String,
    pub avatar: String,
    pub bio: String,
    pub specialties: Vec<String>,
    pub courses: Vec<Id>,
    pub meditations: Vec<Id>,
}
