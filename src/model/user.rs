use crate::model::{Course, Id, Meditation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub is_admin: bool,
    pub purchased_courses: Vec<Id>,
    pub purchased_meditations: Vec<Id>,
    pub favorites: Vec<Id>,
    pub created_at: String,
}

impl User {
    /// Access check used by every paywalled screen: free content is open to
    /// everyone, paid content requires a matching purchase.
    pub fn owns_course(&self, course: &Course) -> bool {
        course.is_free() || self.purchased_courses.iter().any(|id| *id == course.id)
    }

    pub fn owns_meditation(&self, meditation: &Meditation) -> bool {
        meditation.is_free()
            || self
                .purchased_meditations
                .iter()
                .any(|id| *id == meditation.id)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|fav| fav == id)
    }
}
