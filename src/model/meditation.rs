use crate::model::Id;
use serde::{Deserialize, Serialize};

/// A standalone guided meditation: the course shape minus nested lessons,
/// with a single audio track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meditation {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub cover_image: String,
    pub instructor_id: Id,
    pub duration: u32, // minutes
    pub audio_url: String,
    pub price: u32, // 0 for free
    pub is_featured: bool,
    pub category: String,
    pub tags: Vec<String>,
    pub rating: f32,
    pub review_count: u32,
    pub created_at: String,
    pub updated_at: String,
}

impl Meditation {
    pub fn is_free(&self) -> bool {
        self.price == 0
    }
}
