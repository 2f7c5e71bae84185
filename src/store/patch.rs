//! Partial-update payloads for the admin mutation surface. A `None` field
//! leaves the stored value untouched; ids are never patched.

use crate::model::{CardMeaning, Deck, Id, Lesson, SkyCoordinates};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoursePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lessons: Option<Vec<Lesson>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl CoursePatch {
    pub fn apply(self, course: &mut crate::model::Course) {
        if let Some(title) = self.title {
            course.title = title;
        }
        if let Some(description) = self.description {
            course.description = description;
        }
        if let Some(cover_image) = self.cover_image {
            course.cover_image = cover_image;
        }
        if let Some(instructor_id) = self.instructor_id {
            course.instructor_id = instructor_id;
        }
        if let Some(price) = self.price {
            course.price = price;
        }
        if let Some(is_featured) = self.is_featured {
            course.is_featured = is_featured;
        }
        if let Some(lessons) = self.lessons {
            course.lessons = lessons;
        }
        if let Some(category) = self.category {
            course.category = category;
        }
        if let Some(tags) = self.tags {
            course.tags = tags;
        }
        if let Some(rating) = self.rating {
            course.rating = rating;
        }
        if let Some(review_count) = self.review_count {
            course.review_count = review_count;
        }
        if let Some(updated_at) = self.updated_at {
            course.updated_at = updated_at;
        }
    }

    /// Patch carrying every editable field of `course`, the shape the edit
    /// form submits on save.
    pub fn from_course(course: &crate::model::Course) -> Self {
        Self {
            title: Some(course.title.clone()),
            description: Some(course.description.clone()),
            cover_image: Some(course.cover_image.clone()),
            instructor_id: Some(course.instructor_id.clone()),
            price: Some(course.price),
            is_featured: Some(course.is_featured),
            lessons: Some(course.lessons.clone()),
            category: Some(course.category.clone()),
            tags: Some(course.tags.clone()),
            rating: Some(course.rating),
            review_count: Some(course.review_count),
            updated_at: Some(course.updated_at.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeditationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl MeditationPatch {
    pub fn apply(self, meditation: &mut crate::model::Meditation) {
        if let Some(title) = self.title {
            meditation.title = title;
        }
        if let Some(description) = self.description {
            meditation.description = description;
        }
        if let Some(cover_image) = self.cover_image {
            meditation.cover_image = cover_image;
        }
        if let Some(instructor_id) = self.instructor_id {
            meditation.instructor_id = instructor_id;
        }
        if let Some(duration) = self.duration {
            meditation.duration = duration;
        }
        if let Some(audio_url) = self.audio_url {
            meditation.audio_url = audio_url;
        }
        if let Some(price) = self.price {
            meditation.price = price;
        }
        if let Some(is_featured) = self.is_featured {
            meditation.is_featured = is_featured;
        }
        if let Some(category) = self.category {
            meditation.category = category;
        }
        if let Some(tags) = self.tags {
            meditation.tags = tags;
        }
        if let Some(rating) = self.rating {
            meditation.rating = rating;
        }
        if let Some(review_count) = self.review_count {
            meditation.review_count = review_count;
        }
        if let Some(updated_at) = self.updated_at {
            meditation.updated_at = updated_at;
        }
    }

    pub fn from_meditation(meditation: &crate::model::Meditation) -> Self {
        Self {
            title: Some(meditation.title.clone()),
            description: Some(meditation.description.clone()),
            cover_image: Some(meditation.cover_image.clone()),
            instructor_id: Some(meditation.instructor_id.clone()),
            duration: Some(meditation.duration),
            audio_url: Some(meditation.audio_url.clone()),
            price: Some(meditation.price),
            is_featured: Some(meditation.is_featured),
            category: Some(meditation.category.clone()),
            tags: Some(meditation.tags.clone()),
            rating: Some(meditation.rating),
            review_count: Some(meditation.review_count),
            updated_at: Some(meditation.updated_at.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstructorPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialties: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courses: Option<Vec<Id>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meditations: Option<Vec<Id>>,
}

impl InstructorPatch {
    pub fn apply(self, instructor: &mut crate::model::Instructor) {
        if let Some(name) = self.name {
            instructor.name = name;
        }
        if let Some(avatar) = self.avatar {
            instructor.avatar = avatar;
        }
        if let Some(bio) = self.bio {
            instructor.bio = bio;
        }
        if let Some(specialties) = self.specialties {
            instructor.specialties = specialties;
        }
        if let Some(courses) = self.courses {
            instructor.courses = courses;
        }
        if let Some(meditations) = self.meditations {
            instructor.meditations = meditations;
        }
    }

    pub fn from_instructor(instructor: &crate::model::Instructor) -> Self {
        Self {
            name: Some(instructor.name.clone()),
            avatar: Some(instructor.avatar.clone()),
            bio: Some(instructor.bio.clone()),
            specialties: Some(instructor.specialties.clone()),
            courses: Some(instructor.courses.clone()),
            meditations: Some(instructor.meditations.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetaphorCardPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning: Option<CardMeaning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Also steers update routing: an explicit archangels/amu-mom value
    /// selects that collection before any lookup happens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deck: Option<Deck>,
}

impl MetaphorCardPatch {
    pub fn apply(self, card: &mut crate::model::MetaphorCard) {
        if let Some(name) = self.name {
            card.name = name;
        }
        if let Some(image) = self.image {
            card.image = image;
        }
        if let Some(description) = self.description {
            card.description = description;
        }
        if let Some(meaning) = self.meaning {
            card.meaning = meaning;
        }
        if let Some(keywords) = self.keywords {
            card.keywords = keywords;
        }
        if let Some(category) = self.category {
            card.category = category;
        }
        if let Some(deck) = self.deck {
            card.deck = deck;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CivilizationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constellation_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traits: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl CivilizationPatch {
    pub fn apply(self, civilization: &mut crate::model::Civilization) {
        if let Some(name) = self.name {
            civilization.name = name;
        }
        if let Some(constellation_id) = self.constellation_id {
            civilization.constellation_id = constellation_id;
        }
        if let Some(short_description) = self.short_description {
            civilization.short_description = short_description;
        }
        if let Some(full_description) = self.full_description {
            civilization.full_description = full_description;
        }
        if let Some(image_url) = self.image_url {
            civilization.image_url = image_url;
        }
        if let Some(traits) = self.traits {
            civilization.traits = traits;
        }
        if let Some(history) = self.history {
            civilization.history = history;
        }
        if let Some(updated_at) = self.updated_at {
            civilization.updated_at = updated_at;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConstellationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latin_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub civilizations: Option<Vec<Id>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<SkyCoordinates>,
}

impl ConstellationPatch {
    pub fn apply(self, constellation: &mut crate::model::Constellation) {
        if let Some(name) = self.name {
            constellation.name = name;
        }
        if let Some(latin_name) = self.latin_name {
            constellation.latin_name = latin_name;
        }
        if let Some(image) = self.image {
            constellation.image = image;
        }
        if let Some(description) = self.description {
            constellation.description = description;
        }
        if let Some(civilizations) = self.civilizations {
            constellation.civilizations = civilizations;
        }
        if let Some(stars) = self.stars {
            constellation.stars = stars;
        }
        if let Some(coordinates) = self.coordinates {
            constellation.coordinates = coordinates;
        }
    }
}
