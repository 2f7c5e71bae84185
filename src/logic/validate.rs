//! Required-field checks the admin edit forms run before any store
//! mutation is allowed. Messages are field-keyed so the form can surface
//! them inline.

use crate::model::{Course, Instructor, Meditation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn require(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.errors.push(FieldError {
                field: field.to_string(),
                message: message.to_string(),
            });
        }
    }
}

pub fn validate_course(draft: &Course) -> ValidationResult {
    let mut result = ValidationResult::default();
    result.require(!draft.title.trim().is_empty(), "title", "Название обязательно");
    result.require(
        !draft.description.trim().is_empty(),
        "description",
        "Описание обязательно",
    );
    result.require(
        !draft.cover_image.trim().is_empty(),
        "coverImage",
        "URL обложки обязателен",
    );
    result.require(!draft.lessons.is_empty(), "lessons", "Добавьте хотя бы один урок");
    result
}

pub fn validate_meditation(draft: &Meditation) -> ValidationResult {
    let mut result = ValidationResult::default();
    result.require(!draft.title.trim().is_empty(), "title", "Название обязательно");
    result.require(
        !draft.description.trim().is_empty(),
        "description",
        "Описание обязательно",
    );
    result.require(
        !draft.cover_image.trim().is_empty(),
        "coverImage",
        "Обложка обязательна",
    );
    result.require(
        draft.duration > 0,
        "duration",
        "Длительность должна быть положительным числом",
    );
    result.require(
        !draft.audio_url.trim().is_empty(),
        "audioFile",
        "Аудиофайл обязателен",
    );
    result
}

pub fn validate_instructor(draft: &Instructor) -> ValidationResult {
    let mut result = ValidationResult::default();
    result.require(!draft.name.trim().is_empty(), "name", "Имя обязательно");
    result.require(
        !draft.avatar.trim().is_empty(),
        "avatar",
        "URL аватара обязателен",
    );
    result.require(!draft.bio.trim().is_empty(), "bio", "Биография обязательна");
    result.require(
        !draft.specialties.is_empty(),
        "specialties",
        "Специализации обязательны",
    );
    result
}
