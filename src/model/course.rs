use crate::model::{now_iso, Id};
use serde::{Deserialize, Serialize};

/// A single audio lesson inside a course. `order` is 1-based and kept
/// contiguous by the course-level lesson operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub duration: u32, // minutes
    pub audio_url: String,
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub cover_image: String,
    pub instructor_id: Id,
    pub price: u32, // 0 for free
    pub is_featured: bool,
    pub lessons: Vec<Lesson>,
    pub category: String,
    pub tags: Vec<String>,
    pub rating: f32,
    pub review_count: u32,
    pub created_at: String,
    pub updated_at: String,
}

impl Course {
    pub fn is_free(&self) -> bool {
        self.price == 0
    }

    /// Total listening time across all lessons, in minutes.
    pub fn total_duration(&self) -> u32 {
        self.lessons.iter().map(|lesson| lesson.duration).sum()
    }

    /// Appends a lesson at the end of the course, assigning the next order
    /// number.
    pub fn push_lesson(&mut self, mut lesson: Lesson) {
        lesson.order = self.lessons.len() as u32 + 1;
        self.lessons.push(lesson);
        self.updated_at = now_iso();
    }

    /// Removes a lesson by id and renumbers the remainder so `order` stays
    /// contiguous 1..N in list order. Unknown id is a no-op.
    pub fn remove_lesson(&mut self, lesson_id: &str) {
        let before = self.lessons.len();
        self.lessons.retain(|lesson| lesson.id != lesson_id);
        if self.lessons.len() != before {
            for (index, lesson) in self.lessons.iter_mut().enumerate() {
                lesson.order = index as u32 + 1;
            }
            self.updated_at = now_iso();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(id: &str, order: u32) -> Lesson {
        Lesson {
            id: id.to_string(),
            title: format!("Урок {order}"),
            description: String::new(),
            duration: 30,
            audio_url: "path/to/audio.mp3".to_string(),
            order,
        }
    }

    fn course_with_lessons(n: u32) -> Course {
        Course {
            id: "c1".to_string(),
            title: "Курс".to_string(),
            description: String::new(),
            cover_image: String::new(),
            instructor_id: "1".to_string(),
            price: 0,
            is_featured: false,
            lessons: (1..=n).map(|i| lesson(&format!("l{i}"), i)).collect(),
            category: "Чакры".to_string(),
            tags: vec![],
            rating: 0.0,
            review_count: 0,
            created_at: now_iso(),
            updated_at: now_iso(),
        }
    }

    #[test]
    fn remove_lesson_renumbers_contiguously() {
        let mut course = course_with_lessons(4);
        course.remove_lesson("l2");

        assert_eq!(course.lessons.len(), 3);
        let orders: Vec<u32> = course.lessons.iter().map(|l| l.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
        let ids: Vec<&str> = course.lessons.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["l1", "l3", "l4"]);
    }

    #[test]
    fn remove_unknown_lesson_is_a_no_op() {
        let mut course = course_with_lessons(2);
        let snapshot = course.clone();
        course.remove_lesson("missing");
        assert_eq!(course, snapshot);
    }

    #[test]
    fn push_lesson_assigns_next_order() {
        let mut course = course_with_lessons(2);
        course.push_lesson(lesson("l9", 0));
        assert_eq!(course.lessons.last().unwrap().order, 3);
    }
}
