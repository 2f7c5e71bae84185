//! Playback transport state. The store only mirrors what the audio
//! transport reports; it never drives playback itself and is not persisted.

use crate::model::{Lesson, Meditation};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Whatever is currently loaded in the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlayableItem {
    Meditation(Meditation),
    Lesson(Lesson),
}

impl PlayableItem {
    pub fn id(&self) -> &str {
        match self {
            PlayableItem::Meditation(meditation) => &meditation.id,
            PlayableItem::Lesson(lesson) => &lesson.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            PlayableItem::Meditation(meditation) => &meditation.title,
            PlayableItem::Lesson(lesson) => &lesson.title,
        }
    }

    pub fn audio_url(&self) -> &str {
        match self {
            PlayableItem::Meditation(meditation) => &meditation.audio_url,
            PlayableItem::Lesson(lesson) => &lesson.audio_url,
        }
    }

    /// Nominal length in minutes, from the catalog metadata.
    pub fn duration_minutes(&self) -> u32 {
        match self {
            PlayableItem::Meditation(meditation) => meditation.duration,
            PlayableItem::Lesson(lesson) => lesson.duration,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct PlayerState {
    current_item: Option<PlayableItem>,
    is_playing: bool,
    progress: f64, // 0 to 1
    duration: f64, // seconds
}

#[derive(Default)]
pub struct PlayerStore {
    state: RwLock<PlayerState>,
}

impl PlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_item(&self) -> Option<PlayableItem> {
        self.state.read().current_item.clone()
    }

    pub fn is_playing(&self) -> bool {
        self.state.read().is_playing
    }

    pub fn progress(&self) -> f64 {
        self.state.read().progress
    }

    pub fn duration(&self) -> f64 {
        self.state.read().duration
    }

    /// Loads a new item and starts from the beginning. The duration keeps
    /// its previous value until the transport reports the real one.
    pub fn play(&self, item: PlayableItem) {
        let mut state = self.state.write();
        state.current_item = Some(item);
        state.is_playing = true;
        state.progress = 0.0;
    }

    pub fn pause(&self) {
        self.state.write().is_playing = false;
    }

    pub fn resume(&self) {
        self.state.write().is_playing = true;
    }

    pub fn stop(&self) {
        let mut state = self.state.write();
        state.current_item = None;
        state.is_playing = false;
        state.progress = 0.0;
        state.duration = 0.0;
    }

    /// Raw setter; the seek UI clamps to [0, 1] before calling in.
    pub fn set_progress(&self, progress: f64) {
        self.state.write().progress = progress;
    }

    pub fn set_duration(&self, duration: f64) {
        self.state.write().duration = duration;
    }

    pub fn elapsed_seconds(&self) -> u64 {
        let state = self.state.read();
        (state.progress * state.duration).floor() as u64
    }

    pub fn remaining_seconds(&self) -> u64 {
        let state = self.state.read();
        (state.duration - (state.progress * state.duration).floor()).floor() as u64
    }
}

/// "m:ss" clock label the transport bar renders.
pub fn format_clock(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
