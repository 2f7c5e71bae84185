pub mod config;
pub mod logic;
pub mod model;
pub mod remote;
pub mod seed;
pub mod storage;
pub mod store;

// Export logic helpers
pub use logic::{
    draw_card, shuffle_deck, validate_course, validate_instructor, validate_meditation, DrawRng,
    DrawnCard, FieldError, ValidationResult,
};

// Export all model types
pub use model::*;

// Export remote seams
pub use remote::{AppReloader, NoopReloader, Platform, RemoteApi, RemoteError, StubRemoteApi};

// Export seed module
pub use seed::*;

// Export storage backends
pub use storage::{FileStorage, Flusher, MemoryStorage, StateStorage, StorageError};

// Export store types
pub use store::{
    format_clock, AuthState, AuthStore, CivilizationPatch, ConstellationPatch, ContentDelta,
    ContentState, ContentStore, CoursePatch, InstructorPatch, MeditationPatch, MetaphorCardPatch,
    PlayableItem, PlayerStore, AUTH_STORAGE_KEY, CONTENT_STORAGE_KEY,
};
