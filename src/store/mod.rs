pub mod auth;
pub mod content;
pub mod patch;
pub mod player;

pub use auth::*;
pub use content::*;
pub use patch::*;
pub use player::*;
