pub mod draw;
pub mod validate;

pub use draw::*;
pub use validate::*;
