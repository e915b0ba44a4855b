//! Lumina API - Shared domain types for the Lumina social core.

mod circle;
mod event;
mod post;
mod user;
mod whisper;

pub use circle::*;
pub use event::*;
pub use post::*;
pub use user::*;
pub use whisper::*;
