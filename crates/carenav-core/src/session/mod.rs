//! Session-local conversational state.
//!
//! # Module Structure
//!
//! - `list_cache`: the last recommendation list (`SessionListCache`)
//! - `message`: message log types (`MessageRole`, `ChatMessage`)

mod list_cache;
mod message;

pub use list_cache::SessionListCache;
pub use message::{ChatMessage, MessageRole};
