//! Zolarus Assistant Core.
//!
//! A side-effect-free implementation of the Zolarus chat assistant: a
//! locale-aware (en/pt/es/fr) intent extractor that turns free-text chat
//! input into localized replies and navigation targets, backed by a small
//! key-value capability for cached shopping preferences.

pub mod assistant;
pub mod error;
pub mod locale;
pub mod models;
pub mod session;
pub mod storage;

pub use assistant::{parse_shopping, Assistant, BudgetRange, Outcome, Page, ShoppingQuery};
pub use error::StorageError;
pub use locale::{chips, text, Lang, TextKey};
pub use models::{ChatMessage, Role, SoftPreferences};
pub use session::ChatSession;
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};

#[cfg(test)]
mod tests;
