//! # Assistant Module
//!
//! The intent extractor behind the Zolarus chat widget.
//! Turns free-text input into a localized reply and an optional navigation
//! target, with no I/O beyond the injected preference store.
//!
//! ## Components
//! - `shopping`: shopping-query parsing (recipient, occasion, budget, keywords)
//! - `rules`: ordered intent rules evaluated first-match-wins
//! - `engine`: orchestrator tying rules to the preference store

pub mod engine;
pub mod rules;
pub mod shopping;

pub use engine::Assistant;
pub use rules::{Outcome, Page, RequestContext, Rule};
pub use shopping::{parse_shopping, BudgetRange, ShoppingQuery};
