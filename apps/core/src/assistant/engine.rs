//! Assistant engine.
//!
//! Assembles the request context, walks the rule table, and applies any
//! soft-preference update a rule produced. Storage failures are swallowed:
//! the reply is always a pure function of (text, page, language).

use tracing::debug;

use super::rules::{rule_table, Outcome, Page, RequestContext};
use crate::locale::{text, Lang, TextKey};
use crate::storage::{load_soft_prefs, save_soft_prefs, KeyValueStore};

/// The chat assistant bound to a user and a preference store.
pub struct Assistant<S: KeyValueStore> {
    store: S,
    user_id: String,
}

impl<S: KeyValueStore> Assistant<S> {
    pub fn new(store: S, user_id: impl Into<String>) -> Self {
        Self {
            store,
            user_id: user_id.into(),
        }
    }

    /// Answer a chat message.
    ///
    /// Never fails: unmatched input reaches the generic fallback, and a
    /// preference write that cannot be persisted is logged and dropped.
    pub fn answer(&mut self, input: &str, path: &str, lang: Lang) -> Outcome {
        let prefs = load_soft_prefs(&self.store, &self.user_id);
        let page = Page::from_path(path);
        let ctx = RequestContext::new(input, lang, page, prefs.as_ref());

        for rule in rule_table() {
            if let Some(m) = rule.evaluate(&ctx) {
                debug!(rule = rule.name, page = path, "intent matched");
                if let Some(update) = m.prefs_update {
                    if let Err(e) = save_soft_prefs(&mut self.store, &self.user_id, &update) {
                        debug!("soft preferences not persisted: {}", e);
                    }
                }
                return m.outcome;
            }
        }

        // The table ends with an always-matching fallback; this is only
        // reached if the table is ever emptied.
        Outcome {
            reply: text(lang, TextKey::Fallback).to_string(),
            nav: None,
            refresh: false,
        }
    }

    /// Borrow the underlying store (used by callers that share it).
    pub fn store(&self) -> &S {
        &self.store
    }
}
