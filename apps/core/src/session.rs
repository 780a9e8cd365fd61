//! Chat session transcript.
//!
//! An append-only message list seeded with the localized greeting. Lives
//! only as long as the widget session; nothing here is persisted.

use crate::locale::{text, Lang, TextKey};
use crate::models::{ChatMessage, Role};

/// An open chat session.
#[derive(Debug, Clone)]
pub struct ChatSession {
    lang: Lang,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// Start a session seeded with the greeting in the given language.
    pub fn new(lang: Lang) -> Self {
        Self {
            lang,
            messages: vec![ChatMessage::bot(text(lang, TextKey::Greeting))],
        }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::user(text));
    }

    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::bot(text));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The latest bot reply, if any.
    pub fn last_reply(&self) -> Option<&ChatMessage> {
        self.messages.iter().rev().find(|m| m.role == Role::Bot)
    }
}
