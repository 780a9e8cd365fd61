use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The sender of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

/// A single entry in the chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who sent the message.
    pub role: Role,
    /// The text content of the message.
    pub text: String,
    /// When the message was appended to the transcript.
    pub at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a user message stamped with the current time.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            at: Utc::now(),
        }
    }

    /// Create a bot message stamped with the current time.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            text: text.into(),
            at: Utc::now(),
        }
    }
}

/// Non-authoritative, locally cached shopping defaults, keyed by user id.
///
/// Overwritten on each successful shopping parse. Only ever used to prefill
/// the shop querystring of future parses; never alters a reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftPreferences {
    /// Encoded budget range from the last parse (e.g. "0-50", "50-100", "50-").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_budget: Option<String>,
    /// Keyword residue from the last parse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_keywords: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let m = ChatMessage::user("hello");
        assert_eq!(m.role, Role::User);
        assert_eq!(m.text, "hello");

        let m = ChatMessage::bot("hi there");
        assert_eq!(m.role, Role::Bot);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Bot).unwrap();
        assert_eq!(json, "\"bot\"");
        let json = serde_json::to_string(&Role::User).unwrap();
        assert_eq!(json, "\"user\"");
    }

    #[test]
    fn test_soft_preferences_roundtrip() {
        let prefs = SoftPreferences {
            last_budget: Some("0-50".to_string()),
            last_keywords: Some("candles".to_string()),
        };
        let json = serde_json::to_string(&prefs).unwrap();
        let back: SoftPreferences = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prefs);
    }

    #[test]
    fn test_soft_preferences_empty_is_compact() {
        let json = serde_json::to_string(&SoftPreferences::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
