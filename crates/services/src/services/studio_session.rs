//! In-memory session state for the UI Studio: the chat transcript, the
//! current model, and the append-only version history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use ts_rs::TS;
use utils::text::truncate_chars;
use uuid::Uuid;

use super::ui_plan::UiPlan;

/// Maximum stored length of a chat message, in characters.
pub const MESSAGE_MAX_CHARS: usize = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One entry in the session transcript. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: MessageRole, content: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: truncate_chars(content, MESSAGE_MAX_CHARS),
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: &str) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: &str) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

/// The unit of versioning: a plan plus everything derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
pub struct UiModel {
    pub plan: UiPlan,
    pub code: String,
    pub explanation: String,
}

/// Append-only history of produced models. Entries are never reordered,
/// replaced, or truncated; the index is the stable restore handle.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
pub struct VersionStore {
    entries: Vec<UiModel>,
}

impl VersionStore {
    /// Add a model at the end and return its index.
    pub fn append(&mut self, model: UiModel) -> usize {
        self.entries.push(model);
        self.entries.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&UiModel> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &UiModel> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-session state. Owned by the studio service registry and threaded
/// through its operations; never global.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
pub struct StudioSession {
    pub id: Uuid,
    pub messages: Vec<ChatMessage>,
    pub current: Option<UiModel>,
    pub versions: VersionStore,
    pub created_at: DateTime<Utc>,
}

impl StudioSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            messages: Vec::new(),
            current: None,
            versions: VersionStore::default(),
            created_at: Utc::now(),
        }
    }

    pub fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }
}

impl Default for StudioSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(title: &str) -> UiModel {
        let mut plan = UiPlan::base();
        plan.content.title = title.to_string();
        UiModel {
            plan,
            code: format!("<AppShell title=\"{title}\" />"),
            explanation: "A starting point.".to_string(),
        }
    }

    #[test]
    fn test_append_returns_sequential_indices() {
        let mut store = VersionStore::default();
        assert_eq!(store.append(model("one")), 0);
        assert_eq!(store.append(model("two")), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_get_out_of_range() {
        let mut store = VersionStore::default();
        store.append(model("one"));
        assert!(store.get(0).is_some());
        assert!(store.get(1).is_none());
    }

    #[test]
    fn test_entries_are_not_rewritten_by_later_appends() {
        let mut store = VersionStore::default();
        let first = model("one");
        store.append(first.clone());
        store.append(model("two"));
        assert_eq!(store.get(0), Some(&first));
    }

    #[test]
    fn test_chat_message_content_is_bounded() {
        let long = "x".repeat(MESSAGE_MAX_CHARS + 100);
        let message = ChatMessage::user(&long);
        assert_eq!(message.content.chars().count(), MESSAGE_MAX_CHARS);
    }
}
