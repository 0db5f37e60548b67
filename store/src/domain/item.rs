//! List Item Entity
//!
//! One goal entry owned by a user. Mirrors the `list_items` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};

/// Opaque row identifier assigned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

/// Owner reference (auth user id)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trim user input; `None` when nothing but whitespace remains.
pub fn normalize_content(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// A goal row as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: ItemId,
    pub user_id: UserId,
    pub content: String,
    pub is_completed: bool,
    /// Non-null iff `is_completed`
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ListItem {
    /// Apply a patch the backend accepted to the local copy.
    pub fn apply(&mut self, patch: &ItemPatch) {
        match patch {
            ItemPatch::Content { content, updated_at } => {
                self.content = content.clone();
                self.updated_at = *updated_at;
            }
            ItemPatch::Completion { is_completed, completed_at, updated_at } => {
                self.is_completed = *is_completed;
                self.completed_at = *completed_at;
                self.updated_at = *updated_at;
            }
        }
    }
}

impl Entity for ListItem {
    type Id = ItemId;

    fn id(&self) -> &ItemId {
        &self.id
    }
}

/// Insert payload; the server assigns id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewListItem {
    pub user_id: UserId,
    pub content: String,
}

impl NewListItem {
    /// Build an insert payload, trimming content and rejecting blanks.
    pub fn new(user_id: UserId, raw_content: &str) -> DomainResult<Self> {
        let content = normalize_content(raw_content)
            .ok_or_else(|| DomainError::InvalidInput("content must not be blank".into()))?;
        Ok(Self { user_id, content })
    }
}

/// Column changes sent with an update-by-id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ItemPatch {
    Content {
        content: String,
        updated_at: DateTime<Utc>,
    },
    Completion {
        is_completed: bool,
        completed_at: Option<DateTime<Utc>>,
        updated_at: DateTime<Utc>,
    },
}

impl ItemPatch {
    /// Content edit; trims and rejects blank input.
    pub fn content(raw: &str, now: DateTime<Utc>) -> DomainResult<Self> {
        let content = normalize_content(raw)
            .ok_or_else(|| DomainError::InvalidInput("content must not be blank".into()))?;
        Ok(ItemPatch::Content { content, updated_at: now })
    }

    /// Completion change; `completed_at` follows the flag.
    pub fn completion(is_completed: bool, now: DateTime<Utc>) -> Self {
        ItemPatch::Completion {
            is_completed,
            completed_at: is_completed.then_some(now),
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn sample() -> ListItem {
        ListItem {
            id: ItemId("a1".into()),
            user_id: UserId("u1".into()),
            content: "Climb Kilimanjaro".into(),
            is_completed: false,
            completed_at: None,
            created_at: at(100),
            updated_at: at(100),
        }
    }

    #[test]
    fn test_new_item_trims_content() {
        let new = NewListItem::new(UserId("u1".into()), "  Run a marathon  ").unwrap();
        assert_eq!(new.content, "Run a marathon");
    }

    #[test]
    fn test_new_item_rejects_whitespace() {
        for raw in ["", " ", "\t\n  "] {
            assert!(matches!(
                NewListItem::new(UserId("u1".into()), raw),
                Err(DomainError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_completion_patch_tracks_flag() {
        let mut item = sample();
        item.apply(&ItemPatch::completion(true, at(200)));
        assert!(item.is_completed);
        assert_eq!(item.completed_at, Some(at(200)));
        assert_eq!(item.updated_at, at(200));

        item.apply(&ItemPatch::completion(false, at(300)));
        assert!(!item.is_completed);
        assert_eq!(item.completed_at, None);
        assert_eq!(item.updated_at, at(300));
        assert_eq!(item.created_at, at(100));
    }

    #[test]
    fn test_patch_wire_format() {
        let body = serde_json::to_value(ItemPatch::completion(false, at(0))).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "is_completed": false,
                "completed_at": null,
                "updated_at": "1970-01-01T00:00:00Z"
            })
        );

        let body = serde_json::to_value(ItemPatch::content(" Learn Go ", at(0)).unwrap()).unwrap();
        assert_eq!(body["content"], "Learn Go");
        assert!(body.get("is_completed").is_none());
    }

    #[test]
    fn test_deserialize_backend_row() {
        let row = r#"{
            "id": "0b6f",
            "user_id": "u1",
            "content": "See the northern lights",
            "is_completed": true,
            "completed_at": "2024-03-01T10:00:00.123+00:00",
            "created_at": "2024-01-01T09:00:00+00:00",
            "updated_at": "2024-03-01T10:00:00.123+00:00"
        }"#;
        let item: ListItem = serde_json::from_str(row).unwrap();
        assert_eq!(item.id, ItemId("0b6f".into()));
        assert!(item.is_completed);
        assert!(item.completed_at.is_some());
    }
}
