//! Reviewer comments and justifications

use crate::{Actor, CommentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a comment is attached to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentEntityType {
    Course,
    Proposal,
}

/// A threaded, resolvable feedback entry.
///
/// Comments are never hard-deleted; resolution toggles the flag only.
/// The mandatory justification on a return-for-revision transition is a
/// plain comment whose `section` names the stage that bounced the
/// course.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub entity_type: CommentEntityType,
    pub entity_id: String,
    /// Optional section key within the entity (e.g. "slos", a stage name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    pub author: Actor,
    pub content: String,
    pub resolved: bool,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(
        entity_type: CommentEntityType,
        entity_id: impl Into<String>,
        section: Option<String>,
        author: Actor,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: CommentId::generate(),
            entity_type,
            entity_id: entity_id.into(),
            section,
            author,
            content: content.into(),
            resolved: false,
            created_at: Utc::now(),
        }
    }
}

/// Filters for listing comments
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CommentFilter {
    pub section: Option<String>,
    pub resolved: Option<bool>,
}
