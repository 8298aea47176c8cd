//! Comment/Justification Subsystem
//!
//! Threaded, resolvable feedback entries attached to a course (or
//! proposal) and optionally a specific section. The mandatory
//! justification on a return-for-revision transition is stored here
//! too, so reviewer threads and the audit trail agree.
//!
//! Comments are never hard-deleted; resolving toggles a flag and is
//! idempotent. The only removal path is the cascade when the owning
//! course is purged.

#![deny(unsafe_code)]

use curricula_types::{
    Actor, Comment, CommentEntityType, CommentFilter, CommentId, CurriculaError, CurriculaResult,
};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory comment store with a per-entity index
#[derive(Debug, Default)]
pub struct CommentStore {
    comments: RwLock<HashMap<CommentId, Comment>>,
    entity_index: RwLock<HashMap<String, Vec<CommentId>>>,
}

impl CommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a comment. Blank content is a validation error.
    pub fn create(
        &self,
        entity_type: CommentEntityType,
        entity_id: impl Into<String>,
        section: Option<String>,
        author: Actor,
        content: impl Into<String>,
    ) -> CurriculaResult<Comment> {
        let content: String = content.into();
        if content.trim().is_empty() {
            return Err(CurriculaError::Validation(
                "comment content must be non-empty".to_string(),
            ));
        }

        let entity_id: String = entity_id.into();
        let comment = Comment::new(
            entity_type,
            entity_id.clone(),
            section,
            author,
            content.trim().to_string(),
        );

        let mut comments = self.comments.write().map_err(poisoned)?;
        let mut index = self.entity_index.write().map_err(poisoned)?;
        index.entry(entity_id).or_default().push(comment.id.clone());
        comments.insert(comment.id.clone(), comment.clone());

        tracing::debug!(comment_id = %comment.id, entity_id = %comment.entity_id, "comment created");
        Ok(comment)
    }

    /// Mark a comment resolved. Resolving an already-resolved comment
    /// is a no-op that returns the current state.
    pub fn resolve(&self, id: &CommentId) -> CurriculaResult<Comment> {
        self.set_resolved(id, true)
    }

    /// Reopen a comment. Idempotent like `resolve`.
    pub fn unresolve(&self, id: &CommentId) -> CurriculaResult<Comment> {
        self.set_resolved(id, false)
    }

    fn set_resolved(&self, id: &CommentId, resolved: bool) -> CurriculaResult<Comment> {
        let mut comments = self.comments.write().map_err(poisoned)?;
        let comment = comments
            .get_mut(id)
            .ok_or_else(|| CurriculaError::NotFound(format!("comment {id}")))?;
        comment.resolved = resolved;
        Ok(comment.clone())
    }

    /// Comments for an entity, created-at ascending, optionally
    /// filtered by section and resolution state.
    pub fn list(
        &self,
        entity_id: &str,
        filter: &CommentFilter,
    ) -> CurriculaResult<Vec<Comment>> {
        let comments = self.comments.read().map_err(poisoned)?;
        let index = self.entity_index.read().map_err(poisoned)?;

        let ids = match index.get(entity_id) {
            Some(ids) => ids,
            None => return Ok(vec![]),
        };

        let mut results: Vec<Comment> = ids
            .iter()
            .filter_map(|id| comments.get(id))
            .filter(|comment| {
                if let Some(section) = &filter.section {
                    if comment.section.as_deref() != Some(section.as_str()) {
                        return false;
                    }
                }
                if let Some(resolved) = filter.resolved {
                    if comment.resolved != resolved {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();

        results.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(results)
    }

    /// Get one comment by id
    pub fn get(&self, id: &CommentId) -> CurriculaResult<Comment> {
        let comments = self.comments.read().map_err(poisoned)?;
        comments
            .get(id)
            .cloned()
            .ok_or_else(|| CurriculaError::NotFound(format!("comment {id}")))
    }

    /// Cascade removal for a purged entity
    pub fn purge_entity(&self, entity_id: &str) -> CurriculaResult<()> {
        let mut comments = self.comments.write().map_err(poisoned)?;
        let mut index = self.entity_index.write().map_err(poisoned)?;
        if let Some(ids) = index.remove(entity_id) {
            for id in ids {
                comments.remove(&id);
            }
        }
        Ok(())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> CurriculaError {
    CurriculaError::Storage("comment store lock poisoned".to_string())
}
