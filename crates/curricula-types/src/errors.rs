//! Error taxonomy for the course lifecycle core
//!
//! Four terminal kinds, never auto-retried: validation and
//! authorization failures report before any mutation; conflicts tell
//! the caller to re-fetch and retry with fresh context; not-found is
//! what it says.

use crate::{ActorRole, CourseId, WorkflowStatus};

/// Errors that can occur in lifecycle operations
#[derive(Debug, thiserror::Error)]
pub enum CurriculaError {
    /// Malformed input: bad snapshot shape, empty comment content,
    /// missing justification on a backward transition
    #[error("Validation error: {0}")]
    Validation(String),

    /// The (from, to) pair is not in the transition table, or the
    /// actor's role is not permitted for it
    #[error("Role {role} is not authorized for transition {from} -> {to}")]
    Authorization {
        from: WorkflowStatus,
        to: WorkflowStatus,
        role: ActorRole,
    },

    /// A concurrent transition won the race; stored status no longer
    /// matches the basis this request was computed from
    #[error("Conflict on course {course_id}: expected status {expected}, found {actual}")]
    Conflict {
        course_id: CourseId,
        expected: WorkflowStatus,
        actual: WorkflowStatus,
    },

    /// Course or comment id did not resolve
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend unavailable (lock poisoned, connection lost)
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type alias for lifecycle operations
pub type CurriculaResult<T> = Result<T, CurriculaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_transition() {
        let err = CurriculaError::Authorization {
            from: WorkflowStatus::ArticulationReview,
            to: WorkflowStatus::Approved,
            role: ActorRole::Faculty,
        };
        let text = err.to_string();
        assert!(text.contains("faculty"));
        assert!(text.contains("articulation_review"));
        assert!(text.contains("approved"));
    }
}
