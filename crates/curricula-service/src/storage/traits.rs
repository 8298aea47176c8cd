//! Storage trait for workflow heads and their audit trails

use async_trait::async_trait;
use curricula_types::{CourseId, CourseWorkflow, CurriculaResult, TransitionRecord};
use curricula_workflow::TransitionOutcome;

/// Persistence for the per-course workflow head and transition ledger.
///
/// `commit_transition` is the transactional boundary of the whole
/// subsystem: implementations must verify the stored head still
/// matches the outcome's basis (status and version) and, only then,
/// write the new head and append the ledger record as one atomic unit.
/// A losing concurrent writer gets `Conflict` and writes nothing. For
/// a durable backend that means a row lock or version predicate; the
/// in-memory store serializes writers per store.
#[async_trait]
pub trait WorkflowStore: Send + Sync {
    /// Seed a new head. Fails validation if the course is already
    /// registered.
    async fn register(&self, head: CourseWorkflow) -> CurriculaResult<()>;

    /// Current head for a course
    async fn get(&self, course_id: &CourseId) -> CurriculaResult<CourseWorkflow>;

    /// Compare-and-swap commit of a decided transition. Returns the
    /// committed head.
    async fn commit_transition(
        &self,
        outcome: &TransitionOutcome,
    ) -> CurriculaResult<CourseWorkflow>;

    /// Full audit trail, timestamp ascending
    async fn history(&self, course_id: &CourseId) -> CurriculaResult<Vec<TransitionRecord>>;

    /// Remove a course's head and cascade its trail. Returns whether
    /// anything was removed.
    async fn purge(&self, course_id: &CourseId) -> CurriculaResult<bool>;
}
