//! In-memory workflow store
//!
//! Reference implementation used by tests and single-node deployments.
//! All head writes go through one `RwLock`, so the compare-and-swap in
//! `commit_transition` and its ledger append are a single atomic unit
//! from any other writer's point of view.

use crate::storage::WorkflowStore;
use async_trait::async_trait;
use curricula_types::{
    CourseId, CourseWorkflow, CurriculaError, CurriculaResult, TransitionRecord,
};
use curricula_workflow::{ApprovalLedger, TransitionOutcome};
use std::collections::HashMap;
use std::sync::RwLock;

/// Workflow heads plus the approval ledger behind one lock
#[derive(Debug, Default)]
pub struct MemoryWorkflowStore {
    heads: RwLock<HashMap<CourseId, CourseWorkflow>>,
    ledger: ApprovalLedger,
}

impl MemoryWorkflowStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WorkflowStore for MemoryWorkflowStore {
    async fn register(&self, head: CourseWorkflow) -> CurriculaResult<()> {
        let mut heads = self.heads.write().map_err(poisoned)?;
        if heads.contains_key(&head.course_id) {
            return Err(CurriculaError::Validation(format!(
                "course {} is already registered",
                head.course_id
            )));
        }
        heads.insert(head.course_id.clone(), head);
        Ok(())
    }

    async fn get(&self, course_id: &CourseId) -> CurriculaResult<CourseWorkflow> {
        let heads = self.heads.read().map_err(poisoned)?;
        heads
            .get(course_id)
            .cloned()
            .ok_or_else(|| CurriculaError::NotFound(format!("course {course_id}")))
    }

    async fn commit_transition(
        &self,
        outcome: &TransitionOutcome,
    ) -> CurriculaResult<CourseWorkflow> {
        let course_id = &outcome.workflow.course_id;

        // Hold the head write lock across check + ledger append +
        // head update so concurrent committers serialize here.
        let mut heads = self.heads.write().map_err(poisoned)?;
        let stored = heads
            .get(course_id)
            .ok_or_else(|| CurriculaError::NotFound(format!("course {course_id}")))?;

        if stored.version != outcome.basis_version || stored.status != outcome.record.from {
            return Err(CurriculaError::Conflict {
                course_id: course_id.clone(),
                expected: outcome.record.from,
                actual: stored.status,
            });
        }

        self.ledger.append(outcome.record.clone())?;
        heads.insert(course_id.clone(), outcome.workflow.clone());
        Ok(outcome.workflow.clone())
    }

    async fn history(&self, course_id: &CourseId) -> CurriculaResult<Vec<TransitionRecord>> {
        self.ledger.list_for(course_id)
    }

    async fn purge(&self, course_id: &CourseId) -> CurriculaResult<bool> {
        let mut heads = self.heads.write().map_err(poisoned)?;
        let removed = heads.remove(course_id).is_some();
        self.ledger.purge_course(course_id)?;
        Ok(removed)
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> CurriculaError {
    CurriculaError::Storage("workflow store lock poisoned".to_string())
}
