//! The workflow engine: pure, role-gated transition decisions

use crate::table;
use chrono::Utc;
use curricula_types::{
    Actor, CourseWorkflow, CurriculaError, CurriculaResult, TransitionRecord, WorkflowStatus,
};

/// What a successful transition decision produces: the new head and
/// the ledger record, for the storage layer to commit together.
#[derive(Clone, Debug)]
pub struct TransitionOutcome {
    /// The head the decision was computed from; the commit must verify
    /// this still matches storage (compare-and-swap) before writing
    pub basis_version: u64,
    /// The updated head
    pub workflow: CourseWorkflow,
    /// The record to append to the approval ledger
    pub record: TransitionRecord,
}

/// Validates and decides transitions. Holds no state and performs no
/// I/O; storage commits the outcome atomically or reports a conflict.
#[derive(Clone, Copy, Debug, Default)]
pub struct WorkflowEngine;

impl WorkflowEngine {
    pub fn new() -> Self {
        Self
    }

    /// Decide a transition request.
    ///
    /// Checks, in order: the `(from, to)` pair exists in the table and
    /// the actor's role is permitted (authorization), then the
    /// justification comment is present and non-blank when the table
    /// requires one (validation). Nothing is mutated on any failure.
    pub fn transition(
        &self,
        workflow: &CourseWorkflow,
        target: WorkflowStatus,
        actor: &Actor,
        comment: Option<&str>,
    ) -> CurriculaResult<TransitionOutcome> {
        let from = workflow.status;

        let rule = table::find_rule(from, target).ok_or(CurriculaError::Authorization {
            from,
            to: target,
            role: actor.role,
        })?;

        if !rule.allowed_roles.contains(&actor.role) {
            return Err(CurriculaError::Authorization {
                from,
                to: target,
                role: actor.role,
            });
        }

        let comment = comment.map(str::trim).filter(|text| !text.is_empty());
        if rule.requires_comment && comment.is_none() {
            return Err(CurriculaError::Validation(format!(
                "Transition {from} -> {target} requires a justification comment"
            )));
        }

        let record = TransitionRecord::new(
            workflow.course_id.clone(),
            from,
            target,
            actor.clone(),
            comment.map(str::to_string),
        );

        let outcome = TransitionOutcome {
            basis_version: workflow.version,
            workflow: CourseWorkflow {
                course_id: workflow.course_id.clone(),
                status: target,
                version: workflow.version + 1,
                updated_at: Utc::now(),
            },
            record,
        };

        tracing::info!(
            course_id = %workflow.course_id,
            from = %from,
            to = %target,
            actor = %actor.id,
            role = %actor.role,
            "workflow transition decided"
        );

        Ok(outcome)
    }
}
