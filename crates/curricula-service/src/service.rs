//! The Curricula service facade
//!
//! One entry point per exposed operation. Decision logic stays in the
//! pure engines; this layer loads state, commits outcomes, and keeps
//! the comment thread in step with the audit trail.

use crate::storage::{MemoryWorkflowStore, WorkflowStore};
use curricula_audit::{AuditEngine, InstitutionConfig};
use curricula_comments::CommentStore;
use curricula_types::{
    Actor, Comment, CommentEntityType, CommentFilter, CommentId, ComplianceReport, CourseId,
    CourseSnapshot, CourseWorkflow, CurriculaResult, TransitionRecord, WorkflowStatus,
};
use curricula_workflow::WorkflowEngine;
use std::sync::Arc;

/// The course lifecycle service
pub struct CurriculaService {
    workflow_engine: WorkflowEngine,
    audit_engine: Arc<AuditEngine>,
    store: Arc<dyn WorkflowStore>,
    comments: Arc<CommentStore>,
}

impl CurriculaService {
    /// In-memory service with the standard rule catalog and default
    /// institution constants
    pub fn new() -> Self {
        Self::with_components(
            AuditEngine::standard(InstitutionConfig::default()),
            Arc::new(MemoryWorkflowStore::new()),
        )
    }

    /// Service with institution-specific audit constants
    pub fn with_institution(config: InstitutionConfig) -> Self {
        Self::with_components(
            AuditEngine::standard(config),
            Arc::new(MemoryWorkflowStore::new()),
        )
    }

    /// Custom audit engine and storage backend
    pub fn with_components(audit_engine: AuditEngine, store: Arc<dyn WorkflowStore>) -> Self {
        Self {
            workflow_engine: WorkflowEngine::new(),
            audit_engine: Arc::new(audit_engine),
            store,
            comments: Arc::new(CommentStore::new()),
        }
    }

    // ============ Workflow Operations ============

    /// Register a course with the lifecycle core, seeding a `Draft`
    /// workflow head. The document itself lives in the external store.
    pub async fn register_course(&self, course_id: CourseId) -> CurriculaResult<CourseWorkflow> {
        let head = CourseWorkflow::draft(course_id.clone());
        self.store.register(head.clone()).await?;
        tracing::info!(course_id = %course_id, "course registered in draft");
        Ok(head)
    }

    /// Current workflow head for a course
    pub async fn workflow(&self, course_id: &CourseId) -> CurriculaResult<CourseWorkflow> {
        self.store.get(course_id).await
    }

    /// Execute a transition: load the head, decide with the engine,
    /// commit atomically, then mirror any justification into the
    /// comment thread.
    ///
    /// A conflict from the commit means a concurrent transition won;
    /// the caller re-fetches and retries with full context. Nothing is
    /// retried here.
    pub async fn submit_transition(
        &self,
        course_id: &CourseId,
        target: WorkflowStatus,
        actor: &Actor,
        comment: Option<&str>,
    ) -> CurriculaResult<CourseWorkflow> {
        let head = self.store.get(course_id).await?;
        let outcome = self
            .workflow_engine
            .transition(&head, target, actor, comment)?;
        let committed = self.store.commit_transition(&outcome).await?;

        // The mandatory justification on a return-for-revision lands
        // in the reviewer thread too, keyed by the stage that bounced
        // the course. The transition is already committed; a mirror
        // failure is logged, not unwound.
        if outcome.record.is_backward() {
            if let Some(text) = &outcome.record.comment {
                if let Err(error) = self.comments.create(
                    CommentEntityType::Course,
                    course_id.as_str(),
                    Some(outcome.record.from.to_string()),
                    actor.clone(),
                    text.clone(),
                ) {
                    tracing::warn!(
                        course_id = %course_id,
                        %error,
                        "failed to mirror justification comment"
                    );
                }
            }
        }

        tracing::info!(
            course_id = %course_id,
            new_status = %committed.status,
            version = committed.version,
            "transition committed"
        );
        Ok(committed)
    }

    /// Full audit trail for a course, timestamp ascending
    pub async fn history(&self, course_id: &CourseId) -> CurriculaResult<Vec<TransitionRecord>> {
        self.store.history(course_id).await
    }

    /// Remove a course's workflow state and cascade its trail and
    /// comments. Transition records never die individually, only with
    /// their course.
    pub async fn purge_course(&self, course_id: &CourseId) -> CurriculaResult<bool> {
        let removed = self.store.purge(course_id).await?;
        self.comments.purge_entity(course_id.as_str())?;
        Ok(removed)
    }

    // ============ Compliance Audit ============

    /// Run the compliance audit on a snapshot. Read-only and
    /// idempotent: re-run freely on every edit.
    pub fn audit(&self, snapshot: &CourseSnapshot) -> CurriculaResult<ComplianceReport> {
        snapshot.validate()?;
        Ok(self.audit_engine.evaluate(snapshot))
    }

    // ============ Comment Operations ============

    pub fn create_comment(
        &self,
        entity_type: CommentEntityType,
        entity_id: &str,
        section: Option<String>,
        author: Actor,
        content: &str,
    ) -> CurriculaResult<Comment> {
        self.comments
            .create(entity_type, entity_id, section, author, content)
    }

    pub fn resolve_comment(&self, id: &CommentId) -> CurriculaResult<Comment> {
        self.comments.resolve(id)
    }

    pub fn unresolve_comment(&self, id: &CommentId) -> CurriculaResult<Comment> {
        self.comments.unresolve(id)
    }

    pub fn list_comments(
        &self,
        entity_id: &str,
        filter: &CommentFilter,
    ) -> CurriculaResult<Vec<Comment>> {
        self.comments.list(entity_id, filter)
    }

    // ============ Component Access ============

    pub fn audit_engine(&self) -> &AuditEngine {
        &self.audit_engine
    }
}

impl Default for CurriculaService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curricula_types::{ActorRole, CurriculaError};

    fn faculty() -> Actor {
        Actor::new("f-1", "Sam Faculty", ActorRole::Faculty)
    }

    fn chair() -> Actor {
        Actor::new("c-1", "Pat Chair", ActorRole::CurriculumChair)
    }

    fn officer() -> Actor {
        Actor::new("o-1", "Ali Officer", ActorRole::ArticulationOfficer)
    }

    #[tokio::test]
    async fn test_full_approval_pipeline() {
        let service = CurriculaService::new();
        let course = CourseId::new("MATH-101");

        service.register_course(course.clone()).await.unwrap();

        service
            .submit_transition(&course, WorkflowStatus::DeptReview, &faculty(), None)
            .await
            .unwrap();
        service
            .submit_transition(&course, WorkflowStatus::CurriculumCommittee, &chair(), None)
            .await
            .unwrap();
        service
            .submit_transition(&course, WorkflowStatus::ArticulationReview, &chair(), None)
            .await
            .unwrap();
        let head = service
            .submit_transition(&course, WorkflowStatus::Approved, &officer(), None)
            .await
            .unwrap();

        assert_eq!(head.status, WorkflowStatus::Approved);
        assert_eq!(head.version, 4);

        let trail = service.history(&course).await.unwrap();
        assert_eq!(trail.len(), 4);
        assert_eq!(trail[0].from, WorkflowStatus::Draft);
        assert_eq!(trail[3].to, WorkflowStatus::Approved);

        // Approved is terminal
        let err = service
            .submit_transition(&course, WorkflowStatus::Draft, &officer(), Some("why"))
            .await
            .unwrap_err();
        assert!(matches!(err, CurriculaError::Authorization { .. }));
    }

    #[tokio::test]
    async fn test_denied_transition_leaves_no_trace() {
        let service = CurriculaService::new();
        let course = CourseId::new("ENGL-101");
        service.register_course(course.clone()).await.unwrap();
        service
            .submit_transition(&course, WorkflowStatus::DeptReview, &faculty(), None)
            .await
            .unwrap();

        // Faculty cannot advance out of department review
        let err = service
            .submit_transition(&course, WorkflowStatus::CurriculumCommittee, &faculty(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, CurriculaError::Authorization { .. }));

        let head = service.workflow(&course).await.unwrap();
        assert_eq!(head.status, WorkflowStatus::DeptReview);
        assert_eq!(service.history(&course).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_backward_transition_mirrors_justification() {
        let service = CurriculaService::new();
        let course = CourseId::new("HIST-110");
        service.register_course(course.clone()).await.unwrap();
        service
            .submit_transition(&course, WorkflowStatus::DeptReview, &faculty(), None)
            .await
            .unwrap();
        service
            .submit_transition(
                &course,
                WorkflowStatus::Draft,
                &chair(),
                Some("Outline hours exceed contact hours"),
            )
            .await
            .unwrap();

        let thread = service
            .list_comments(course.as_str(), &CommentFilter::default())
            .unwrap();
        assert_eq!(thread.len(), 1);
        assert_eq!(thread[0].content, "Outline hours exceed contact hours");
        assert_eq!(thread[0].section.as_deref(), Some("dept_review"));

        let trail = service.history(&course).await.unwrap();
        assert_eq!(
            trail[1].comment.as_deref(),
            Some("Outline hours exceed contact hours")
        );
    }

    #[tokio::test]
    async fn test_unknown_course_is_not_found() {
        let service = CurriculaService::new();
        let err = service
            .submit_transition(
                &CourseId::new("GHOST-1"),
                WorkflowStatus::DeptReview,
                &faculty(),
                None,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CurriculaError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_purge_cascades_trail_and_comments() {
        let service = CurriculaService::new();
        let course = CourseId::new("ART-120");
        service.register_course(course.clone()).await.unwrap();
        service
            .submit_transition(&course, WorkflowStatus::DeptReview, &faculty(), None)
            .await
            .unwrap();
        service
            .create_comment(
                CommentEntityType::Course,
                course.as_str(),
                None,
                chair(),
                "Check CB04",
            )
            .unwrap();

        assert!(service.purge_course(&course).await.unwrap());
        assert!(service.history(&course).await.unwrap().is_empty());
        assert!(service
            .list_comments(course.as_str(), &CommentFilter::default())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_audit_rejects_malformed_snapshot() {
        let service = CurriculaService::new();
        let mut snapshot = CourseSnapshot {
            id: CourseId::new("BAD-1"),
            title: String::new(),
            units: 1.0,
            lecture_hours: -3.0,
            lab_hours: 0.0,
            outside_of_class_hours: 0.0,
            activity_hours: 0.0,
            tba_hours: 0.0,
            cb_codes: Default::default(),
            ccn_id: None,
            ccn_justification: None,
            slos: vec![],
            content_items: vec![],
            requisites: vec![],
        };
        assert!(matches!(
            service.audit(&snapshot),
            Err(CurriculaError::Validation(_))
        ));

        snapshot.lecture_hours = 3.0;
        // Well-formed but non-compliant data audits fine
        let report = service.audit(&snapshot).unwrap();
        assert!(report.failed > 0);
    }
}
