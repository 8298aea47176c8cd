//! Workflow status, actors, and transition records

use crate::{ActorId, CourseId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The five lifecycle stages of a course document.
///
/// Forward motion follows the declaration order; `Approved` is terminal.
/// The only way forward from an approved course is duplication into a
/// brand-new draft, which lives outside this core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    Draft,
    DeptReview,
    CurriculumCommittee,
    ArticulationReview,
    Approved,
}

impl WorkflowStatus {
    /// All statuses in forward order
    pub const ALL: [WorkflowStatus; 5] = [
        WorkflowStatus::Draft,
        WorkflowStatus::DeptReview,
        WorkflowStatus::CurriculumCommittee,
        WorkflowStatus::ArticulationReview,
        WorkflowStatus::Approved,
    ];

    /// Position in the forward order (Draft = 0 .. Approved = 4)
    pub fn forward_order(&self) -> u8 {
        *self as u8
    }

    /// Whether this status has no outgoing transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, WorkflowStatus::Approved)
    }
}

impl std::fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WorkflowStatus::Draft => "draft",
            WorkflowStatus::DeptReview => "dept_review",
            WorkflowStatus::CurriculumCommittee => "curriculum_committee",
            WorkflowStatus::ArticulationReview => "articulation_review",
            WorkflowStatus::Approved => "approved",
        };
        write!(f, "{name}")
    }
}

/// Institutional roles that participate in the approval pipeline
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorRole {
    Faculty,
    CurriculumChair,
    ArticulationOfficer,
    Admin,
}

impl ActorRole {
    /// All roles, for exhaustive sweeps in tests
    pub const ALL: [ActorRole; 4] = [
        ActorRole::Faculty,
        ActorRole::CurriculumChair,
        ActorRole::ArticulationOfficer,
        ActorRole::Admin,
    ];
}

impl std::fmt::Display for ActorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActorRole::Faculty => "faculty",
            ActorRole::CurriculumChair => "curriculum_chair",
            ActorRole::ArticulationOfficer => "articulation_officer",
            ActorRole::Admin => "admin",
        };
        write!(f, "{name}")
    }
}

/// An authenticated participant, passed explicitly into every operation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub role: ActorRole,
}

impl Actor {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: ActorRole) -> Self {
        Self {
            id: ActorId::new(id),
            name: name.into(),
            role,
        }
    }
}

/// One immutable row of a course's approval audit trail.
///
/// Records are write-once: there is no API anywhere in the workspace to
/// modify or delete one after `new` returns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub course_id: CourseId,
    pub from: WorkflowStatus,
    pub to: WorkflowStatus,
    pub actor: Actor,
    /// Justification text; mandatory on backward transitions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl TransitionRecord {
    pub fn new(
        course_id: CourseId,
        from: WorkflowStatus,
        to: WorkflowStatus,
        actor: Actor,
        comment: Option<String>,
    ) -> Self {
        Self {
            course_id,
            from,
            to,
            actor,
            comment,
            recorded_at: Utc::now(),
        }
    }

    /// Whether this records a return-for-revision move
    pub fn is_backward(&self) -> bool {
        self.to.forward_order() < self.from.forward_order()
    }
}

/// The persisted workflow head for a course: its current status plus an
/// optimistic-lock version bumped on every successful transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseWorkflow {
    pub course_id: CourseId,
    pub status: WorkflowStatus,
    pub version: u64,
    pub updated_at: DateTime<Utc>,
}

impl CourseWorkflow {
    /// A fresh head in `Draft`
    pub fn draft(course_id: CourseId) -> Self {
        Self {
            course_id,
            status: WorkflowStatus::Draft,
            version: 0,
            updated_at: Utc::now(),
        }
    }
}
