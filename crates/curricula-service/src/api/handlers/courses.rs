//! Course workflow handlers

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use curricula_types::{Actor, ActorRole, CourseId, CourseWorkflow, TransitionRecord, WorkflowStatus};
use serde::{Deserialize, Serialize};

/// Request body for course registration
#[derive(Debug, Deserialize)]
pub struct RegisterCourseRequest {
    pub course_id: String,
}

/// Request body for a workflow transition
#[derive(Debug, Deserialize)]
pub struct TransitionRequest {
    pub target_status: WorkflowStatus,
    /// Mandatory when returning a course to draft
    #[serde(default)]
    pub comment: Option<String>,
    pub actor_id: String,
    pub actor_name: String,
    pub actor_role: ActorRole,
}

/// Workflow head as returned to clients
#[derive(Debug, Serialize)]
pub struct WorkflowResponse {
    pub course_id: String,
    pub status: WorkflowStatus,
    pub version: u64,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<CourseWorkflow> for WorkflowResponse {
    fn from(head: CourseWorkflow) -> Self {
        Self {
            course_id: head.course_id.to_string(),
            status: head.status,
            version: head.version,
            updated_at: head.updated_at,
        }
    }
}

/// Register a course, seeding a draft workflow head
pub async fn register_course(
    State(state): State<AppState>,
    Json(req): Json<RegisterCourseRequest>,
) -> ApiResult<(StatusCode, Json<WorkflowResponse>)> {
    if req.course_id.trim().is_empty() {
        return Err(ApiError::BadRequest("course_id must be non-empty".to_string()));
    }
    let head = state
        .service
        .register_course(CourseId::new(req.course_id))
        .await?;
    Ok((StatusCode::CREATED, Json(head.into())))
}

/// Current workflow head for a course
pub async fn get_workflow(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<WorkflowResponse>> {
    let head = state.service.workflow(&CourseId::new(id)).await?;
    Ok(Json(head.into()))
}

/// Execute a workflow transition
pub async fn submit_transition(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<TransitionRequest>,
) -> ApiResult<Json<WorkflowResponse>> {
    let actor = Actor::new(req.actor_id, req.actor_name, req.actor_role);
    let head = state
        .service
        .submit_transition(
            &CourseId::new(id),
            req.target_status,
            &actor,
            req.comment.as_deref(),
        )
        .await?;
    Ok(Json(head.into()))
}

/// Full approval trail for a course, oldest first
pub async fn get_history(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<TransitionRecord>>> {
    let trail = state.service.history(&CourseId::new(id)).await?;
    Ok(Json(trail))
}

/// Remove a course's workflow state, trail, and comments
pub async fn purge_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let course_id = CourseId::new(id);
    let removed = state.service.purge_course(&course_id).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("course {course_id} not registered")))
    }
}
