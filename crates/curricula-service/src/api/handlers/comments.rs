//! Comment thread handlers

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use curricula_types::{Actor, ActorRole, Comment, CommentEntityType, CommentFilter, CommentId};
use serde::Deserialize;

/// Request body for comment creation
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub entity_type: CommentEntityType,
    pub entity_id: String,
    /// Document section or workflow stage the comment targets
    #[serde(default)]
    pub section: Option<String>,
    pub author_id: String,
    pub author_name: String,
    pub author_role: ActorRole,
    pub content: String,
}

/// Request body for resolving or reopening a comment
#[derive(Debug, Deserialize)]
pub struct UpdateCommentRequest {
    pub resolved: bool,
}

/// Query parameters for comment listing
#[derive(Debug, Deserialize)]
pub struct ListCommentsQuery {
    pub entity_id: String,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub resolved: Option<bool>,
}

/// Create a comment on a course or snapshot section
pub async fn create_comment(
    State(state): State<AppState>,
    Json(req): Json<CreateCommentRequest>,
) -> ApiResult<(StatusCode, Json<Comment>)> {
    let author = Actor::new(req.author_id, req.author_name, req.author_role);
    let comment = state.service.create_comment(
        req.entity_type,
        &req.entity_id,
        req.section,
        author,
        &req.content,
    )?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// Resolve or reopen a comment; both directions are idempotent
pub async fn update_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCommentRequest>,
) -> ApiResult<Json<Comment>> {
    let id = CommentId::new(id);
    let comment = if req.resolved {
        state.service.resolve_comment(&id)?
    } else {
        state.service.unresolve_comment(&id)?
    };
    Ok(Json(comment))
}

/// List comments for an entity, oldest first
pub async fn list_comments(
    State(state): State<AppState>,
    Query(query): Query<ListCommentsQuery>,
) -> ApiResult<Json<Vec<Comment>>> {
    let filter = CommentFilter {
        section: query.section,
        resolved: query.resolved,
    };
    let comments = state.service.list_comments(&query.entity_id, &filter)?;
    Ok(Json(comments))
}
