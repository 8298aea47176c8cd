//! Compliance audit handler

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use axum::{extract::State, Json};
use curricula_types::{ComplianceReport, CourseSnapshot};

/// Audit a course snapshot against the rule catalog. Read-only; the
/// same snapshot always yields the same report.
pub async fn audit_snapshot(
    State(state): State<AppState>,
    Json(snapshot): Json<CourseSnapshot>,
) -> ApiResult<Json<ComplianceReport>> {
    let report = state.service.audit(&snapshot)?;
    Ok(Json(report))
}
