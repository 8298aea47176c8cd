//! Approval history ledger - immutable record of every transition
//!
//! Append-only: there is no update or delete. The ordered sequence of
//! records for a course is its full audit trail, used to reconstruct
//! who approved what, when.

use curricula_types::{CourseId, CurriculaError, CurriculaResult, TransitionRecord, WorkflowStatus};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory append-only transition log, indexed per course
#[derive(Debug, Default)]
pub struct ApprovalLedger {
    records: RwLock<HashMap<CourseId, Vec<TransitionRecord>>>,
}

impl ApprovalLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record.
    ///
    /// Enforces trail invariants at the write boundary: the first
    /// record for a course must leave `Draft`, each record must chain
    /// from the previous record's target, and timestamps must be
    /// non-decreasing. A violation means the caller skipped the engine
    /// and is reported as a validation error with nothing written.
    pub fn append(&self, record: TransitionRecord) -> CurriculaResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| CurriculaError::Storage("ledger lock poisoned".to_string()))?;

        // Validate against the existing trail before touching the map,
        // so a rejected record leaves no empty entry behind.
        match records.get(&record.course_id).and_then(|trail| trail.last()) {
            None => {
                if record.from != WorkflowStatus::Draft {
                    return Err(CurriculaError::Validation(format!(
                        "first transition for {} must leave draft, not {}",
                        record.course_id, record.from
                    )));
                }
            }
            Some(last) => {
                if last.to != record.from {
                    return Err(CurriculaError::Validation(format!(
                        "transition for {} does not chain: trail head is {} but record leaves {}",
                        record.course_id, last.to, record.from
                    )));
                }
                if record.recorded_at < last.recorded_at {
                    return Err(CurriculaError::Validation(format!(
                        "transition for {} is out of time order",
                        record.course_id
                    )));
                }
            }
        }

        records.entry(record.course_id.clone()).or_default().push(record);
        Ok(())
    }

    /// Full audit trail for a course, timestamp ascending
    pub fn list_for(&self, course_id: &CourseId) -> CurriculaResult<Vec<TransitionRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| CurriculaError::Storage("ledger lock poisoned".to_string()))?;

        let mut trail = records.get(course_id).cloned().unwrap_or_default();
        trail.sort_by(|a, b| a.recorded_at.cmp(&b.recorded_at));
        Ok(trail)
    }

    /// Number of records across all courses
    pub fn len(&self) -> usize {
        self.records
            .read()
            .map(|records| records.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every record for a course. Only the owning course's
    /// removal cascades here; there is no per-record delete.
    pub fn purge_course(&self, course_id: &CourseId) -> CurriculaResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| CurriculaError::Storage("ledger lock poisoned".to_string()))?;
        records.remove(course_id);
        Ok(())
    }
}
