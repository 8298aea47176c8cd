//! Course document snapshot
//!
//! The snapshot is the read-only view of a course that the audit engine
//! and workflow core consume. The document store owns the full record;
//! everything here is a value passed in per request.

use crate::{CourseId, CurriculaError, CurriculaResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The subset of course data the audit/workflow core operates on
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseSnapshot {
    /// Course identifier
    pub id: CourseId,
    /// Course title
    pub title: String,
    /// Declared units
    pub units: f32,
    /// Weekly lecture hours
    pub lecture_hours: f32,
    /// Weekly lab hours
    pub lab_hours: f32,
    /// Weekly outside-of-class hours
    pub outside_of_class_hours: f32,
    /// Weekly activity hours
    pub activity_hours: f32,
    /// Weekly to-be-arranged hours
    pub tba_hours: f32,
    /// CB-code key -> value; a key present with `None` counts as missing
    pub cb_codes: BTreeMap<String, Option<String>>,
    /// C-ID standard this course aligns to, if any
    pub ccn_id: Option<String>,
    /// Justification for not aligning, if any
    pub ccn_justification: Option<CcnJustification>,
    /// Student learning outcomes, ordered by sequence
    pub slos: Vec<LearningOutcome>,
    /// Content outline items, ordered by sequence
    pub content_items: Vec<ContentItem>,
    /// Requisites
    pub requisites: Vec<Requisite>,
}

impl CourseSnapshot {
    /// Total weekly student learning hours across all hour types
    pub fn weekly_student_hours(&self) -> f32 {
        self.lecture_hours + self.lab_hours + self.outside_of_class_hours + self.activity_hours
    }

    /// Look up a CB code value; `None` when the key is absent or null
    pub fn cb_code(&self, key: &str) -> Option<&str> {
        self.cb_codes
            .get(key)
            .and_then(|value| value.as_deref())
            .filter(|value| !value.is_empty())
    }

    /// Check structural invariants the rest of the core relies on.
    ///
    /// Hours must be non-negative and SLO/content sequences must be
    /// unique and gapless starting at 1. This guards the request
    /// boundary; individual compliance rules never error on data that
    /// passes here.
    pub fn validate(&self) -> CurriculaResult<()> {
        let hours = [
            ("lecture_hours", self.lecture_hours),
            ("lab_hours", self.lab_hours),
            ("outside_of_class_hours", self.outside_of_class_hours),
            ("activity_hours", self.activity_hours),
            ("tba_hours", self.tba_hours),
        ];
        for (field, value) in hours {
            if value < 0.0 || !value.is_finite() {
                return Err(CurriculaError::Validation(format!(
                    "{field} must be a non-negative number, got {value}"
                )));
            }
        }
        if self.units < 0.0 || !self.units.is_finite() {
            return Err(CurriculaError::Validation(format!(
                "units must be a non-negative number, got {}",
                self.units
            )));
        }

        validate_sequences("slos", self.slos.iter().map(|s| s.sequence))?;
        validate_sequences("content_items", self.content_items.iter().map(|c| c.sequence))?;

        for item in &self.content_items {
            if item.hours < 0.0 || !item.hours.is_finite() {
                return Err(CurriculaError::Validation(format!(
                    "content item {} hours must be non-negative",
                    item.sequence
                )));
            }
        }

        Ok(())
    }
}

fn validate_sequences(
    field: &str,
    sequences: impl Iterator<Item = u32>,
) -> CurriculaResult<()> {
    let mut seen: Vec<u32> = sequences.collect();
    seen.sort_unstable();
    for (index, sequence) in seen.iter().enumerate() {
        let expected = index as u32 + 1;
        if *sequence != expected {
            return Err(CurriculaError::Validation(format!(
                "{field} sequences must be unique and gapless from 1; expected {expected}, found {sequence}"
            )));
        }
    }
    Ok(())
}

/// A student learning outcome
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LearningOutcome {
    /// Position within the course's SLO list (1-based)
    pub sequence: u32,
    /// The outcome statement
    pub outcome: String,
    /// Bloom's taxonomy cognitive level
    pub bloom_level: String,
    /// How the outcome is assessed
    pub criteria: String,
}

/// One item of the content outline
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Position within the outline (1-based)
    pub sequence: u32,
    /// Topic heading
    pub topic: String,
    /// Subtopics under the heading
    #[serde(default)]
    pub subtopics: Vec<String>,
    /// Instructional hours allocated to this item (per term)
    pub hours: f32,
    /// SLO sequences this item supports
    #[serde(default)]
    pub linked_slos: Vec<u32>,
}

/// A requisite relationship to another course or a free-text condition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Requisite {
    pub kind: RequisiteKind,
    /// Linked course, when the requisite names one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<CourseId>,
    /// Free-text condition, when no course is linked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_text: Option<String>,
    /// Whether content review has been completed for this requisite
    #[serde(default)]
    pub content_reviewed: bool,
}

/// Requisite classification
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequisiteKind {
    Prerequisite,
    Corequisite,
    Advisory,
    Limitation,
}

/// Why a course is not aligned to a C-ID standard
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CcnJustification {
    /// Structured exemption reason; `None` means no reason was recorded
    pub reason: Option<CcnExemptReason>,
    /// Free-text explanation
    #[serde(default)]
    pub explanation: String,
}

/// Recognized exemption reasons for CCN alignment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CcnExemptReason {
    /// No C-ID descriptor exists for this discipline
    NoDescriptor,
    /// Course is not intended for transfer
    NotTransferable,
    /// Local degree/certificate requirement only
    LocalRequirement,
    /// Alignment is in progress
    InProgress,
}
