//! Standard compliance rules
//!
//! Each rule is a pure function from snapshot + config to findings.
//! Rules are independent and order-insensitive; the catalog supplies
//! presentation order. A rule facing absent optional data resolves to
//! a fail/warn finding, never an error.

use crate::config::InstitutionConfig;
use curricula_types::{ComplianceFinding, ComplianceStatus, CourseSnapshot, RuleCategory};

/// Bloom's taxonomy cognitive levels accepted without a warning
const BLOOM_LEVELS: [&str; 6] = [
    "Remember",
    "Understand",
    "Apply",
    "Analyze",
    "Evaluate",
    "Create",
];

/// UNITS-001: total student learning hours must reconcile with
/// declared units within the institution's tolerance.
pub fn check_units_hours(
    snapshot: &CourseSnapshot,
    config: &InstitutionConfig,
) -> Vec<ComplianceFinding> {
    let total_hours = snapshot.weekly_student_hours() * config.weeks_per_term;
    let computed_units = total_hours / config.hours_per_unit;
    let deviation = (computed_units - snapshot.units).abs();

    let finding = if deviation <= config.unit_tolerance {
        ComplianceFinding::new(
            "UNITS-001",
            "Units/hours reconciliation",
            RuleCategory::UnitsHours,
            ComplianceStatus::Pass,
            format!(
                "{total_hours:.1} total student hours supports {computed_units:.2} units; {} declared",
                snapshot.units
            ),
        )
    } else {
        ComplianceFinding::new(
            "UNITS-001",
            "Units/hours reconciliation",
            RuleCategory::UnitsHours,
            ComplianceStatus::Fail,
            format!(
                "{total_hours:.1} total student hours computes to {computed_units:.2} units but {} are declared (tolerance ±{} units)",
                snapshot.units, config.unit_tolerance
            ),
        )
        .with_citation("title 5 § 55002.5")
        .with_recommendation(
            "Adjust weekly hours or declared units until they reconcile",
        )
    };

    vec![finding.with_section("hours")]
}

/// SLO-001: at least one student learning outcome is required.
pub fn check_slos_present(
    snapshot: &CourseSnapshot,
    _config: &InstitutionConfig,
) -> Vec<ComplianceFinding> {
    let finding = if snapshot.slos.is_empty() {
        ComplianceFinding::new(
            "SLO-001",
            "Learning outcomes present",
            RuleCategory::LearningOutcomes,
            ComplianceStatus::Fail,
            "Course has no student learning outcomes",
        )
        .with_recommendation("Add at least one assessable learning outcome")
    } else {
        ComplianceFinding::new(
            "SLO-001",
            "Learning outcomes present",
            RuleCategory::LearningOutcomes,
            ComplianceStatus::Pass,
            format!("{} learning outcome(s) defined", snapshot.slos.len()),
        )
    };

    vec![finding.with_section("slos")]
}

/// SLO-002: each SLO's Bloom level must come from the controlled
/// vocabulary. Emits nothing when there are no SLOs; SLO-001 already
/// fails that case and a second finding would double-count it.
pub fn check_bloom_levels(
    snapshot: &CourseSnapshot,
    _config: &InstitutionConfig,
) -> Vec<ComplianceFinding> {
    if snapshot.slos.is_empty() {
        return vec![];
    }

    let offenders: Vec<&curricula_types::LearningOutcome> = snapshot
        .slos
        .iter()
        .filter(|slo| !BLOOM_LEVELS.contains(&slo.bloom_level.as_str()))
        .collect();

    let finding = if offenders.is_empty() {
        ComplianceFinding::new(
            "SLO-002",
            "Bloom's taxonomy vocabulary",
            RuleCategory::LearningOutcomes,
            ComplianceStatus::Pass,
            "All outcome levels use the standard Bloom vocabulary",
        )
    } else {
        let sequences: Vec<String> = offenders.iter().map(|s| s.sequence.to_string()).collect();
        ComplianceFinding::new(
            "SLO-002",
            "Bloom's taxonomy vocabulary",
            RuleCategory::LearningOutcomes,
            ComplianceStatus::Warn,
            format!(
                "Outcome(s) {} use a non-standard cognitive level",
                sequences.join(", ")
            ),
        )
        .with_recommendation(format!(
            "Use one of: {}",
            BLOOM_LEVELS.join(", ")
        ))
    };

    vec![finding.with_section("slos")]
}

/// OUTLINE-001: content-item hours must fit within the instructional
/// (lecture + lab) hours for the term.
pub fn check_content_hours(
    snapshot: &CourseSnapshot,
    config: &InstitutionConfig,
) -> Vec<ComplianceFinding> {
    if snapshot.content_items.is_empty() {
        return vec![ComplianceFinding::new(
            "OUTLINE-001",
            "Content outline hours",
            RuleCategory::ContentOutline,
            ComplianceStatus::Warn,
            "Content outline is empty",
        )
        .with_section("content_items")
        .with_recommendation("Outline the course content with hour allocations")];
    }

    let allocated: f32 = snapshot.content_items.iter().map(|item| item.hours).sum();
    let available = (snapshot.lecture_hours + snapshot.lab_hours) * config.weeks_per_term;

    let finding = if allocated <= available {
        ComplianceFinding::new(
            "OUTLINE-001",
            "Content outline hours",
            RuleCategory::ContentOutline,
            ComplianceStatus::Pass,
            format!("{allocated:.1} outline hours within {available:.1} instructional hours"),
        )
    } else {
        ComplianceFinding::new(
            "OUTLINE-001",
            "Content outline hours",
            RuleCategory::ContentOutline,
            ComplianceStatus::Fail,
            format!(
                "Outline allocates {allocated:.1} hours but only {available:.1} instructional hours are available"
            ),
        )
        .with_recommendation("Reduce outline hour allocations or raise contact hours")
    };

    vec![finding.with_section("content_items")]
}

/// CB-001: the institution's required CB codes must all be present and
/// non-null. Missing keys are collapsed into a single finding so one
/// incomplete form does not swamp the report.
pub fn check_cb_codes(
    snapshot: &CourseSnapshot,
    config: &InstitutionConfig,
) -> Vec<ComplianceFinding> {
    let missing: Vec<&str> = config
        .required_cb_codes
        .iter()
        .map(String::as_str)
        .filter(|key| snapshot.cb_code(key).is_none())
        .collect();

    let finding = if missing.is_empty() {
        ComplianceFinding::new(
            "CB-001",
            "CB code completeness",
            RuleCategory::CbCodes,
            ComplianceStatus::Pass,
            format!("All {} required CB codes present", config.required_cb_codes.len()),
        )
    } else {
        ComplianceFinding::new(
            "CB-001",
            "CB code completeness",
            RuleCategory::CbCodes,
            ComplianceStatus::Fail,
            format!("Missing required CB code(s): {}", missing.join(", ")),
        )
        .with_recommendation("Supply a value for every required CB code")
    };

    vec![finding.with_section("cb_codes")]
}

/// REQ-001: requisites that name a course must have completed content
/// review.
pub fn check_requisite_review(
    snapshot: &CourseSnapshot,
    _config: &InstitutionConfig,
) -> Vec<ComplianceFinding> {
    let unreviewed: Vec<String> = snapshot
        .requisites
        .iter()
        .filter(|req| req.course.is_some() && !req.content_reviewed)
        .map(|req| {
            req.course
                .as_ref()
                .map(|c| c.to_string())
                .unwrap_or_default()
        })
        .collect();

    let finding = if unreviewed.is_empty() {
        ComplianceFinding::new(
            "REQ-001",
            "Requisite content review",
            RuleCategory::Requisites,
            ComplianceStatus::Pass,
            "All course-linked requisites have content review",
        )
    } else {
        ComplianceFinding::new(
            "REQ-001",
            "Requisite content review",
            RuleCategory::Requisites,
            ComplianceStatus::Warn,
            format!(
                "Requisite(s) on {} lack content review",
                unreviewed.join(", ")
            ),
        )
        .with_citation("title 5 § 55003")
        .with_recommendation("Complete content review for each linked requisite")
    };

    vec![finding.with_section("requisites")]
}

#[cfg(test)]
mod tests {
    use super::*;
    use curricula_types::{ContentItem, CourseId, LearningOutcome, Requisite, RequisiteKind};
    use std::collections::BTreeMap;

    fn snapshot() -> CourseSnapshot {
        CourseSnapshot {
            id: CourseId::new("MATH-101"),
            title: "College Algebra".to_string(),
            units: 3.0,
            lecture_hours: 3.0,
            lab_hours: 0.0,
            outside_of_class_hours: 6.0,
            activity_hours: 0.0,
            tba_hours: 0.0,
            cb_codes: BTreeMap::new(),
            ccn_id: None,
            ccn_justification: None,
            slos: vec![LearningOutcome {
                sequence: 1,
                outcome: "Solve linear equations".to_string(),
                bloom_level: "Apply".to_string(),
                criteria: "Exam".to_string(),
            }],
            content_items: vec![ContentItem {
                sequence: 1,
                topic: "Linear equations".to_string(),
                subtopics: vec![],
                hours: 18.0,
                linked_slos: vec![1],
            }],
            requisites: vec![],
        }
    }

    fn config() -> InstitutionConfig {
        InstitutionConfig::default()
    }

    #[test]
    fn test_units_hours_reconcile() {
        // 9 weekly hours * 18 weeks = 162 hours = exactly 3 units at 54/unit
        let findings = check_units_hours(&snapshot(), &config());
        assert_eq!(findings[0].status, ComplianceStatus::Pass);
    }

    #[test]
    fn test_units_hours_mismatch_fails_with_citation() {
        let mut snap = snapshot();
        snap.units = 5.0;
        let findings = check_units_hours(&snap, &config());
        assert_eq!(findings[0].status, ComplianceStatus::Fail);
        assert_eq!(findings[0].citation.as_deref(), Some("title 5 § 55002.5"));
    }

    #[test]
    fn test_missing_slos_fail() {
        let mut snap = snapshot();
        snap.slos.clear();
        let findings = check_slos_present(&snap, &config());
        assert_eq!(findings[0].status, ComplianceStatus::Fail);
        // Bloom check stays silent so the failure is counted once
        assert!(check_bloom_levels(&snap, &config()).is_empty());
    }

    #[test]
    fn test_nonstandard_bloom_level_warns() {
        let mut snap = snapshot();
        snap.slos.push(LearningOutcome {
            sequence: 2,
            outcome: "Grok recursion".to_string(),
            bloom_level: "Grok".to_string(),
            criteria: "Project".to_string(),
        });
        let findings = check_bloom_levels(&snap, &config());
        assert_eq!(findings[0].status, ComplianceStatus::Warn);
        assert!(findings[0].message.contains('2'));
    }

    #[test]
    fn test_content_overflow_fails() {
        let mut snap = snapshot();
        snap.content_items[0].hours = 100.0; // only 54 instructional hours exist
        let findings = check_content_hours(&snap, &config());
        assert_eq!(findings[0].status, ComplianceStatus::Fail);
    }

    #[test]
    fn test_empty_outline_warns() {
        let mut snap = snapshot();
        snap.content_items.clear();
        let findings = check_content_hours(&snap, &config());
        assert_eq!(findings[0].status, ComplianceStatus::Warn);
    }

    #[test]
    fn test_cb_codes_missing_lists_keys() {
        let mut snap = snapshot();
        snap.cb_codes.insert("CB00".to_string(), Some("12345".to_string()));
        snap.cb_codes.insert("CB01".to_string(), None); // null counts as missing
        let findings = check_cb_codes(&snap, &config());
        assert_eq!(findings[0].status, ComplianceStatus::Fail);
        assert!(findings[0].message.contains("CB01"));
        assert!(findings[0].message.contains("CB05"));
        assert!(!findings[0].message.contains("CB00,"));
    }

    #[test]
    fn test_cb_codes_complete_pass() {
        let mut snap = snapshot();
        for key in &config().required_cb_codes {
            snap.cb_codes.insert(key.clone(), Some("X".to_string()));
        }
        let findings = check_cb_codes(&snap, &config());
        assert_eq!(findings[0].status, ComplianceStatus::Pass);
    }

    #[test]
    fn test_unreviewed_requisite_warns() {
        let mut snap = snapshot();
        snap.requisites.push(Requisite {
            kind: RequisiteKind::Prerequisite,
            course: Some(CourseId::new("MATH-100")),
            free_text: None,
            content_reviewed: false,
        });
        let findings = check_requisite_review(&snap, &config());
        assert_eq!(findings[0].status, ComplianceStatus::Warn);
        assert!(findings[0].message.contains("MATH-100"));
    }

    #[test]
    fn test_free_text_requisite_needs_no_review() {
        let mut snap = snapshot();
        snap.requisites.push(Requisite {
            kind: RequisiteKind::Advisory,
            course: None,
            free_text: Some("Eligibility for college-level reading".to_string()),
            content_reviewed: false,
        });
        let findings = check_requisite_review(&snap, &config());
        assert_eq!(findings[0].status, ComplianceStatus::Pass);
    }
}
