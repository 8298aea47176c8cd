//! The audit engine: pure evaluation of a snapshot against the catalog

use crate::catalog::RuleCatalog;
use crate::config::InstitutionConfig;
use curricula_types::{ComplianceFinding, ComplianceReport, CourseSnapshot};

/// Runs the rule catalog against snapshots.
///
/// Stateless and idempotent: two evaluations of the same snapshot
/// return equal reports, and evaluation stores nothing. Safe to invoke
/// concurrently per request.
#[derive(Clone, Debug)]
pub struct AuditEngine {
    catalog: RuleCatalog,
    config: InstitutionConfig,
}

impl AuditEngine {
    pub fn new(catalog: RuleCatalog, config: InstitutionConfig) -> Self {
        Self { catalog, config }
    }

    /// The standard catalog with the given institution constants
    pub fn standard(config: InstitutionConfig) -> Self {
        Self::new(RuleCatalog::standard(), config)
    }

    pub fn config(&self) -> &InstitutionConfig {
        &self.config
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Evaluate every rule and aggregate the findings into a report.
    ///
    /// Rules have no ordering dependency on each other; findings are
    /// collected in catalog order so the report is deterministic.
    pub fn evaluate(&self, snapshot: &CourseSnapshot) -> ComplianceReport {
        let mut findings: Vec<ComplianceFinding> = Vec::new();
        for rule in self.catalog.rules() {
            findings.extend((rule.eval)(snapshot, &self.config));
        }

        let report = ComplianceReport::from_findings(findings);
        tracing::debug!(
            course_id = %snapshot.id,
            overall = %report.overall,
            score = report.score,
            "compliance audit evaluated"
        );
        report
    }
}

impl Default for AuditEngine {
    fn default() -> Self {
        Self::standard(InstitutionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curricula_types::{
        ComplianceReport, ComplianceStatus, ContentItem, CourseId, LearningOutcome, RuleCategory,
    };
    use std::collections::BTreeMap;

    /// A snapshot that satisfies every standard rule: 3 lecture hours
    /// plus 6 outside-of-class hours over an 18-week term reconciles
    /// exactly with 3 units, one Apply-level SLO, complete CB codes,
    /// and a transferable CCN alignment.
    fn clean_snapshot() -> CourseSnapshot {
        let mut cb_codes = BTreeMap::new();
        for (key, value) in [
            ("CB00", "MATH101X"),
            ("CB01", "MATH 101"),
            ("CB02", "College Algebra"),
            ("CB03", "1701.00"),
            ("CB04", "D"),
            ("CB05", "A"),
        ] {
            cb_codes.insert(key.to_string(), Some(value.to_string()));
        }

        CourseSnapshot {
            id: CourseId::new("MATH-101"),
            title: "College Algebra".to_string(),
            units: 3.0,
            lecture_hours: 3.0,
            lab_hours: 0.0,
            outside_of_class_hours: 6.0,
            activity_hours: 0.0,
            tba_hours: 0.0,
            cb_codes,
            ccn_id: Some("C-ID MATH 151".to_string()),
            ccn_justification: None,
            slos: vec![LearningOutcome {
                sequence: 1,
                outcome: "Solve systems of linear equations".to_string(),
                bloom_level: "Apply".to_string(),
                criteria: "Proctored exam".to_string(),
            }],
            content_items: vec![ContentItem {
                sequence: 1,
                topic: "Linear systems".to_string(),
                subtopics: vec!["Substitution".to_string(), "Elimination".to_string()],
                hours: 18.0,
                linked_slos: vec![1],
            }],
            requisites: vec![],
        }
    }

    #[test]
    fn test_clean_snapshot_scores_100() {
        let report = AuditEngine::default().evaluate(&clean_snapshot());
        assert_eq!(report.overall, ComplianceStatus::Pass);
        assert_eq!(report.score, 100);
        assert_eq!(report.failed, 0);
        assert_eq!(report.warned, 0);
    }

    #[test]
    fn test_missing_slos_fail_the_report() {
        let mut snap = clean_snapshot();
        snap.slos.clear();

        let report = AuditEngine::default().evaluate(&snap);
        assert_eq!(report.overall, ComplianceStatus::Fail);
        assert!(report.score < 100);
        let slo = report.finding("SLO-001").unwrap();
        assert_eq!(slo.status, ComplianceStatus::Fail);
    }

    #[test]
    fn test_non_transferable_ccn_fails_the_category() {
        let mut snap = clean_snapshot();
        snap.cb_codes.insert("CB05".to_string(), Some("B".to_string()));

        let report = AuditEngine::default().evaluate(&snap);
        let ccn_001 = report.finding("CCN-001").unwrap();
        assert_eq!(ccn_001.status, ComplianceStatus::Fail);
        assert!(ccn_001.recommendation.is_some());
        assert_eq!(
            report.category_status(RuleCategory::CcnAlignment),
            Some(ComplianceStatus::Fail)
        );
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let engine = AuditEngine::default();
        let snap = clean_snapshot();
        let first = engine.evaluate(&snap);
        let second = engine.evaluate(&snap);
        assert_eq!(first, second);

        // And identical on the wire, not just structurally
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_filling_a_cb_code_only_improves_that_rule() {
        let engine = AuditEngine::default();
        let mut snap = clean_snapshot();
        snap.cb_codes.insert("CB03".to_string(), None);

        let before = engine.evaluate(&snap);
        assert_eq!(
            before.finding("CB-001").unwrap().status,
            ComplianceStatus::Fail
        );

        snap.cb_codes.insert("CB03".to_string(), Some("1701.00".to_string()));
        let after = engine.evaluate(&snap);
        assert_eq!(
            after.finding("CB-001").unwrap().status,
            ComplianceStatus::Pass
        );

        // Every other finding is untouched
        for finding in after.findings() {
            if finding.rule_id != "CB-001" {
                assert_eq!(Some(finding), before.finding(&finding.rule_id));
            }
        }
        assert!(after.score > before.score);
    }

    #[test]
    fn test_audit_has_no_error_path_for_degenerate_data() {
        // A zeroed-out snapshot produces findings, never a panic
        let snap = CourseSnapshot {
            id: CourseId::new("EMPTY-000"),
            title: String::new(),
            units: 0.0,
            lecture_hours: 0.0,
            lab_hours: 0.0,
            outside_of_class_hours: 0.0,
            activity_hours: 0.0,
            tba_hours: 0.0,
            cb_codes: BTreeMap::new(),
            ccn_id: None,
            ccn_justification: None,
            slos: vec![],
            content_items: vec![],
            requisites: vec![],
        };
        let report = AuditEngine::default().evaluate(&snap);
        assert_eq!(report.overall, ComplianceStatus::Fail);
    }

    mod score_properties {
        use super::*;
        use curricula_types::ComplianceFinding;
        use proptest::prelude::*;

        fn arb_status() -> impl Strategy<Value = ComplianceStatus> {
            prop_oneof![
                Just(ComplianceStatus::Pass),
                Just(ComplianceStatus::Warn),
                Just(ComplianceStatus::Fail),
            ]
        }

        proptest! {
            #[test]
            fn score_stays_in_bounds(statuses in prop::collection::vec(arb_status(), 0..40)) {
                let findings: Vec<ComplianceFinding> = statuses
                    .iter()
                    .enumerate()
                    .map(|(i, status)| {
                        ComplianceFinding::new(
                            format!("R-{i}"),
                            "prop",
                            RuleCategory::CbCodes,
                            *status,
                            "prop",
                        )
                    })
                    .collect();

                let report = ComplianceReport::from_findings(findings);
                prop_assert!(report.score <= 100);

                let any_fail = statuses.contains(&ComplianceStatus::Fail);
                let any_warn = statuses.contains(&ComplianceStatus::Warn);
                let expected = if any_fail {
                    ComplianceStatus::Fail
                } else if any_warn {
                    ComplianceStatus::Warn
                } else {
                    ComplianceStatus::Pass
                };
                prop_assert_eq!(report.overall, expected);

                // All-pass is the only way to a perfect score when
                // findings exist
                if !statuses.is_empty() && !any_fail && !any_warn {
                    prop_assert_eq!(report.score, 100);
                }
            }
        }
    }
}
