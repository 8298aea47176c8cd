//! Compliance findings and the audit report
//!
//! A report is a pure aggregation of findings: it carries no clock or
//! random state, so two audits of the same snapshot compare equal.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of a single compliance check
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceStatus {
    Pass,
    Warn,
    Fail,
}

impl ComplianceStatus {
    /// The more severe of two statuses (fail > warn > pass)
    pub fn worst(self, other: ComplianceStatus) -> ComplianceStatus {
        self.max(other)
    }
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ComplianceStatus::Pass => "pass",
            ComplianceStatus::Warn => "warn",
            ComplianceStatus::Fail => "fail",
        };
        write!(f, "{name}")
    }
}

/// Report sections the rule catalog partitions findings into
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleCategory {
    UnitsHours,
    LearningOutcomes,
    ContentOutline,
    CbCodes,
    CcnAlignment,
    Requisites,
}

impl std::fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RuleCategory::UnitsHours => "units_hours",
            RuleCategory::LearningOutcomes => "learning_outcomes",
            RuleCategory::ContentOutline => "content_outline",
            RuleCategory::CbCodes => "cb_codes",
            RuleCategory::CcnAlignment => "ccn_alignment",
            RuleCategory::Requisites => "requisites",
        };
        write!(f, "{name}")
    }
}

/// One check's result
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComplianceFinding {
    pub rule_id: String,
    pub rule_name: String,
    pub category: RuleCategory,
    pub status: ComplianceStatus,
    pub message: String,
    /// Document section the finding points at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Governing regulation, when one names this requirement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
    /// How to fix it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

impl ComplianceFinding {
    pub fn new(
        rule_id: impl Into<String>,
        rule_name: impl Into<String>,
        category: RuleCategory,
        status: ComplianceStatus,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            rule_name: rule_name.into(),
            category,
            status,
            message: message.into(),
            section: None,
            citation: None,
            recommendation: None,
        }
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    pub fn with_citation(mut self, citation: impl Into<String>) -> Self {
        self.citation = Some(citation.into());
        self
    }

    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }
}

/// Aggregate of all findings for one snapshot
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// Worst status across all findings
    pub overall: ComplianceStatus,
    /// 0..=100; warns earn half credit
    pub score: u8,
    pub passed: usize,
    pub warned: usize,
    pub failed: usize,
    /// Findings grouped by category, catalog order preserved within each
    pub by_category: BTreeMap<RuleCategory, Vec<ComplianceFinding>>,
}

impl ComplianceReport {
    /// Build a report from findings in catalog order.
    ///
    /// `score = round(100 * (passed + 0.5 * warned) / total)`. An empty
    /// finding set scores 100 with overall `pass`: nothing was checked,
    /// so nothing is wrong.
    pub fn from_findings(findings: Vec<ComplianceFinding>) -> Self {
        let mut passed = 0usize;
        let mut warned = 0usize;
        let mut failed = 0usize;
        let mut overall = ComplianceStatus::Pass;

        for finding in &findings {
            overall = overall.worst(finding.status);
            match finding.status {
                ComplianceStatus::Pass => passed += 1,
                ComplianceStatus::Warn => warned += 1,
                ComplianceStatus::Fail => failed += 1,
            }
        }

        let total = findings.len();
        let score = if total == 0 {
            100
        } else {
            let raw = 100.0 * (passed as f64 + 0.5 * warned as f64) / total as f64;
            raw.round().clamp(0.0, 100.0) as u8
        };

        let mut by_category: BTreeMap<RuleCategory, Vec<ComplianceFinding>> = BTreeMap::new();
        for finding in findings {
            by_category.entry(finding.category).or_default().push(finding);
        }

        Self {
            overall,
            score,
            passed,
            warned,
            failed,
            by_category,
        }
    }

    /// Worst status within one category, if any findings landed there
    pub fn category_status(&self, category: RuleCategory) -> Option<ComplianceStatus> {
        self.by_category.get(&category).map(|findings| {
            findings
                .iter()
                .fold(ComplianceStatus::Pass, |worst, f| worst.worst(f.status))
        })
    }

    /// All findings in report order, for flat consumers
    pub fn findings(&self) -> impl Iterator<Item = &ComplianceFinding> {
        self.by_category.values().flatten()
    }

    /// Look up a finding by rule id
    pub fn finding(&self, rule_id: &str) -> Option<&ComplianceFinding> {
        self.findings().find(|f| f.rule_id == rule_id)
    }
}
