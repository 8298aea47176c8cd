//! Rule catalog: a single ordered registry of compliance rules
//!
//! Catalog order is presentation order. A category can have at most one
//! exclusive provider; registering a second source for an exclusive
//! category is rejected at catalog-build time instead of being patched
//! over at evaluation time.

use crate::config::InstitutionConfig;
use crate::{ccn, rules};
use curricula_types::{ComplianceFinding, CourseSnapshot, RuleCategory};

/// A rule's evaluation function: pure over the snapshot and config
pub type RuleFn = fn(&CourseSnapshot, &InstitutionConfig) -> Vec<ComplianceFinding>;

/// One registered compliance rule (or rule group)
#[derive(Clone)]
pub struct Rule {
    /// Stable identifier for the registration
    pub id: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Category its findings land in
    pub category: RuleCategory,
    /// Whether this rule is the sole allowed provider for its category
    pub exclusive: bool,
    /// The evaluation function
    pub eval: RuleFn,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("category", &self.category)
            .field("exclusive", &self.exclusive)
            .finish()
    }
}

/// Errors raised while assembling a catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate rule id: {0}")]
    DuplicateRuleId(&'static str),

    #[error("Category {0} already has an exclusive provider")]
    ExclusiveCategoryTaken(RuleCategory),
}

/// The ordered rule registry
#[derive(Clone, Debug, Default)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
}

impl RuleCatalog {
    /// An empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard catalog: units/hours reconciliation, SLO structure,
    /// content outline, CB-code completeness, requisite content review,
    /// and the CCN alignment group (exclusive over its category).
    pub fn standard() -> Self {
        Self {
            rules: vec![
                Rule {
                    id: "UNITS-001",
                    name: "Units/hours reconciliation",
                    category: RuleCategory::UnitsHours,
                    exclusive: false,
                    eval: rules::check_units_hours,
                },
                Rule {
                    id: "SLO-001",
                    name: "Learning outcomes present",
                    category: RuleCategory::LearningOutcomes,
                    exclusive: false,
                    eval: rules::check_slos_present,
                },
                Rule {
                    id: "SLO-002",
                    name: "Bloom's taxonomy vocabulary",
                    category: RuleCategory::LearningOutcomes,
                    exclusive: false,
                    eval: rules::check_bloom_levels,
                },
                Rule {
                    id: "OUTLINE-001",
                    name: "Content outline hours",
                    category: RuleCategory::ContentOutline,
                    exclusive: false,
                    eval: rules::check_content_hours,
                },
                Rule {
                    id: "CB-001",
                    name: "CB code completeness",
                    category: RuleCategory::CbCodes,
                    exclusive: false,
                    eval: rules::check_cb_codes,
                },
                Rule {
                    id: "REQ-001",
                    name: "Requisite content review",
                    category: RuleCategory::Requisites,
                    exclusive: false,
                    eval: rules::check_requisite_review,
                },
                Rule {
                    id: "CCN",
                    name: "Common course numbering alignment",
                    category: RuleCategory::CcnAlignment,
                    exclusive: true,
                    eval: ccn::evaluate,
                },
            ],
        }
    }

    /// Register a rule, enforcing id uniqueness and category
    /// exclusivity.
    pub fn push(&mut self, rule: Rule) -> Result<(), CatalogError> {
        if self.rules.iter().any(|r| r.id == rule.id) {
            return Err(CatalogError::DuplicateRuleId(rule.id));
        }
        let category_taken = self.rules.iter().any(|r| {
            r.category == rule.category && (r.exclusive || rule.exclusive)
        });
        if category_taken {
            return Err(CatalogError::ExclusiveCategoryTaken(rule.category));
        }
        self.rules.push(rule);
        Ok(())
    }

    /// Rules in registration order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
