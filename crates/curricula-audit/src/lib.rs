//! Compliance Audit Engine
//!
//! Scores a course snapshot against a catalog of regulatory rules and
//! produces a category-partitioned, percentage-scored report.
//!
//! # Key Concepts
//!
//! - **RuleCatalog**: A single ordered registry of rules. Each rule is
//!   a pure function over the snapshot plus institution configuration.
//!   A category may have at most one exclusive provider, so no two
//!   sources can double-count findings for the same section.
//! - **AuditEngine**: `evaluate(snapshot) -> ComplianceReport`. Pure
//!   and stateless; safe to call on every edit, from any thread, with
//!   no stored side effects.
//! - **InstitutionConfig**: The deploying institution's constants:
//!   hour-to-unit ratio, reconciliation tolerance, required CB codes,
//!   transferability code, CCN unit minimum. Always passed explicitly.
//!
//! Rules never error on malformed-but-present data: a rule that cannot
//! evaluate a field resolves to its own fail/warn finding, so one bad
//! field never aborts the audit.

#![deny(unsafe_code)]

mod catalog;
pub mod ccn;
mod config;
mod engine;
pub mod rules;

pub use catalog::*;
pub use config::*;
pub use engine::*;
