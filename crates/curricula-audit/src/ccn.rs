//! Common Course Numbering alignment checks
//!
//! One rule group, registered as the exclusive provider for the
//! `CcnAlignment` category. The group branches on whether the snapshot
//! carries a C-ID alignment: aligned courses get transferability, unit
//! floor, and standard-name checks; unaligned courses get a
//! justification check citing AB 1111.

use crate::config::InstitutionConfig;
use curricula_types::{ComplianceFinding, ComplianceStatus, CourseSnapshot, RuleCategory};

const AB1111_CITATION: &str = "AB 1111 (Education Code § 66725.5)";

/// Evaluate the CCN alignment group for one snapshot
pub fn evaluate(
    snapshot: &CourseSnapshot,
    config: &InstitutionConfig,
) -> Vec<ComplianceFinding> {
    match snapshot.ccn_id.as_deref() {
        Some(ccn_id) => aligned_checks(snapshot, config, ccn_id),
        None => unaligned_checks(snapshot),
    }
}

fn aligned_checks(
    snapshot: &CourseSnapshot,
    config: &InstitutionConfig,
    ccn_id: &str,
) -> Vec<ComplianceFinding> {
    let mut findings = Vec::with_capacity(3);

    // CCN-001: the transferability CB code must mark the course as
    // transferable to both university systems.
    let transfer_code = snapshot.cb_code(&config.transfer_cb_key);
    let transferable = transfer_code == Some(config.transferable_code.as_str());
    findings.push(if transferable {
        ComplianceFinding::new(
            "CCN-001",
            "CCN transferability",
            RuleCategory::CcnAlignment,
            ComplianceStatus::Pass,
            format!(
                "{} = {} marks the course transferable to both university systems",
                config.transfer_cb_key, config.transferable_code
            ),
        )
        .with_section("cb_codes")
    } else {
        ComplianceFinding::new(
            "CCN-001",
            "CCN transferability",
            RuleCategory::CcnAlignment,
            ComplianceStatus::Fail,
            format!(
                "{} is {} but a CCN-aligned course must be transferable to both university systems",
                config.transfer_cb_key,
                transfer_code.unwrap_or("unset"),
            ),
        )
        .with_section("cb_codes")
        .with_citation(AB1111_CITATION)
        .with_recommendation(format!(
            "Set {} to {}",
            config.transfer_cb_key, config.transferable_code
        ))
    });

    // CCN-002: aligned courses are expected to carry at least the
    // statewide minimum units.
    findings.push(if snapshot.units >= config.ccn_minimum_units {
        ComplianceFinding::new(
            "CCN-002",
            "CCN unit minimum",
            RuleCategory::CcnAlignment,
            ComplianceStatus::Pass,
            format!(
                "{} units meets the {}-unit CCN minimum",
                snapshot.units, config.ccn_minimum_units
            ),
        )
        .with_section("units")
    } else {
        ComplianceFinding::new(
            "CCN-002",
            "CCN unit minimum",
            RuleCategory::CcnAlignment,
            ComplianceStatus::Warn,
            format!(
                "{} units is below the {}-unit CCN minimum",
                snapshot.units, config.ccn_minimum_units
            ),
        )
        .with_section("units")
        .with_recommendation("Review unit value against the C-ID descriptor")
    });

    // CCN-003: informational confirmation of the aligned standard.
    findings.push(
        ComplianceFinding::new(
            "CCN-003",
            "CCN alignment declared",
            RuleCategory::CcnAlignment,
            ComplianceStatus::Pass,
            format!("Course is aligned to {ccn_id}"),
        )
        .with_section("ccn_id"),
    );

    findings
}

fn unaligned_checks(snapshot: &CourseSnapshot) -> Vec<ComplianceFinding> {
    let justified = snapshot
        .ccn_justification
        .as_ref()
        .is_some_and(|j| j.reason.is_some());

    let finding = if justified {
        ComplianceFinding::new(
            "CCN-010",
            "CCN exemption justified",
            RuleCategory::CcnAlignment,
            ComplianceStatus::Pass,
            "Non-alignment is justified with a recorded reason",
        )
        .with_section("ccn_justification")
    } else {
        ComplianceFinding::new(
            "CCN-010",
            "CCN exemption justified",
            RuleCategory::CcnAlignment,
            ComplianceStatus::Warn,
            "Course is not CCN-aligned and carries no justification",
        )
        .with_section("ccn_justification")
        .with_citation(AB1111_CITATION)
        .with_recommendation("Align the course to a C-ID standard or record an exemption reason")
    };

    vec![finding]
}
