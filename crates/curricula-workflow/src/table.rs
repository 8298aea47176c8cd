//! The transition table: every legal move, who may make it, and
//! whether a justification comment is required.
//!
//! `Approved` has no rows with it as the source; the only path forward
//! from an approved course is duplication into a new draft, outside
//! this core.

use curricula_types::{ActorRole, WorkflowStatus};

/// One row of the transition table
#[derive(Clone, Copy, Debug)]
pub struct TransitionRule {
    pub from: WorkflowStatus,
    pub to: WorkflowStatus,
    pub allowed_roles: &'static [ActorRole],
    pub requires_comment: bool,
}

use ActorRole::{Admin, ArticulationOfficer, CurriculumChair, Faculty};
use WorkflowStatus::{
    Approved, ArticulationReview, CurriculumCommittee, DeptReview, Draft,
};

/// The complete rule set. Backward rows (returns to `Draft`) all
/// require a comment; forward rows never do.
pub const TRANSITION_TABLE: &[TransitionRule] = &[
    TransitionRule {
        from: Draft,
        to: DeptReview,
        allowed_roles: &[Faculty, Admin],
        requires_comment: false,
    },
    TransitionRule {
        from: DeptReview,
        to: CurriculumCommittee,
        allowed_roles: &[CurriculumChair, Admin],
        requires_comment: false,
    },
    TransitionRule {
        from: DeptReview,
        to: Draft,
        allowed_roles: &[CurriculumChair, Admin],
        requires_comment: true,
    },
    TransitionRule {
        from: CurriculumCommittee,
        to: ArticulationReview,
        allowed_roles: &[CurriculumChair, Admin],
        requires_comment: false,
    },
    TransitionRule {
        from: CurriculumCommittee,
        to: Draft,
        allowed_roles: &[CurriculumChair, Admin],
        requires_comment: true,
    },
    TransitionRule {
        from: ArticulationReview,
        to: Approved,
        allowed_roles: &[ArticulationOfficer, Admin],
        requires_comment: false,
    },
    TransitionRule {
        from: ArticulationReview,
        to: Draft,
        allowed_roles: &[ArticulationOfficer, Admin],
        requires_comment: true,
    },
];

/// Look up the rule for a `(from, to)` pair
pub fn find_rule(from: WorkflowStatus, to: WorkflowStatus) -> Option<&'static TransitionRule> {
    TRANSITION_TABLE
        .iter()
        .find(|rule| rule.from == from && rule.to == to)
}

/// Whether `role` may execute the `(from, to)` transition
pub fn is_allowed(from: WorkflowStatus, to: WorkflowStatus, role: ActorRole) -> bool {
    find_rule(from, to).is_some_and(|rule| rule.allowed_roles.contains(&role))
}

/// Whether the `(from, to)` transition requires a justification comment
pub fn requires_comment(from: WorkflowStatus, to: WorkflowStatus) -> bool {
    find_rule(from, to).is_some_and(|rule| rule.requires_comment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approved_has_no_outgoing_rules() {
        assert!(TRANSITION_TABLE.iter().all(|rule| rule.from != Approved));
        for to in WorkflowStatus::ALL {
            assert!(find_rule(Approved, to).is_none());
        }
    }

    #[test]
    fn test_every_backward_row_requires_comment() {
        for rule in TRANSITION_TABLE {
            let backward = rule.to.forward_order() < rule.from.forward_order();
            assert_eq!(rule.requires_comment, backward, "{:?}", rule);
        }
    }

    #[test]
    fn test_admin_may_execute_every_row() {
        for rule in TRANSITION_TABLE {
            assert!(rule.allowed_roles.contains(&Admin), "{:?}", rule);
        }
    }

    #[test]
    fn test_author_submits_draft() {
        assert!(is_allowed(Draft, DeptReview, Faculty));
        assert!(!is_allowed(Draft, DeptReview, CurriculumChair));
        assert!(!is_allowed(Draft, DeptReview, ArticulationOfficer));
    }

    #[test]
    fn test_only_articulation_approves() {
        assert!(is_allowed(ArticulationReview, Approved, ArticulationOfficer));
        assert!(is_allowed(ArticulationReview, Approved, Admin));
        assert!(!is_allowed(ArticulationReview, Approved, Faculty));
        assert!(!is_allowed(ArticulationReview, Approved, CurriculumChair));
    }

    #[test]
    fn test_no_stage_skipping() {
        assert!(find_rule(Draft, CurriculumCommittee).is_none());
        assert!(find_rule(Draft, Approved).is_none());
        assert!(find_rule(DeptReview, Approved).is_none());
        assert!(find_rule(CurriculumCommittee, Approved).is_none());
    }

    #[test]
    fn test_no_self_transitions() {
        for status in WorkflowStatus::ALL {
            assert!(find_rule(status, status).is_none());
        }
    }
}
