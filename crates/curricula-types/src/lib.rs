//! Curricula Domain Types
//!
//! Shared types for the course lifecycle core: the snapshot of a course
//! document that the audit and workflow subsystems operate on, the
//! five-stage approval workflow, the immutable transition records that
//! form a course's audit trail, reviewer comments, and the compliance
//! findings produced by the audit engine.
//!
//! # Key Concepts
//!
//! - **CourseSnapshot**: The subset of course data the audit/workflow
//!   core needs. A value, not an entity; the document store owns the
//!   full record.
//! - **WorkflowStatus**: The five lifecycle stages, totally ordered for
//!   forward motion. `Approved` is terminal.
//! - **TransitionRecord**: One immutable ledger row per transition:
//!   who, when, from/to, and the justification comment if any.
//! - **ComplianceFinding / ComplianceReport**: The audit engine's
//!   output. A derived view of the snapshot, never the source of truth.
//!
//! # Design Principles
//!
//! 1. Actor identity and role are always explicit parameters. Nothing
//!    in this workspace reads the current user from ambient state.
//! 2. Transition records are write-once. There is no API to mutate one.
//! 3. Compliance reports are pure functions of snapshots and carry no
//!    clock or random state, so identical snapshots compare equal.

#![deny(unsafe_code)]

mod comment;
mod compliance;
mod course;
mod errors;
mod ids;
mod workflow;

pub use comment::*;
pub use compliance::*;
pub use course::*;
pub use errors::*;
pub use ids::*;
pub use workflow::*;
