//! Course Lifecycle Workflow
//!
//! The state machine that moves a course document through its
//! five-stage approval pipeline, and the append-only ledger that
//! records every transition.
//!
//! # Key Concepts
//!
//! - **TransitionTable**: The complete set of legal moves as a static
//!   lookup table: a `(from, to)` pair to allowed roles and whether a
//!   justification comment is mandatory. One generic check function
//!   replaces per-status branching, and the rule set is exhaustively
//!   enumerable in tests.
//! - **WorkflowEngine**: The pure decision step. Given the current
//!   head, target, actor, and optional comment, it either returns the
//!   new head plus the record to append, or an error. It never touches
//!   storage. The storage layer commits head and record atomically.
//! - **ApprovalLedger**: Write-once transition records per course, read
//!   back in timestamp order for audit trails.
//!
//! Every operation takes the actor explicitly. Backward transitions
//! (any return to `Draft`) require non-blank justification text before
//! anything is written.

#![deny(unsafe_code)]

mod engine;
mod ledger;
mod table;

pub use engine::*;
pub use ledger::*;
pub use table::*;
