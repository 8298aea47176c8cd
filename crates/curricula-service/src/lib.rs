//! Curricula Service
//!
//! The facade that wires the lifecycle core together: workflow engine,
//! compliance audit engine, approval ledger, and comment store behind
//! one service type, with pluggable storage and a REST surface.
//!
//! The service owns the transactional boundary: a transition's
//! compare-and-swap on the workflow head and the ledger append commit
//! together or not at all. Everything else here is orchestration; the
//! decision logic lives in `curricula-workflow` and `curricula-audit`,
//! both pure.

#![deny(unsafe_code)]

pub mod api;
pub mod config;
pub mod service;
pub mod storage;

pub use config::ServiceConfig;
pub use service::CurriculaService;
