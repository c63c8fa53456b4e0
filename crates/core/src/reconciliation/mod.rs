//! Bank reconciliation logic.
//!
//! This module implements:
//! - Bank statement domain types
//! - Confidence-ranked matching between statement lines and payments
//! - The reconciliation session value object
//! - Error types for reconciliation operations
//!
//! Matching and reconciling are distinct steps: the matcher only proposes
//! pairings, and `reconciled` flags flip only through an explicit,
//! user-confirmed reconcile call.

pub mod error;
pub mod matcher;
pub mod session;
pub mod types;

#[cfg(test)]
mod matcher_props;

pub use error::ReconciliationError;
pub use matcher::{auto_match, find_match, DEFAULT_MATCH_WINDOW_DAYS};
pub use session::{validate_transition, ReconciliationSession};
pub use types::{
    AutoMatchOutcome, BankTransactionKind, CandidatePayment, MatchConfidence, MatchProposal,
    ReconciliationState, StatementLine,
};
