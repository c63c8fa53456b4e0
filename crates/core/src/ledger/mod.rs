//! Double-entry posting logic.
//!
//! This module implements the core ledger functionality:
//! - Journal lines (debits and credits)
//! - Journal aggregates and document lifecycle
//! - Balance validation for journals
//! - The ledger poster translating bill/payment events into balanced entries
//! - Error types for ledger operations

pub mod entry;
pub mod error;
pub mod journal;
pub mod poster;
pub mod validation;

#[cfg(test)]
mod poster_props;

pub use entry::{EntrySide, JournalLine};
pub use error::LedgerError;
pub use journal::{DocumentKind, DocumentRef, DocumentStatus, Journal, MemoTransaction};
pub use poster::{AccountSnapshot, LedgerPoster, PostingResult};
pub use validation::{round_cents, validate_lines};
