//! Reconciliation domain types.

use calyx_shared::types::{BankTransactionId, PaymentId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of bank statement transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BankTransactionKind {
    /// Money in.
    Deposit,
    /// Money out.
    Withdrawal,
    /// Bank fee.
    Fee,
    /// Interest earned.
    Interest,
    /// Anything else.
    Other,
}

/// How the matcher found a candidate pairing.
///
/// A coarse label, not a numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchConfidence {
    /// Same amount, same date.
    Exact,
    /// Same amount, date within the matching window.
    High,
}

/// Reconciliation state of a bank transaction.
///
/// The only forward transition into `Reconciled` is the explicit reconcile
/// call; there is no unreconcile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReconciliationState {
    /// Not yet matched or reconciled.
    Pending,
    /// A match has been proposed and recorded; not yet confirmed.
    Matched,
    /// Confirmed reconciled.
    Reconciled,
}

impl ReconciliationState {
    /// Returns true if the row can still be reconciled.
    #[must_use]
    pub const fn can_reconcile(self) -> bool {
        matches!(self, Self::Pending | Self::Matched)
    }
}

/// The matcher's view of one bank statement transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementLine {
    /// The bank transaction ID.
    pub id: BankTransactionId,
    /// Date the bank reports for the transaction.
    pub transaction_date: NaiveDate,
    /// Kind of transaction.
    pub kind: BankTransactionKind,
    /// Unsigned amount.
    pub amount: Decimal,
}

/// The matcher's view of one unreconciled payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidatePayment {
    /// The payment ID.
    pub id: PaymentId,
    /// Payment amount.
    pub amount: Decimal,
    /// Date the payment was recorded.
    pub payment_date: NaiveDate,
}

/// A proposed pairing between a statement line and a payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchProposal {
    /// The bank transaction being matched.
    pub bank_transaction_id: BankTransactionId,
    /// The payment it matches.
    pub payment_id: PaymentId,
    /// The amount both sides agree on.
    pub matched_amount: Decimal,
    /// How the match was found.
    pub confidence: MatchConfidence,
}

/// Result of an auto-match pass over one account's statement lines.
#[derive(Debug, Clone, Default)]
pub struct AutoMatchOutcome {
    /// One proposal per matched statement line.
    pub proposals: Vec<MatchProposal>,
    /// Number of statement lines scanned.
    pub scanned: usize,
}

impl AutoMatchOutcome {
    /// Number of statement lines that found a match.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.proposals.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_can_reconcile() {
        assert!(ReconciliationState::Pending.can_reconcile());
        assert!(ReconciliationState::Matched.can_reconcile());
        assert!(!ReconciliationState::Reconciled.can_reconcile());
    }

    #[test]
    fn test_outcome_counts() {
        let outcome = AutoMatchOutcome::default();
        assert_eq!(outcome.matched_count(), 0);
        assert_eq!(outcome.scanned, 0);
    }
}
