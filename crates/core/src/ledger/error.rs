//! Ledger error types for validation and state errors.

use calyx_shared::types::AccountId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// Posting amount must be positive.
    #[error("Posting amount must be positive")]
    AmountNotPositive,

    /// Journal must have at least 2 lines.
    #[error("Journal must have at least 2 lines")]
    InsufficientLines,

    /// Journal is not balanced (debits != credits).
    #[error("Journal is not balanced. Debits: {debits}, Credits: {credits}")]
    Imbalanced {
        /// Total debit amount.
        debits: Decimal,
        /// Total credit amount.
        credits: Decimal,
    },

    /// Line amounts cannot be negative.
    #[error("Line amounts cannot be negative")]
    NegativeAmount,

    /// A line must set either debit or credit, not both.
    #[error("A line must set either debit or credit, not both")]
    BothSidesSet,

    /// A line must set one of debit or credit.
    #[error("A line must set one of debit or credit")]
    NoSideSet,

    /// Journal must have both debit and credit lines.
    #[error("Journal must have both debit and credit lines")]
    SingleSided,

    // ========== Account Errors ==========
    /// Account not found.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Account is inactive and cannot be posted to.
    #[error("Account {0} is inactive")]
    AccountInactive(AccountId),

    // ========== Document State Errors ==========
    /// Cannot replace postings of a finalized document.
    #[error("Cannot repost a finalized document")]
    DocumentFinalized,
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::AmountNotPositive => "AMOUNT_NOT_POSITIVE",
            Self::InsufficientLines => "INSUFFICIENT_LINES",
            Self::Imbalanced { .. } => "IMBALANCED_ENTRY",
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::BothSidesSet => "BOTH_SIDES_SET",
            Self::NoSideSet => "NO_SIDE_SET",
            Self::SingleSided => "SINGLE_SIDED",
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::AccountInactive(_) => "ACCOUNT_INACTIVE",
            Self::DocumentFinalized => "DOCUMENT_FINALIZED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            LedgerError::AmountNotPositive.error_code(),
            "AMOUNT_NOT_POSITIVE"
        );
        assert_eq!(
            LedgerError::Imbalanced {
                debits: dec!(100.00),
                credits: dec!(50.00),
            }
            .error_code(),
            "IMBALANCED_ENTRY"
        );
        assert_eq!(
            LedgerError::DocumentFinalized.error_code(),
            "DOCUMENT_FINALIZED"
        );
    }

    #[test]
    fn test_error_display() {
        let err = LedgerError::Imbalanced {
            debits: dec!(100.00),
            credits: dec!(50.00),
        };
        assert_eq!(
            err.to_string(),
            "Journal is not balanced. Debits: 100.00, Credits: 50.00"
        );
    }
}
