//! Error types for reconciliation operations.

use thiserror::Error;

/// Errors that can occur during reconciliation.
#[derive(Debug, Error)]
pub enum ReconciliationError {
    /// A reconcile call must select at least one row.
    #[error("Reconciliation requires at least one bank transaction or payment")]
    EmptySelection,

    /// Row has already been reconciled.
    #[error("Row has already been reconciled")]
    AlreadyReconciled,

    /// The selected row belongs to a different bank account.
    #[error("Selected row does not belong to the session's bank account")]
    WrongBankAccount,
}

impl ReconciliationError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptySelection => "RECONCILIATION_EMPTY_SELECTION",
            Self::AlreadyReconciled => "ALREADY_RECONCILED",
            Self::WrongBankAccount => "WRONG_BANK_ACCOUNT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ReconciliationError::EmptySelection.error_code(),
            "RECONCILIATION_EMPTY_SELECTION"
        );
        assert_eq!(
            ReconciliationError::AlreadyReconciled.error_code(),
            "ALREADY_RECONCILED"
        );
        assert_eq!(
            ReconciliationError::WrongBankAccount.error_code(),
            "WRONG_BANK_ACCOUNT"
        );
    }
}
