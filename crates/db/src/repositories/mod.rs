//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the
//! application. Core business rules stay in `calyx-core`; repositories
//! load the data those rules need, apply them, and persist the results
//! inside one database transaction per operation.

pub mod account;
pub mod posting;
pub mod reconciliation;

pub use account::{AccountError, AccountFilter, AccountRepository, CreateAccountInput};
pub use posting::{
    BillLineInput, PaymentLineInput, PostingError, PostingRecord, PostingRepository,
};
pub use reconciliation::{
    transaction_state, ReconcileSummary, ReconciliationError, ReconciliationRepository,
};

use calyx_shared::AppError;

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::DuplicateCode(_) => Self::Conflict(err.to_string()),
            AccountError::NotFound(_) => Self::NotFound(err.to_string()),
            AccountError::Hierarchy(calyx_core::account::AccountError::CodeEmpty) => {
                Self::Validation(err.to_string())
            }
            AccountError::Hierarchy(_) => Self::BusinessRule(err.to_string()),
            AccountError::Database(_) => Self::Database(err.to_string()),
        }
    }
}

impl From<PostingError> for AppError {
    fn from(err: PostingError) -> Self {
        use calyx_core::ledger::LedgerError;
        match err {
            PostingError::Ledger(LedgerError::DocumentFinalized) => {
                Self::InvalidState(err.to_string())
            }
            PostingError::Ledger(LedgerError::AccountNotFound(_)) => {
                Self::NotFound(err.to_string())
            }
            PostingError::Ledger(
                LedgerError::Imbalanced { .. } | LedgerError::AccountInactive(_),
            ) => Self::BusinessRule(err.to_string()),
            PostingError::Ledger(_) => Self::Validation(err.to_string()),
            PostingError::Database(_) => Self::Database(err.to_string()),
        }
    }
}

impl From<ReconciliationError> for AppError {
    fn from(err: ReconciliationError) -> Self {
        use calyx_core::reconciliation::ReconciliationError as CoreError;
        match err {
            ReconciliationError::Rule(CoreError::EmptySelection) => {
                Self::Validation(err.to_string())
            }
            ReconciliationError::Rule(CoreError::AlreadyReconciled) => {
                Self::InvalidState(err.to_string())
            }
            ReconciliationError::Rule(CoreError::WrongBankAccount) => {
                Self::BusinessRule(err.to_string())
            }
            ReconciliationError::Database(_) => Self::Database(err.to_string()),
        }
    }
}
