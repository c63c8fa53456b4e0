//! Error types for account operations.

use calyx_shared::types::AccountId;
use thiserror::Error;

use super::types::AccountType;

/// Errors that can occur during account operations.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Account code must not be empty.
    #[error("Account code must not be empty")]
    CodeEmpty,

    /// Parent account not found.
    #[error("Parent account not found: {0}")]
    ParentNotFound(AccountId),

    /// Parent and child must share the same account type.
    #[error("Parent account type {parent:?} does not match child type {child:?}")]
    TypeMismatch {
        /// The parent's account type.
        parent: AccountType,
        /// The child's account type.
        child: AccountType,
    },

    /// Sub-accounts cannot themselves have sub-accounts.
    #[error("Parent account {0} is itself a sub-account; only one level of nesting is allowed")]
    ParentNotTopLevel(AccountId),

    /// Assigning this parent would create a cycle.
    #[error("Assigning parent {parent} to account {child} would create a cycle")]
    WouldCycle {
        /// The account receiving a parent.
        child: AccountId,
        /// The proposed parent.
        parent: AccountId,
    },
}

impl AccountError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CodeEmpty => "ACCOUNT_CODE_EMPTY",
            Self::ParentNotFound(_) => "ACCOUNT_PARENT_NOT_FOUND",
            Self::TypeMismatch { .. } => "ACCOUNT_TYPE_MISMATCH",
            Self::ParentNotTopLevel(_) => "ACCOUNT_PARENT_NOT_TOP_LEVEL",
            Self::WouldCycle { .. } => "ACCOUNT_HIERARCHY_CYCLE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AccountError::CodeEmpty.error_code(), "ACCOUNT_CODE_EMPTY");
        assert_eq!(
            AccountError::ParentNotFound(AccountId::new()).error_code(),
            "ACCOUNT_PARENT_NOT_FOUND"
        );
        assert_eq!(
            AccountError::TypeMismatch {
                parent: AccountType::Asset,
                child: AccountType::Expense,
            }
            .error_code(),
            "ACCOUNT_TYPE_MISMATCH"
        );
        assert_eq!(
            AccountError::WouldCycle {
                child: AccountId::new(),
                parent: AccountId::new(),
            }
            .error_code(),
            "ACCOUNT_HIERARCHY_CYCLE"
        );
    }
}
