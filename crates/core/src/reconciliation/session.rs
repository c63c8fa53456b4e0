//! Reconciliation session value object.
//!
//! A session carries everything one reconciliation run needs: the statement
//! being reconciled against, the acting user, and the timestamp to stamp
//! onto confirmed rows. It is a plain value created by the caller and passed
//! into the reconcile operation; dropping it discards the run. No ambient
//! state exists anywhere.

use calyx_shared::types::{AccountId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ReconciliationError;
use super::types::ReconciliationState;

/// One in-progress bank reconciliation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconciliationSession {
    /// The bank account being reconciled.
    pub bank_account_id: AccountId,
    /// Closing date of the bank statement.
    pub statement_date: NaiveDate,
    /// Statement opening balance.
    pub opening_balance: Decimal,
    /// Statement ending balance.
    pub ending_balance: Decimal,
    /// Service charges reported on the statement but not yet recorded.
    pub service_charges: Decimal,
    /// User confirming the reconciliation.
    pub reconciled_by: UserId,
    /// Timestamp to stamp onto confirmed rows.
    pub reconciled_at: DateTime<Utc>,
}

impl ReconciliationSession {
    /// Creates a new session with no service charges.
    #[must_use]
    pub fn new(
        bank_account_id: AccountId,
        statement_date: NaiveDate,
        opening_balance: Decimal,
        ending_balance: Decimal,
        reconciled_by: UserId,
        reconciled_at: DateTime<Utc>,
    ) -> Self {
        Self {
            bank_account_id,
            statement_date,
            opening_balance,
            ending_balance,
            service_charges: Decimal::ZERO,
            reconciled_by,
            reconciled_at,
        }
    }

    /// Sets the statement's service charges.
    #[must_use]
    pub const fn with_service_charges(mut self, service_charges: Decimal) -> Self {
        self.service_charges = service_charges;
        self
    }

    /// Movement the statement says happened over the period.
    #[must_use]
    pub fn statement_movement(&self) -> Decimal {
        self.ending_balance - self.opening_balance
    }

    /// Difference between the statement movement and the cleared total.
    ///
    /// Service charges count toward the statement movement even though no
    /// payment rows exist for them yet, so they are added back to the
    /// cleared side. A difference of zero means the run balances.
    #[must_use]
    pub fn difference(&self, cleared_total: Decimal) -> Decimal {
        self.statement_movement() - (cleared_total - self.service_charges)
    }

    /// Returns true if the cleared total fully explains the statement.
    #[must_use]
    pub fn is_balanced(&self, cleared_total: Decimal) -> bool {
        self.difference(cleared_total).is_zero()
    }
}

/// Validates that a row in `state` may be confirmed by a reconcile call.
///
/// # Errors
///
/// Returns `ReconciliationError::AlreadyReconciled` for rows that have
/// already been confirmed.
pub const fn validate_transition(state: ReconciliationState) -> Result<(), ReconciliationError> {
    if state.can_reconcile() {
        Ok(())
    } else {
        Err(ReconciliationError::AlreadyReconciled)
    }
}
