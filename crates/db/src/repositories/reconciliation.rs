//! Reconciliation repository for bank matching database operations.
//!
//! Matching and reconciling are two separate operations. `auto_match_account`
//! records match proposals on bank transactions but never flips `reconciled`;
//! `reconcile` flips the flags for an explicit, user-confirmed selection as
//! two bulk updates inside one all-or-nothing transaction.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, info};
use uuid::Uuid;

use calyx_core::reconciliation::{
    auto_match, validate_transition, CandidatePayment, ReconciliationError as CoreError,
    ReconciliationSession, ReconciliationState, StatementLine,
};
use calyx_shared::types::{BankTransactionId, PaymentId};

use crate::entities::{bank_transactions, payments};

/// Error types for reconciliation operations.
#[derive(Debug, thiserror::Error)]
pub enum ReconciliationError {
    /// Reconciliation rule violation.
    #[error(transparent)]
    Rule(#[from] CoreError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Per-row-count report of one reconcile call.
///
/// Already-reconciled rows in the selection are skipped, not failed; the
/// caller decides how to present partial success.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReconcileSummary {
    /// Bank transactions flipped to reconciled.
    pub bank_transactions_reconciled: u64,
    /// Payments flipped to reconciled.
    pub payments_reconciled: u64,
    /// Selected rows that were already reconciled and left untouched.
    pub skipped: u64,
}

/// Reconciliation repository.
#[derive(Debug, Clone)]
pub struct ReconciliationRepository {
    db: DatabaseConnection,
}

impl ReconciliationRepository {
    /// Creates a new reconciliation repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists unreconciled bank transactions for an account, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn unreconciled_bank_transactions(
        &self,
        bank_account_id: Uuid,
    ) -> Result<Vec<bank_transactions::Model>, ReconciliationError> {
        let rows = bank_transactions::Entity::find()
            .filter(bank_transactions::Column::BankAccountId.eq(bank_account_id))
            .filter(bank_transactions::Column::Reconciled.eq(false))
            .order_by_desc(bank_transactions::Column::TransactionDate)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    /// Lists unreconciled payments for an account.
    ///
    /// Ordered by payment date then ID so the matcher's first-match-wins
    /// scan is deterministic for a given database state.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn unreconciled_payments(
        &self,
        bank_account_id: Uuid,
    ) -> Result<Vec<payments::Model>, ReconciliationError> {
        let rows = payments::Entity::find()
            .filter(payments::Column::BankAccountId.eq(bank_account_id))
            .filter(payments::Column::Reconciled.eq(false))
            .order_by_asc(payments::Column::PaymentDate)
            .order_by_asc(payments::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows)
    }

    /// Proposes matches for every unreconciled bank transaction of an account.
    ///
    /// Each successful match writes `payment_id`, `matched_amount`, and
    /// `match_confidence` onto the bank transaction. The `reconciled` flag
    /// is never touched here; confirming is a separate step. Returns the
    /// number of matched transactions.
    ///
    /// # Errors
    ///
    /// Returns an error if a database operation fails; on error no proposal
    /// is persisted.
    pub async fn auto_match_account(
        &self,
        bank_account_id: Uuid,
        window_days: i64,
    ) -> Result<usize, ReconciliationError> {
        let bank_rows = self.unreconciled_bank_transactions(bank_account_id).await?;
        let payment_rows = self.unreconciled_payments(bank_account_id).await?;

        let lines: Vec<StatementLine> = bank_rows
            .iter()
            .map(|t| StatementLine {
                id: BankTransactionId::from_uuid(t.id),
                transaction_date: t.transaction_date,
                kind: t.kind.clone().into(),
                amount: t.amount,
            })
            .collect();
        let candidates: Vec<CandidatePayment> = payment_rows
            .iter()
            .map(|p| CandidatePayment {
                id: PaymentId::from_uuid(p.id),
                amount: p.amount,
                payment_date: p.payment_date,
            })
            .collect();

        let outcome = auto_match(&lines, &candidates, window_days);

        let txn = self.db.begin().await?;
        for proposal in &outcome.proposals {
            let update = bank_transactions::ActiveModel {
                id: Set(proposal.bank_transaction_id.into_inner()),
                payment_id: Set(Some(proposal.payment_id.into_inner())),
                matched_amount: Set(Some(proposal.matched_amount)),
                match_confidence: Set(Some(proposal.confidence.into())),
                ..Default::default()
            };
            update.update(&txn).await?;
        }
        txn.commit().await?;

        debug!(
            bank_account_id = %bank_account_id,
            scanned = outcome.scanned,
            matched = outcome.matched_count(),
            "auto-matched bank transactions"
        );
        Ok(outcome.matched_count())
    }

    /// Confirms a reconciliation for an explicit selection of rows.
    ///
    /// Runs two independent bulk updates inside one all-or-nothing
    /// transaction: selected bank transactions get `reconciled`,
    /// `reconciled_by`, and `reconciled_at`; selected payments get
    /// `reconciled` and `reconciled_date` (the session's statement date).
    /// Partial selection is legal. Rows already reconciled are skipped and
    /// reported in the summary.
    ///
    /// # Errors
    ///
    /// Returns `ReconciliationError::Rule` if the selection is empty, or a
    /// database error; on error nothing is flipped.
    pub async fn reconcile(
        &self,
        session: &ReconciliationSession,
        bank_transaction_ids: &[Uuid],
        payment_ids: &[Uuid],
    ) -> Result<ReconcileSummary, ReconciliationError> {
        if bank_transaction_ids.is_empty() && payment_ids.is_empty() {
            return Err(CoreError::EmptySelection.into());
        }

        let txn = self.db.begin().await?;

        let mut summary = ReconcileSummary::default();

        // Per-row transition validation: rows that fail the state check are
        // skipped and counted, not errored.
        if !bank_transaction_ids.is_empty() {
            let selected = bank_transactions::Entity::find()
                .filter(bank_transactions::Column::Id.is_in(bank_transaction_ids.iter().copied()))
                .all(&txn)
                .await?;

            let confirmable: Vec<Uuid> = selected
                .iter()
                .filter(|row| validate_transition(transaction_state(row)).is_ok())
                .map(|row| row.id)
                .collect();
            summary.skipped += (selected.len() - confirmable.len()) as u64;

            if !confirmable.is_empty() {
                let result = bank_transactions::Entity::update_many()
                    .col_expr(bank_transactions::Column::Reconciled, Expr::value(true))
                    .col_expr(
                        bank_transactions::Column::ReconciledBy,
                        Expr::value(session.reconciled_by.into_inner()),
                    )
                    .col_expr(
                        bank_transactions::Column::ReconciledAt,
                        Expr::value(session.reconciled_at),
                    )
                    .filter(bank_transactions::Column::Id.is_in(confirmable))
                    .exec(&txn)
                    .await?;
                summary.bank_transactions_reconciled = result.rows_affected;
            }
        }

        if !payment_ids.is_empty() {
            let result = payments::Entity::update_many()
                .col_expr(payments::Column::Reconciled, Expr::value(true))
                .col_expr(
                    payments::Column::ReconciledDate,
                    Expr::value(session.statement_date),
                )
                .filter(payments::Column::Id.is_in(payment_ids.iter().copied()))
                .filter(payments::Column::Reconciled.eq(false))
                .exec(&txn)
                .await?;
            summary.payments_reconciled = result.rows_affected;
            summary.skipped += (payment_ids.len() as u64).saturating_sub(result.rows_affected);
        }

        txn.commit().await?;

        info!(
            bank_account_id = %session.bank_account_id,
            statement_date = %session.statement_date,
            bank_transactions = summary.bank_transactions_reconciled,
            payments = summary.payments_reconciled,
            skipped = summary.skipped,
            "reconciliation confirmed"
        );
        Ok(summary)
    }
}

/// Derives the reconciliation state of a bank transaction row.
#[must_use]
pub fn transaction_state(row: &bank_transactions::Model) -> ReconciliationState {
    if row.reconciled {
        ReconciliationState::Reconciled
    } else if row.payment_id.is_some() {
        ReconciliationState::Matched
    } else {
        ReconciliationState::Pending
    }
}
