//! Posting repository for ledger database operations.
//!
//! Each posting operation runs the pure core poster first, then persists
//! its result (one memo transaction, one journal, two lines) inside a
//! single database transaction. Nothing is partially committed.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use tracing::debug;
use uuid::Uuid;

use calyx_core::ledger::{
    AccountSnapshot, DocumentKind, DocumentRef, DocumentStatus, LedgerError, LedgerPoster,
    PostingResult,
};
use calyx_shared::types::AccountId;

use crate::entities::{chart_of_accounts, journal_lines, journals, transactions};

/// Error types for posting operations.
#[derive(Debug, thiserror::Error)]
pub enum PostingError {
    /// Ledger rule violation (imbalance, bad amount, inactive account, state).
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for posting one bill line.
#[derive(Debug, Clone)]
pub struct BillLineInput {
    /// The expense account to debit.
    pub expense_account: Uuid,
    /// The liability (payables) account to credit.
    pub liability_account: Uuid,
    /// Line amount, tax included.
    pub amount: Decimal,
    /// Date of the bill.
    pub date: NaiveDate,
    /// Line memo.
    pub memo: String,
}

/// Input for posting one bill payment.
#[derive(Debug, Clone)]
pub struct PaymentLineInput {
    /// The liability (payables) account to debit.
    pub liability_account: Uuid,
    /// The bank account to credit.
    pub bank_account: Uuid,
    /// Payment amount.
    pub amount: Decimal,
    /// Date of the payment.
    pub date: NaiveDate,
    /// Payment memo.
    pub memo: String,
}

/// Persisted rows for one posting.
#[derive(Debug, Clone)]
pub struct PostingRecord {
    /// The memo transaction row.
    pub transaction: transactions::Model,
    /// The journal header row.
    pub journal: journals::Model,
    /// The journal line rows.
    pub lines: Vec<journal_lines::Model>,
}

/// Posting repository wrapping the core ledger poster.
#[derive(Debug, Clone)]
pub struct PostingRepository {
    db: DatabaseConnection,
}

impl PostingRepository {
    /// Creates a new posting repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts one bill line against a bill document.
    ///
    /// # Errors
    ///
    /// Returns an error if a ledger rule is violated or the database
    /// transaction fails; on error nothing is persisted.
    pub async fn post_bill_line(
        &self,
        bill_id: Uuid,
        input: &BillLineInput,
    ) -> Result<PostingRecord, PostingError> {
        let document = DocumentRef::new(DocumentKind::Bill, bill_id);
        let snapshots = self
            .load_snapshots(&[input.expense_account, input.liability_account])
            .await?;

        let result = LedgerPoster::post_bill_line(
            AccountId::from_uuid(input.expense_account),
            AccountId::from_uuid(input.liability_account),
            input.amount,
            input.date,
            &input.memo,
            document,
            lookup_in(&snapshots),
        )?;

        let txn = self.db.begin().await?;
        let record = Self::insert_posting(&txn, &result).await?;
        txn.commit().await?;

        debug!(journal_id = %record.journal.id, bill_id = %bill_id, "posted bill line");
        Ok(record)
    }

    /// Posts one bill payment against a payment document.
    ///
    /// # Errors
    ///
    /// Returns an error if a ledger rule is violated or the database
    /// transaction fails; on error nothing is persisted.
    pub async fn post_payment_line(
        &self,
        payment_id: Uuid,
        input: &PaymentLineInput,
    ) -> Result<PostingRecord, PostingError> {
        let document = DocumentRef::new(DocumentKind::Payment, payment_id);
        let snapshots = self
            .load_snapshots(&[input.liability_account, input.bank_account])
            .await?;

        let result = LedgerPoster::post_payment_line(
            AccountId::from_uuid(input.liability_account),
            AccountId::from_uuid(input.bank_account),
            input.amount,
            input.date,
            &input.memo,
            document,
            lookup_in(&snapshots),
        )?;

        let txn = self.db.begin().await?;
        let record = Self::insert_posting(&txn, &result).await?;
        txn.commit().await?;

        debug!(journal_id = %record.journal.id, payment_id = %payment_id, "posted payment line");
        Ok(record)
    }

    /// Replaces all postings of a draft bill.
    ///
    /// Deletes every journal and memo transaction tagged with the bill,
    /// then re-posts the given lines, all inside one transaction. Only
    /// permitted while the bill is editable; a finalized bill fails before
    /// anything is touched.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::DocumentFinalized` for finalized bills, or a
    /// ledger/database error from re-posting. On error the delete is rolled
    /// back along with everything else.
    pub async fn repost_bill(
        &self,
        bill_id: Uuid,
        status: DocumentStatus,
        lines: &[BillLineInput],
    ) -> Result<Vec<PostingRecord>, PostingError> {
        LedgerPoster::validate_can_repost(status)?;

        let document = DocumentRef::new(DocumentKind::Bill, bill_id);

        // Resolve accounts before opening the transaction; the lookup is
        // synchronous once loaded.
        let mut account_ids: Vec<Uuid> = Vec::with_capacity(lines.len() * 2);
        for line in lines {
            account_ids.push(line.expense_account);
            account_ids.push(line.liability_account);
        }
        let snapshots = self.load_snapshots(&account_ids).await?;

        let mut results: Vec<PostingResult> = Vec::with_capacity(lines.len());
        for line in lines {
            results.push(LedgerPoster::post_bill_line(
                AccountId::from_uuid(line.expense_account),
                AccountId::from_uuid(line.liability_account),
                line.amount,
                line.date,
                &line.memo,
                document,
                lookup_in(&snapshots),
            )?);
        }

        let txn = self.db.begin().await?;

        // Journal lines go with their journals via ON DELETE CASCADE.
        journals::Entity::delete_many()
            .filter(journals::Column::DocumentKind.eq(
                crate::entities::sea_orm_active_enums::DocumentKind::Bill,
            ))
            .filter(journals::Column::DocumentId.eq(bill_id))
            .exec(&txn)
            .await?;
        transactions::Entity::delete_many()
            .filter(transactions::Column::DocumentKind.eq(
                crate::entities::sea_orm_active_enums::DocumentKind::Bill,
            ))
            .filter(transactions::Column::DocumentId.eq(bill_id))
            .exec(&txn)
            .await?;

        let mut records = Vec::with_capacity(results.len());
        for result in &results {
            records.push(Self::insert_posting(&txn, result).await?);
        }

        txn.commit().await?;

        debug!(bill_id = %bill_id, journals = records.len(), "reposted bill");
        Ok(records)
    }

    /// Lists the journals posted for a document, with their lines.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn journals_for_document(
        &self,
        document: DocumentRef,
    ) -> Result<Vec<(journals::Model, Vec<journal_lines::Model>)>, PostingError> {
        let kind: crate::entities::sea_orm_active_enums::DocumentKind = document.kind.into();
        let found = journals::Entity::find()
            .filter(journals::Column::DocumentKind.eq(kind))
            .filter(journals::Column::DocumentId.eq(document.id))
            .find_with_related(journal_lines::Entity)
            .all(&self.db)
            .await?;

        Ok(found)
    }

    /// Loads account snapshots for the given IDs.
    ///
    /// Accounts are loaded up front so the core poster's lookup seam stays
    /// a plain closure over in-memory data.
    async fn load_snapshots(
        &self,
        ids: &[Uuid],
    ) -> Result<HashMap<AccountId, AccountSnapshot>, PostingError> {
        let accounts = chart_of_accounts::Entity::find()
            .filter(chart_of_accounts::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await?;

        Ok(accounts
            .into_iter()
            .map(|a| {
                let id = AccountId::from_uuid(a.id);
                (
                    id,
                    AccountSnapshot {
                        id,
                        is_active: a.is_active,
                        account_type: a.account_type.into(),
                    },
                )
            })
            .collect())
    }

    /// Inserts one posting result (memo transaction + journal + lines).
    async fn insert_posting(
        txn: &DatabaseTransaction,
        result: &PostingResult,
    ) -> Result<PostingRecord, PostingError> {
        let now = Utc::now().into();

        let journal = journals::ActiveModel {
            id: Set(result.journal.id.into_inner()),
            entry_date: Set(result.journal.entry_date),
            description: Set(result.journal.description.clone()),
            document_kind: Set(result.journal.document.kind.into()),
            document_id: Set(result.journal.document.id),
            created_at: Set(now),
        };
        let journal = journal.insert(txn).await?;

        let mut lines = Vec::with_capacity(result.journal.lines.len());
        for line in &result.journal.lines {
            let model = journal_lines::ActiveModel {
                id: Set(line.id.into_inner()),
                journal_id: Set(line.journal_id.into_inner()),
                account_id: Set(line.account_id.into_inner()),
                debit: Set(line.debit),
                credit: Set(line.credit),
                memo: Set(line.memo.clone()),
                created_at: Set(now),
            };
            lines.push(model.insert(txn).await?);
        }

        let transaction = transactions::ActiveModel {
            id: Set(result.transaction.id.into_inner()),
            account_id: Set(result.transaction.account_id.into_inner()),
            side: Set(result.transaction.side.into()),
            amount: Set(result.transaction.amount),
            description: Set(result.transaction.description.clone()),
            transaction_date: Set(result.transaction.transaction_date),
            document_kind: Set(result.transaction.document.kind.into()),
            document_id: Set(result.transaction.document.id),
            created_at: Set(now),
        };
        let transaction = transaction.insert(txn).await?;

        Ok(PostingRecord {
            transaction,
            journal,
            lines,
        })
    }
}

/// Account lookup closure over a preloaded snapshot map.
fn lookup_in(
    snapshots: &HashMap<AccountId, AccountSnapshot>,
) -> impl Fn(AccountId) -> Result<AccountSnapshot, LedgerError> + '_ {
    move |id| {
        snapshots
            .get(&id)
            .copied()
            .ok_or(LedgerError::AccountNotFound(id))
    }
}
