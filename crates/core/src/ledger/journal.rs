//! Journal aggregate and document lifecycle.

use calyx_shared::types::{AccountId, JournalId, TransactionId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entry::{EntrySide, JournalLine};

/// Kind of business document a journal posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Vendor bill.
    Bill,
    /// Sales invoice.
    Invoice,
    /// Payment applied to a bill or invoice.
    Payment,
}

/// Reference to the business document behind a posting.
///
/// Journals and memo transactions are tagged with this reference so that a
/// draft document's rows can be found and replaced on repost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentRef {
    /// The kind of document.
    pub kind: DocumentKind,
    /// The document's ID.
    pub id: Uuid,
}

impl DocumentRef {
    /// Creates a new document reference.
    #[must_use]
    pub const fn new(kind: DocumentKind, id: Uuid) -> Self {
        Self { kind, id }
    }
}

/// Lifecycle status of a business document.
///
/// Postings can be replaced (delete-and-recreate) only while the document is
/// still editable; a finalized document's rows are immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Document is being drafted.
    Draft,
    /// Document is awaiting approval.
    Pending,
    /// Document has been finalized (immutable).
    Finalized,
}

impl DocumentStatus {
    /// Returns true if the document's postings can still be replaced.
    #[must_use]
    pub const fn is_editable(self) -> bool {
        matches!(self, Self::Draft | Self::Pending)
    }
}

/// A journal: a balanced group of lines representing one business event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Journal {
    /// Unique identifier.
    pub id: JournalId,
    /// Date of the business event.
    pub entry_date: NaiveDate,
    /// Journal description.
    pub description: String,
    /// The document this journal posts.
    pub document: DocumentRef,
    /// The journal lines (at least 2).
    pub lines: Vec<JournalLine>,
}

impl Journal {
    /// Returns the sum of all debit amounts.
    #[must_use]
    pub fn total_debits(&self) -> Decimal {
        self.lines.iter().map(|l| l.debit).sum()
    }

    /// Returns the sum of all credit amounts.
    #[must_use]
    pub fn total_credits(&self) -> Decimal {
        self.lines.iter().map(|l| l.credit).sum()
    }
}

/// Standalone audit row recorded alongside a journal for bill/payment flows.
///
/// One memo transaction captures the "memo" side of the posting pair against
/// the liability or bank account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoTransaction {
    /// Unique identifier.
    pub id: TransactionId,
    /// The account this row audits.
    pub account_id: AccountId,
    /// Debit or credit.
    pub side: EntrySide,
    /// Amount (always positive).
    pub amount: Decimal,
    /// Description.
    pub description: String,
    /// Transaction date.
    pub transaction_date: NaiveDate,
    /// The document behind this row.
    pub document: DocumentRef,
}
