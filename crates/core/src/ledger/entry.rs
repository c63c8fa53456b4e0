//! Journal line domain types.

use calyx_shared::types::{AccountId, JournalId, JournalLineId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Side of a ledger posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySide {
    /// Debit entry (increases assets/expenses, decreases liabilities/equity/income).
    Debit,
    /// Credit entry (decreases assets/expenses, increases liabilities/equity/income).
    Credit,
}

/// A single line in a journal.
///
/// Each journal consists of lines that must balance (debits = credits).
/// Exactly one of `debit` and `credit` is non-zero per line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalLine {
    /// Unique identifier for this line.
    pub id: JournalLineId,
    /// The journal this line belongs to.
    pub journal_id: JournalId,
    /// The account affected by this line.
    pub account_id: AccountId,
    /// Debit amount (zero if this is a credit line).
    pub debit: Decimal,
    /// Credit amount (zero if this is a debit line).
    pub credit: Decimal,
    /// Optional description for this line.
    pub memo: Option<String>,
}

impl JournalLine {
    /// Creates a debit line.
    #[must_use]
    pub fn debit(journal_id: JournalId, account_id: AccountId, amount: Decimal) -> Self {
        Self {
            id: JournalLineId::new(),
            journal_id,
            account_id,
            debit: amount,
            credit: Decimal::ZERO,
            memo: None,
        }
    }

    /// Creates a credit line.
    #[must_use]
    pub fn credit(journal_id: JournalId, account_id: AccountId, amount: Decimal) -> Self {
        Self {
            id: JournalLineId::new(),
            journal_id,
            account_id,
            debit: Decimal::ZERO,
            credit: amount,
            memo: None,
        }
    }

    /// Attaches a memo to the line.
    #[must_use]
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    /// Returns the side of this line, if exactly one side is set.
    #[must_use]
    pub fn side(&self) -> Option<EntrySide> {
        match (self.debit.is_zero(), self.credit.is_zero()) {
            (false, true) => Some(EntrySide::Debit),
            (true, false) => Some(EntrySide::Credit),
            _ => None,
        }
    }

    /// Returns the signed amount (positive for debit, negative for credit).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        self.debit - self.credit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_debit_line_has_debit_side() {
        let line = JournalLine::debit(JournalId::new(), AccountId::new(), dec!(75.50));
        assert_eq!(line.side(), Some(EntrySide::Debit));
        assert_eq!(line.signed_amount(), dec!(75.50));
        assert!(line.credit.is_zero());
    }

    #[test]
    fn test_credit_line_has_credit_side() {
        let line = JournalLine::credit(JournalId::new(), AccountId::new(), dec!(75.50));
        assert_eq!(line.side(), Some(EntrySide::Credit));
        assert_eq!(line.signed_amount(), dec!(-75.50));
        assert!(line.debit.is_zero());
    }

    #[test]
    fn test_side_is_none_when_ambiguous() {
        let mut line = JournalLine::debit(JournalId::new(), AccountId::new(), dec!(10));
        line.credit = dec!(10);
        assert_eq!(line.side(), None);

        line.debit = Decimal::ZERO;
        line.credit = Decimal::ZERO;
        assert_eq!(line.side(), None);
    }

    #[test]
    fn test_with_memo() {
        let line = JournalLine::debit(JournalId::new(), AccountId::new(), dec!(10))
            .with_memo("office chairs");
        assert_eq!(line.memo.as_deref(), Some("office chairs"));
    }
}
