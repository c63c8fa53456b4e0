//! Ledger poster translating business events into balanced entries.
//!
//! This module provides the core posting logic for bills and bill payments.
//! It is pure: account data comes in through a lookup closure supplied by
//! the caller, and the result is a value describing the rows to persist.

use calyx_shared::types::{AccountId, JournalId, TransactionId};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::entry::{EntrySide, JournalLine};
use super::error::LedgerError;
use super::journal::{DocumentRef, DocumentStatus, Journal, MemoTransaction};
use super::validation::validate_lines;
use crate::account::AccountType;

/// Information about an account needed for posting validation.
#[derive(Debug, Clone, Copy)]
pub struct AccountSnapshot {
    /// The account ID.
    pub id: AccountId,
    /// Whether the account is active.
    pub is_active: bool,
    /// The account's type.
    pub account_type: AccountType,
}

/// Result of a posting operation: the rows to persist atomically.
#[derive(Debug, Clone)]
pub struct PostingResult {
    /// The standalone audit row for the memo side of the pair.
    pub transaction: MemoTransaction,
    /// The balanced two-line journal.
    pub journal: Journal,
}

/// Ledger poster for bill and payment events.
///
/// Contains pure business logic with no database dependencies. Each
/// operation produces exactly one memo transaction and one two-line journal;
/// both lines derive from the same amount value, so the journal balances by
/// construction (and is validated anyway before being returned).
pub struct LedgerPoster;

impl LedgerPoster {
    /// Posts a bill line: debit the expense account, credit the liability.
    ///
    /// The memo transaction records the credit side against the liability
    /// account, matching how payables are audited.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` if the amount is not positive or either account
    /// is missing or inactive. Nothing is produced on error.
    pub fn post_bill_line<L>(
        expense_account: AccountId,
        liability_account: AccountId,
        amount: Decimal,
        date: NaiveDate,
        memo: &str,
        document: DocumentRef,
        account_lookup: L,
    ) -> Result<PostingResult, LedgerError>
    where
        L: Fn(AccountId) -> Result<AccountSnapshot, LedgerError>,
    {
        Self::post_pair(
            expense_account,
            liability_account,
            EntrySide::Credit,
            amount,
            date,
            memo,
            document,
            account_lookup,
        )
    }

    /// Posts a bill payment: debit the liability account, credit the bank.
    ///
    /// Mirror image of [`Self::post_bill_line`]; the memo transaction
    /// records the debit side against the liability account.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` if the amount is not positive or either account
    /// is missing or inactive.
    pub fn post_payment_line<L>(
        liability_account: AccountId,
        bank_account: AccountId,
        amount: Decimal,
        date: NaiveDate,
        memo: &str,
        document: DocumentRef,
        account_lookup: L,
    ) -> Result<PostingResult, LedgerError>
    where
        L: Fn(AccountId) -> Result<AccountSnapshot, LedgerError>,
    {
        Self::post_pair(
            liability_account,
            bank_account,
            EntrySide::Debit,
            amount,
            date,
            memo,
            document,
            account_lookup,
        )
    }

    /// Validates that a document's postings can be replaced.
    ///
    /// Reposting deletes and recreates a document's journal rows; that is
    /// only permitted while the document is still editable.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::DocumentFinalized` for finalized documents.
    pub const fn validate_can_repost(status: DocumentStatus) -> Result<(), LedgerError> {
        if status.is_editable() {
            Ok(())
        } else {
            Err(LedgerError::DocumentFinalized)
        }
    }

    /// Shared posting shape: debit `debit_account`, credit `credit_account`,
    /// with the memo transaction on `memo_side` of the pair.
    #[allow(clippy::too_many_arguments)]
    fn post_pair<L>(
        debit_account: AccountId,
        credit_account: AccountId,
        memo_side: EntrySide,
        amount: Decimal,
        date: NaiveDate,
        memo: &str,
        document: DocumentRef,
        account_lookup: L,
    ) -> Result<PostingResult, LedgerError>
    where
        L: Fn(AccountId) -> Result<AccountSnapshot, LedgerError>,
    {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::AmountNotPositive);
        }

        let debit_snapshot = Self::resolve_account(debit_account, &account_lookup)?;
        let credit_snapshot = Self::resolve_account(credit_account, &account_lookup)?;

        // The memo row audits the liability side of the pair: for a bill
        // that is the credited account, for a payment the debited one.
        let memo_account = match memo_side {
            EntrySide::Debit => debit_snapshot.id,
            EntrySide::Credit => credit_snapshot.id,
        };

        let journal_id = JournalId::new();
        let lines = vec![
            JournalLine::debit(journal_id, debit_snapshot.id, amount).with_memo(memo),
            JournalLine::credit(journal_id, credit_snapshot.id, amount).with_memo(memo),
        ];

        validate_lines(&lines)?;

        let journal = Journal {
            id: journal_id,
            entry_date: date,
            description: memo.to_string(),
            document,
            lines,
        };

        let transaction = MemoTransaction {
            id: TransactionId::new(),
            account_id: memo_account,
            side: memo_side,
            amount,
            description: memo.to_string(),
            transaction_date: date,
            document,
        };

        Ok(PostingResult {
            transaction,
            journal,
        })
    }

    fn resolve_account<L>(id: AccountId, account_lookup: &L) -> Result<AccountSnapshot, LedgerError>
    where
        L: Fn(AccountId) -> Result<AccountSnapshot, LedgerError>,
    {
        let snapshot = account_lookup(id)?;
        if !snapshot.is_active {
            return Err(LedgerError::AccountInactive(id));
        }
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::journal::DocumentKind;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use uuid::Uuid;

    fn lookup_from(
        accounts: Vec<AccountSnapshot>,
    ) -> impl Fn(AccountId) -> Result<AccountSnapshot, LedgerError> {
        let map: HashMap<AccountId, AccountSnapshot> =
            accounts.into_iter().map(|a| (a.id, a)).collect();
        move |id| map.get(&id).copied().ok_or(LedgerError::AccountNotFound(id))
    }

    fn active(account_type: AccountType) -> AccountSnapshot {
        AccountSnapshot {
            id: AccountId::new(),
            is_active: true,
            account_type,
        }
    }

    fn bill_ref() -> DocumentRef {
        DocumentRef::new(DocumentKind::Bill, Uuid::new_v4())
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    #[test]
    fn test_post_bill_line_shape() {
        let expense = active(AccountType::Expense);
        let payable = active(AccountType::Liability);
        let lookup = lookup_from(vec![expense, payable]);

        let result = LedgerPoster::post_bill_line(
            expense.id,
            payable.id,
            dec!(240.00),
            date(),
            "Office supplies",
            bill_ref(),
            lookup,
        )
        .unwrap();

        // Exactly one memo transaction and one 2-line journal.
        assert_eq!(result.journal.lines.len(), 2);
        assert_eq!(result.journal.total_debits(), dec!(240.00));
        assert_eq!(result.journal.total_credits(), dec!(240.00));

        let debit_line = &result.journal.lines[0];
        let credit_line = &result.journal.lines[1];
        assert_eq!(debit_line.account_id, expense.id);
        assert_eq!(credit_line.account_id, payable.id);

        // Memo row credits the liability account.
        assert_eq!(result.transaction.account_id, payable.id);
        assert_eq!(result.transaction.side, EntrySide::Credit);
        assert_eq!(result.transaction.amount, dec!(240.00));
        assert_eq!(result.transaction.transaction_date, date());
    }

    #[test]
    fn test_post_payment_line_mirrors_bill() {
        let payable = active(AccountType::Liability);
        let bank = active(AccountType::Asset);
        let lookup = lookup_from(vec![payable, bank]);

        let result = LedgerPoster::post_payment_line(
            payable.id,
            bank.id,
            dec!(240.00),
            date(),
            "Payment for bill #1042",
            DocumentRef::new(DocumentKind::Payment, Uuid::new_v4()),
            lookup,
        )
        .unwrap();

        let debit_line = &result.journal.lines[0];
        let credit_line = &result.journal.lines[1];
        assert_eq!(debit_line.account_id, payable.id);
        assert_eq!(credit_line.account_id, bank.id);

        // Memo row debits the liability account.
        assert_eq!(result.transaction.account_id, payable.id);
        assert_eq!(result.transaction.side, EntrySide::Debit);
    }

    #[test]
    fn test_amount_must_be_positive() {
        let expense = active(AccountType::Expense);
        let payable = active(AccountType::Liability);
        let lookup = lookup_from(vec![expense, payable]);

        for amount in [Decimal::ZERO, dec!(-1.00)] {
            let result = LedgerPoster::post_bill_line(
                expense.id,
                payable.id,
                amount,
                date(),
                "Bad",
                bill_ref(),
                &lookup,
            );
            assert!(matches!(result, Err(LedgerError::AmountNotPositive)));
        }
    }

    #[test]
    fn test_missing_account() {
        let expense = active(AccountType::Expense);
        let lookup = lookup_from(vec![expense]);
        let missing = AccountId::new();

        let result = LedgerPoster::post_bill_line(
            expense.id,
            missing,
            dec!(10.00),
            date(),
            "Bad",
            bill_ref(),
            lookup,
        );
        assert!(matches!(result, Err(LedgerError::AccountNotFound(id)) if id == missing));
    }

    #[test]
    fn test_inactive_account() {
        let expense = active(AccountType::Expense);
        let mut payable = active(AccountType::Liability);
        payable.is_active = false;
        let lookup = lookup_from(vec![expense, payable]);

        let result = LedgerPoster::post_bill_line(
            expense.id,
            payable.id,
            dec!(10.00),
            date(),
            "Bad",
            bill_ref(),
            lookup,
        );
        assert!(matches!(result, Err(LedgerError::AccountInactive(id)) if id == payable.id));
    }

    #[test]
    fn test_repost_allowed_while_editable() {
        assert!(LedgerPoster::validate_can_repost(DocumentStatus::Draft).is_ok());
        assert!(LedgerPoster::validate_can_repost(DocumentStatus::Pending).is_ok());
    }

    #[test]
    fn test_repost_rejected_when_finalized() {
        assert!(matches!(
            LedgerPoster::validate_can_repost(DocumentStatus::Finalized),
            Err(LedgerError::DocumentFinalized)
        ));
    }
}
