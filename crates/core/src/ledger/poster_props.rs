//! Property-based tests for the ledger poster.
//!
//! - Journals produced by posting operations always balance to the cent
//! - Posting never produces more or fewer than one memo transaction and
//!   one two-line journal

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::entry::EntrySide;
use super::journal::{DocumentKind, DocumentRef};
use super::poster::{AccountSnapshot, LedgerPoster};
use super::validation::{round_cents, validate_lines};
use crate::account::AccountType;
use calyx_shared::types::AccountId;

/// Strategy to generate positive amounts (0.01 to 10,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate amounts with sub-cent precision (0.001 to 1,000.000).
fn sub_cent_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|mils| Decimal::new(mils, 3))
}

/// Strategy to generate a business date in 2024.
fn business_date() -> impl Strategy<Value = NaiveDate> {
    (1u32..=365u32).prop_map(|day| {
        NaiveDate::from_yo_opt(2024, day).expect("day ordinal within 2024")
    })
}

fn lookup_for(
    a: AccountSnapshot,
    b: AccountSnapshot,
) -> impl Fn(AccountId) -> Result<AccountSnapshot, super::error::LedgerError> {
    move |id| {
        if id == a.id {
            Ok(a)
        } else if id == b.id {
            Ok(b)
        } else {
            Err(super::error::LedgerError::AccountNotFound(id))
        }
    }
}

fn active(account_type: AccountType) -> AccountSnapshot {
    AccountSnapshot {
        id: AccountId::new(),
        is_active: true,
        account_type,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// For any positive amount and date, `post_bill_line` yields a journal
    /// whose debit and credit sums match to the cent.
    #[test]
    fn prop_bill_journal_balances(
        amount in positive_amount(),
        date in business_date(),
    ) {
        let expense = active(AccountType::Expense);
        let payable = active(AccountType::Liability);

        let result = LedgerPoster::post_bill_line(
            expense.id,
            payable.id,
            amount,
            date,
            "prop",
            DocumentRef::new(DocumentKind::Bill, Uuid::new_v4()),
            lookup_for(expense, payable),
        ).expect("posting a positive amount succeeds");

        prop_assert_eq!(
            round_cents(result.journal.total_debits()),
            round_cents(result.journal.total_credits()),
        );
        prop_assert!(validate_lines(&result.journal.lines).is_ok());
    }

    /// Balance holds even for amounts carrying sub-cent precision, because
    /// both lines derive from the same value.
    #[test]
    fn prop_sub_cent_amounts_still_balance(
        amount in sub_cent_amount(),
        date in business_date(),
    ) {
        let payable = active(AccountType::Liability);
        let bank = active(AccountType::Asset);

        let result = LedgerPoster::post_payment_line(
            payable.id,
            bank.id,
            amount,
            date,
            "prop",
            DocumentRef::new(DocumentKind::Payment, Uuid::new_v4()),
            lookup_for(payable, bank),
        ).expect("posting a positive amount succeeds");

        prop_assert_eq!(result.journal.total_debits(), result.journal.total_credits());
    }

    /// Every posting yields exactly one memo transaction and one journal of
    /// exactly two lines, with the memo amount equal to the posted amount.
    #[test]
    fn prop_posting_shape_is_fixed(
        amount in positive_amount(),
        date in business_date(),
    ) {
        let expense = active(AccountType::Expense);
        let payable = active(AccountType::Liability);

        let result = LedgerPoster::post_bill_line(
            expense.id,
            payable.id,
            amount,
            date,
            "prop",
            DocumentRef::new(DocumentKind::Bill, Uuid::new_v4()),
            lookup_for(expense, payable),
        ).expect("posting a positive amount succeeds");

        prop_assert_eq!(result.journal.lines.len(), 2);
        prop_assert_eq!(result.transaction.amount, amount);
        prop_assert_eq!(result.transaction.side, EntrySide::Credit);
    }

    /// Non-positive amounts are always rejected, for both operations.
    #[test]
    fn prop_non_positive_amounts_rejected(
        cents in -1_000_000i64..=0i64,
        date in business_date(),
    ) {
        let amount = Decimal::new(cents, 2);
        let expense = active(AccountType::Expense);
        let payable = active(AccountType::Liability);
        let lookup = lookup_for(expense, payable);

        let bill = LedgerPoster::post_bill_line(
            expense.id,
            payable.id,
            amount,
            date,
            "prop",
            DocumentRef::new(DocumentKind::Bill, Uuid::new_v4()),
            &lookup,
        );
        prop_assert!(bill.is_err());

        let payment = LedgerPoster::post_payment_line(
            payable.id,
            expense.id,
            amount,
            date,
            "prop",
            DocumentRef::new(DocumentKind::Payment, Uuid::new_v4()),
            &lookup,
        );
        prop_assert!(payment.is_err());
    }
}
