//! Property-based tests for the reconciliation matcher.
//!
//! - Proposals never invent amounts: a proposal's amount always equals both
//!   the statement line's and the matched payment's amount
//! - Window membership is symmetric around the transaction date
//! - The matcher never proposes more than one payment per statement line

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::matcher::{auto_match, find_match, DEFAULT_MATCH_WINDOW_DAYS};
use super::types::{BankTransactionKind, CandidatePayment, MatchConfidence, StatementLine};
use calyx_shared::types::{BankTransactionId, PaymentId};

/// Strategy to generate amounts (0.01 to 10,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a date in 2024.
fn date() -> impl Strategy<Value = NaiveDate> {
    (1u32..=365u32).prop_map(|day| {
        NaiveDate::from_yo_opt(2024, day).expect("day ordinal within 2024")
    })
}

/// Strategy to generate a day offset within ± 30 days.
fn offset() -> impl Strategy<Value = i64> {
    -30i64..=30i64
}

fn statement_line(amount: Decimal, transaction_date: NaiveDate) -> StatementLine {
    StatementLine {
        id: BankTransactionId::new(),
        transaction_date,
        kind: BankTransactionKind::Withdrawal,
        amount,
    }
}

fn candidate(amount: Decimal, payment_date: NaiveDate) -> CandidatePayment {
    CandidatePayment {
        id: PaymentId::new(),
        amount,
        payment_date,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A proposal's matched amount always equals the statement line's amount.
    #[test]
    fn prop_proposal_never_invents_amounts(
        line_amount in amount(),
        candidate_amount in amount(),
        txn_date in date(),
        days in offset(),
    ) {
        let line = statement_line(line_amount, txn_date);
        let candidates = vec![candidate(
            candidate_amount,
            txn_date + Duration::days(days),
        )];

        if let Some(proposal) = find_match(&line, &candidates, DEFAULT_MATCH_WINDOW_DAYS) {
            prop_assert_eq!(proposal.matched_amount, line.amount);
            prop_assert_eq!(proposal.matched_amount, candidates[0].amount);
        } else {
            // No proposal means amount or window disagreed.
            let in_window = days.abs() <= DEFAULT_MATCH_WINDOW_DAYS;
            prop_assert!(line_amount != candidate_amount || !in_window);
        }
    }

    /// Equal amounts match exactly when the dates coincide, and the window
    /// is symmetric: an offset of +d matches iff -d does.
    #[test]
    fn prop_window_is_symmetric(
        value in amount(),
        txn_date in date(),
        days in 1i64..=30i64,
    ) {
        let line = statement_line(value, txn_date);

        let after = find_match(
            &line,
            &[candidate(value, txn_date + Duration::days(days))],
            DEFAULT_MATCH_WINDOW_DAYS,
        );
        let before = find_match(
            &line,
            &[candidate(value, txn_date - Duration::days(days))],
            DEFAULT_MATCH_WINDOW_DAYS,
        );

        prop_assert_eq!(after.is_some(), before.is_some());
        prop_assert_eq!(after.is_some(), days <= DEFAULT_MATCH_WINDOW_DAYS);
    }

    /// Same amount, same date is always an exact match.
    #[test]
    fn prop_same_day_equal_amount_is_exact(
        value in amount(),
        txn_date in date(),
    ) {
        let line = statement_line(value, txn_date);
        let candidates = vec![candidate(value, txn_date)];

        let proposal = find_match(&line, &candidates, DEFAULT_MATCH_WINDOW_DAYS)
            .expect("equal amount and date must match");
        prop_assert_eq!(proposal.confidence, MatchConfidence::Exact);
    }

    /// An auto-match pass proposes at most one payment per statement line
    /// and scans every line.
    #[test]
    fn prop_auto_match_at_most_one_proposal_per_line(
        amounts in prop::collection::vec(amount(), 0..8),
        txn_date in date(),
    ) {
        let lines: Vec<StatementLine> = amounts
            .iter()
            .map(|a| statement_line(*a, txn_date))
            .collect();
        let candidates: Vec<CandidatePayment> = amounts
            .iter()
            .map(|a| candidate(*a, txn_date))
            .collect();

        let outcome = auto_match(&lines, &candidates, DEFAULT_MATCH_WINDOW_DAYS);

        prop_assert_eq!(outcome.scanned, lines.len());
        prop_assert!(outcome.matched_count() <= lines.len());

        let mut seen: Vec<BankTransactionId> = outcome
            .proposals
            .iter()
            .map(|p| p.bank_transaction_id)
            .collect();
        seen.sort_by_key(|id| id.into_inner());
        seen.dedup();
        prop_assert_eq!(seen.len(), outcome.matched_count());
    }
}
