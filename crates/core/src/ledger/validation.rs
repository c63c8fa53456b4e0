//! Balance validation for journals.

use rust_decimal::{Decimal, RoundingStrategy};

use super::entry::JournalLine;
use super::error::LedgerError;

/// Rounds an amount to cents using Banker's Rounding.
///
/// `MidpointNearestEven` keeps repeated roundings from drifting in one
/// direction: 2.125 → 2.12, 2.135 → 2.14.
#[must_use]
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

/// Validates that a set of journal lines forms a balanced journal.
///
/// Rules:
/// - at least 2 lines
/// - every line has exactly one of (debit, credit) set, and it is positive
/// - both sides are represented
/// - total debits equal total credits after rounding to cents
///
/// # Errors
///
/// Returns an error describing the first violated rule.
pub fn validate_lines(lines: &[JournalLine]) -> Result<(), LedgerError> {
    if lines.len() < 2 {
        return Err(LedgerError::InsufficientLines);
    }

    let mut total_debits = Decimal::ZERO;
    let mut total_credits = Decimal::ZERO;
    let mut has_debit = false;
    let mut has_credit = false;

    for line in lines {
        if line.debit < Decimal::ZERO || line.credit < Decimal::ZERO {
            return Err(LedgerError::NegativeAmount);
        }

        match (line.debit.is_zero(), line.credit.is_zero()) {
            (false, false) => return Err(LedgerError::BothSidesSet),
            (true, true) => return Err(LedgerError::NoSideSet),
            (false, true) => {
                total_debits += line.debit;
                has_debit = true;
            }
            (true, false) => {
                total_credits += line.credit;
                has_credit = true;
            }
        }
    }

    if !has_debit || !has_credit {
        return Err(LedgerError::SingleSided);
    }

    if round_cents(total_debits) != round_cents(total_credits) {
        return Err(LedgerError::Imbalanced {
            debits: total_debits,
            credits: total_credits,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calyx_shared::types::{AccountId, JournalId};
    use rust_decimal_macros::dec;

    fn debit(amount: Decimal) -> JournalLine {
        JournalLine::debit(JournalId::new(), AccountId::new(), amount)
    }

    fn credit(amount: Decimal) -> JournalLine {
        JournalLine::credit(JournalId::new(), AccountId::new(), amount)
    }

    #[test]
    fn test_balanced_lines() {
        let lines = vec![debit(dec!(100.00)), credit(dec!(100.00))];
        assert!(validate_lines(&lines).is_ok());
    }

    #[test]
    fn test_balanced_multi_line() {
        let lines = vec![
            debit(dec!(60.00)),
            debit(dec!(40.00)),
            credit(dec!(100.00)),
        ];
        assert!(validate_lines(&lines).is_ok());
    }

    #[test]
    fn test_imbalanced_lines() {
        let lines = vec![debit(dec!(100.00)), credit(dec!(50.00))];
        assert!(matches!(
            validate_lines(&lines),
            Err(LedgerError::Imbalanced { .. })
        ));
    }

    #[test]
    fn test_balance_compared_at_cent_precision() {
        // 33.333 + 66.667 = 100.000 rounds to 100.00 on both sides.
        let lines = vec![
            debit(dec!(33.333)),
            debit(dec!(66.667)),
            credit(dec!(100.000)),
        ];
        assert!(validate_lines(&lines).is_ok());

        // A sub-cent difference survives rounding and is rejected.
        let lines = vec![debit(dec!(100.00)), credit(dec!(100.01))];
        assert!(matches!(
            validate_lines(&lines),
            Err(LedgerError::Imbalanced { .. })
        ));
    }

    #[test]
    fn test_too_few_lines() {
        assert!(matches!(
            validate_lines(&[]),
            Err(LedgerError::InsufficientLines)
        ));
        assert!(matches!(
            validate_lines(&[debit(dec!(10))]),
            Err(LedgerError::InsufficientLines)
        ));
    }

    #[test]
    fn test_single_sided() {
        let lines = vec![debit(dec!(100.00)), debit(dec!(50.00))];
        assert!(matches!(
            validate_lines(&lines),
            Err(LedgerError::SingleSided)
        ));
    }

    #[test]
    fn test_both_sides_set() {
        let mut line = debit(dec!(10));
        line.credit = dec!(10);
        let lines = vec![line, credit(dec!(10))];
        assert!(matches!(
            validate_lines(&lines),
            Err(LedgerError::BothSidesSet)
        ));
    }

    #[test]
    fn test_no_side_set() {
        let mut line = debit(dec!(10));
        line.debit = Decimal::ZERO;
        let lines = vec![line, credit(dec!(10))];
        assert!(matches!(validate_lines(&lines), Err(LedgerError::NoSideSet)));
    }

    #[test]
    fn test_negative_amount() {
        let lines = vec![debit(dec!(-10)), credit(dec!(-10))];
        assert!(matches!(
            validate_lines(&lines),
            Err(LedgerError::NegativeAmount)
        ));
    }

    #[test]
    fn test_round_cents_bankers() {
        assert_eq!(round_cents(dec!(2.125)), dec!(2.12));
        assert_eq!(round_cents(dec!(2.135)), dec!(2.14));
        assert_eq!(round_cents(dec!(2.12)), dec!(2.12));
    }
}
