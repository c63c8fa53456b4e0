//! Confidence-ranked matching between statement lines and payments.

use chrono::Duration;

use super::types::{
    AutoMatchOutcome, CandidatePayment, MatchConfidence, MatchProposal, StatementLine,
};

/// Default half-width of the high-confidence date window, in days.
pub const DEFAULT_MATCH_WINDOW_DAYS: i64 = 7;

/// Finds the best candidate payment for one statement line.
///
/// Two tiers, tried in order:
/// 1. **Exact**: equal amount (decimal-exact) and equal date.
/// 2. **High**: equal amount and payment date within the closed window
///    `transaction_date ± window_days`.
///
/// First match wins within each tier, in the iteration order of
/// `candidates`. Callers control that order; loaders sort by payment date
/// ascending then ID, which makes the scan deterministic for a given store
/// state. Candidates consumed by an earlier statement line in the same batch
/// are not excluded here; the candidate slice is never mutated.
#[must_use]
pub fn find_match(
    line: &StatementLine,
    candidates: &[CandidatePayment],
    window_days: i64,
) -> Option<MatchProposal> {
    let exact = candidates
        .iter()
        .find(|p| p.amount == line.amount && p.payment_date == line.transaction_date)
        .map(|p| proposal(line, p, MatchConfidence::Exact));

    if exact.is_some() {
        return exact;
    }

    let window = Duration::days(window_days);
    let earliest = line.transaction_date - window;
    let latest = line.transaction_date + window;

    candidates
        .iter()
        .find(|p| {
            p.amount == line.amount && p.payment_date >= earliest && p.payment_date <= latest
        })
        .map(|p| proposal(line, p, MatchConfidence::High))
}

/// Runs `find_match` over a full set of statement lines.
///
/// Lines are scanned in date-descending order (most recent statement
/// activity first). The pass is a pure planning step: it emits proposals
/// and never touches reconciled flags. Because the candidate pool is shared
/// across the scan, one payment can back proposals for more than one
/// statement line; confirmation is where a human resolves that.
#[must_use]
pub fn auto_match(
    lines: &[StatementLine],
    candidates: &[CandidatePayment],
    window_days: i64,
) -> AutoMatchOutcome {
    let mut ordered: Vec<&StatementLine> = lines.iter().collect();
    ordered.sort_by(|a, b| b.transaction_date.cmp(&a.transaction_date));

    let proposals = ordered
        .iter()
        .filter_map(|line| find_match(line, candidates, window_days))
        .collect();

    AutoMatchOutcome {
        proposals,
        scanned: lines.len(),
    }
}

fn proposal(
    line: &StatementLine,
    payment: &CandidatePayment,
    confidence: MatchConfidence,
) -> MatchProposal {
    MatchProposal {
        bank_transaction_id: line.id,
        payment_id: payment.id,
        matched_amount: payment.amount,
        confidence,
    }
}
