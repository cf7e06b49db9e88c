//! Greedy minimal-transaction settlement.
//!
//! Each iteration pairs the **best loser** (least money lost among those
//! still owing) with the **best winner** (most money won among those still
//! owed) and moves the smaller of the two outstanding amounts between
//! them. Whichever side had the smaller magnitude reaches zero, so the
//! loop runs at most `winners + losers - 1` times — which is also the
//! optimal transaction count for this balance-matching structure. An
//! arbitrary pairing could need up to `winners × losers` payments.

use potsplit_types::{Debt, DebtLedger, Result, Roster};
use tracing::{debug, trace};

use crate::conservation::verify_conservation;

/// Call-local working copy of one participant's outstanding balance.
/// The engine zeroes these out as it allocates payments; the caller's
/// roster is never touched.
struct Balance {
    name: String,
    net: i64,
}

/// Compute the minimal set of payments that settles the roster.
///
/// Returns a ledger mapping each debtor to the payments they must make,
/// in the order the engine generated them. A roster where everyone broke
/// even (including the empty roster) yields an empty ledger.
///
/// # Errors
/// Returns [`PotsplitError::ImbalancedRoster`](potsplit_types::PotsplitError::ImbalancedRoster)
/// if total buy-ins and total stacks disagree. No partial ledger is
/// returned.
pub fn calculate_debts(roster: &Roster) -> Result<DebtLedger> {
    verify_conservation(roster)?;

    let (mut winners, mut losers) = partition(roster);
    let mut ledger = DebtLedger::new();

    // Conservation guarantees outstanding credit == outstanding debt, so
    // while any winner is still owed money, some loser still owes it.
    while winners.iter().any(|w| w.net != 0) {
        let (Some(li), Some(wi)) = (best(&losers), best(&winners)) else {
            break;
        };
        let loser = &mut losers[li];
        let winner = &mut winners[wi];

        let amount = (-loser.net).min(winner.net);
        loser.net += amount;
        winner.net -= amount;

        trace!(
            debtor = %loser.name,
            creditor = %winner.name,
            amount,
            "allocated payment"
        );
        ledger.record(&loser.name, Debt::new(&winner.name, amount));
    }

    debug!(
        participants = roster.len(),
        payments = ledger.transaction_count(),
        "settled roster"
    );
    Ok(ledger)
}

/// Split the roster into winners (net >= 0) and losers (net < 0),
/// snapshotting each net balance. Input order is preserved on both sides;
/// it is the tie-break for extremal selection.
fn partition(roster: &Roster) -> (Vec<Balance>, Vec<Balance>) {
    let mut winners = Vec::new();
    let mut losers = Vec::new();
    for participant in roster {
        let balance = Balance {
            name: participant.name.clone(),
            net: participant.net(),
        };
        if balance.net >= 0 {
            winners.push(balance);
        } else {
            losers.push(balance);
        }
    }
    (winners, losers)
}

/// Index of the entry with the greatest net balance, skipping settled
/// (zero-net) entries. For winners that is the one owed the most; for
/// losers (all negative) the one who lost the least. Ties go to the
/// first-seen entry, which keeps output deterministic.
fn best(balances: &[Balance]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, balance) in balances.iter().enumerate() {
        if balance.net == 0 {
            continue;
        }
        match best {
            Some(j) if balance.net <= balances[j].net => {}
            _ => best = Some(i),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use potsplit_types::{Participant, PotsplitError};

    use super::*;

    fn roster(participants: Vec<Participant>) -> Roster {
        participants.into()
    }

    #[test]
    fn empty_roster_settles_to_empty_ledger() {
        let ledger = calculate_debts(&Roster::new()).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn single_breakeven_participant() {
        let r = roster(vec![Participant::new("alice", 500, 500)]);
        let ledger = calculate_debts(&r).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn everyone_breaks_even() {
        let r = roster(vec![
            Participant::new("alice", 500, 500),
            Participant::new("bob", 1500, 1500),
            Participant::new("charlie", 2000, 2000),
        ]);
        let ledger = calculate_debts(&r).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn one_loser_pays_one_winner() {
        let r = roster(vec![
            Participant::new("alice", 500, 1000),
            Participant::new("bob", 500, 0),
        ]);
        let ledger = calculate_debts(&r).unwrap();
        assert_eq!(ledger.debts_of("bob").unwrap(), &[Debt::new("alice", 500)]);
        assert_eq!(ledger.transaction_count(), 1);
        assert!(ledger.debts_of("alice").is_none());
    }

    #[test]
    fn two_losers_one_winner() {
        let r = roster(vec![
            Participant::new("alice", 500, 1200),
            Participant::new("bob", 500, 0),
            Participant::new("charlie", 1000, 800),
        ]);
        let ledger = calculate_debts(&r).unwrap();
        assert_eq!(ledger.debts_of("bob").unwrap(), &[Debt::new("alice", 500)]);
        assert_eq!(
            ledger.debts_of("charlie").unwrap(),
            &[Debt::new("alice", 200)]
        );
    }

    #[test]
    fn sole_loser_pays_two_winners_biggest_first() {
        let r = roster(vec![
            Participant::new("alice", 1000, 1100),
            Participant::new("bob", 500, 900),
            Participant::new("charlie", 1000, 500),
        ]);
        let ledger = calculate_debts(&r).unwrap();
        // bob is owed the most, so charlie pays him first; alice's 100 is
        // filed second even though she appears first in the roster.
        assert_eq!(
            ledger.debts_of("charlie").unwrap(),
            &[Debt::new("bob", 400), Debt::new("alice", 100)]
        );
        assert_eq!(ledger.transaction_count(), 2);
    }

    #[test]
    fn two_winners_three_losers() {
        let r = roster(vec![
            Participant::new("alice", 1000, 1350),
            Participant::new("bob", 500, 1050),
            Participant::new("charlie", 1000, 500),
            Participant::new("dan", 300, 0),
            Participant::new("eve", 700, 600),
        ]);
        let ledger = calculate_debts(&r).unwrap();
        assert_eq!(ledger.total_owed_by("charlie"), 500);
        assert_eq!(ledger.total_owed_by("dan"), 300);
        assert_eq!(ledger.total_owed_by("eve"), 100);
        assert_eq!(ledger.total_owed_to("alice"), 350);
        assert_eq!(ledger.total_owed_to("bob"), 550);
        // 2 winners + 3 losers => at most 4 payments.
        assert!(ledger.transaction_count() <= 4);
    }

    #[test]
    fn imbalanced_roster_is_rejected() {
        let r = roster(vec![
            Participant::new("alice", 500, 1200),
            Participant::new("bob", 1500, 500),
            Participant::new("charlie", 1000, 2000),
        ]);
        let err = calculate_debts(&r).unwrap_err();
        assert!(matches!(err, PotsplitError::ImbalancedRoster { .. }), "{err}");
    }

    #[test]
    fn input_roster_is_not_mutated() {
        let r = roster(vec![
            Participant::new("alice", 500, 1000),
            Participant::new("bob", 500, 0),
        ]);
        let before = r.clone();
        calculate_debts(&r).unwrap();
        assert_eq!(r, before);
    }

    #[test]
    fn ties_go_to_first_in_roster_order() {
        // bob and charlie lost the same amount; bob appears first, so the
        // first generated payment is his.
        let r = roster(vec![
            Participant::new("alice", 0, 400),
            Participant::new("bob", 200, 0),
            Participant::new("charlie", 200, 0),
        ]);
        let ledger = calculate_debts(&r).unwrap();
        assert_eq!(ledger.debts_of("bob").unwrap(), &[Debt::new("alice", 200)]);
        assert_eq!(
            ledger.debts_of("charlie").unwrap(),
            &[Debt::new("alice", 200)]
        );
    }

    /// Spot-check the two core ledger invariants on a messier roster:
    /// per-creditor sums match net winnings, per-debtor sums match net
    /// losses, and the payment count respects the minimality bound.
    #[test]
    fn ledger_balances_and_minimality_bound() {
        let r = roster(vec![
            Participant::new("alice", 2000, 4150),
            Participant::new("bob", 1000, 2500),
            Participant::new("charlie", 3000, 150),
            Participant::new("dan", 500, 500),
            Participant::new("eve", 1500, 700),
        ]);
        let ledger = calculate_debts(&r).unwrap();

        for p in &r {
            let net = p.net();
            if net > 0 {
                assert_eq!(ledger.total_owed_to(&p.name), net, "creditor {}", p.name);
                assert_eq!(ledger.total_owed_by(&p.name), 0);
            } else if net < 0 {
                assert_eq!(ledger.total_owed_by(&p.name), -net, "debtor {}", p.name);
                assert!(ledger.debts_of(&p.name).is_some());
            } else {
                assert!(ledger.debts_of(&p.name).is_none());
                assert_eq!(ledger.total_owed_to(&p.name), 0);
            }
        }

        let winners = r.iter().filter(|p| p.net() > 0).count();
        let losers = r.iter().filter(|p| p.net() < 0).count();
        assert!(ledger.transaction_count() <= winners + losers - 1);
    }
}
