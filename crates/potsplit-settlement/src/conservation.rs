//! Money conservation invariant checker.
//!
//! Invariant enforced before any settlement runs:
//! ```text
//! Σ buy_in == Σ stack
//! ```
//!
//! If the totals disagree, money was created or destroyed and no set of
//! payments can settle the roster. This is a domain validation error: the
//! caller prompts for corrected figures, nothing is retried automatically.

use potsplit_types::{PotsplitError, Result, Roster};

/// Verify that total buy-ins match total stacks for the whole roster.
///
/// # Errors
/// Returns [`PotsplitError::ImbalancedRoster`] carrying both totals if
/// they disagree.
pub fn verify_conservation(roster: &Roster) -> Result<()> {
    let total_buy_in = roster.total_buy_in();
    let total_stack = roster.total_stack();
    if total_buy_in != total_stack {
        return Err(PotsplitError::ImbalancedRoster {
            total_buy_in,
            total_stack,
        });
    }
    Ok(())
}
