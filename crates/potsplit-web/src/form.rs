//! Roster construction from HTML form data.
//!
//! The form carries tuples of fields `playerN` / `buyinN` / `stackN`,
//! where the shared suffix `N` groups one participant's row. Rows with a
//! blank name are skipped; amounts the user left empty or mistyped
//! default to 0. Duplicate names are a hard error — this is the one
//! place name uniqueness is enforced before a roster exists.
//!
//! Amounts arrive in whole currency units ("50.25") and are converted to
//! cents with [`rust_decimal`], so "0.10" really is 10 cents and not a
//! float approximation.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use potsplit_types::constants::CENTS_PER_UNIT;
use potsplit_types::{Participant, PotsplitError, Result, Roster};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Build a roster from decoded form pairs, in submission order.
///
/// # Errors
/// Returns [`PotsplitError::DuplicateName`] if two rows carry the same
/// participant name.
pub fn roster_from_form(pairs: &[(String, String)]) -> Result<Roster> {
    let mut values: HashMap<&str, Vec<&str>> = HashMap::new();
    for (key, value) in pairs {
        values.entry(key.as_str()).or_default().push(value.as_str());
    }

    let mut seen_names: HashSet<&str> = HashSet::new();
    let mut seen_keys: HashSet<&str> = HashSet::new();
    let mut roster = Roster::new();

    for (key, _) in pairs {
        let Some(suffix) = key.strip_prefix("player") else {
            continue;
        };
        if !seen_keys.insert(key.as_str()) {
            continue;
        }
        // A repeated field name means a malformed submission; skip the row
        // rather than guessing which value was meant.
        let row = &values[key.as_str()];
        if row.len() != 1 || row[0].trim().is_empty() {
            continue;
        }
        let name = row[0];
        if !seen_names.insert(name) {
            return Err(PotsplitError::DuplicateName(name.to_string()));
        }

        let buy_in = parse_cents(first_value(&values, &format!("buyin{suffix}")));
        let stack = parse_cents(first_value(&values, &format!("stack{suffix}")));
        roster.push(Participant::new(name, buy_in, stack));
    }
    Ok(roster)
}

fn first_value<'a>(values: &HashMap<&str, Vec<&'a str>>, key: &str) -> Option<&'a str> {
    values.get(key).and_then(|v| v.first()).copied()
}

/// Parse a whole-unit amount ("50.25") into cents. Anything missing or
/// unparsable is 0, matching how an empty form field behaves.
fn parse_cents(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else { return 0 };
    let Ok(units) = Decimal::from_str(raw.trim()) else {
        return 0;
    };
    units
        .checked_mul(Decimal::from(CENTS_PER_UNIT))
        .map(|cents| cents.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|cents| cents.to_i64())
        .unwrap_or(0)
}
