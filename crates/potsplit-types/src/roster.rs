//! Roster model: participants and their money.
//!
//! A [`Roster`] is an ordered list of [`Participant`]s. Order is insertion
//! order; it survives the codec round-trip but carries no meaning for
//! settlement. Identity is the (case-sensitive) name — uniqueness is
//! enforced by whoever builds the roster, not re-checked here.
//!
//! The serde field names are deliberately one letter (`p`, `b`, `s`) and
//! zero amounts are omitted: the JSON form is the wire format inside the
//! share token, and every byte saved shortens the URL.

use serde::{Deserialize, Serialize};

/// A single participant: what they put in and what they walked away with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Participant name. Unique within a roster, case-sensitive.
    #[serde(rename = "p")]
    pub name: String,
    /// Total buy-in, in cents.
    #[serde(rename = "b", default, skip_serializing_if = "is_zero")]
    pub buy_in: i64,
    /// Final stack, in cents.
    #[serde(rename = "s", default, skip_serializing_if = "is_zero")]
    pub stack: i64,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_zero(v: &i64) -> bool {
    *v == 0
}

impl Participant {
    /// Create a participant.
    #[must_use]
    pub fn new(name: impl Into<String>, buy_in: i64, stack: i64) -> Self {
        Self {
            name: name.into(),
            buy_in,
            stack,
        }
    }

    /// Net result: `stack - buy_in`. Positive means they won money.
    #[must_use]
    pub fn net(&self) -> i64 {
        self.stack - self.buy_in
    }
}

/// An ordered collection of participants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(Vec<Participant>);

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a participant, preserving insertion order.
    pub fn push(&mut self, participant: Participant) {
        self.0.push(participant);
    }

    /// Number of participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the roster has no participants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over participants in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Participant> {
        self.0.iter()
    }

    /// Sum of all buy-ins, in cents.
    #[must_use]
    pub fn total_buy_in(&self) -> i64 {
        self.0.iter().map(|p| p.buy_in).sum()
    }

    /// Sum of all final stacks, in cents.
    #[must_use]
    pub fn total_stack(&self) -> i64 {
        self.0.iter().map(|p| p.stack).sum()
    }

    /// Whether money is conserved: total buy-in equals total stack.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.total_buy_in() == self.total_stack()
    }
}

impl From<Vec<Participant>> for Roster {
    fn from(participants: Vec<Participant>) -> Self {
        Self(participants)
    }
}

impl FromIterator<Participant> for Roster {
    fn from_iter<I: IntoIterator<Item = Participant>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Roster {
    type Item = Participant;
    type IntoIter = std::vec::IntoIter<Participant>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Participant;
    type IntoIter = std::slice::Iter<'a, Participant>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
