//! # potsplit-settlement
//!
//! **Settlement Engine**: turns a balanced [`Roster`](potsplit_types::Roster)
//! into the minimal set of point-to-point payments that clears every debt.
//!
//! ## Architecture
//!
//! The engine is a pure function over its input:
//! 1. Verify money conservation (total buy-in == total stack)
//! 2. Snapshot each participant's net balance into call-local working copies
//! 3. Greedily pair the least-indebted loser with the most-owed winner
//!    until every balance reaches zero
//!
//! Each pairing fully discharges at least one side, which bounds the
//! number of payments at `winners + losers - 1`. The caller's roster is
//! never mutated, so concurrent callers need no coordination.

pub mod conservation;
pub mod engine;

pub use conservation::verify_conservation;
pub use engine::calculate_debts;
