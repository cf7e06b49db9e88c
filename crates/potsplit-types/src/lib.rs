//! # potsplit-types
//!
//! Shared types, errors, and constants for **potsplit**.
//!
//! This crate is the leaf dependency of the workspace — both the roster
//! codec and the settlement engine depend on it, and on nothing else.
//! It defines:
//!
//! - **Roster model**: [`Participant`], [`Roster`]
//! - **Debt model**: [`Debt`], [`DebtLedger`]
//! - **Errors**: [`PotsplitError`] with `PS_ERR_` prefix codes
//! - **Constants**: amount scaling and codec limits
//!
//! All amounts are integer cents (minor units of a single currency).
//! No floating point touches the money path.

pub mod constants;
pub mod error;
pub mod ledger;
pub mod roster;

pub use error::*;
pub use ledger::*;
pub use roster::*;

// Constants are accessed via `potsplit_types::constants::FOO`
// (not re-exported to avoid name collisions).
