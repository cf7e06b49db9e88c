//! # potsplit-codec
//!
//! **Roster Codec**: deterministic, reversible mapping between a
//! [`Roster`](potsplit_types::Roster) and an opaque, URL-path-safe token.
//!
//! The token is the entire persistence mechanism — there is no database —
//! so the pipeline trades encode speed for length:
//!
//! ```text
//! encode: Roster --JSON--> bytes --gzip--> bytes --base64url--> token
//! decode: token --base64url--> bytes --gunzip--> bytes --JSON--> Roster
//! ```
//!
//! Each layer has its own failure mode and its own `PS_ERR_2xx` code, so
//! a malformed token can be pinpointed to the layer that rejected it.
//! The empty roster maps to the empty token and back, with no error in
//! either direction.

pub mod token;

pub use token::{decode, encode};
