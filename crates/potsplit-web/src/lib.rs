//! # potsplit-web
//!
//! Thin web frontend over the potsplit core. The URL *is* the database:
//! a `GET /{token}` decodes the roster out of the path, shows it, and —
//! when the money balances — shows who pays whom; a `POST /` rebuilds the
//! roster from the form and redirects to the freshly encoded token.
//!
//! Everything in here is glue: form parsing ([`form`]), HTML rendering
//! ([`render`]), and routing ([`routes`]). The data model, codec, and
//! settlement algorithm live in the core crates.

pub mod form;
pub mod render;
pub mod routes;
