//! System-wide constants.

/// Minor units per whole currency unit (cents per dollar/euro/franc).
pub const CENTS_PER_UNIT: i64 = 100;

/// Hard cap on the decompressed size of a decoded token, in bytes.
///
/// Tokens arrive from a URL path and are attacker-controlled; a tiny
/// gzip stream can inflate to gigabytes. Any roster a human would
/// actually share fits in a few kilobytes.
pub const MAX_DECODED_BYTES: usize = 1 << 20;

/// Default TCP port for the web frontend.
pub const DEFAULT_PORT: u16 = 8080;
