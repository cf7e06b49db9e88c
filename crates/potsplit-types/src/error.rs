//! Error types for potsplit.
//!
//! All errors use the `PS_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Roster construction errors
//! - 2xx: Token codec errors
//! - 3xx: Settlement errors
//! - 9xx: General / internal errors

use thiserror::Error;

/// Central error enum for all potsplit operations.
#[derive(Debug, Error)]
pub enum PotsplitError {
    // =================================================================
    // Roster Errors (1xx)
    // =================================================================
    /// Two participants in the same roster share a name.
    #[error("PS_ERR_100: duplicate participant name: {0:?}")]
    DuplicateName(String),

    // =================================================================
    // Token Codec Errors (2xx)
    // =================================================================
    /// The token contains characters outside the URL-safe base64 alphabet,
    /// or has invalid length/padding.
    #[error("PS_ERR_200: token is not valid URL-safe base64: {reason}")]
    TokenNotBase64 { reason: String },

    /// The base64 payload is not a valid gzip stream.
    #[error("PS_ERR_201: token payload is not a valid gzip stream: {reason}")]
    TokenNotGzip { reason: String },

    /// The decompressed payload is not a valid roster record.
    #[error("PS_ERR_202: token payload is not a valid roster record: {reason}")]
    TokenNotRecord { reason: String },

    /// The token decompresses to more than the permitted size.
    #[error("PS_ERR_203: decoded roster exceeds {limit} bytes")]
    TokenTooLarge { limit: usize },

    /// Serializing or compressing an in-memory roster failed. This should
    /// never happen for a well-formed roster.
    #[error("PS_ERR_204: failed to encode roster: {reason}")]
    EncodingFailed { reason: String },

    // =================================================================
    // Settlement Errors (3xx)
    // =================================================================
    /// Total buy-ins and total stacks disagree: money was created or
    /// destroyed, so no settlement exists.
    #[error(
        "PS_ERR_300: total buy-in {total_buy_in} does not match total stack {total_stack}"
    )]
    ImbalancedRoster { total_buy_in: i64, total_stack: i64 },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("PS_ERR_900: internal error: {0}")]
    Internal(String),
}

impl PotsplitError {
    /// Whether this error is one of the layered token-decode failures.
    ///
    /// Callers generally report all three the same way ("could not
    /// interpret the provided state"); the distinction exists for logs
    /// and tests.
    #[must_use]
    pub fn is_decoding_failure(&self) -> bool {
        matches!(
            self,
            Self::TokenNotBase64 { .. }
                | Self::TokenNotGzip { .. }
                | Self::TokenNotRecord { .. }
                | Self::TokenTooLarge { .. }
        )
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, PotsplitError>;
