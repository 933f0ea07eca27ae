/// A violated calculation precondition.
///
/// These are deterministic input-validation failures, not transient faults.
/// Callers should surface them directly instead of retrying.
#[derive(thiserror::Error, Debug, Clone, Copy, Eq, PartialEq)]
#[allow(missing_docs, reason = "Self-describing error variants")]
pub enum InvalidInput {
    #[error("The entry price must be finite and > 0")]
    InvalidEntryPrice,

    #[error("The leverage must be finite and > 0")]
    InvalidLeverage,

    #[error("The notional amount must be finite and >= 0")]
    InvalidNotional,

    #[error("The position size must be finite and >= 0")]
    InvalidSize,

    #[error("The mark price must be finite and > 0")]
    InvalidMarkPrice,

    #[error("The margin must be finite and > 0")]
    InvalidMargin,

    #[error("The profit and loss must be finite")]
    InvalidPnl,
}
