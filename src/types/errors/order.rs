/// The error when an order request is rejected by the rules of a trading pair.
#[derive(thiserror::Error, Debug, Clone, Copy, Eq, PartialEq)]
#[allow(missing_docs, reason = "Self-describing error variants")]
pub enum OrderError {
    #[error("The trading pair is not active")]
    PairInactive,

    #[error("The requested leverage exceeds the pairs maximum leverage")]
    LeverageExceedsMax,

    #[error("The notional amount is below the pairs minimum position size")]
    BelowMinPositionSize,

    #[error("A limit order requires a limit price")]
    MissingLimitPrice,
}
