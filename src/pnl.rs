//! Unrealized profit and loss of an open position.

use crate::types::{BaseCurrency, Direction, InvalidInput, QuoteCurrency};

/// Compute the unrealized profit and loss of a position marked to the given
/// price, denoted in QUOTE currency.
///
/// Positive when the price has moved in the positions favor; a long profits
/// from a rising price, a short from a falling one.
///
/// # Returns:
/// `(mark_price - entry_price) * size` for longs, negated for shorts.
/// `InvalidInput` if the entry or mark price is not finite and > 0,
/// or `size` is not finite and >= 0.
pub fn unrealized_pnl(
    entry_price: QuoteCurrency,
    mark_price: QuoteCurrency,
    size: BaseCurrency,
    direction: Direction,
) -> Result<QuoteCurrency, InvalidInput> {
    if !entry_price.is_finite() || entry_price <= QuoteCurrency::new(0.0) {
        return Err(InvalidInput::InvalidEntryPrice);
    }
    if !mark_price.is_finite() || mark_price <= QuoteCurrency::new(0.0) {
        return Err(InvalidInput::InvalidMarkPrice);
    }
    if !size.is_finite() || size < BaseCurrency::new(0.0) {
        return Err(InvalidInput::InvalidSize);
    }
    Ok(QuoteCurrency::new(
        (mark_price.inner() - entry_price.inner()) * size.inner() * direction.sign(),
    ))
}

/// The profit or loss of a position relative to the margin backing it,
/// in percent. The return-on-equity figure position lists display.
///
/// # Returns:
/// `pnl / margin * 100`.
/// `InvalidInput` if `margin` is not finite and > 0, or `pnl` is not finite.
pub fn pnl_percent(pnl: QuoteCurrency, margin: QuoteCurrency) -> Result<f64, InvalidInput> {
    if !margin.is_finite() || margin <= QuoteCurrency::new(0.0) {
        return Err(InvalidInput::InvalidMargin);
    }
    if !pnl.is_finite() {
        return Err(InvalidInput::InvalidPnl);
    }
    Ok(pnl.inner() / margin.inner() * 100.0)
}
