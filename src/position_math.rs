//! The leveraged-position calculations.
//!
//! The same arithmetic that trading front ends re-derive on every form
//! update lives here once: position size from a USD notional, required
//! margin from size, price and leverage, and the liquidation price of a
//! position. All functions are pure and validate their inputs instead of
//! letting `Infinity` or `NaN` propagate out of a division.
//!
//! The liquidation model is the simplified one of the order form it serves:
//! a position is liquidated when the adverse price move consumes the full
//! initial margin. Fees, funding rates and maintenance margin buffers are
//! not modeled.

use crate::types::{BaseCurrency, Direction, InvalidInput, Leverage, QuoteCurrency};

fn validate_entry_price(entry_price: QuoteCurrency) -> Result<(), InvalidInput> {
    if !entry_price.is_finite() || entry_price <= QuoteCurrency::new(0.0) {
        return Err(InvalidInput::InvalidEntryPrice);
    }
    Ok(())
}

/// Compute the position size a USD notional buys at the given entry price.
///
/// # Returns:
/// The size denoted in BASE currency, `notional / entry_price`.
/// `InvalidInput` if `entry_price` is not finite and > 0,
/// or `notional` is not finite and >= 0.
pub fn position_size(
    notional: QuoteCurrency,
    entry_price: QuoteCurrency,
) -> Result<BaseCurrency, InvalidInput> {
    validate_entry_price(entry_price)?;
    if !notional.is_finite() || notional < QuoteCurrency::new(0.0) {
        return Err(InvalidInput::InvalidNotional);
    }
    Ok(notional.convert(entry_price))
}

/// Compute the margin required to hold a position of `size` contracts
/// entered at `entry_price` with the given leverage.
///
/// Independent of the position direction.
///
/// # Returns:
/// The margin denoted in QUOTE currency, `(size * entry_price) / leverage`.
/// `InvalidInput` if `entry_price` is not finite and > 0,
/// or `size` is not finite and >= 0.
pub fn margin_required(
    size: BaseCurrency,
    entry_price: QuoteCurrency,
    leverage: Leverage,
) -> Result<QuoteCurrency, InvalidInput> {
    validate_entry_price(entry_price)?;
    if !size.is_finite() || size < BaseCurrency::new(0.0) {
        return Err(InvalidInput::InvalidSize);
    }
    Ok(size.convert(entry_price) / leverage)
}

/// Compute the price at which a position entered at `entry_price` with the
/// given leverage loses its entire margin and is liquidated.
///
/// The liquidation price always moves against the position:
/// below the entry price for `Long`, above it for `Short`.
/// At `leverage = 1` a long is only liquidated at a price of zero and a
/// short at twice the entry price; both are valid boundary outputs.
///
/// # Returns:
/// `entry_price * (1 - 1/leverage)` for longs,
/// `entry_price * (1 + 1/leverage)` for shorts.
/// `InvalidInput` if `entry_price` is not finite and > 0.
pub fn liquidation_price(
    entry_price: QuoteCurrency,
    leverage: Leverage,
    direction: Direction,
) -> Result<QuoteCurrency, InvalidInput> {
    validate_entry_price(entry_price)?;
    // The full-margin adverse move, `entry_price / leverage`.
    let adverse_move = entry_price / leverage;
    Ok(match direction {
        Direction::Long => entry_price - adverse_move,
        Direction::Short => entry_price + adverse_move,
    })
}
