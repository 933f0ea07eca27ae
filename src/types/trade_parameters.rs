use getset::CopyGetters;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::{Direction, Leverage, QuoteCurrency};

/// The user entered parameters of a trade, as they come out of an order form:
/// the USD notional to risk, the entry price, the leverage and the direction.
///
/// Ephemeral: a caller re-creates these on every input change and derives
/// fresh [`PositionMetrics`](crate::prelude::PositionMetrics) from them;
/// nothing in here is ever mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TypedBuilder, CopyGetters)]
pub struct TradeParameters {
    /// The USD denominated value the trader wants exposure to.
    #[getset(get_copy = "pub")]
    notional: QuoteCurrency,

    /// The price at which the position is entered.
    #[getset(get_copy = "pub")]
    entry_price: QuoteCurrency,

    /// The multiplier by which margin is amplified into position size.
    #[getset(get_copy = "pub")]
    leverage: Leverage,

    /// Whether the position profits from rising or falling prices.
    #[getset(get_copy = "pub")]
    direction: Direction,
}
