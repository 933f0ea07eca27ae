use getset::CopyGetters;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::types::{Direction, Leverage, OrderType, QuoteCurrency};

/// An order as it comes out of the order form, before any metric has been
/// derived from it.
///
/// Take profit and stop loss are carried along with the order but no math is
/// defined over them here; brackets are the executing venues concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TypedBuilder, CopyGetters)]
pub struct OrderRequest {
    /// Whether the order enters at the market price or a limit price.
    #[getset(get_copy = "pub")]
    order_type: OrderType,

    /// The direction of the position the order opens.
    #[getset(get_copy = "pub")]
    direction: Direction,

    /// The USD notional the order requests exposure to.
    #[getset(get_copy = "pub")]
    notional: QuoteCurrency,

    /// The requested leverage.
    #[getset(get_copy = "pub")]
    leverage: Leverage,

    /// The limit price; required for `Limit` orders, ignored for `Market`.
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    #[getset(get_copy = "pub")]
    limit_price: Option<QuoteCurrency>,

    /// Optional take profit price.
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    #[getset(get_copy = "pub")]
    take_profit: Option<QuoteCurrency>,

    /// Optional stop loss price.
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    #[getset(get_copy = "pub")]
    stop_loss: Option<QuoteCurrency>,
}
