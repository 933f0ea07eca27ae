use getset::CopyGetters;
use serde::{Deserialize, Serialize};

use crate::{
    position_math::{liquidation_price, margin_required, position_size},
    types::{BaseCurrency, InvalidInput, QuoteCurrency, TradeParameters},
};

/// The derived metrics of a prospective position, the summary an order form
/// renders next to its inputs.
///
/// Never stored; recompute it from fresh [`TradeParameters`] whenever an
/// input changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, CopyGetters)]
pub struct PositionMetrics {
    /// The entry price the metrics were derived from.
    #[getset(get_copy = "pub")]
    entry_price: QuoteCurrency,

    /// The position size the notional buys, denoted in BASE currency.
    #[getset(get_copy = "pub")]
    position_size: BaseCurrency,

    /// The collateral required to open the position.
    #[getset(get_copy = "pub")]
    margin_required: QuoteCurrency,

    /// The price at which the position loses its entire margin.
    #[getset(get_copy = "pub")]
    liquidation_price: QuoteCurrency,
}

impl PositionMetrics {
    /// Derive all metrics from the given trade parameters.
    ///
    /// # Returns:
    /// `InvalidInput` if the entry price is not finite and > 0,
    /// or the notional is not finite and >= 0.
    pub fn compute(params: &TradeParameters) -> Result<Self, InvalidInput> {
        let size = position_size(params.notional(), params.entry_price())?;
        Ok(Self {
            entry_price: params.entry_price(),
            position_size: size,
            margin_required: margin_required(size, params.entry_price(), params.leverage())?,
            liquidation_price: liquidation_price(
                params.entry_price(),
                params.leverage(),
                params.direction(),
            )?,
        })
    }
}
