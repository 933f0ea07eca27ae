use tracing::{debug, trace};

use crate::{
    pair_spec::PairSpec,
    position_metrics::PositionMetrics,
    order_request::OrderRequest,
    types::{OrderError, OrderType, QuoteCurrency, Result, TradeParameters},
};

/// Derive the metrics an order would open a position with.
///
/// The entry price is the orders limit price for `Limit` orders and the
/// pairs current market price otherwise. The request is validated against
/// the pair before anything is computed.
///
/// # Returns:
/// The derived [`PositionMetrics`],
/// an `OrderError` if the pair rejects the request,
/// or an `InvalidInput` if a calculation precondition is violated.
pub fn preview_order(
    pair: &PairSpec,
    order: &OrderRequest,
    market_price: QuoteCurrency,
) -> Result<PositionMetrics> {
    trace!("preview_order: {order:?} on {}", pair.symbol());
    pair.validate_order(order)?;

    let entry_price = match order.order_type() {
        OrderType::Limit => order.limit_price().ok_or(OrderError::MissingLimitPrice)?,
        OrderType::Market => market_price,
    };
    let params = TradeParameters::builder()
        .notional(order.notional())
        .entry_price(entry_price)
        .leverage(order.leverage())
        .direction(order.direction())
        .build();

    let metrics = PositionMetrics::compute(&params)?;
    debug!(
        "previewed {} {} @ {entry_price}: size {}, margin {}, liquidation {}",
        order.direction(),
        pair.symbol(),
        metrics.position_size(),
        metrics.margin_required(),
        metrics.liquidation_price(),
    );
    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        base, leverage, quote,
        pair_spec::PairCategory,
        types::{Direction, Error, InvalidInput},
    };

    fn eth_usd() -> PairSpec {
        PairSpec::builder()
            .symbol("ETH/USD")
            .name("Ethereum")
            .category(PairCategory::Crypto)
            .max_leverage(leverage!(150.0))
            .min_position_size(quote!(10.0))
            .build()
    }

    #[tracing_test::traced_test]
    #[test]
    fn preview_market_order_uses_market_price() {
        let order = OrderRequest::builder()
            .order_type(OrderType::Market)
            .direction(Direction::Long)
            .notional(quote!(1000.0))
            .leverage(leverage!(10.0))
            .build();
        let metrics = preview_order(&eth_usd(), &order, quote!(50_000.0)).unwrap();
        assert_eq!(metrics.entry_price(), quote!(50_000.0));
        assert_eq!(metrics.position_size(), base!(0.02));
        assert_eq!(metrics.margin_required(), quote!(100.0));
        assert_eq!(metrics.liquidation_price(), quote!(45_000.0));
    }

    #[test]
    fn preview_limit_order_uses_limit_price() {
        let order = OrderRequest::builder()
            .order_type(OrderType::Limit)
            .direction(Direction::Short)
            .notional(quote!(530.0))
            .leverage(leverage!(5.0))
            .limit_price(quote!(2650.0))
            .build();
        let metrics = preview_order(&eth_usd(), &order, quote!(3423.80)).unwrap();
        assert_eq!(metrics.entry_price(), quote!(2650.0));
        assert_eq!(metrics.liquidation_price(), quote!(3180.0));
    }

    #[test]
    fn preview_rejected_by_pair_rules() {
        let order = OrderRequest::builder()
            .order_type(OrderType::Market)
            .direction(Direction::Long)
            .notional(quote!(5.0))
            .leverage(leverage!(10.0))
            .build();
        assert_eq!(
            preview_order(&eth_usd(), &order, quote!(3423.80)),
            Err(Error::OrderError(OrderError::BelowMinPositionSize))
        );
    }

    #[test]
    fn preview_invalid_market_price() {
        let order = OrderRequest::builder()
            .order_type(OrderType::Market)
            .direction(Direction::Long)
            .notional(quote!(1000.0))
            .leverage(leverage!(10.0))
            .build();
        assert_eq!(
            preview_order(&eth_usd(), &order, quote!(0.0)),
            Err(Error::InvalidInput(InvalidInput::InvalidEntryPrice))
        );
    }
}
