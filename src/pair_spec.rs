use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{
    order_request::OrderRequest,
    types::{Leverage, OrderError, OrderType, QuoteCurrency},
};

/// The category a trading pair belongs to.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs, reason = "Self-describing market categories")]
pub enum PairCategory {
    Crypto,
    Forex,
    Stocks,
    Commodities,
}

/// Specifies the calculation relevant details of a trading pair.
///
/// The pair record is where an assets leverage cap lives; bounding a
/// requested leverage against it is the callers job, not the math modules,
/// and happens through [`PairSpec::validate_order`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder, Getters, CopyGetters)]
pub struct PairSpec {
    /// Identifying ticker symbol, e.g. `BTC/USD`.
    #[builder(setter(into))]
    #[getset(get = "pub")]
    symbol: String,

    /// Human readable asset name, e.g. `Bitcoin`.
    #[builder(setter(into))]
    #[getset(get = "pub")]
    name: String,

    /// The market category of the pair.
    #[getset(get_copy = "pub")]
    category: PairCategory,

    /// The maximum leverage the pair allows.
    #[getset(get_copy = "pub")]
    max_leverage: Leverage,

    /// The minimum USD notional of an order.
    #[getset(get_copy = "pub")]
    min_position_size: QuoteCurrency,

    /// Whether the pair currently accepts orders.
    #[builder(default = true)]
    #[getset(get_copy = "pub")]
    is_active: bool,
}

impl PairSpec {
    /// Check an order request against the rules of this pair.
    ///
    /// # Returns:
    /// The first violated rule, if any.
    pub fn validate_order(&self, order: &OrderRequest) -> Result<(), OrderError> {
        if !self.is_active {
            return Err(OrderError::PairInactive);
        }
        if order.leverage() > self.max_leverage {
            return Err(OrderError::LeverageExceedsMax);
        }
        if order.notional() < self.min_position_size {
            return Err(OrderError::BelowMinPositionSize);
        }
        if order.order_type() == OrderType::Limit && order.limit_price().is_none() {
            return Err(OrderError::MissingLimitPrice);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{leverage, quote, types::Direction};

    fn btc_usd() -> PairSpec {
        PairSpec::builder()
            .symbol("BTC/USD")
            .name("Bitcoin")
            .category(PairCategory::Crypto)
            .max_leverage(leverage!(150.0))
            .min_position_size(quote!(10.0))
            .build()
    }

    fn market_order(notional: QuoteCurrency, lev: Leverage) -> OrderRequest {
        OrderRequest::builder()
            .order_type(OrderType::Market)
            .direction(Direction::Long)
            .notional(notional)
            .leverage(lev)
            .build()
    }

    #[test]
    fn pair_spec_accepts_valid_order() {
        let order = market_order(quote!(1000.0), leverage!(10.0));
        assert!(btc_usd().validate_order(&order).is_ok());
    }

    #[test]
    fn pair_spec_rejects_inactive() {
        let pair = PairSpec::builder()
            .symbol("PNUT/USD")
            .name("Peanut the Squirrel")
            .category(PairCategory::Crypto)
            .max_leverage(leverage!(150.0))
            .min_position_size(quote!(10.0))
            .is_active(false)
            .build();
        let order = market_order(quote!(1000.0), leverage!(10.0));
        assert_eq!(pair.validate_order(&order), Err(OrderError::PairInactive));
    }

    #[test]
    fn pair_spec_rejects_excessive_leverage() {
        let order = market_order(quote!(1000.0), leverage!(151.0));
        assert_eq!(
            btc_usd().validate_order(&order),
            Err(OrderError::LeverageExceedsMax)
        );
        // At exactly the cap the order passes.
        let order = market_order(quote!(1000.0), leverage!(150.0));
        assert!(btc_usd().validate_order(&order).is_ok());
    }

    #[test]
    fn pair_spec_rejects_small_notional() {
        let order = market_order(quote!(9.99), leverage!(10.0));
        assert_eq!(
            btc_usd().validate_order(&order),
            Err(OrderError::BelowMinPositionSize)
        );
    }

    #[test]
    fn pair_spec_rejects_limit_order_without_price() {
        let order = OrderRequest::builder()
            .order_type(OrderType::Limit)
            .direction(Direction::Short)
            .notional(quote!(1000.0))
            .leverage(leverage!(10.0))
            .build();
        assert_eq!(
            btc_usd().validate_order(&order),
            Err(OrderError::MissingLimitPrice)
        );
    }

    #[test]
    fn pair_category_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&PairCategory::Crypto).expect("serializes"),
            "\"crypto\""
        );
    }
}
