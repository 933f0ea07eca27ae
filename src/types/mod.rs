//! The crates data types.

mod base_currency;
mod direction;
mod errors;
mod leverage;
mod order_type;
mod quote_currency;
mod trade_parameters;

pub use base_currency::BaseCurrency;
pub use direction::Direction;
pub use errors::{Error, InvalidInput, OrderError, Result};
pub use leverage::Leverage;
pub use order_type::OrderType;
pub use quote_currency::QuoteCurrency;
pub use trade_parameters::TradeParameters;
