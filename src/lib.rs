#![deny(rustdoc::missing_crate_level_docs, unused_imports)]
#![warn(missing_docs, clippy::all)]
#![doc = include_str!("../README.md")]

mod order_request;
mod pair_spec;
mod pnl;
mod position_math;
mod position_metrics;
mod preview;
mod types;

/// Exports common types
pub mod prelude {
    pub use crate::{
        base, leverage,
        order_request::OrderRequest,
        pair_spec::{PairCategory, PairSpec},
        pnl::{pnl_percent, unrealized_pnl},
        position_math::{liquidation_price, margin_required, position_size},
        position_metrics::PositionMetrics,
        preview::preview_order,
        quote,
        types::*,
    };
}
