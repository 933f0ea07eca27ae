use derive_more::{Add, AddAssign, AsRef, Display, From, Into, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

use super::BaseCurrency;

/// Allows the quick construction of `QuoteCurrency`
#[macro_export]
macro_rules! quote {
    ( $a:expr ) => {{
        $crate::prelude::QuoteCurrency::new($a)
    }};
}

/// The markets QUOTE currency, e.g.: BTC/USD -> USD is the quote currency.
/// Prices, notional values, margins and profits are all denoted in it.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Neg,
    Display,
    From,
    Into,
    AsRef,
)]
#[repr(transparent)]
pub struct QuoteCurrency(f64);

impl QuoteCurrency {
    /// Create a new instance from an `f64` value
    #[inline(always)]
    pub fn new(val: f64) -> Self {
        Self(val)
    }

    #[inline(always)]
    pub(crate) fn inner(self) -> f64 {
        self.0
    }

    /// Whether the value is neither infinite nor `NaN`.
    #[inline(always)]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Convert a QUOTE denoted value into its BASE denoted equivalent
    /// at the given price per unit, e.g a USD notional into an asset quantity.
    pub fn convert(&self, price_per_unit: QuoteCurrency) -> BaseCurrency {
        assert2::debug_assert!(price_per_unit > Self::new(0.0));
        BaseCurrency::new(self.0 / price_per_unit.0)
    }
}
