use derive_more::{Add, AddAssign, AsRef, Display, From, Into, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

use super::QuoteCurrency;

/// Allows the quick construction of `BaseCurrency`
#[macro_export]
macro_rules! base {
    ( $a:expr ) => {{
        $crate::prelude::BaseCurrency::new($a)
    }};
}

/// The markets BASE currency, e.g.: BTC/USD -> BTC is the base currency.
/// Position sizes are denoted in it.
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
pub struct BaseCurrency(f64);

impl BaseCurrency {
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

    /// Convert a BASE denoted quantity into its QUOTE denoted value
    /// at the given price per unit, e.g an asset quantity into a USD notional.
    pub fn convert(&self, price_per_unit: QuoteCurrency) -> QuoteCurrency {
        assert2::debug_assert!(price_per_unit > QuoteCurrency::new(0.0));
        QuoteCurrency::new(self.0 * price_per_unit.inner())
    }
}
