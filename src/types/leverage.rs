use std::ops::Div;

use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize};

use super::{InvalidInput, QuoteCurrency};

/// Allows the quick construction of `Leverage`
///
/// # Panics:
/// if a non-finite value or a value <= 0 is provided.
#[macro_export]
macro_rules! leverage {
    ( $a:literal ) => {{
        $crate::prelude::Leverage::new($a).expect("the leverage literal must be finite and > 0")
    }};
}

/// Leverage, the multiplier by which margin is amplified into position size.
///
/// Guaranteed finite and > 0 by construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, Serialize)]
#[repr(transparent)]
pub struct Leverage(f64);

impl Leverage {
    /// Create a new instance from an `f64` value.
    pub fn new(val: f64) -> Result<Self, InvalidInput> {
        if !val.is_finite() || val <= 0.0 {
            return Err(InvalidInput::InvalidLeverage);
        }
        Ok(Self(val))
    }

    /// Compute the initial margin requirement from leverage.
    #[inline(always)]
    pub fn init_margin_req(&self) -> f64 {
        1.0 / self.0
    }
}

impl<'de> Deserialize<'de> for Leverage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let val = f64::deserialize(deserializer)?;
        Self::new(val).map_err(serde::de::Error::custom)
    }
}

impl Div<Leverage> for QuoteCurrency {
    type Output = QuoteCurrency;

    fn div(self, rhs: Leverage) -> Self::Output {
        QuoteCurrency::new(self.inner() / rhs.0)
    }
}
