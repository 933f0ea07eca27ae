use serde::{Deserialize, Serialize};

/// Defines the available order types
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// aggressive market order, entering at the pairs market price
    Market,
    /// passive limit order, entering at a user chosen limit price
    Limit,
}
