mod invalid_input;
mod main;
mod order;

pub use invalid_input::InvalidInput;
pub use main::{Error, Result};
pub use order::OrderError;
