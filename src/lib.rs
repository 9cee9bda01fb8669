//! Capital gains tax calculation over batches of buy/sell operations.
//!
//! Each batch is an independent sequence of operations on a single asset.
//! The [`tax`] module holds the position tracking and tax rules, [`ops`] the
//! JSON wire records, and [`cmd`] the line-oriented process loop.

pub mod cmd;
pub mod ops;
pub mod tax;

pub use ops::{Operation, TaxResult};
pub use tax::{calculate_taxes, position::Position};
