//! Capital gains tax rules: weighted-average position tracking and the
//! per-batch processor.

pub mod position;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::ops::{Operation, TaxResult};
use position::Position;

/// Sales with total value at or below this amount are exempt from tax.
pub const EXEMPTION_THRESHOLD: Decimal = dec!(20000);

/// Flat rate applied to taxable profit.
pub const TAX_RATE: Decimal = dec!(0.20);

/// Process one batch of operations against a fresh position.
///
/// Returns one result per operation, preserving input order. Buys and
/// operations with an unrecognized kind always yield zero tax; a bad
/// operation never fails the batch.
pub fn calculate_taxes(operations: &[Operation]) -> Vec<TaxResult> {
    let mut position = Position::new();

    operations
        .iter()
        .map(|op| {
            let tax = if op.is_buy() {
                position.buy(op.quantity, op.unit_cost);
                Decimal::ZERO
            } else if op.is_sell() {
                position.sell(op.quantity, op.unit_cost)
            } else {
                log::debug!("ignoring operation with unknown kind {:?}", op.kind);
                Decimal::ZERO
            };
            TaxResult::new(tax)
        })
        .collect()
}
