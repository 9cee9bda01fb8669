use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single buy/sell instruction as it appears on the wire.
///
/// The kind string is matched case-insensitively; anything other than
/// buy/sell is carried through and ignored by the processor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    #[serde(rename = "operation")]
    pub kind: String,
    #[serde(rename = "unit-cost")]
    pub unit_cost: Decimal,
    pub quantity: i64,
}

impl Operation {
    pub fn is_buy(&self) -> bool {
        self.kind.eq_ignore_ascii_case("buy")
    }

    pub fn is_sell(&self) -> bool {
        self.kind.eq_ignore_ascii_case("sell")
    }

    /// Total value of the operation (unit cost × quantity).
    pub fn total_value(&self) -> Decimal {
        self.unit_cost * Decimal::from(self.quantity)
    }
}

/// Tax owed for one operation, in input order. Zero for buys and for
/// non-taxable or rejected sells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxResult {
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
}

impl TaxResult {
    pub fn new(tax: Decimal) -> Self {
        TaxResult { tax }
    }

    pub fn zero() -> Self {
        TaxResult { tax: Decimal::ZERO }
    }
}

/// Decode one input line into a batch of operations.
pub fn read_batch(line: &str) -> serde_json::Result<Vec<Operation>> {
    serde_json::from_str(line)
}

/// Encode one batch of results as a single output line.
pub fn write_batch(results: &[TaxResult]) -> serde_json::Result<String> {
    serde_json::to_string(results)
}
