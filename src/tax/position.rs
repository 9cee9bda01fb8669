use rust_decimal::{Decimal, RoundingStrategy};

use super::{EXEMPTION_THRESHOLD, TAX_RATE};

/// Round a currency amount to 2 decimal places, half away from zero.
pub(crate) fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Running position in a single asset within one batch.
///
/// Holds the quantity, the weighted-average acquisition cost and the loss
/// balance carried forward across sales. Created zeroed for each batch and
/// never shared between batches.
#[derive(Debug, Clone, Default)]
pub struct Position {
    quantity: i64,
    average_cost: Decimal,
    accumulated_loss: Decimal,
}

impl Position {
    pub fn new() -> Self {
        Position::default()
    }

    /// Units currently held. Never negative.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Weighted-average acquisition price per unit, 2 decimal places.
    pub fn average_cost(&self) -> Decimal {
        self.average_cost
    }

    /// Loss balance available to offset future taxable profit.
    pub fn accumulated_loss(&self) -> Decimal {
        self.accumulated_loss
    }

    /// Add units at the given cost, recomputing the weighted-average price.
    ///
    /// Non-positive quantities are rejected silently. Buys never produce tax.
    pub fn buy(&mut self, quantity: i64, unit_cost: Decimal) {
        if quantity <= 0 {
            log::debug!("BUY rejected: non-positive quantity {}", quantity);
            return;
        }

        let held_value = Decimal::from(self.quantity) * self.average_cost;
        let bought_value = Decimal::from(quantity) * unit_cost;
        let new_quantity = self.quantity + quantity;

        self.average_cost =
            round_currency((held_value + bought_value) / Decimal::from(new_quantity));
        self.quantity = new_quantity;

        log::debug!(
            "BUY {} @ {}: qty={}, avg={}",
            quantity,
            unit_cost,
            self.quantity,
            self.average_cost
        );
    }

    /// Remove units at the given price, returning the tax owed on the sale.
    ///
    /// Non-positive quantities and oversells are rejected silently with zero
    /// tax and no state change. Sales with total value at or below the
    /// exemption threshold are tax-free; losses accrue into the loss balance
    /// and are deducted from the next taxable profit.
    pub fn sell(&mut self, quantity: i64, unit_price: Decimal) -> Decimal {
        if quantity <= 0 || quantity > self.quantity {
            log::debug!(
                "SELL rejected: quantity {} (held {})",
                quantity,
                self.quantity
            );
            return Decimal::ZERO;
        }

        let total_sale_value = Decimal::from(quantity) * unit_price;
        let is_exempt = total_sale_value <= EXEMPTION_THRESHOLD;

        self.quantity -= quantity;

        // Cost basis uses the average cost as of before this sale; sells
        // never change the average.
        let cost_basis = Decimal::from(quantity) * self.average_cost;
        let profit_or_loss = total_sale_value - cost_basis;

        log::debug!(
            "SELL {} @ {}: proceeds={}, basis={}, p/l={}, exempt={}",
            quantity,
            unit_price,
            total_sale_value,
            cost_basis,
            profit_or_loss,
            is_exempt
        );

        if is_exempt {
            if profit_or_loss < Decimal::ZERO {
                self.accumulated_loss += profit_or_loss.abs();
            }
            return Decimal::ZERO;
        }

        if profit_or_loss <= Decimal::ZERO {
            self.accumulated_loss += profit_or_loss.abs();
            return Decimal::ZERO;
        }

        let loss_to_deduct = self.accumulated_loss.min(profit_or_loss);
        self.accumulated_loss -= loss_to_deduct;
        let taxable_profit = profit_or_loss - loss_to_deduct;

        round_currency(taxable_profit * TAX_RATE)
    }
}
