use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CalculatedCost, CalculatedTax, Cost, Tax};

/// Typed, already-validated input for one profit calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub product_name: String,
    pub unit_price: Decimal,
    /// Units in the batch; the engine rejects values below 1
    pub quantity: i64,
    /// Applied in order
    pub taxes: Vec<Tax>,
    pub costs: Vec<Cost>,
}

/// Full breakdown produced by the profit engine
///
/// Amounts are exact; rounding for display is left to the consumer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub product_name: String,
    pub quantity: i64,
    pub gross_per_unit: Decimal,
    pub gross_total: Decimal,
    pub calculated_taxes: Vec<CalculatedTax>,
    pub total_tax_per_unit: Decimal,
    pub total_tax_total: Decimal,
    pub calculated_costs: Vec<CalculatedCost>,
    pub total_fixed: Decimal,
    pub total_variable_per_unit: Decimal,
    pub total_variable_total: Decimal,
    /// Fixed share + variable costs + taxes, per unit
    pub total_cost_per_unit: Decimal,
    pub total_cost_total: Decimal,
    pub net_profit_per_unit: Decimal,
    pub net_profit_total: Decimal,
    pub margin_percent: Decimal,
}

impl CalculationResult {
    /// True when the batch sells at or above its full cost
    pub fn is_profitable(&self) -> bool {
        self.net_profit_total >= Decimal::ZERO
    }
}
