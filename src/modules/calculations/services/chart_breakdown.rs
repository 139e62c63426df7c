use rust_decimal::Decimal;
use serde::Serialize;

use crate::modules::calculations::models::CalculationResult;

/// One slice of the per-unit price composition chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub label: &'static str,
    pub value: Decimal,
}

/// Batch totals as shown in the breakdown bar chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalsBreakdown {
    pub gross: Decimal,
    pub taxes: Decimal,
    /// Fixed and variable costs, taxes excluded
    pub costs: Decimal,
    pub net_profit: Decimal,
}

/// Chart groupings derived from a calculation result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBreakdown {
    /// Only slices with a positive value are kept
    pub unit_composition: Vec<ChartSlice>,
    pub totals: TotalsBreakdown,
}

impl ChartBreakdown {
    pub fn from_result(result: &CalculationResult) -> Self {
        let unit_composition = [
            ("Taxes", result.total_tax_per_unit),
            (
                "Costs",
                result.total_cost_per_unit - result.total_tax_per_unit,
            ),
            ("Net profit", result.net_profit_per_unit),
        ]
        .into_iter()
        .filter(|(_, value)| *value > Decimal::ZERO)
        .map(|(label, value)| ChartSlice { label, value })
        .collect();

        let totals = TotalsBreakdown {
            gross: result.gross_total,
            taxes: result.total_tax_total,
            costs: result.total_cost_total - result.total_tax_total,
            net_profit: result.net_profit_total,
        };

        Self {
            unit_composition,
            totals,
        }
    }
}
