use rust_decimal::Decimal;

use crate::core::error::AppError;
use crate::modules::calculations::models::{
    CalculatedCost, CalculatedTax, CalculationInput, CalculationResult, CostKind, TaxBase,
};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// ProfitEngine turns a validated calculation input into a full breakdown
/// of taxes, costs and net profit.
///
/// The engine is stateless; one instance can be shared across workers.
pub struct ProfitEngine;

impl ProfitEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compute gross value, taxes, costs, net profit and margin.
    ///
    /// Taxes are applied in input order. A GROSS tax is always applied to the
    /// unit price; an ACCUMULATED tax is applied to the unit price plus every
    /// tax computed before it, whatever the base of those earlier taxes.
    ///
    /// Fails with [`AppError::InvalidQuantity`] when `quantity <= 0` and with
    /// [`AppError::AmountOutOfRange`] when an intermediate amount does not fit
    /// in a `Decimal`.
    pub fn compute(&self, input: &CalculationInput) -> Result<CalculationResult, AppError> {
        if input.quantity <= 0 {
            return Err(AppError::InvalidQuantity(input.quantity));
        }
        let quantity = Decimal::from(input.quantity);

        let gross_per_unit = input.unit_price;
        let gross_total = mul(gross_per_unit, quantity, "gross total")?;

        // Taxes
        let mut total_tax_per_unit = Decimal::ZERO;
        let mut accumulated_base = gross_per_unit;
        let mut calculated_taxes = Vec::with_capacity(input.taxes.len());

        for tax in &input.taxes {
            let base_amount_used = match tax.base {
                TaxBase::Gross => gross_per_unit,
                TaxBase::Accumulated => accumulated_base,
            };

            let per_unit_amount = div(mul(base_amount_used, tax.rate, &tax.name)?, HUNDRED, &tax.name)?;
            total_tax_per_unit = add(total_tax_per_unit, per_unit_amount, "tax per unit")?;
            accumulated_base = add(accumulated_base, per_unit_amount, "accumulated tax base")?;

            calculated_taxes.push(CalculatedTax {
                tax: tax.clone(),
                per_unit_amount,
                total_amount: mul(per_unit_amount, quantity, &tax.name)?,
                base_amount_used,
                base_label: tax.base.label(),
            });
        }

        let total_tax_total = mul(total_tax_per_unit, quantity, "tax total")?;

        // Costs
        let mut total_fixed = Decimal::ZERO;
        let mut total_variable_per_unit = Decimal::ZERO;
        let mut calculated_costs = Vec::with_capacity(input.costs.len());

        for cost in &input.costs {
            let (per_unit_amount, total_amount) = match cost.kind {
                CostKind::Fixed => {
                    total_fixed = add(total_fixed, cost.value, "fixed costs")?;
                    (div(cost.value, quantity, &cost.name)?, cost.value)
                }
                CostKind::Variable => {
                    total_variable_per_unit =
                        add(total_variable_per_unit, cost.value, "variable costs")?;
                    (cost.value, mul(cost.value, quantity, &cost.name)?)
                }
            };

            calculated_costs.push(CalculatedCost {
                cost: cost.clone(),
                per_unit_amount,
                total_amount,
            });
        }

        let total_variable_total = mul(total_variable_per_unit, quantity, "variable cost total")?;

        // Taxes count as cost
        let fixed_per_unit = div(total_fixed, quantity, "fixed costs")?;
        let total_cost_per_unit = add(
            add(fixed_per_unit, total_variable_per_unit, "cost per unit")?,
            total_tax_per_unit,
            "cost per unit",
        )?;
        let total_cost_total = add(
            add(total_fixed, total_variable_total, "cost total")?,
            total_tax_total,
            "cost total",
        )?;

        let net_profit_per_unit = sub(gross_per_unit, total_cost_per_unit, "net profit per unit")?;
        let net_profit_total = sub(gross_total, total_cost_total, "net profit total")?;

        let margin_percent = if gross_per_unit > Decimal::ZERO {
            mul(
                div(net_profit_per_unit, gross_per_unit, "margin")?,
                HUNDRED,
                "margin",
            )?
        } else {
            Decimal::ZERO
        };

        tracing::debug!(
            product = %input.product_name,
            quantity = input.quantity,
            taxes = calculated_taxes.len(),
            costs = calculated_costs.len(),
            net_profit_total = %net_profit_total,
            margin_percent = %margin_percent,
            "Profit calculated"
        );

        Ok(CalculationResult {
            product_name: input.product_name.clone(),
            quantity: input.quantity,
            gross_per_unit,
            gross_total,
            calculated_taxes,
            total_tax_per_unit,
            total_tax_total,
            calculated_costs,
            total_fixed,
            total_variable_per_unit,
            total_variable_total,
            total_cost_per_unit,
            total_cost_total,
            net_profit_per_unit,
            net_profit_total,
            margin_percent,
        })
    }
}

fn out_of_range(what: &str) -> AppError {
    tracing::warn!(amount = %what, "Calculation amount out of range");
    AppError::AmountOutOfRange(what.to_string())
}

fn add(a: Decimal, b: Decimal, what: &str) -> Result<Decimal, AppError> {
    a.checked_add(b).ok_or_else(|| out_of_range(what))
}

fn sub(a: Decimal, b: Decimal, what: &str) -> Result<Decimal, AppError> {
    a.checked_sub(b).ok_or_else(|| out_of_range(what))
}

fn mul(a: Decimal, b: Decimal, what: &str) -> Result<Decimal, AppError> {
    a.checked_mul(b).ok_or_else(|| out_of_range(what))
}

fn div(a: Decimal, b: Decimal, what: &str) -> Result<Decimal, AppError> {
    a.checked_div(b).ok_or_else(|| out_of_range(what))
}

impl Default for ProfitEngine {
    fn default() -> Self {
        Self::new()
    }
}
