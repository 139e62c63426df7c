use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::core::ValidationErrors;
use crate::modules::calculations::models::{
    CalculationForm, CalculationInput, Cost, CostForm, CostKind, Tax, TaxBase, TaxForm,
};

/// Upper bound for prices, rates and cost values
pub const MAX_AMOUNT: u64 = 1_000_000_000_000;

/// Upper bound for the batch size
pub const MAX_QUANTITY: i64 = 1_000_000_000;

/// Digits with an optional one or two place fraction; no sign, exponent or grouping
static AMOUNT_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]{1,2})?$").expect("amount pattern is valid"));

/// InputValidator turns a raw, string-typed calculation form into a typed
/// [`CalculationInput`], collecting every field error it finds.
pub struct InputValidator;

impl InputValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate and convert a submitted form.
    ///
    /// Monetary fields and tax rates accept `10`, `10.5` or `10.50`;
    /// quantity accepts digits only and must be positive.
    pub fn validate(&self, form: &CalculationForm) -> Result<CalculationInput, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let product_name = form.product_name.trim();
        if product_name.is_empty() {
            errors.push("product_name", "Product name is required");
        }

        let unit_price = parse_amount(&form.product_value, "product_value", "Product value", &mut errors);
        let quantity = parse_quantity(&form.quantity, &mut errors);

        let taxes: Vec<Option<Tax>> = form
            .taxes
            .iter()
            .enumerate()
            .map(|(index, tax)| validate_tax(index, tax, &mut errors))
            .collect();

        let costs: Vec<Option<Cost>> = form
            .costs
            .iter()
            .enumerate()
            .map(|(index, cost)| validate_cost(index, cost, &mut errors))
            .collect();

        if !errors.is_empty() {
            tracing::debug!(errors = errors.len(), "Calculation form rejected");
            return Err(errors);
        }

        match (unit_price, quantity) {
            (Some(unit_price), Some(quantity)) => Ok(CalculationInput {
                product_name: product_name.to_string(),
                unit_price,
                quantity,
                taxes: taxes.into_iter().flatten().collect(),
                costs: costs.into_iter().flatten().collect(),
            }),
            // Every None above pushed an error
            _ => Err(errors),
        }
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_tax(index: usize, form: &TaxForm, errors: &mut ValidationErrors) -> Option<Tax> {
    let prefix = format!("taxes[{}]", index);

    let name = form.name.trim();
    if name.is_empty() {
        errors.push(format!("{}.name", prefix), "Tax name is required");
    }

    let rate = parse_amount(&form.rate, &format!("{}.rate", prefix), "Tax rate", errors);

    let base = match TaxBase::from_str(&form.base) {
        Ok(base) => Some(base),
        Err(_) => {
            errors.push(
                format!("{}.base", prefix),
                "Tax base must be GROSS or ACCUMULATED",
            );
            None
        }
    };

    let (rate, base) = (rate?, base?);
    if name.is_empty() {
        return None;
    }

    Some(Tax::new(assign_id(&form.id, "tax", index), name, rate, base))
}

fn validate_cost(index: usize, form: &CostForm, errors: &mut ValidationErrors) -> Option<Cost> {
    let prefix = format!("costs[{}]", index);

    let name = form.name.trim();
    if name.is_empty() {
        errors.push(format!("{}.name", prefix), "Cost name is required");
    }

    let value = parse_amount(&form.value, &format!("{}.value", prefix), "Cost value", errors);

    let kind = match CostKind::from_str(&form.kind) {
        Ok(kind) => Some(kind),
        Err(_) => {
            errors.push(
                format!("{}.kind", prefix),
                "Cost kind must be FIXED or VARIABLE",
            );
            None
        }
    };

    let (value, kind) = (value?, kind?);
    if name.is_empty() {
        return None;
    }

    Some(Cost::new(assign_id(&form.id, "cost", index), name, value, kind))
}

/// Blank ids get a positional one, e.g. `tax-1` for the first tax
fn assign_id(id: &str, prefix: &str, index: usize) -> String {
    let id = id.trim();
    if id.is_empty() {
        format!("{}-{}", prefix, index + 1)
    } else {
        id.to_string()
    }
}

/// Parses a non-negative amount with at most two decimal places
fn parse_amount(raw: &str, field: &str, label: &str, errors: &mut ValidationErrors) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.push(field, format!("{} is required", label));
        return None;
    }

    if !is_amount_format(raw) {
        errors.push(
            field,
            format!("{} is invalid (use a format like 10 or 10.50)", label),
        );
        return None;
    }

    match Decimal::from_str(raw) {
        Ok(amount) if amount <= Decimal::from(MAX_AMOUNT) => Some(amount),
        _ => {
            errors.push(field, format!("{} cannot exceed {}", label, MAX_AMOUNT));
            None
        }
    }
}

fn parse_quantity(raw: &str, errors: &mut ValidationErrors) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.push("quantity", "Quantity is required");
        return None;
    }

    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        errors.push("quantity", "Quantity must be a positive whole number");
        return None;
    }

    match raw.parse::<i64>() {
        Ok(0) => {
            errors.push("quantity", "Quantity must be greater than zero");
            None
        }
        Ok(quantity) if quantity <= MAX_QUANTITY => Some(quantity),
        _ => {
            errors.push("quantity", format!("Quantity cannot exceed {}", MAX_QUANTITY));
            None
        }
    }
}

fn is_amount_format(raw: &str) -> bool {
    AMOUNT_FORMAT.is_match(raw)
}
