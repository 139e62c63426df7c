// Raw calculation form, exactly as submitted by a client.
//
// Every numeric field stays a string here; the input validator turns it into
// a typed CalculationInput or a list of field errors. Missing fields
// deserialize to empty strings so they are reported as "required" instead of
// failing the whole payload.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationForm {
    pub product_name: String,
    pub product_value: String,
    pub quantity: String,
    pub taxes: Vec<TaxForm>,
    pub costs: Vec<CostForm>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxForm {
    pub id: String,
    pub name: String,
    pub rate: String,
    pub base: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostForm {
    pub id: String,
    pub name: String,
    pub value: String,
    #[serde(alias = "type")]
    pub kind: String,
}

impl TaxForm {
    pub fn new(id: &str, name: &str, rate: &str, base: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            rate: rate.to_string(),
            base: base.to_string(),
        }
    }
}

impl CostForm {
    pub fn new(id: &str, name: &str, value: &str, kind: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            value: value.to_string(),
            kind: kind.to_string(),
        }
    }
}

impl CalculationForm {
    /// Starting form offered to new users: one ICMS tax on the gross value,
    /// a fixed freight cost and a variable packaging cost.
    pub fn template() -> Self {
        Self {
            product_name: String::new(),
            product_value: String::new(),
            quantity: "1".to_string(),
            taxes: vec![TaxForm::new("tax-1", "ICMS", "18", "GROSS")],
            costs: vec![
                CostForm::new("cost-1", "Frete", "10", "FIXED"),
                CostForm::new("cost-2", "Embalagem", "2", "VARIABLE"),
            ],
        }
    }
}
