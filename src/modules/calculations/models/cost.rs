use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a cost scales with the batch size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CostKind {
    /// Lump sum for the whole batch, spread evenly per unit
    Fixed,
    /// Charged once per unit
    Variable,
}

impl fmt::Display for CostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostKind::Fixed => write!(f, "FIXED"),
            CostKind::Variable => write!(f, "VARIABLE"),
        }
    }
}

impl std::str::FromStr for CostKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "FIXED" => Ok(CostKind::Fixed),
            "VARIABLE" => Ok(CostKind::Variable),
            _ => Err(format!("Invalid cost kind: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    pub id: String,
    pub name: String,
    pub value: Decimal,
    pub kind: CostKind,
}

impl Cost {
    pub fn new(id: impl Into<String>, name: impl Into<String>, value: Decimal, kind: CostKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value,
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatedCost {
    #[serde(flatten)]
    pub cost: Cost,
    pub per_unit_amount: Decimal,
    pub total_amount: Decimal,
}
