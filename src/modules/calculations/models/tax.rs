use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Amount a tax percentage is applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaxBase {
    /// The unit sale price before any tax
    Gross,
    /// The unit sale price plus every tax computed before this one
    Accumulated,
}

impl TaxBase {
    /// Human-readable name shown next to the tax in a breakdown
    pub fn label(&self) -> &'static str {
        match self {
            TaxBase::Gross => "Gross value",
            TaxBase::Accumulated => "Value with taxes",
        }
    }
}

impl fmt::Display for TaxBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaxBase::Gross => write!(f, "GROSS"),
            TaxBase::Accumulated => write!(f, "ACCUMULATED"),
        }
    }
}

impl std::str::FromStr for TaxBase {
    type Err = String;

    /// Accepts the canonical names as well as the legacy form values
    /// `totalValue` and `valueWithTaxes`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GROSS" | "TOTALVALUE" => Ok(TaxBase::Gross),
            "ACCUMULATED" | "VALUEWITHTAXES" => Ok(TaxBase::Accumulated),
            _ => Err(format!("Invalid tax base: {}", s)),
        }
    }
}

/// A tax applied to the product, in calculation order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tax {
    pub id: String,
    pub name: String,
    /// Percentage, e.g. 18 for 18%
    pub rate: Decimal,
    pub base: TaxBase,
}

impl Tax {
    pub fn new(id: impl Into<String>, name: impl Into<String>, rate: Decimal, base: TaxBase) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rate,
            base,
        }
    }
}

/// A tax together with the amounts it produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatedTax {
    #[serde(flatten)]
    pub tax: Tax,
    pub per_unit_amount: Decimal,
    pub total_amount: Decimal,
    /// The per-unit amount the rate was applied to
    pub base_amount_used: Decimal,
    pub base_label: &'static str,
}
