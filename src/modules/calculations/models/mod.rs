mod calculation;
mod cost;
mod form;
mod tax;

pub use calculation::{CalculationInput, CalculationResult};
pub use cost::{CalculatedCost, Cost, CostKind};
pub use form::{CalculationForm, CostForm, TaxForm};
pub use tax::{CalculatedTax, Tax, TaxBase};
