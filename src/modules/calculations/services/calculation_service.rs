use serde::Serialize;

use crate::core::error::AppError;
use crate::modules::calculations::models::{CalculationForm, CalculationInput, CalculationResult};

use super::{ChartBreakdown, InputValidator, ProfitEngine};

/// Response body for a successful calculation
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResponse {
    pub result: CalculationResult,
    pub breakdown: ChartBreakdown,
}

/// Service wiring the form validator, the profit engine and the chart
/// breakdown into one request pipeline
pub struct CalculationService {
    validator: InputValidator,
    engine: ProfitEngine,
}

impl CalculationService {
    pub fn new(validator: InputValidator, engine: ProfitEngine) -> Self {
        Self { validator, engine }
    }

    /// Validate a raw form without calculating
    pub fn validate(&self, form: &CalculationForm) -> Result<CalculationInput, AppError> {
        Ok(self.validator.validate(form)?)
    }

    /// Validate a raw form, compute the profit and derive the chart data
    pub fn calculate(&self, form: &CalculationForm) -> Result<CalculationResponse, AppError> {
        let input = self.validate(form)?;
        let result = self.engine.compute(&input)?;
        let breakdown = ChartBreakdown::from_result(&result);

        tracing::info!(
            product = %result.product_name,
            quantity = result.quantity,
            net_profit_total = %result.net_profit_total,
            "Calculation completed"
        );

        Ok(CalculationResponse { result, breakdown })
    }
}

impl Default for CalculationService {
    fn default() -> Self {
        Self::new(InputValidator::new(), ProfitEngine::new())
    }
}
