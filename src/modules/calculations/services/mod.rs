pub mod calculation_service;
pub mod chart_breakdown;
pub mod input_validator;
pub mod profit_engine;

pub use calculation_service::{CalculationResponse, CalculationService};
pub use chart_breakdown::{ChartBreakdown, ChartSlice, TotalsBreakdown};
pub use input_validator::InputValidator;
pub use profit_engine::ProfitEngine;
