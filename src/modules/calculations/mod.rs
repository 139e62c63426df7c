// Calculations module: form validation, profit engine and chart breakdown

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{CalculationForm, CalculationInput, CalculationResult, Cost, CostKind, Tax, TaxBase};
pub use services::{CalculationService, ChartBreakdown, InputValidator, ProfitEngine};
