//! Profit Analyzer Library
//!
//! Computes per-unit and total profit for a product from its sale price,
//! quantity, sequentially applied taxes and fixed/variable costs, and serves
//! the calculation over a small JSON API.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::calculations;
