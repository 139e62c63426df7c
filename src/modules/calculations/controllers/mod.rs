pub mod calculation_controller;

pub use calculation_controller::configure;
