pub mod error;

pub use error::{AppError, Result, ValidationError, ValidationErrors};
