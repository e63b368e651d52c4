pub mod date;
pub mod math;

pub use crate::utils::error::{MathError, Result};
pub use date::Instant;
