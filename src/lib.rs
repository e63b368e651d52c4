#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::Settings;

pub use crate::core::date::{
    add_days, end_of_day, format_date, is_same_day, is_valid_date_format, parse_date,
    parse_instant, start_of_day, Instant,
};
pub use crate::core::math::{
    add, async_add, async_add_after, divide, factorial, log, multiply, power, sqrt, subtract,
    ASYNC_ADD_DELAY,
};
pub use utils::error::{MathError, Result, UtilsError};
