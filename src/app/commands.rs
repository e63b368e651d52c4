use crate::config::{Command, DateCommand, MathCommand, Settings};
use crate::core::date::{self, Instant};
use crate::core::math;
use crate::utils::error::Result;
use chrono::SecondsFormat;
use serde_json::Value;

/// Value produced by a single CLI command.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Instant(Instant),
    Number(f64),
    Bool(bool),
    Text(String),
}

impl Output {
    pub fn render(&self, json: bool) -> String {
        if json {
            return self.to_json().to_string();
        }

        match self {
            Output::Instant(instant) => instant.to_rfc3339_opts(SecondsFormat::Millis, true),
            Output::Number(value) => value.to_string(),
            Output::Bool(value) => value.to_string(),
            Output::Text(text) => text.clone(),
        }
    }

    /// JSON has no NaN or infinity; those render as `null`.
    pub fn to_json(&self) -> Value {
        match self {
            Output::Instant(instant) => {
                Value::String(instant.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Output::Number(value) => serde_json::Number::from_f64(*value)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Output::Bool(value) => Value::Bool(*value),
            Output::Text(text) => Value::String(text.clone()),
        }
    }
}

pub async fn run(command: &Command, settings: &Settings) -> Result<Output> {
    match command {
        Command::Date(cmd) => run_date(cmd),
        Command::Math(cmd) => run_math(cmd, settings).await,
    }
}

fn run_date(command: &DateCommand) -> Result<Output> {
    tracing::debug!("Running date command: {:?}", command);

    let output = match command {
        DateCommand::StartOfDay { instant } => {
            Output::Instant(date::start_of_day(date::parse_instant(instant)?))
        }
        DateCommand::EndOfDay { instant } => {
            Output::Instant(date::end_of_day(date::parse_instant(instant)?))
        }
        DateCommand::AddDays { instant, days } => {
            Output::Instant(date::add_days(date::parse_instant(instant)?, *days))
        }
        DateCommand::SameDay { a, b } => Output::Bool(date::is_same_day(
            date::parse_instant(a)?,
            date::parse_instant(b)?,
        )),
        DateCommand::Format { instant } => {
            Output::Text(date::format_date(date::parse_instant(instant)?))
        }
        DateCommand::Validate { text } => Output::Bool(date::is_valid_date_format(text)),
    };
    Ok(output)
}

async fn run_math(command: &MathCommand, settings: &Settings) -> Result<Output> {
    tracing::debug!("Running math command: {:?}", command);

    let value = match *command {
        MathCommand::Add { a, b } => math::add(a, b),
        MathCommand::Subtract { a, b } => math::subtract(a, b),
        MathCommand::Multiply { a, b } => math::multiply(a, b),
        MathCommand::Divide { a, b } => math::divide(a, b)?,
        MathCommand::Power { base, exp } => math::power(base, exp),
        MathCommand::Sqrt { x } => math::sqrt(x)?,
        MathCommand::Factorial { n } => math::factorial(n)?,
        MathCommand::Log { x, base } => math::log(x, base)?,
        MathCommand::AsyncAdd { a, b } => {
            let delay = settings.async_add_delay();
            tracing::info!("⏳ Waiting {:?} for deferred addition", delay);
            math::async_add_after(a, b, delay).await
        }
    };
    Ok(Output::Number(value))
}
