use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "small-utils")]
#[command(about = "UTC date helpers and arithmetic helpers")]
pub struct CliConfig {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results as JSON values
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Date helpers (instants are RFC 3339 timestamps or YYYY-MM-DD)
    #[command(subcommand)]
    Date(DateCommand),

    /// Arithmetic helpers
    #[command(subcommand)]
    Math(MathCommand),
}

#[derive(Debug, Clone, Subcommand)]
pub enum DateCommand {
    StartOfDay { instant: String },
    EndOfDay { instant: String },
    AddDays {
        instant: String,
        #[arg(allow_negative_numbers = true)]
        days: i64,
    },
    SameDay { a: String, b: String },
    Format { instant: String },
    Validate { text: String },
}

#[derive(Debug, Clone, Subcommand)]
pub enum MathCommand {
    Add {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    Subtract {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    Multiply {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    Divide {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
    Power {
        #[arg(allow_negative_numbers = true)]
        base: f64,
        #[arg(allow_negative_numbers = true)]
        exp: f64,
    },
    Sqrt {
        #[arg(allow_negative_numbers = true)]
        x: f64,
    },
    Factorial {
        #[arg(allow_negative_numbers = true)]
        n: f64,
    },
    Log {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(long)]
        base: Option<f64>,
    },
    /// Add after the configured delay (default 1000 ms)
    AsyncAdd {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },
}
