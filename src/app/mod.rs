// Application layer: wires CLI commands to the date and math helpers.

pub mod commands;

pub use commands::{run, Output};
