//! Parameter engine for prompt templates.
//!
//! A parameter is a template line of the form `[UPPER_SNAKE_KEY] = value`.
//! Keys come from syntax alone: nothing declares them elsewhere.

pub mod extract;
pub mod fill;

pub use extract::{extract_parameters, Parameter};
pub use fill::{fill_template, validate_values, ParameterError};
