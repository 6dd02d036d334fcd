//! Output formatting for allocation plans.
//!
//! This module handles rendering a plan:
//! - [`terminal`] - fixed-width table
//! - [`csv`] - CSV rows
//! - [`json`] - JSON report

mod csv;
mod json;
mod terminal;

use crate::config::OutputFormat;
use crate::models::AllocationPlan;
use std::error::Error;

pub use csv::render_csv;
pub use json::{render_json, PlanReport};
pub use terminal::{format_field, format_usable, render_table};

/// Render the plan in the requested format.
pub fn render(plan: &AllocationPlan, format: OutputFormat) -> Result<String, Box<dyn Error>> {
    Ok(match format {
        OutputFormat::Table => render_table(plan),
        OutputFormat::Csv => render_csv(plan),
        OutputFormat::Json => render_json(plan)? + "\n",
    })
}
