//! Deviation listings.
//!
//! This module handles:
//! - The deviation list model and its text forms
//! - Loading the Deviation resource from YAML

pub mod loader;
pub mod types;

pub use loader::{load_deviations, parse_deviations_str};
pub use types::{Deviation, DeviationType, Deviations, align_label, preview, reason_initial};
