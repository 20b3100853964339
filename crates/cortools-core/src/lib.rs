// crates/cortools-core/src/lib.rs

pub mod error;
pub mod config;

pub mod grid;
pub mod format;
pub mod capture;
pub mod color;

pub use crate::config::{ComputerProfile, Orientation, TemplateConfig};
pub use crate::error::{CorError, Result};
pub use crate::format::{CorrectionTable, FormatProfile, Label};
pub use crate::grid::{CorrectionGrid, Displacement};
