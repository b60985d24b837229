#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, OutputFormat};

pub use crate::core::{
    grading::{classify, evaluate, feedback, mean, points_needed},
    report::{JsonRenderer, TextRenderer},
    session::GradingSession,
};
pub use crate::domain::model::{Feedback, GradeReport, Score, Status, StudentRecord};
pub use crate::utils::error::{GradeError, Result};
