pub mod grading;
pub mod input;
pub mod report;
pub mod session;

pub use crate::domain::model::{Feedback, GradeReport, Score, Status, StudentRecord, SCORE_COUNT};
pub use crate::domain::ports::ReportRenderer;
pub use crate::utils::error::Result;
