use crate::domain::model::GradeReport;
use crate::utils::error::Result;

pub trait ReportRenderer {
    fn render(&self, report: &GradeReport) -> Result<String>;

    /// Whether the static program header is printed before prompting.
    fn shows_header(&self) -> bool {
        true
    }
}
