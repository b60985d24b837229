use crate::core::grading::evaluate;
use crate::core::input::InputCollector;
use crate::core::report::render_header;
use crate::core::{GradeReport, ReportRenderer, StudentRecord};
use crate::utils::error::Result;
use std::io::{BufRead, Write};

/// Runs one student through header, collection, evaluation and rendering.
///
/// Prompts and re-prompt messages go to `P`; the rendered report goes to
/// `O`. The binary points both at stdout for the text report and moves
/// prompts to stderr for JSON, so stdout then holds only the JSON object.
pub struct GradingSession<R: BufRead, P: Write, O: Write, F: ReportRenderer> {
    input: InputCollector<R, P>,
    output: O,
    renderer: F,
}

impl<R: BufRead, P: Write, O: Write, F: ReportRenderer> GradingSession<R, P, O, F> {
    pub fn new(reader: R, prompts: P, output: O, renderer: F) -> Self {
        Self {
            input: InputCollector::new(reader, prompts),
            output,
            renderer,
        }
    }

    pub fn run(&mut self) -> Result<GradeReport> {
        tracing::info!("Starting grading session");

        if self.renderer.shows_header() {
            let header = render_header()?;
            self.input.writer().write_all(header.as_bytes())?;
        }

        // Collect
        let name = self.input.read_name()?;
        tracing::debug!("Collected name: {}", name);
        let scores = self.input.read_scores()?;
        tracing::debug!("Collected scores: {:?}", scores.map(|s| s.value()));
        self.input.writer().flush()?;

        // Evaluate
        let record = StudentRecord::new(name, scores)?;
        let report = evaluate(&record)?;
        tracing::info!(
            "Mean {:.2} -> {} ({})",
            report.mean,
            report.status,
            report.feedback
        );

        // Render
        let rendered = self.renderer.render(&report)?;
        self.output.write_all(rendered.as_bytes())?;
        self.output.flush()?;

        Ok(report)
    }

    pub fn into_inner(self) -> (R, P, O) {
        let (reader, prompts) = self.input.into_inner();
        (reader, prompts, self.output)
    }
}
