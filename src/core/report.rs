use crate::core::{GradeReport, ReportRenderer};
use crate::domain::model::PASSING_MEAN;
use crate::utils::error::Result;
use std::fmt::Write;

pub const REPORT_WIDTH: usize = 60;

fn rule(c: char) -> String {
    c.to_string().repeat(REPORT_WIDTH)
}

fn centered(text: &str) -> String {
    format!("{:^width$}", text, width = REPORT_WIDTH)
        .trim_end()
        .to_string()
}

pub fn render_header() -> Result<String> {
    let mut out = String::new();
    writeln!(out, "{}", rule('='))?;
    writeln!(out, "{}", centered("STUDENT AVERAGE CALCULATOR"))?;
    writeln!(out, "{}", rule('='))?;
    writeln!(out, "This program computes a student's mean from 3 scores.")?;
    writeln!(out, "Passing mean: {:.2}", PASSING_MEAN)?;
    writeln!(out, "{}", rule('-'))?;
    Ok(out)
}

/// The bordered plain-text report.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl ReportRenderer for TextRenderer {
    fn render(&self, report: &GradeReport) -> Result<String> {
        let [n1, n2, n3] = report.scores;
        let mut out = String::new();

        writeln!(out)?;
        writeln!(out, "{}", rule('='))?;
        writeln!(out, "{}", centered("FINAL REPORT"))?;
        writeln!(out, "{}", rule('='))?;
        writeln!(out, " Student: {}", report.name)?;
        writeln!(out, "{}", rule('-'))?;
        writeln!(out, " First Score (N1):  {}", n1)?;
        writeln!(out, " Second Score (N2): {}", n2)?;
        writeln!(out, " Third Score (N3):  {}", n3)?;
        writeln!(out, "{}", rule('-'))?;
        writeln!(out, " FINAL MEAN: {:.2}", report.mean)?;
        writeln!(out, " STATUS: {}", report.status)?;
        writeln!(out, "{}", rule('='))?;

        writeln!(out)?;
        writeln!(out, " ADDITIONAL INFORMATION:")?;
        writeln!(out, " {}", report.feedback.message())?;
        if let Some(points) = report.points_needed {
            writeln!(out, " {:.2} points short of the passing mean.", points)?;
        }
        writeln!(out)?;
        writeln!(out, "Thank you for using the Student Average Calculator!")?;

        Ok(out)
    }
}

/// Pretty-printed JSON of the report, for piping into other tools.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &GradeReport) -> Result<String> {
        let mut json = serde_json::to_string_pretty(report)?;
        json.push('\n');
        Ok(json)
    }

    fn shows_header(&self) -> bool {
        false
    }
}
