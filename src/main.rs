use clap::Parser;
use student_average::core::ReportRenderer;
use student_average::utils::logger;
use student_average::{
    CliConfig, GradeReport, GradingSession, JsonRenderer, OutputFormat, Result, TextRenderer,
};
use std::io::{self, BufRead, Write};

fn run_session<R: BufRead, P: Write, O: Write, F: ReportRenderer>(
    reader: R,
    prompts: P,
    output: O,
    renderer: F,
) -> Result<GradeReport> {
    GradingSession::new(reader, prompts, output, renderer).run()
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting student-average CLI");
    tracing::debug!("CLI config: {:?}", config);

    // Console locks are released when this scope ends, on success and error alike.
    // The stdout lock is reentrant, so prompts and report share it in text mode.
    let outcome = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let stderr = io::stderr();
        let reader = stdin.lock();

        match config.format {
            OutputFormat::Text => run_session(reader, stdout.lock(), stdout.lock(), TextRenderer),
            OutputFormat::Json => run_session(reader, stderr.lock(), stdout.lock(), JsonRenderer),
        }
    };

    match outcome {
        Ok(report) => {
            tracing::info!("✅ Report generated for {} ({})", report.name, report.status);
        }
        Err(e) => {
            tracing::error!("❌ Grading session failed: {}", e);
            eprintln!("❌ Unexpected error: {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }

    Ok(())
}
