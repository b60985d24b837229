use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bordered plain-text report
    #[default]
    Text,
    /// Pretty-printed JSON report
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "student-average")]
#[command(about = "Computes a student's mean from three scores and reports pass/fail")]
pub struct CliConfig {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_interactive_behaviour() {
        let config = CliConfig::try_parse_from(["student-average"]).unwrap();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.verbose);
    }

    #[test]
    fn test_format_and_verbose_flags() {
        let config =
            CliConfig::try_parse_from(["student-average", "--format", "json", "-v"]).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.verbose);

        assert!(CliConfig::try_parse_from(["student-average", "--format", "xml"]).is_err());
    }
}
