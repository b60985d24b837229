use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 10.0;
pub const PASSING_MEAN: f64 = 7.0;
pub const EXCELLENT_MEAN: f64 = 9.0;
pub const REGULAR_MEAN: f64 = 5.0;
pub const SCORE_COUNT: usize = 3;

/// A single score, guaranteed to lie within [`MIN_SCORE`, `MAX_SCORE`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Score(f64);

impl Score {
    pub fn new(value: f64) -> Result<Self> {
        validate_range("score", value, MIN_SCORE, MAX_SCORE)?;
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Score {
    type Error = crate::utils::error::GradeError;

    fn try_from(value: f64) -> Result<Self> {
        Score::new(value)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    pub scores: [Score; SCORE_COUNT],
}

impl StudentRecord {
    pub fn new(name: impl Into<String>, scores: [Score; SCORE_COUNT]) -> Result<Self> {
        let record = Self {
            name: name.into().trim().to_string(),
            scores,
        };
        record.validate()?;
        Ok(record)
    }
}

impl Validate for StudentRecord {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;
        for (i, score) in self.scores.iter().enumerate() {
            validate_range(&format!("N{}", i + 1), score.value(), MIN_SCORE, MAX_SCORE)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Pass,
    Fail,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pass => write!(f, "PASS"),
            Status::Fail => write!(f, "FAIL"),
        }
    }
}

/// Qualitative band of a mean, independent of pass/fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    Excellent,
    Good,
    Regular,
    NeedsImprovement,
}

impl Feedback {
    pub fn label(self) -> &'static str {
        match self {
            Feedback::Excellent => "excellent",
            Feedback::Good => "good",
            Feedback::Regular => "regular",
            Feedback::NeedsImprovement => "needs improvement",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Feedback::Excellent => "Excellent performance! Congratulations!",
            Feedback::Good => "Good performance! Keep it up!",
            Feedback::Regular => "Regular performance. Consider studying more.",
            Feedback::NeedsImprovement => "Your studies need improvement.",
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeReport {
    pub name: String,
    pub scores: [Score; SCORE_COUNT],
    pub mean: f64,
    pub status: Status,
    pub feedback: Feedback,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_needed: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bounds() {
        assert!(Score::new(0.0).is_ok());
        assert!(Score::new(10.0).is_ok());
        assert!(Score::new(10.5).is_err());
        assert!(Score::new(-1.0).is_err());
        assert!(Score::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_student_record_trims_and_rejects_blank_name() {
        let scores = [Score::new(5.0).unwrap(); SCORE_COUNT];
        let record = StudentRecord::new("  Ana Souza \n", scores).unwrap();
        assert_eq!(record.name, "Ana Souza");
        assert!(StudentRecord::new("   ", scores).is_err());
    }

    #[test]
    fn test_score_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Score>("7.5").is_ok());
        assert!(serde_json::from_str::<Score>("12").is_err());
    }

    #[test]
    fn test_status_and_feedback_display() {
        assert_eq!(Status::Pass.to_string(), "PASS");
        assert_eq!(Status::Fail.to_string(), "FAIL");
        assert_eq!(Feedback::NeedsImprovement.to_string(), "needs improvement");
        assert_eq!(serde_json::to_string(&Status::Fail).unwrap(), "\"FAIL\"");
    }
}
