use crate::core::{Feedback, GradeReport, Status, StudentRecord};
use crate::domain::model::{
    EXCELLENT_MEAN, MAX_SCORE, MIN_SCORE, PASSING_MEAN, REGULAR_MEAN, SCORE_COUNT,
};
use crate::utils::error::{GradeError, Result};

/// Arithmetic mean of three scores.
///
/// Inputs are re-checked against the score range even though the input
/// stage already guarantees it; a violation is an `InvalidArgument`.
pub fn mean(a: f64, b: f64, c: f64) -> Result<f64> {
    let in_range = |v: f64| (MIN_SCORE..=MAX_SCORE).contains(&v);
    if !(in_range(a) && in_range(b) && in_range(c)) {
        return Err(GradeError::InvalidArgument {
            message: format!(
                "one or more scores are outside {:.1}..={:.1}: ({}, {}, {})",
                MIN_SCORE, MAX_SCORE, a, b, c
            ),
        });
    }

    Ok((a + b + c) / SCORE_COUNT as f64)
}

pub fn classify(mean: f64) -> Status {
    if mean >= PASSING_MEAN {
        Status::Pass
    } else {
        Status::Fail
    }
}

pub fn feedback(mean: f64) -> Feedback {
    match mean {
        m if m >= EXCELLENT_MEAN => Feedback::Excellent,
        m if m >= PASSING_MEAN => Feedback::Good,
        m if m >= REGULAR_MEAN => Feedback::Regular,
        _ => Feedback::NeedsImprovement,
    }
}

/// Shortfall to the passing mean; `None` when the mean already passes.
pub fn points_needed(mean: f64) -> Option<f64> {
    match classify(mean) {
        Status::Pass => None,
        Status::Fail => Some(PASSING_MEAN - mean),
    }
}

pub fn evaluate(record: &StudentRecord) -> Result<GradeReport> {
    let [a, b, c] = record.scores.map(|s| s.value());
    let mean = mean(a, b, c)?;
    let status = classify(mean);

    tracing::debug!(
        "Evaluated {}: mean={:.2}, status={}",
        record.name,
        mean,
        status
    );

    Ok(GradeReport {
        name: record.name.clone(),
        scores: record.scores,
        mean,
        status,
        feedback: feedback(mean),
        points_needed: points_needed(mean),
    })
}
