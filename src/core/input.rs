use crate::core::{Score, SCORE_COUNT};
use crate::domain::model::{MAX_SCORE, MIN_SCORE};
use crate::utils::error::{GradeError, Result};
use std::io::{BufRead, Write};

pub const SCORE_LABELS: [&str; SCORE_COUNT] =
    ["first score (N1)", "second score (N2)", "third score (N3)"];

/// Outcome of parsing one line of score input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreInput {
    Valid(Score),
    NotANumber,
    OutOfRange(f64),
}

pub fn parse_score(line: &str) -> ScoreInput {
    match line.trim().parse::<f64>() {
        // "NaN" and "inf" parse as f64 but are not scores a user can mean
        Ok(value) if !value.is_finite() => ScoreInput::NotANumber,
        Ok(value) => match Score::new(value) {
            Ok(score) => ScoreInput::Valid(score),
            Err(_) => ScoreInput::OutOfRange(value),
        },
        Err(_) => ScoreInput::NotANumber,
    }
}

/// Prompt-until-valid reader over an explicit input and output stream.
pub struct InputCollector<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> InputCollector<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Bytes that are not UTF-8 are replaced rather than rejected, so they
    /// reach the validation loops as ordinary malformed input.
    fn read_line(&mut self, expected: &str) -> Result<String> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(GradeError::InputClosed {
                expected: expected.to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn read_name(&mut self) -> Result<String> {
        loop {
            self.prompt("Enter the student's name: ")?;
            let name = self.read_line("student name")?.trim().to_string();

            if !name.is_empty() {
                return Ok(name);
            }
            writeln!(self.writer, "Name cannot be empty. Please try again.")?;
        }
    }

    /// Each line is one answer: `7 8 9` on a single line is rejected as
    /// non-numeric rather than split across three scores.
    pub fn read_score(&mut self, label: &str) -> Result<Score> {
        loop {
            self.prompt(&format!(
                "Enter the {} ({:.1} to {:.1}): ",
                label, MIN_SCORE, MAX_SCORE
            ))?;
            let line = self.read_line(label)?;

            match parse_score(&line) {
                ScoreInput::Valid(score) => return Ok(score),
                ScoreInput::NotANumber => {
                    tracing::debug!("Rejected non-numeric {}: {:?}", label, line.trim());
                    writeln!(self.writer, "Please enter a valid number!")?;
                }
                ScoreInput::OutOfRange(value) => {
                    tracing::debug!("Rejected out-of-range {}: {}", label, value);
                    writeln!(
                        self.writer,
                        "Invalid score! Enter a value between {:.1} and {:.1}",
                        MIN_SCORE, MAX_SCORE
                    )?;
                }
            }
        }
    }

    pub fn read_scores(&mut self) -> Result<[Score; SCORE_COUNT]> {
        let first = self.read_score(SCORE_LABELS[0])?;
        let second = self.read_score(SCORE_LABELS[1])?;
        let third = self.read_score(SCORE_LABELS[2])?;
        Ok([first, second, third])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collector(input: &str) -> InputCollector<Cursor<Vec<u8>>, Vec<u8>> {
        InputCollector::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(collector: InputCollector<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(collector.into_inner().1).unwrap()
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score(" 7.5\n"), ScoreInput::Valid(Score::new(7.5).unwrap()));
        assert_eq!(parse_score("10"), ScoreInput::Valid(Score::new(10.0).unwrap()));
        assert_eq!(parse_score("10.5"), ScoreInput::OutOfRange(10.5));
        assert_eq!(parse_score("-1"), ScoreInput::OutOfRange(-1.0));
        assert_eq!(parse_score("abc"), ScoreInput::NotANumber);
        assert_eq!(parse_score(""), ScoreInput::NotANumber);
        assert_eq!(parse_score("NaN"), ScoreInput::NotANumber);
        assert_eq!(parse_score("inf"), ScoreInput::NotANumber);
    }

    #[test]
    fn test_read_name_skips_blank_lines() {
        let mut c = collector("\n   \n  Maria Silva  \n");
        assert_eq!(c.read_name().unwrap(), "Maria Silva");

        let out = output(c);
        assert_eq!(out.matches("Name cannot be empty").count(), 2);
        assert_eq!(out.matches("Enter the student's name: ").count(), 3);
    }

    #[test]
    fn test_read_score_reprompts_with_distinct_messages() {
        let mut c = collector("ten\n10.5\n-1\n8.25\n");
        let score = c.read_score("first score (N1)").unwrap();
        assert_eq!(score.value(), 8.25);

        let out = output(c);
        assert_eq!(out.matches("Please enter a valid number!").count(), 1);
        assert_eq!(
            out.matches("Invalid score! Enter a value between 0.0 and 10.0").count(),
            2
        );
        assert_eq!(out.matches("Enter the first score (N1) (0.0 to 10.0): ").count(), 4);
    }

    #[test]
    fn test_invalid_utf8_is_reprompted() {
        let mut input = b"Ana\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        input.extend_from_slice(b"8.5\n");
        let mut c = InputCollector::new(Cursor::new(input), Vec::new());

        assert_eq!(c.read_name().unwrap(), "Ana");
        assert_eq!(c.read_score("first score (N1)").unwrap().value(), 8.5);

        let out = output(c);
        assert_eq!(out.matches("Please enter a valid number!").count(), 1);
    }

    #[test]
    fn test_invalid_utf8_name_is_kept_lossily() {
        let mut c = InputCollector::new(Cursor::new(vec![b'J', 0xff, b'o', b'\n']), Vec::new());
        assert_eq!(c.read_name().unwrap(), "J\u{FFFD}o");
    }

    #[test]
    fn test_one_answer_per_line() {
        let mut c = collector("7 8 9\n7\n");
        assert_eq!(c.read_score("first score (N1)").unwrap().value(), 7.0);
        assert_eq!(output(c).matches("Please enter a valid number!").count(), 1);
    }

    #[test]
    fn test_read_scores_in_order() {
        let mut c = collector("4\n5\n6\n");
        let scores = c.read_scores().unwrap();
        assert_eq!(scores.map(|s| s.value()), [4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_end_of_input_is_input_closed() {
        let mut c = collector("7\nabc\n");
        let err = c.read_scores().unwrap_err();
        match err {
            GradeError::InputClosed { expected } => assert_eq!(expected, "second score (N2)"),
            other => panic!("unexpected error: {other:?}"),
        }

        let mut c = collector("");
        assert!(matches!(c.read_name(), Err(GradeError::InputClosed { .. })));
    }
}
