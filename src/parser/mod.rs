//! Text parser for hailstone observations
//!
//! One observation per line, written `px, py, pz @ vx, vy, vz`. Blank
//! lines and everything after a `#` are ignored.

use std::path::Path;

use num::BigInt;
use thiserror::Error;

use crate::ir::Observation;

/// Parse error with location information
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("failed to read {path}: {reason}")]
    Io { path: String, reason: String },
    #[error("line {line_number}: {message}\n  | {line_content}")]
    Syntax {
        line_number: usize,
        message: String,
        line_content: String,
    },
    #[error("no observations found in {source_name}")]
    Empty { source_name: String },
}

impl ParseError {
    pub fn syntax(
        line_number: usize,
        message: impl Into<String>,
        line_content: impl Into<String>,
    ) -> Self {
        ParseError::Syntax {
            line_number,
            message: message.into(),
            line_content: line_content.into(),
        }
    }
}

/// Parse a signed integer literal of any size
pub fn parse_literal(s: &str) -> Result<BigInt, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("missing integer literal".to_string());
    }
    s.parse::<BigInt>()
        .map_err(|_| format!("invalid integer literal: '{}'", s))
}

fn parse_components(s: &str, what: &str) -> Result<[BigInt; 3], String> {
    let values = s
        .split(',')
        .map(parse_literal)
        .collect::<Result<Vec<_>, _>>()?;
    let count = values.len();
    values
        .try_into()
        .map_err(|_| format!("expected 3 {} components, found {}", what, count))
}

/// Parse a single line; `Ok(None)` for blank and comment-only lines
pub fn parse_line(line: &str) -> Result<Option<Observation>, String> {
    let line = match line.split_once('#') {
        Some((before, _)) => before,
        None => line,
    }
    .trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (position, velocity) = line
        .split_once('@')
        .ok_or_else(|| "expected '@' between position and velocity".to_string())?;
    let position = parse_components(position, "position")?;
    let velocity = parse_components(velocity, "velocity")?;
    Ok(Some(Observation::new(position, velocity)))
}

/// Parse an observation file
pub fn parse_observations_file(path: &Path) -> Result<Vec<Observation>, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|e| ParseError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    parse_observations_str(&content, path.display().to_string())
}

/// Parse observations from a string
pub fn parse_observations_str(
    content: &str,
    source_name: impl Into<String>,
) -> Result<Vec<Observation>, ParseError> {
    let mut observations = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_number = line_num + 1; // 1-indexed

        match parse_line(line) {
            Ok(Some(observation)) => observations.push(observation),
            Ok(None) => {}
            Err(msg) => return Err(ParseError::syntax(line_number, msg, line)),
        }
    }

    if observations.is_empty() {
        return Err(ParseError::Empty {
            source_name: source_name.into(),
        });
    }

    Ok(observations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_literal() {
        assert_eq!(parse_literal("42").unwrap(), BigInt::from(42));
        assert_eq!(parse_literal(" -256 ").unwrap(), BigInt::from(-256));
        assert_eq!(
            parse_literal("357959731032403").unwrap(),
            BigInt::from(357959731032403i64)
        );
        assert!(parse_literal("").is_err());
        assert!(parse_literal("0x10").is_err());
    }

    #[test]
    fn test_parse_line() {
        let observation = parse_line("19, 13, 30 @ -2,  1, -2").unwrap().unwrap();
        assert_eq!(observation, Observation::from_i64([19, 13, 30], [-2, 1, -2]));
    }

    #[test]
    fn test_parse_line_skips_blank_and_comments() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# sample hailstones").unwrap(), None);
        assert!(parse_line("1, 2, 3 @ 4, 5, 6 # trailing").unwrap().is_some());
    }

    #[test]
    fn test_parse_line_errors() {
        assert!(parse_line("1, 2, 3, 4, 5, 6")
            .unwrap_err()
            .contains("expected '@'"));
        assert_eq!(
            parse_line("1, 2 @ 4, 5, 6").unwrap_err(),
            "expected 3 position components, found 2"
        );
        assert_eq!(
            parse_line("1, 2, 3 @ 4, 5, 6, 7").unwrap_err(),
            "expected 3 velocity components, found 4"
        );
        assert!(parse_line("1, 2, z @ 4, 5, 6")
            .unwrap_err()
            .contains("invalid integer literal"));
    }

    #[test]
    fn test_parse_string_reports_line() {
        let content = "19, 13, 30 @ -2, 1, -2\n\n18, 19 @ -1, -1, -2\n";
        match parse_observations_str(content, "test") {
            Err(ParseError::Syntax {
                line_number,
                line_content,
                ..
            }) => {
                assert_eq!(line_number, 3);
                assert_eq!(line_content, "18, 19 @ -1, -1, -2");
            }
            other => panic!("expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_string_empty() {
        assert_eq!(
            parse_observations_str("# nothing here\n", "test"),
            Err(ParseError::Empty {
                source_name: "test".to_string()
            })
        );
    }

    #[test]
    fn test_parse_missing_file() {
        let result = parse_observations_file(Path::new("/nonexistent/hailstones.txt"));
        assert!(matches!(result, Err(ParseError::Io { .. })));
    }
}
