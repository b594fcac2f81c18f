//! Edge-line parsing.
//!
//! Each input line carries one edge written as `[x1,y1][x2,y2]`, where
//! every coordinate is a run of ASCII decimal digits that fits in a `u64`.
//! Spaces and line terminators (`\n`, `\r`) anywhere in the line are
//! ignored, so `[1, 2] [3, 4]` is the same edge as `[1,2][3,4]`. Other
//! whitespace such as tabs is rejected. A line that is empty after that
//! removal carries no edge.

use std::fmt;

use crate::types::{Edge, Point};

/// What the parser saw where it expected something else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Found {
    /// A character that does not fit the grammar at this position.
    Char(char),
    /// The line ended early.
    End,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "`{c}`"),
            Self::End => f.write_str("end of line"),
        }
    }
}

/// Reasons a non-blank line is not a valid edge.
///
/// Positions count characters in the line after spaces and line
/// terminators are removed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EdgeParseError {
    /// A bracket or comma was missing.
    #[error("expected `{expected}` at position {position}, found {found}")]
    Expected {
        /// The punctuation the grammar requires here.
        expected: char,
        /// What was there instead.
        found: Found,
        /// Character offset.
        position: usize,
    },

    /// A coordinate had no digits.
    #[error("expected digits at position {position}, found {found}")]
    ExpectedDigits {
        /// What was there instead.
        found: Found,
        /// Character offset.
        position: usize,
    },

    /// A coordinate does not fit in a `u64`.
    #[error("coordinate {digits} does not fit in 64 bits")]
    CoordinateOverflow {
        /// The digit run as written.
        digits: String,
    },

    /// Something follows the second point.
    #[error("unexpected {found} after the second point at position {position}")]
    TrailingInput {
        /// The first extra character.
        found: Found,
        /// Character offset.
        position: usize,
    },
}

/// Parse one line into an [`Edge`].
///
/// Returns `Ok(None)` for a blank line.
///
/// # Errors
///
/// Returns [`EdgeParseError`] when the line is non-blank but does not
/// match `[X,Y][X,Y]` exactly.
pub fn parse_edge(line: &str) -> Result<Option<Edge>, EdgeParseError> {
    let compact: Vec<char> = line
        .chars()
        .filter(|c| !matches!(c, ' ' | '\n' | '\r'))
        .collect();
    if compact.is_empty() {
        return Ok(None);
    }

    let mut cursor = Cursor {
        chars: &compact,
        pos: 0,
    };
    let a = cursor.point()?;
    let b = cursor.point()?;
    if let Some(&c) = compact.get(cursor.pos) {
        return Err(EdgeParseError::TrailingInput {
            found: Found::Char(c),
            position: cursor.pos,
        });
    }
    Ok(Some(Edge::new(a, b)))
}

struct Cursor<'a> {
    chars: &'a [char],
    pos: usize,
}

impl Cursor<'_> {
    fn found(&self) -> Found {
        self.chars.get(self.pos).map_or(Found::End, |&c| Found::Char(c))
    }

    fn expect(&mut self, expected: char) -> Result<(), EdgeParseError> {
        if self.chars.get(self.pos) == Some(&expected) {
            self.pos += 1;
            return Ok(());
        }
        Err(EdgeParseError::Expected {
            expected,
            found: self.found(),
            position: self.pos,
        })
    }

    fn coordinate(&mut self) -> Result<u64, EdgeParseError> {
        let start = self.pos;
        while self.chars.get(self.pos).is_some_and(char::is_ascii_digit) {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(EdgeParseError::ExpectedDigits {
                found: self.found(),
                position: start,
            });
        }
        let digits: String = self.chars[start..self.pos].iter().collect();
        match digits.parse::<u64>() {
            Ok(value) => Ok(value),
            Err(_) => Err(EdgeParseError::CoordinateOverflow { digits }),
        }
    }

    fn point(&mut self) -> Result<Point, EdgeParseError> {
        self.expect('[')?;
        let x = self.coordinate()?;
        self.expect(',')?;
        let y = self.coordinate()?;
        self.expect(']')?;
        Ok(Point::new(x, y))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn edge(x1: u64, y1: u64, x2: u64, y2: u64) -> Edge {
        Edge::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn parses_compact_line() {
        assert_eq!(parse_edge("[0,0][1,1]").unwrap(), Some(edge(0, 0, 1, 1)));
    }

    #[test]
    fn ignores_spaces_and_line_terminators() {
        assert_eq!(
            parse_edge(" [12, 7] [ 3 ,40 ]\r\n").unwrap(),
            Some(edge(12, 7, 3, 40))
        );
    }

    #[test]
    fn blank_lines_carry_no_edge() {
        assert_eq!(parse_edge("").unwrap(), None);
        assert_eq!(parse_edge("   \r\n").unwrap(), None);
    }

    #[test]
    fn tabs_are_not_ignored() {
        assert_eq!(
            parse_edge("\t"),
            Err(EdgeParseError::Expected {
                expected: '[',
                found: Found::Char('\t'),
                position: 0,
            })
        );
        assert_eq!(
            parse_edge("[1,2]\t[3,4]"),
            Err(EdgeParseError::Expected {
                expected: '[',
                found: Found::Char('\t'),
                position: 5,
            })
        );
    }

    #[test]
    fn accepts_full_u64_range() {
        let line = format!("[{},0][0,{}]", u64::MAX, u64::MAX);
        assert_eq!(
            parse_edge(&line).unwrap(),
            Some(edge(u64::MAX, 0, 0, u64::MAX))
        );
    }

    #[test]
    fn leading_zeros_are_plain_decimal() {
        assert_eq!(parse_edge("[007,0][0,10]").unwrap(), Some(edge(7, 0, 0, 10)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            parse_edge("abc"),
            Err(EdgeParseError::Expected {
                expected: '[',
                found: Found::Char('a'),
                position: 0,
            })
        );
    }

    #[test]
    fn rejects_missing_second_point() {
        assert_eq!(
            parse_edge("[1,2]"),
            Err(EdgeParseError::Expected {
                expected: '[',
                found: Found::End,
                position: 5,
            })
        );
    }

    #[test]
    fn rejects_empty_coordinate() {
        assert_eq!(
            parse_edge("[1,][2,2]"),
            Err(EdgeParseError::ExpectedDigits {
                found: Found::Char(']'),
                position: 3,
            })
        );
    }

    #[test]
    fn rejects_signs_and_negatives() {
        assert!(parse_edge("[-1,2][3,4]").is_err());
        assert!(parse_edge("[+1,2][3,4]").is_err());
    }

    #[test]
    fn rejects_overflow() {
        assert_eq!(
            parse_edge("[18446744073709551616,0][0,0]"),
            Err(EdgeParseError::CoordinateOverflow {
                digits: "18446744073709551616".to_owned(),
            })
        );
    }

    #[test]
    fn rejects_trailing_input() {
        assert_eq!(
            parse_edge("[1,2][3,4][5,6]"),
            Err(EdgeParseError::TrailingInput {
                found: Found::Char('['),
                position: 10,
            })
        );
    }

    #[test]
    fn rejects_wrong_separator() {
        assert_eq!(
            parse_edge("[1;2][3,4]"),
            Err(EdgeParseError::Expected {
                expected: ',',
                found: Found::Char(';'),
                position: 2,
            })
        );
    }

    #[test]
    fn error_messages_are_readable() {
        let err = parse_edge("[1,2]").unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected `[` at position 5, found end of line"
        );
    }
}
