//! Point store: the ordered, immutable set of 2-D integer points to cluster.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A single input point. Its identity is its index in the [`PointStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read input file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed point on line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// Ordered sequence of points, loaded once and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointStore {
    points: Vec<Point>,
}

impl PointStore {
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Reads the points file at `path`.
    ///
    /// # Errors
    /// Returns [`LoadError::Io`] when the file cannot be opened or read, and
    /// [`LoadError::Malformed`] when a line is not exactly two integers.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file)).map_err(|error| match error {
            LoadError::Io { source, .. } => LoadError::Io {
                path: path.to_path_buf(),
                source,
            },
            malformed @ LoadError::Malformed { .. } => malformed,
        })
    }

    /// Parses one `x y` pair per line. Blank lines are skipped.
    ///
    /// # Errors
    /// See [`PointStore::load`]. I/O errors carry an empty path; `load` fills it in.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let mut points = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| LoadError::Io {
                path: PathBuf::new(),
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }
            points.push(parse_line(&line, index + 1)?);
        }
        tracing::debug!(points = points.len(), "point store loaded");
        Ok(Self { points })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl FromIterator<Point> for PointStore {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointStore {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

fn parse_line(line: &str, line_number: usize) -> Result<Point, LoadError> {
    let mut tokens = line.split_whitespace();
    let (Some(x), Some(y), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(LoadError::Malformed {
            line: line_number,
            reason: format!(
                "expected two integers, found {} token(s)",
                line.split_whitespace().count()
            ),
        });
    };
    Ok(Point::new(
        parse_coordinate(x, line_number)?,
        parse_coordinate(y, line_number)?,
    ))
}

fn parse_coordinate(token: &str, line_number: usize) -> Result<i64, LoadError> {
    token.parse::<i64>().map_err(|error| LoadError::Malformed {
        line: line_number,
        reason: format!("invalid integer {token:?}: {error}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    fn parse(input: &str) -> Result<PointStore, LoadError> {
        PointStore::from_reader(Cursor::new(input))
    }

    #[test]
    fn parses_points_in_order() {
        let store = parse("0 0\n1 0\n-3 7\n").expect("valid input");
        assert_eq!(
            store.as_slice(),
            &[Point::new(0, 0), Point::new(1, 0), Point::new(-3, 7)]
        );
    }

    #[test]
    fn skips_blank_lines_and_tolerates_extra_whitespace() {
        let store = parse("\n  4\t5  \n\n6 7 \r\n   \n").expect("valid input");
        assert_eq!(store.len(), 2);
        assert_eq!(store.as_slice()[1], Point::new(6, 7));
    }

    #[test]
    fn accepts_very_long_lines() {
        let padding = " ".repeat(10_000);
        let store = parse(&format!("1{padding}2\n")).expect("long line");
        assert_eq!(store.as_slice(), &[Point::new(1, 2)]);
    }

    #[rstest]
    #[case("1\n", 1)]
    #[case("1 2\n1 2 3\n", 2)]
    #[case("1 2\n\nx 2\n", 3)]
    #[case("1.5 2\n", 1)]
    fn rejects_malformed_lines(#[case] input: &str, #[case] expected_line: usize) {
        match parse(input) {
            Err(LoadError::Malformed { line, .. }) => assert_eq!(line, expected_line),
            other => panic!("expected malformed error, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_yields_empty_store() {
        let store = parse("").expect("empty input is valid");
        assert!(store.is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let error = PointStore::load(Path::new("/definitely/not/here.txt"))
            .expect_err("missing file must fail");
        assert!(matches!(error, LoadError::Io { .. }));
    }

    #[test]
    fn point_displays_as_space_separated_pair() {
        assert_eq!(Point::new(-1, 42).to_string(), "-1 42");
    }
}
