//! **pathgrid-map** — text map loader (the grid provider).
//!
//! Parses MovingAI-benchmark-style `.map` files into an occupancy
//! [`Grid`]:
//!
//! ```text
//! type octile
//! height 4
//! width 5
//! map
//! .....
//! ..@@.
//! .T...
//! .....
//! ```
//!
//! `@`, `T`, `O`, `S` and `W` mark obstacles (trees, out-of-bounds, swamp,
//! water); every other character is traversable. Malformed input — missing
//! header fields, non-positive dimensions, ragged or missing rows — is
//! rejected here so the search crates can assume a well-formed rectangular
//! grid.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use pathgrid_core::{Grid, Point};

/// Characters that mark a blocked cell.
const OBSTACLE_CHARS: [char; 5] = ['@', 'T', 'O', 'S', 'W'];

/// Errors produced while parsing a map file.
#[derive(Debug)]
pub enum MapError {
    /// The `height`/`width`/`map` header lines are missing or malformed.
    MissingHeader(&'static str),
    /// A dimension did not parse as a positive integer.
    BadDimension(String),
    /// The map body has a different number of rows than the header claims.
    RowCountMismatch { expected: usize, got: usize },
    /// A map row has the wrong number of cells.
    RowWidthMismatch {
        line: usize,
        expected: usize,
        got: usize,
    },
    /// Reading the file failed.
    Io(io::Error),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader(field) => write!(f, "map: missing or malformed {field} header"),
            Self::BadDimension(s) => write!(f, "map: bad dimension {s:?}"),
            Self::RowCountMismatch { expected, got } => {
                write!(f, "map: expected {expected} rows, got {got}")
            }
            Self::RowWidthMismatch {
                line,
                expected,
                got,
            } => write!(
                f,
                "map: row {line} has {got} cells, expected {expected}"
            ),
            Self::Io(e) => write!(f, "map: {e}"),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MapError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Parse map text into a [`Grid`].
pub fn parse_map(text: &str) -> Result<Grid, MapError> {
    let mut lines = text.lines();

    // Optional "type ..." line, then "height N" and "width N" in either
    // order, then the "map" marker.
    let mut first = lines.next().ok_or(MapError::MissingHeader("type"))?;
    if first.trim_start().starts_with("type") {
        first = lines.next().ok_or(MapError::MissingHeader("height"))?;
    }
    let second = lines.next().ok_or(MapError::MissingHeader("width"))?;
    let (height, width) = parse_dimensions(first, second)?;

    let marker = lines.next().ok_or(MapError::MissingHeader("map"))?;
    if marker.trim() != "map" {
        return Err(MapError::MissingHeader("map"));
    }

    let mut grid = Grid::new(width as i32, height as i32);
    let mut rows = 0usize;
    for (y, line) in lines.enumerate() {
        if rows == height {
            // Ignore trailing blank lines, reject extra content.
            if line.trim().is_empty() {
                continue;
            }
            return Err(MapError::RowCountMismatch {
                expected: height,
                got: y + 1,
            });
        }
        let got = line.chars().count();
        if got != width {
            return Err(MapError::RowWidthMismatch {
                line: y + 1,
                expected: width,
                got,
            });
        }
        for (x, ch) in line.chars().enumerate() {
            if OBSTACLE_CHARS.contains(&ch) {
                grid.set_obstacle(Point::new(x as i32, y as i32), true);
            }
        }
        rows += 1;
    }
    if rows != height {
        return Err(MapError::RowCountMismatch {
            expected: height,
            got: rows,
        });
    }

    log::debug!(
        "parsed map {}x{} with {} obstacles",
        width,
        height,
        grid.obstacle_count()
    );
    Ok(grid)
}

/// Load and parse a map file from disk.
pub fn load_map(path: impl AsRef<Path>) -> Result<Grid, MapError> {
    let text = fs::read_to_string(path.as_ref())?;
    parse_map(&text)
}

fn parse_dimensions(first: &str, second: &str) -> Result<(usize, usize), MapError> {
    let mut height = None;
    let mut width = None;
    for line in [first, second] {
        let mut parts = line.split_whitespace();
        let key = parts.next().ok_or(MapError::MissingHeader("height"))?;
        let value = parts.next().ok_or(MapError::BadDimension(line.into()))?;
        let n: i64 = value
            .parse()
            .map_err(|_| MapError::BadDimension(line.into()))?;
        if n <= 0 {
            return Err(MapError::BadDimension(line.into()));
        }
        match key {
            "height" => height = Some(n as usize),
            "width" => width = Some(n as usize),
            _ => return Err(MapError::MissingHeader("height/width")),
        }
    }
    match (height, width) {
        (Some(h), Some(w)) => Ok((h, w)),
        (None, _) => Err(MapError::MissingHeader("height")),
        (_, None) => Err(MapError::MissingHeader("width")),
    }
}
