use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// The input had no rows at all.
    EmptyGrid,
    InvalidGrid(InvalidGrid),
    /// Asked to survey without any slopes; there is nothing to multiply.
    EmptySlopeList,
    /// Slopes need to make progress downwards.
    InvalidSlope { dx: usize, dy: usize },
    ProductOverflow,
    Io(std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidGrid {
    ZeroWidth,
    /// `line` is one based and counts skipped empty lines too.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl From<InvalidGrid> for Error {
    fn from(i: InvalidGrid) -> Self {
        Error::InvalidGrid(i)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyGrid => write!(fmt, "empty grid, nothing to walk"),
            Error::InvalidGrid(i) => write!(fmt, "invalid grid: {}", i),
            Error::EmptySlopeList => write!(fmt, "no slopes to walk"),
            Error::InvalidSlope { dx, dy } => {
                write!(fmt, "invalid slope ({}, {}): vertical step must be positive", dx, dy)
            }
            Error::ProductOverflow => write!(fmt, "product of tree counts overflowed"),
            Error::Io(e) => write!(fmt, "failed to read input: {}", e),
        }
    }
}

impl fmt::Display for InvalidGrid {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            InvalidGrid::ZeroWidth => write!(fmt, "row of zero width"),
            InvalidGrid::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                fmt,
                "line {} has width {} while the first row has width {}",
                line, found, expected
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidGrid(i) => Some(i),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for InvalidGrid {}
