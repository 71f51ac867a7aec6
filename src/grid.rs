use crate::error::{Error, InvalidGrid};
use crate::io::OnePerLine;
use bitvec::{order::LocalBits, vec::BitVec};
use itertools::Itertools;
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

const TREE: char = '#';

/// One line of the map with a set bit for every tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row(BitVec<LocalBits, usize>);

impl Row {
    pub fn width(&self) -> usize {
        self.0.len()
    }

    pub fn is_tree(&self, x: usize) -> bool {
        self.0[x % self.width()]
    }
}

impl FromStr for Row {
    type Err = InvalidGrid;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // spaces are open ground like anything else that is not a tree
        let s = s.trim_end_matches(&['\r', '\n'][..]);
        if s.is_empty() {
            return Err(InvalidGrid::ZeroWidth);
        }

        Ok(Row(s.chars().map(|ch| ch == TREE).collect()))
    }
}

impl fmt::Display for Row {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;
        for x in 0..self.width() {
            fmt.write_char(if self.0[x] { TREE } else { '.' })?;
        }
        Ok(())
    }
}

/// Rectangular map of the slope; every row has the same, non-zero width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
    width: usize,
}

impl Grid {
    pub fn from_rows(rows: Vec<Row>) -> Result<Self, Error> {
        Self::from_numbered_rows(rows.into_iter().enumerate().map(|(i, row)| (i + 1, row)))
    }

    /// Empty lines are rejected as zero width rows.
    pub fn from_lines<'a, I>(lines: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::from_numbered_lines(lines.into_iter().enumerate().map(|(i, line)| (i + 1, line)))
    }

    /// Reads the whole input, skipping empty lines.
    pub fn read<R: BufRead>(input: R) -> Result<Self, Error> {
        let rows = OnePerLine::<_, Row>::new(input)
            .map(|res| res.map_err(|e| e.either(Error::from, Error::from)))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_numbered_rows(rows)
    }

    fn from_numbered_lines<'a, I>(lines: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (usize, &'a str)>,
    {
        let rows = lines
            .into_iter()
            .map(|(line, s)| Row::from_str(s).map(|row| (line, row)))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_numbered_rows(rows)
    }

    fn from_numbered_rows<I>(numbered: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (usize, Row)>,
    {
        let mut rows = Vec::new();
        let mut width = None;

        for (line, row) in numbered {
            if let Some(expected) = width {
                if row.width() != expected {
                    return Err(InvalidGrid::InconsistentWidth {
                        line,
                        expected,
                        found: row.width(),
                    }
                    .into());
                }
            } else {
                width = Some(row.width());
            }

            rows.push(row);
        }

        match width {
            Some(width) => Ok(Grid { rows, width }),
            None => Err(Error::EmptyGrid),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// `None` when below the last row.
    pub fn is_tree(&self, x: usize, y: usize) -> Option<bool> {
        self.rows.get(y).map(|row| row.is_tree(x))
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::from_numbered_lines(
            s.lines()
                .enumerate()
                .map(|(i, line)| (i + 1, line))
                .filter(|(_, line)| !line.is_empty()),
        )
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}", self.rows.iter().format("\n"))
    }
}

#[test]
fn example_dimensions() {
    let grid = crate::EXAMPLE.parse::<Grid>().unwrap();

    assert_eq!(grid.width(), 11);
    assert_eq!(grid.height(), 11);
    assert_eq!(grid.is_tree(2, 0), Some(true));
    assert_eq!(grid.is_tree(1, 0), Some(false));
    assert_eq!(grid.is_tree(0, 11), None);
}

#[test]
fn columns_wrap() {
    let grid = crate::EXAMPLE.parse::<Grid>().unwrap();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            assert_eq!(grid.is_tree(x, y), grid.is_tree(x + grid.width(), y));
            assert_eq!(grid.is_tree(x, y), grid.is_tree(x + 7 * grid.width(), y));
        }
    }
}

#[test]
fn any_other_char_is_open() {
    let grid = Grid::from_lines(vec!["#.o", "x #"]).unwrap();

    assert_eq!(grid.is_tree(0, 0), Some(true));
    assert_eq!(grid.is_tree(1, 0), Some(false));
    assert_eq!(grid.is_tree(2, 0), Some(false));
    assert_eq!(grid.is_tree(0, 1), Some(false));
    assert_eq!(grid.is_tree(2, 1), Some(true));
}

#[test]
fn display_round_trips_example() {
    let grid = crate::EXAMPLE.parse::<Grid>().unwrap();
    assert_eq!(grid.to_string(), crate::EXAMPLE);
}

#[test]
fn empty_grid() {
    assert!(matches!(
        Grid::from_lines(Vec::<&str>::new()),
        Err(Error::EmptyGrid)
    ));
    assert!(matches!("".parse::<Grid>(), Err(Error::EmptyGrid)));
    assert!(matches!(
        Grid::read(std::io::Cursor::new(b"\n\n")),
        Err(Error::EmptyGrid)
    ));
}

#[test]
fn zero_width_row() {
    assert!(matches!(
        Grid::from_lines(vec![""]),
        Err(Error::InvalidGrid(InvalidGrid::ZeroWidth))
    ));
    assert!(matches!(
        Grid::from_lines(vec!["..#", "", "#.."]),
        Err(Error::InvalidGrid(InvalidGrid::ZeroWidth))
    ));
}

#[test]
fn inconsistent_width() {
    let e = Grid::from_lines(vec!["..#", "#..", "#.", "..."]).unwrap_err();

    match e {
        Error::InvalidGrid(InvalidGrid::InconsistentWidth {
            line,
            expected,
            found,
        }) => {
            assert_eq!(line, 3);
            assert_eq!(expected, 3);
            assert_eq!(found, 2);
        }
        x => unreachable!("unexpected {:?}", x),
    }
}

#[test]
fn read_skips_empty_lines() {
    let input = b"..#\r\n#..\n\n.#.\n\n";
    let grid = Grid::read(std::io::BufReader::new(std::io::Cursor::new(input))).unwrap();

    assert_eq!(grid.height(), 3);
    assert_eq!(grid.width(), 3);
    assert_eq!(grid.to_string(), "..#\n#..\n.#.");
}

#[test]
fn spaces_are_open_ground() {
    let grid = Grid::from_lines(vec!["  #", "   ", "#  "]).unwrap();

    assert_eq!(grid.width(), 3);
    assert_eq!(grid.is_tree(2, 0), Some(true));
    assert_eq!(grid.is_tree(0, 0), Some(false));
    assert_eq!(grid.is_tree(1, 1), Some(false));
    assert_eq!(grid.to_string(), "..#\n...\n#..");

    let parsed = "  #\n   \n#  \n".parse::<Grid>().unwrap();
    assert_eq!(parsed, grid);

    let read = Grid::read(std::io::Cursor::new(b"  #\r\n   \n#  \n")).unwrap();
    assert_eq!(read, grid);
}

#[test]
fn ragged_line_number_counts_skipped_lines() {
    let e = Grid::read(std::io::Cursor::new(b"..#\n\n\n#..\n#.\n")).unwrap_err();

    assert!(matches!(
        e,
        Error::InvalidGrid(InvalidGrid::InconsistentWidth {
            line: 5,
            expected: 3,
            found: 2
        })
    ));
}
