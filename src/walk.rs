use crate::error::Error;
use crate::grid::{Grid, Row};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slope {
    dx: usize,
    dy: usize,
}

pub const SLOPES: [Slope; 5] = [
    Slope::new(1, 1),
    Slope::new(3, 1),
    Slope::new(5, 1),
    Slope::new(7, 1),
    Slope::new(1, 2),
];

impl Slope {
    /// Only for the constant table, panics on zero `dy`; use [`Slope::try_new`] elsewhere.
    pub(crate) const fn new(dx: usize, dy: usize) -> Self {
        assert!(dy > 0, "vertical step must be positive");
        Slope { dx, dy }
    }

    pub fn try_new(dx: usize, dy: usize) -> Result<Self, Error> {
        if dy == 0 {
            Err(Error::InvalidSlope { dx, dy })
        } else {
            Ok(Slope { dx, dy })
        }
    }

    pub fn dx(&self) -> usize {
        self.dx
    }

    pub fn dy(&self) -> usize {
        self.dy
    }
}

impl fmt::Display for Slope {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{{Dx:{} Dy:{}}}", self.dx, self.dy)
    }
}

/// Samples every `dy`th row starting from the first one, counting trees.
pub struct TreeCounter {
    slope: Slope,
    x: usize,
    skip: usize,
    visited: usize,
    trees: usize,
}

impl TreeCounter {
    pub fn new(slope: Slope) -> Self {
        TreeCounter {
            slope,
            x: 0,
            skip: 1,
            visited: 0,
            trees: 0,
        }
    }

    pub fn process(&mut self, row: &Row) -> Option<(usize, bool)> {
        self.skip -= 1;
        if self.skip > 0 {
            return None;
        }

        let x = self.x;
        let tree = row.is_tree(x);

        self.visited += 1;
        if tree {
            self.trees += 1;
        }

        let width = row.width();
        // x < width holds, so this cannot overflow even for silly dx
        self.x = (self.x + self.slope.dx % width) % width;
        self.skip = self.slope.dy;

        Some((x, tree))
    }

    pub fn visited(&self) -> usize {
        self.visited
    }

    pub fn trees(&self) -> usize {
        self.trees
    }

    pub fn into_count(self) -> usize {
        self.trees
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    /// Column already wrapped to the width of the map.
    pub x: usize,
    pub y: usize,
    pub tree: bool,
}

pub struct Walk<'a> {
    rows: std::iter::Enumerate<std::slice::Iter<'a, Row>>,
    counter: TreeCounter,
}

impl<'a> Iterator for Walk<'a> {
    type Item = Visit;

    fn next(&mut self) -> Option<Self::Item> {
        let counter = &mut self.counter;
        self.rows
            .find_map(|(y, row)| counter.process(row).map(|(x, tree)| Visit { x, y, tree }))
    }
}

impl Grid {
    pub fn walk(&self, slope: Slope) -> Walk<'_> {
        Walk {
            rows: self.rows().iter().enumerate(),
            counter: TreeCounter::new(slope),
        }
    }

    pub fn count_trees(&self, slope: Slope) -> usize {
        let mut counter = TreeCounter::new(slope);

        self.rows().iter().for_each(|row| {
            counter.process(row);
        });

        tracing::debug!(
            %slope,
            visited = counter.visited(),
            trees = counter.trees(),
            "walked"
        );

        counter.into_count()
    }
}

#[test]
fn example_slopes() {
    let grid = crate::EXAMPLE.parse::<Grid>().unwrap();

    let counts = SLOPES
        .iter()
        .map(|&slope| grid.count_trees(slope))
        .collect::<Vec<_>>();

    assert_eq!(counts, &[2, 7, 3, 4, 2]);
}

#[test]
fn visits_ceil_rows_per_dy() {
    let grid = crate::EXAMPLE.parse::<Grid>().unwrap();

    for dy in 1..=13 {
        for dx in 0..=23 {
            let slope = Slope::new(dx, dy);
            let visits = grid.walk(slope).count();
            let expected = (grid.height() + dy - 1) / dy;

            assert_eq!(visits, expected, "{}", slope);
            assert!(grid.count_trees(slope) <= visits);
        }
    }
}

#[test]
fn visited_columns_wrap() {
    let grid = crate::EXAMPLE.parse::<Grid>().unwrap();
    let width = grid.width();

    for &slope in SLOPES.iter().chain(&[Slope::new(0, 1), Slope::new(11, 1), Slope::new(25, 3)]) {
        for (i, visit) in grid.walk(slope).enumerate() {
            assert_eq!(visit.x, (i * slope.dx()) % width, "{}", slope);
            assert_eq!(visit.y, i * slope.dy(), "{}", slope);
            assert_eq!(Some(visit.tree), grid.is_tree(visit.x, visit.y));
        }
    }
}

#[test]
fn walk_agrees_with_count() {
    let grid = crate::EXAMPLE.parse::<Grid>().unwrap();

    for &slope in SLOPES.iter() {
        let trees = grid.walk(slope).filter(|v| v.tree).count();
        assert_eq!(trees, grid.count_trees(slope));
        // no hidden state between runs
        assert_eq!(grid.count_trees(slope), grid.count_trees(slope));
    }
}

#[test]
fn single_row_visits_once() {
    let grid = "#..#".parse::<Grid>().unwrap();

    for &slope in SLOPES.iter() {
        let visits = grid.walk(slope).collect::<Vec<_>>();
        assert_eq!(
            visits,
            &[Visit {
                x: 0,
                y: 0,
                tree: true
            }]
        );
        assert_eq!(grid.count_trees(slope), 1);
    }
}

#[test]
fn zero_dy_is_rejected() {
    assert!(matches!(
        Slope::try_new(3, 0),
        Err(Error::InvalidSlope { dx: 3, dy: 0 })
    ));
    assert_eq!(Slope::try_new(3, 1).unwrap(), SLOPES[1]);
}

#[test]
fn whitespace_cells_keep_their_columns() {
    let grid = Grid::from_lines(vec!["   ", "  #"]).unwrap();
    let slope = Slope::try_new(2, 1).unwrap();

    assert_eq!(grid.width(), 3);
    assert_eq!(grid.count_trees(slope), 1);
    assert_eq!(
        grid.walk(slope).collect::<Vec<_>>(),
        &[
            Visit { x: 0, y: 0, tree: false },
            Visit { x: 2, y: 1, tree: true },
        ]
    );
}

#[test]
fn slope_display() {
    assert_eq!(SLOPES[4].to_string(), "{Dx:1 Dy:2}");
}
