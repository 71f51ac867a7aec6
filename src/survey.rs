use crate::error::Error;
use crate::grid::Grid;
use crate::walk::Slope;
use std::fmt;

/// Tree counts per slope in the order the slopes were given, and their product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Survey {
    counts: Vec<(Slope, usize)>,
    product: u64,
}

impl Survey {
    pub fn counts(&self) -> &[(Slope, usize)] {
        &self.counts
    }

    pub fn product(&self) -> u64 {
        self.product
    }
}

/// Walks every slope in order and multiplies the tree counts together.
pub fn survey(grid: &Grid, slopes: &[Slope]) -> Result<Survey, Error> {
    if slopes.is_empty() {
        return Err(Error::EmptySlopeList);
    }

    let counts = slopes
        .iter()
        .map(|&slope| (slope, grid.count_trees(slope)))
        .collect::<Vec<_>>();

    let product = counts
        .iter()
        .try_fold(1u64, |acc, &(_, trees)| acc.checked_mul(trees as u64))
        .ok_or(Error::ProductOverflow)?;

    tracing::debug!(slopes = counts.len(), product, "surveyed");

    Ok(Survey { counts, product })
}

impl fmt::Display for Survey {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (slope, trees) in &self.counts {
            writeln!(fmt, "# of trees met = {} (slope {})", trees, slope)?;
        }
        write!(fmt, "Product of results = {}", self.product)
    }
}

#[test]
fn example_product() {
    let grid = crate::EXAMPLE.parse::<Grid>().unwrap();
    let survey = survey(&grid, &crate::SLOPES).unwrap();

    let counts = survey
        .counts()
        .iter()
        .map(|&(_, trees)| trees)
        .collect::<Vec<_>>();

    assert_eq!(counts, &[2, 7, 3, 4, 2]);
    assert_eq!(survey.product(), 336);
}

#[test]
fn report_format() {
    let grid = crate::EXAMPLE.parse::<Grid>().unwrap();
    let survey = survey(&grid, &crate::SLOPES).unwrap();

    let expected = "# of trees met = 2 (slope {Dx:1 Dy:1})
# of trees met = 7 (slope {Dx:3 Dy:1})
# of trees met = 3 (slope {Dx:5 Dy:1})
# of trees met = 4 (slope {Dx:7 Dy:1})
# of trees met = 2 (slope {Dx:1 Dy:2})
Product of results = 336";

    assert_eq!(survey.to_string(), expected);
}

#[test]
fn keeps_slope_order() {
    let grid = crate::EXAMPLE.parse::<Grid>().unwrap();
    let mut slopes = crate::SLOPES.to_vec();
    slopes.reverse();

    let survey = survey(&grid, &slopes).unwrap();
    let order = survey
        .counts()
        .iter()
        .map(|&(slope, _)| slope)
        .collect::<Vec<_>>();

    assert_eq!(order, slopes);
    assert_eq!(survey.product(), 336);
}

#[test]
fn single_slope_is_its_own_product() {
    let grid = crate::EXAMPLE.parse::<Grid>().unwrap();
    let survey = survey(&grid, &[Slope::new(3, 1)]).unwrap();
    assert_eq!(survey.product(), 7);
}

#[test]
fn zero_iff_some_count_is_zero() {
    // column 0 has no trees, column 1 has all of them
    let grid = Grid::from_lines(vec![".#", ".#", ".#"]).unwrap();

    let straight_down = Slope::new(0, 1);
    let diagonal = Slope::new(1, 1);

    let s = survey(&grid, &[diagonal, straight_down]).unwrap();
    assert_eq!(s.counts()[0].1, 1);
    assert_eq!(s.counts()[1].1, 0);
    assert_eq!(s.product(), 0);

    let s = survey(&grid, &[diagonal, Slope::new(3, 1)]).unwrap();
    assert!(s.counts().iter().all(|&(_, trees)| trees > 0));
    assert_eq!(s.product(), 1);
}

#[test]
fn empty_slope_list() {
    let grid = crate::EXAMPLE.parse::<Grid>().unwrap();
    assert!(matches!(survey(&grid, &[]), Err(Error::EmptySlopeList)));
}
