use toboggan::{survey, Error, Grid, Slope, SLOPES};

const EXAMPLE: &[u8] = b"..##.......
#...#...#..
.#....#..#.
..#.#...#.#
.#...##..#.
..#.##.....
.#.#.#....#
.#........#
#.##...#...
#...##....#
.#..#...#.#
";

fn read(input: &[u8]) -> Result<Grid, Error> {
    Grid::read(std::io::BufReader::new(std::io::Cursor::new(input)))
}

#[test]
fn part_one_example() {
    let grid = read(EXAMPLE).unwrap();
    assert_eq!(grid.count_trees(Slope::try_new(3, 1).unwrap()), 7);
}

#[test]
fn part_two_example() {
    let grid = read(EXAMPLE).unwrap();
    let report = survey(&grid, &SLOPES).unwrap();

    let expected = [(1, 1, 2), (3, 1, 7), (5, 1, 3), (7, 1, 4), (1, 2, 2)];

    let counts = report
        .counts()
        .iter()
        .map(|&(slope, trees)| (slope.dx(), slope.dy(), trees))
        .collect::<Vec<_>>();

    assert_eq!(counts, &expected[..]);
    assert_eq!(report.product(), 336);
}

#[test]
fn empty_input() {
    assert!(matches!(read(b""), Err(Error::EmptyGrid)));
}

#[test]
fn ragged_input() {
    assert!(matches!(
        read(b"..#\n#.\n"),
        Err(Error::InvalidGrid(toboggan::InvalidGrid::InconsistentWidth {
            line: 2,
            expected: 3,
            found: 2
        }))
    ));
}

#[test]
fn tall_single_column() {
    let grid = read(b"#\n.\n#\n#\n.\n").unwrap();

    let report = survey(&grid, &SLOPES).unwrap();
    let counts = report
        .counts()
        .iter()
        .map(|&(_, trees)| trees)
        .collect::<Vec<_>>();

    // every column wraps to 0; dy = 2 samples rows 0, 2 and 4
    assert_eq!(counts, &[3, 3, 3, 3, 2]);
    assert_eq!(report.product(), 162);
}

#[test]
fn whitespace_is_open_ground() {
    let grid = read(b"   \n  #\n").unwrap();

    assert_eq!(grid.width(), 3);
    assert_eq!(grid.count_trees(Slope::try_new(2, 1).unwrap()), 1);
}
