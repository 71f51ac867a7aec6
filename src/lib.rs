//! Counting the trees met while sledding down a map that repeats to the right.

mod error;
pub mod grid;
pub mod logging;
pub mod survey;
pub mod walk;

pub use error::{Error, InvalidGrid};
pub use grid::{Grid, Row};
pub use survey::{survey, Survey};
pub use walk::{Slope, TreeCounter, Visit, Walk, SLOPES};

pub mod io {
    use either::Either;
    use std::io::BufRead;
    use std::str::FromStr;

    /// Parses every non-empty line of the input as `T`, along with its one based line number.
    ///
    /// Only the line terminator is stripped, whitespace within the line is handed to `T`.
    pub struct OnePerLine<I, T> {
        input: I,
        buffer: String,
        line: usize,
        _type_of_t: std::marker::PhantomData<T>,
    }

    impl<I: BufRead, T: FromStr> OnePerLine<I, T> {
        pub fn new(input: I) -> Self {
            Self {
                input,
                buffer: String::new(),
                line: 0,
                _type_of_t: Default::default(),
            }
        }
    }

    impl<I, T> Iterator for OnePerLine<I, T>
    where
        I: BufRead,
        T: FromStr,
    {
        type Item = Result<(usize, T), Either<T::Err, std::io::Error>>;

        fn next(&mut self) -> Option<Self::Item> {
            loop {
                self.buffer.clear();
                let read = match self.input.read_line(&mut self.buffer) {
                    Ok(read) => read,
                    Err(e) => return Some(Err(Either::Right(e))),
                };

                if read == 0 {
                    return None;
                }

                self.line += 1;

                let line = self.buffer.trim_end_matches(&['\r', '\n'][..]);

                // the input usually ends with a newline, sometimes with more than one
                if line.is_empty() {
                    continue;
                }

                let number = self.line;
                return Some(T::from_str(line).map(|t| (number, t)).map_err(Either::Left));
            }
        }
    }

    #[test]
    fn skips_empty_lines() {
        let input = std::io::Cursor::new(b"1\n\n2\r\n\r\n3\n\n");
        let parsed = OnePerLine::<_, u8>::new(input)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(parsed, &[(1, 1), (3, 2), (5, 3)]);
    }

    #[test]
    fn keeps_whitespace_within_line() {
        let input = std::io::Cursor::new(b"  #\r\n   \n# \n");
        let parsed = OnePerLine::<_, String>::new(input)
            .map(|res| res.map(|(_, s)| s))
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(parsed, &["  #", "   ", "# "]);
    }

    #[test]
    fn parse_error_is_left() {
        let input = std::io::Cursor::new(b"1\nx\n3");
        let mut iter = OnePerLine::<_, u8>::new(input);

        assert_eq!(iter.next().unwrap().unwrap(), (1, 1));
        assert!(matches!(iter.next(), Some(Err(Either::Left(_)))));
        assert_eq!(iter.next().unwrap().unwrap(), (3, 3));
        assert!(iter.next().is_none());
    }
}

#[cfg(test)]
pub(crate) const EXAMPLE: &str = "..##.......
#...#...#..
.#....#..#.
..#.#...#.#
.#...##..#.
..#.##.....
.#.#.#....#
.#........#
#.##...#...
#...##....#
.#..#...#.#";
