//! Text-described routing boards for the pcbroute demos.
//!
//! A board is drawn with one character per unit cell:
//!
//! - `.` free cell
//! - `#` blocked cell (an obstacle)
//! - `S` the source cell (exactly one)
//! - `D` a destination cell (any number)
//!
//! Row `n` of the text is `y = n` on the board. Every cell is the unit box
//! `[x, x+1] x [y, y+1]`, so neighbouring cells only touch and never
//! intersect.

use std::fmt;

use pcbroute_search::{
    Candidate, DestinationSet, ExactIntersect, IntBox, MoveGenerator, ObstacleSet, Point,
};

/// A rectangular board of unit cells parsed from text.
#[derive(Debug, Clone)]
pub struct TextBoard {
    size: Point,
    source: IntBox,
    destinations: DestinationSet,
    obstacles: ObstacleSet<IntBox>,
}

/// The unit box of the cell at `p`.
pub fn cell(p: Point) -> IntBox {
    IntBox::from_point(p).union(IntBox::from_point(p.shift(1, 1)))
}

impl TextBoard {
    /// Parse a board. Surrounding whitespace is trimmed; every line must
    /// have the same width.
    pub fn parse(s: &str) -> Result<Self, BoardError> {
        let s = s.trim();
        let mut width: Option<i32> = None;
        let mut height = 0;
        let mut source = None;
        let mut destinations = DestinationSet::default();
        let mut obstacles = ObstacleSet::new();

        for (y, line) in s.lines().enumerate() {
            let y = y as i32;
            let mut x = 0;
            for ch in line.chars() {
                let p = Point::new(x, y);
                match ch {
                    '.' => {}
                    '#' => obstacles.push(cell(p)),
                    'D' => destinations.push(cell(p)),
                    'S' => {
                        if source.is_some() {
                            return Err(BoardError::DuplicateSource(p));
                        }
                        source = Some(cell(p));
                    }
                    _ => return Err(BoardError::InvalidRune { ch, pos: p }),
                }
                x += 1;
            }
            match width {
                None => width = Some(x),
                Some(w) if w != x => return Err(BoardError::InconsistentWidth { line: y }),
                Some(_) => {}
            }
            height += 1;
        }

        let source = source.ok_or(BoardError::MissingSource)?;
        Ok(Self {
            size: Point::new(width.unwrap_or(0), height),
            source,
            destinations,
            obstacles,
        })
    }

    /// Width and height in cells.
    pub fn size(&self) -> Point {
        self.size
    }

    pub fn source(&self) -> IntBox {
        self.source
    }

    pub fn destinations(&self) -> &DestinationSet {
        &self.destinations
    }

    pub fn obstacles(&self) -> &ObstacleSet<IntBox> {
        &self.obstacles
    }

    /// Draw the board with `path` cells marked `*`.
    pub fn render(&self, path: &[IntBox]) -> String {
        let mut out = String::new();
        for y in 0..self.size.y {
            for x in 0..self.size.x {
                let c = cell(Point::new(x, y));
                let ch = if c == self.source {
                    'S'
                } else if self.destinations.boxes().contains(&c) {
                    'D'
                } else if self.obstacles.boxes().contains(&c) {
                    '#'
                } else if path.contains(&c) {
                    '*'
                } else {
                    '.'
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }

    fn on_board(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.size.x && p.y < self.size.y
    }
}

impl MoveGenerator for TextBoard {
    type Shape = IntBox;

    fn successors(&self, from: &Candidate<IntBox>, buf: &mut Vec<(IntBox, f64)>) {
        for n in from.shape().ll().neighbors_4() {
            if self.on_board(n) {
                buf.push((cell(n), 1.0));
            }
        }
    }
}

// Cells are boxes, so the bounding-box defaults are exact.
impl ExactIntersect for TextBoard {}

/// Errors that can occur when parsing a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// A line whose width differs from the first line.
    InconsistentWidth { line: i32 },
    /// A character other than `.`, `#`, `S` or `D`.
    InvalidRune { ch: char, pos: Point },
    /// No `S` on the board.
    MissingSource,
    /// A second `S`.
    DuplicateSource(Point),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth { line } => {
                write!(f, "board: line {line} differs in width from the first line")
            }
            Self::InvalidRune { ch, pos } => {
                write!(f, "board contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingSource => write!(f, "board has no source cell 'S'"),
            Self::DuplicateSource(pos) => write!(f, "board has a second source cell at {pos}"),
        }
    }
}

impl std::error::Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pcbroute_search::{ExhaustReason, SeedState, Weights, search};

    const BOARD: &str = "
S..#....
...#..D.
...#....
........
";

    #[test]
    fn parse_board() {
        let b = TextBoard::parse(BOARD).unwrap();
        assert_eq!(b.size(), Point::new(8, 4));
        assert_eq!(b.source(), cell(Point::new(0, 0)));
        assert_eq!(b.destinations().boxes(), &[cell(Point::new(6, 1))]);
        assert_eq!(b.obstacles().len(), 3);
    }

    #[test]
    fn cells_are_unit_boxes() {
        let c = cell(Point::new(2, 3));
        assert_eq!(c, IntBox::new(2, 3, 3, 4).unwrap());
        assert!(!c.intersects(cell(Point::new(3, 3))));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            TextBoard::parse("S..\n..").unwrap_err(),
            BoardError::InconsistentWidth { line: 1 }
        );
        assert_eq!(
            TextBoard::parse("S.x").unwrap_err(),
            BoardError::InvalidRune {
                ch: 'x',
                pos: Point::new(2, 0)
            }
        );
        assert_eq!(TextBoard::parse("..D").unwrap_err(), BoardError::MissingSource);
        assert_eq!(
            TextBoard::parse("S.S").unwrap_err(),
            BoardError::DuplicateSource(Point::new(2, 0))
        );
    }

    #[test]
    fn routes_around_the_wall() {
        let b = TextBoard::parse(BOARD).unwrap();
        let path = search(
            &b,
            b.source(),
            b.destinations(),
            b.obstacles(),
            Weights::UNIT,
            &mut SeedState::from_seed(42),
        )
        .unwrap();
        // Down to row 3, across, and back up to row 1.
        assert_eq!(path.cost(), 3.0 + 6.0 + 2.0);
        let drawn = b.render(path.shapes());
        assert_eq!(drawn.lines().count(), 4);
        assert_eq!(drawn.matches('*').count(), path.shapes().len() - 2);
    }

    #[test]
    fn sealed_destination_is_unreachable() {
        let b = TextBoard::parse(
            "
S...###
....#D#
....###
",
        )
        .unwrap();
        let err = search(
            &b,
            b.source(),
            b.destinations(),
            b.obstacles(),
            Weights::UNIT,
            &mut SeedState::from_seed(1),
        )
        .unwrap_err();
        assert_eq!(err.reason, ExhaustReason::FrontierEmpty);
    }
}
