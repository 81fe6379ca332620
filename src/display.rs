//! ASCII rendering of the board.
//!
//! Anticlockwise (the default), side two sits on top with its houses drawn
//! right to left and side one's store on the right; side one sits below,
//! left to right, with side two's store on the left:
//!
//! ```text
//! +----+-------+-------+-------+-------+-------+----+
//! | P2 | 5[ 4] | 4[ 4] | 3[ 4] | 2[ 4] | 1[ 4] |  0 |
//! |    |-------+-------+-------+-------+-------|    |
//! |  0 | 1[ 4] | 2[ 4] | 3[ 4] | 4[ 4] | 5[ 4] | P1 |
//! +----+-------+-------+-------+-------+-------+----+
//! ```
//!
//! Clockwise mirrors both rows.

use std::fmt;

use crate::board::{Board, House, Side};
use crate::config::Direction;
use crate::constants::COUNT_WIDTH;

/// A [`Board`] paired with the direction it should be drawn in.
pub struct BoardView<'a> {
    board: &'a Board,
    direction: Direction,
}

impl<'a> BoardView<'a> {
    pub fn new(board: &'a Board, direction: Direction) -> Self {
        Self { board, direction }
    }

    fn write_border(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+----")?;
        for _ in 0..self.board.houses_per_side() {
            write!(f, "+-------")?;
        }
        writeln!(f, "+----+")
    }

    fn write_middle(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|    |-------")?;
        for _ in 1..self.board.houses_per_side() {
            write!(f, "+-------")?;
        }
        writeln!(f, "|    |")
    }

    fn write_row(
        &self,
        f: &mut fmt::Formatter<'_>,
        left: &str,
        houses: impl Iterator<Item = House>,
        right: &str,
    ) -> fmt::Result {
        write!(f, "| {left} ")?;
        for house in houses {
            write!(f, "| {}[{:>w$}] ", house.number, house.seeds, w = COUNT_WIDTH)?;
        }
        writeln!(f, "| {right} |")
    }

    fn store_label(&self, side: Side) -> String {
        format!("{:>w$}", self.board.store_at(side), w = COUNT_WIDTH)
    }
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.board;
        let store_one = self.store_label(Side::One);
        let store_two = self.store_label(Side::Two);
        let p1 = Side::One.name();
        let p2 = Side::Two.name();

        self.write_border(f)?;
        match self.direction {
            Direction::Anticlockwise => {
                self.write_row(f, p2, board.houses(Side::Two).rev(), &store_one)?;
                self.write_middle(f)?;
                self.write_row(f, &store_two, board.houses(Side::One), p1)?;
            }
            Direction::Clockwise => {
                self.write_row(f, &store_one, board.houses(Side::Two), p2)?;
                self.write_middle(f)?;
                self.write_row(f, p1, board.houses(Side::One).rev(), &store_two)?;
            }
        }
        self.write_border(f)
    }
}
