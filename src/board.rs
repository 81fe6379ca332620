//! Kalah board state: houses and stores for both sides.
//!
//! Houses are kept in a flat 1D array, side one's houses first, then side
//! two's. The board knows nothing about turns; it only guards the cell
//! counts. Every change to a house or store goes through one of the
//! mutation methods below.

use std::fmt;

use crate::constants::{NUM_SIDES, PLAYER_NAMES};

/// One of the two sides of the board (and the player who owns it).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    One,
    Two,
}

impl Side {
    /// Both sides, in turn order.
    pub const ALL: [Side; NUM_SIDES] = [Side::One, Side::Two];

    /// Zero-based player index (0 for side one, 1 for side two).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }

    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// Short display name (`P1` / `P2`).
    pub fn name(self) -> &'static str {
        PLAYER_NAMES[self.index()]
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A snapshot of a single house.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct House {
    /// 1-based number shown to players.
    pub number: usize,
    pub seeds: u32,
}

impl House {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seeds == 0
    }
}

/// The slot following a house when walking along one side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    House(usize),
    Store,
}

/// Target of a bulk seed addition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Pit {
    House(Side, usize),
    Store(Side),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    houses_per_side: usize,
    seeds_per_house: u32,
    houses: Vec<u32>,
    stores: [u32; NUM_SIDES],
}

impl Board {
    /// Create a board with every house holding `seeds_per_house` seeds and
    /// both stores empty.
    ///
    /// # Panics
    ///
    /// Panics if `houses_per_side` is zero or too large to index. Use
    /// [`GameConfig::validate`](crate::config::GameConfig::validate) to reject
    /// such a configuration gracefully.
    pub fn new(houses_per_side: usize, seeds_per_house: u32) -> Self {
        assert!(houses_per_side >= 1, "a board needs at least one house per side");
        assert!(
            houses_per_side <= usize::MAX / NUM_SIDES,
            "{houses_per_side} houses per side do not fit on a board"
        );
        Self {
            houses_per_side,
            seeds_per_house,
            houses: vec![seeds_per_house; houses_per_side * NUM_SIDES],
            stores: [0; NUM_SIDES],
        }
    }

    #[inline]
    pub fn houses_per_side(&self) -> usize {
        self.houses_per_side
    }

    #[inline]
    pub fn seeds_per_house(&self) -> u32 {
        self.seeds_per_house
    }

    fn idx(&self, side: Side, index: usize) -> usize {
        assert!(
            index < self.houses_per_side,
            "house index {index} out of range for {} houses",
            self.houses_per_side
        );
        side.index() * self.houses_per_side + index
    }

    pub fn house_at(&self, side: Side, index: usize) -> House {
        House {
            number: index + 1,
            seeds: self.houses[self.idx(side, index)],
        }
    }

    /// Houses on one side, from index 0 upwards.
    pub fn houses(&self, side: Side) -> impl DoubleEndedIterator<Item = House> + '_ {
        (0..self.houses_per_side).map(move |i| self.house_at(side, i))
    }

    #[inline]
    pub fn store_at(&self, side: Side) -> u32 {
        self.stores[side.index()]
    }

    /// Zero a house and return the seeds that were in it.
    pub fn empty_house(&mut self, side: Side, index: usize) -> u32 {
        let i = self.idx(side, index);
        std::mem::take(&mut self.houses[i])
    }

    pub fn add_one_to_house(&mut self, side: Side, index: usize) {
        let i = self.idx(side, index);
        self.houses[i] += 1;
    }

    pub fn add_one_to_store(&mut self, side: Side) {
        self.stores[side.index()] += 1;
    }

    /// Bulk addition. Callers must remove the same amount elsewhere.
    pub fn add_seeds(&mut self, target: Pit, amount: u32) {
        match target {
            Pit::House(side, index) => {
                let i = self.idx(side, index);
                self.houses[i] += amount;
            }
            Pit::Store(side) => self.stores[side.index()] += amount,
        }
    }

    pub fn is_side_empty(&self, side: Side) -> bool {
        self.houses(side).all(|h| h.is_empty())
    }

    /// The house facing `(side, index)` across the board.
    pub fn opposite(&self, side: Side, index: usize) -> (Side, usize) {
        assert!(
            index < self.houses_per_side,
            "house index {index} out of range for {} houses",
            self.houses_per_side
        );
        (side.opponent(), self.houses_per_side - 1 - index)
    }

    /// Slot after house `index` on the same side: the next house, or the
    /// store once the last house has been passed.
    pub fn next_index(&self, index: usize) -> Slot {
        if index + 1 < self.houses_per_side {
            Slot::House(index + 1)
        } else {
            Slot::Store
        }
    }

    /// Whether a seed that just landed in `(side, index)` captures.
    pub fn is_capture(&self, was_empty: bool, side: Side, index: usize) -> bool {
        let (opp_side, opp_index) = self.opposite(side, index);
        was_empty && !self.house_at(opp_side, opp_index).is_empty()
    }

    /// Move the contents of `(side, index)` and its opposite house into
    /// `side`'s store. Returns the number of seeds banked.
    pub fn capture(&mut self, side: Side, index: usize) -> u32 {
        let (opp_side, opp_index) = self.opposite(side, index);
        let captured = self.empty_house(opp_side, opp_index) + self.empty_house(side, index);
        self.add_seeds(Pit::Store(side), captured);
        captured
    }

    /// Move every house's seeds into its own side's store.
    pub fn sweep_to_stores(&mut self) {
        for side in Side::ALL {
            for index in 0..self.houses_per_side {
                let seeds = self.empty_house(side, index);
                if seeds > 0 {
                    self.add_seeds(Pit::Store(side), seeds);
                }
            }
        }
    }

    /// Seeds on the whole board, houses and stores together.
    pub fn total_seeds(&self) -> u32 {
        self.houses.iter().sum::<u32>() + self.stores.iter().sum::<u32>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new(5, 4);
        for side in Side::ALL {
            assert_eq!(board.store_at(side), 0);
            for (i, house) in board.houses(side).enumerate() {
                assert_eq!(house.number, i + 1);
                assert_eq!(house.seeds, 4);
            }
        }
        assert_eq!(board.total_seeds(), 40);
    }

    #[test]
    #[should_panic]
    fn test_zero_houses_panics() {
        Board::new(0, 4);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_house_panics() {
        let board = Board::new(5, 4);
        board.house_at(Side::One, 5);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_opposite_panics() {
        let board = Board::new(5, 4);
        board.opposite(Side::Two, 5);
    }

    #[test]
    fn test_opposite_is_involution() {
        let board = Board::new(6, 4);
        for side in Side::ALL {
            for i in 0..6 {
                let (s, j) = board.opposite(side, i);
                assert_eq!(s, side.opponent());
                assert_eq!(board.opposite(s, j), (side, i));
            }
        }
        assert_eq!(board.opposite(Side::One, 0), (Side::Two, 5));
    }

    #[test]
    fn test_next_index() {
        let board = Board::new(3, 4);
        assert_eq!(board.next_index(0), Slot::House(1));
        assert_eq!(board.next_index(1), Slot::House(2));
        assert_eq!(board.next_index(2), Slot::Store);
    }

    #[test]
    fn test_empty_and_add() {
        let mut board = Board::new(5, 4);
        assert_eq!(board.empty_house(Side::Two, 2), 4);
        assert!(board.house_at(Side::Two, 2).is_empty());
        board.add_one_to_house(Side::Two, 2);
        board.add_one_to_store(Side::One);
        board.add_seeds(Pit::House(Side::One, 0), 3);
        assert_eq!(board.house_at(Side::Two, 2).seeds, 1);
        assert_eq!(board.store_at(Side::One), 1);
        assert_eq!(board.house_at(Side::One, 0).seeds, 7);
    }

    #[test]
    fn test_is_capture() {
        let mut board = Board::new(5, 4);
        assert!(board.is_capture(true, Side::One, 0));
        assert!(!board.is_capture(false, Side::One, 0));
        board.empty_house(Side::Two, 4);
        assert!(!board.is_capture(true, Side::One, 0));
    }

    #[test]
    fn test_capture() {
        let mut board = Board::new(5, 4);
        board.empty_house(Side::One, 0);
        board.add_one_to_house(Side::One, 0);

        let captured = board.capture(Side::One, 0);
        assert_eq!(captured, 5);
        assert_eq!(board.store_at(Side::One), 5);
        assert!(board.house_at(Side::One, 0).is_empty());
        assert!(board.house_at(Side::Two, 4).is_empty());
        assert_eq!(board.total_seeds(), 40 - 4 + 1);
    }

    #[test]
    fn test_side_empty_and_sweep() {
        let mut board = Board::new(5, 4);
        assert!(!board.is_side_empty(Side::One));
        for i in 0..5 {
            board.empty_house(Side::One, i);
        }
        assert!(board.is_side_empty(Side::One));

        board.sweep_to_stores();
        assert_eq!(board.store_at(Side::One), 0);
        assert_eq!(board.store_at(Side::Two), 20);
        assert!(board.is_side_empty(Side::Two));

        let before = board.clone();
        board.sweep_to_stores();
        assert_eq!(board, before);
    }
}
