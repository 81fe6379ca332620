//! Seed sowing and capture.
//!
//! A sow walks a cursor around the board counter to the direction of play:
//! along the mover's houses, into the mover's store, along the opponent's
//! houses (skipping the opponent's store) and back to the mover's first house.
//! One seed is placed per step. Emptiness of a house is checked immediately
//! before each seed lands, so laps that pass through the pick-up house see
//! it as empty.

use tracing::trace;

use crate::board::{Board, Side, Slot};

/// Where the next seed will be placed, relative to the mover.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Cursor {
    OwnHouse(usize),
    OwnStore,
    OpponentHouse(usize),
}

/// Result of a completed sow.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Sowing {
    /// The last seed landed in the mover's store.
    pub extra_turn: bool,
    /// Seeds banked by a capture (0 if none).
    pub captured: u32,
}

/// Sow `seeds` seeds for `mover`, starting one step past `start_index`.
///
/// The caller is expected to have already emptied the pick-up house.
pub fn sow(board: &mut Board, mover: Side, start_index: usize, seeds: u32) -> Sowing {
    let mut result = Sowing::default();
    if seeds == 0 {
        return result;
    }

    let mut cursor = own_cursor(board.next_index(start_index));
    let mut remaining = seeds;

    loop {
        match cursor {
            Cursor::OwnStore => {
                board.add_one_to_store(mover);
                remaining -= 1;
                if remaining == 0 {
                    result.extra_turn = true;
                    break;
                }
                cursor = Cursor::OpponentHouse(0);
            }
            Cursor::OwnHouse(i) => {
                let was_empty = board.house_at(mover, i).is_empty();
                board.add_one_to_house(mover, i);
                remaining -= 1;
                if remaining == 0 {
                    if board.is_capture(was_empty, mover, i) {
                        result.captured = board.capture(mover, i);
                        trace!(side = %mover, house = i + 1, captured = result.captured, "capture");
                    }
                    break;
                }
                cursor = own_cursor(board.next_index(i));
            }
            Cursor::OpponentHouse(i) => {
                board.add_one_to_house(mover.opponent(), i);
                remaining -= 1;
                if remaining == 0 {
                    break;
                }
                cursor = match board.next_index(i) {
                    Slot::House(next) => Cursor::OpponentHouse(next),
                    Slot::Store => Cursor::OwnHouse(0),
                };
            }
        }
    }

    trace!(side = %mover, start = start_index + 1, seeds, ?result, "sowed");
    result
}

fn own_cursor(slot: Slot) -> Cursor {
    match slot {
        Slot::House(i) => Cursor::OwnHouse(i),
        Slot::Store => Cursor::OwnStore,
    }
}
