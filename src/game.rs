//! Players, turns, and move execution.
//!
//! [`Game`] validates a move against the side to move and the board, hands the
//! picked-up seeds to [`sow`], and switches turns unless the last seed landed
//! in the mover's store.

use std::fmt;

use tracing::debug;

use crate::board::{Board, Side};
use crate::config::{ConfigError, GameConfig};
use crate::sowing::sow;

/// A participant in the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    side: Side,
    name: String,
}

impl Player {
    pub fn new(side: Side, name: impl Into<String>) -> Self {
        Self {
            side,
            name: name.into(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Reason a move was rejected. The game is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game has already ended
    GameOver,
    /// It is the other side's turn
    NotYourTurn(Side),
    /// House index outside `0..houses`
    HouseOutOfRange { index: usize, houses: usize },
    /// The chosen house has no seeds
    EmptyHouse(usize),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "Illegal move: the game is over"),
            MoveError::NotYourTurn(side) => write!(f, "Illegal move: it is not {side}'s turn"),
            MoveError::HouseOutOfRange { index, houses } => write!(
                f,
                "Illegal move: house {} is not between 1 and {houses}",
                index + 1
            ),
            MoveError::EmptyHouse(index) => write!(f, "Illegal move: house {} is empty", index + 1),
        }
    }
}

impl std::error::Error for MoveError {}

/// Summary of an accepted move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub side: Side,
    pub house: usize,
    pub seeds: u32,
    pub extra_turn: bool,
    pub captured: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Winner {
    Side(Side),
    Tie,
}

/// Final scores once the game has ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub scores: [u32; 2],
    pub winner: Winner,
}

/// A Kalah game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    players: [Player; 2],
    current: Side,
    finished: bool,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            board: Board::new(config.houses_per_player, config.seeds_per_house),
            players: Side::ALL.map(|side| Player::new(side, side.name())),
            current: Side::One,
            finished: false,
            config,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn current_side(&self) -> Side {
        self.current
    }

    /// Play `house_index` (0-based) for the side to move.
    pub fn make_move(&mut self, house_index: usize) -> Result<Move, MoveError> {
        self.attempt_move(self.current, house_index)
    }

    /// Play `house_index` (0-based) for `side`.
    pub fn attempt_move(&mut self, side: Side, house_index: usize) -> Result<Move, MoveError> {
        self.check_move(side, house_index)?;

        let seeds = self.board.empty_house(side, house_index);
        let sowing = sow(&mut self.board, side, house_index, seeds);
        if !sowing.extra_turn {
            self.current = side.opponent();
        }

        let mv = Move {
            side,
            house: house_index,
            seeds,
            extra_turn: sowing.extra_turn,
            captured: sowing.captured,
        };
        debug!(?mv, next = %self.current, "move played");
        Ok(mv)
    }

    /// Check a move without playing it.
    pub fn check_move(&self, side: Side, house_index: usize) -> Result<(), MoveError> {
        if self.finished {
            return Err(MoveError::GameOver);
        }
        if side != self.current {
            return Err(MoveError::NotYourTurn(side));
        }
        let houses = self.board.houses_per_side();
        if house_index >= houses {
            return Err(MoveError::HouseOutOfRange {
                index: house_index,
                houses,
            });
        }
        if self.board.house_at(side, house_index).is_empty() {
            return Err(MoveError::EmptyHouse(house_index));
        }
        Ok(())
    }

    /// 0-based indices of the non-empty houses of the side to move.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.finished {
            return Vec::new();
        }
        self.board
            .houses(self.current)
            .filter(|h| !h.is_empty())
            .map(|h| h.number - 1)
            .collect()
    }

    /// True when the side to move has no seeds left in its houses.
    pub fn is_game_over(&self) -> bool {
        self.finished || self.board.is_side_empty(self.current)
    }

    /// Sweep remaining house seeds into their stores and return the final
    /// scores. Calling it again returns the same result.
    pub fn end_game(&mut self) -> GameResult {
        if !self.finished {
            self.board.sweep_to_stores();
            self.finished = true;
        }
        let result = self.final_result();
        debug!(scores = ?result.scores, winner = ?result.winner, "game ended");
        result
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Final scores, available once [`end_game`](Self::end_game) has run.
    pub fn result(&self) -> Option<GameResult> {
        self.finished.then(|| self.final_result())
    }

    fn final_result(&self) -> GameResult {
        let scores = Side::ALL.map(|side| self.board.store_at(side));
        let winner = match scores[0].cmp(&scores[1]) {
            std::cmp::Ordering::Greater => Winner::Side(Side::One),
            std::cmp::Ordering::Less => Winner::Side(Side::Two),
            std::cmp::Ordering::Equal => Winner::Tie,
        };
        GameResult { scores, winner }
    }
}
