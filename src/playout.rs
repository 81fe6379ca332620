//! Random playouts (self-play with uniformly random legal moves).
//!
//! Used by the `demo` command and by tests to drive the engine through many
//! complete games. Moves are picked with a seeded [`fastrand::Rng`], so a
//! given seed always replays the same game.

use tracing::{debug, warn};

use crate::game::{Game, GameResult};

/// Statistics for one finished playout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Playout {
    pub result: GameResult,
    /// Moves played, extra turns included.
    pub moves: usize,
    pub extra_turns: usize,
    pub captures: usize,
}

/// Play random legal moves until the game is over, then end it.
pub fn random_playout(game: &mut Game, rng: &mut fastrand::Rng) -> Playout {
    let mut moves = 0;
    let mut extra_turns = 0;
    let mut captures = 0;

    while !game.is_game_over() {
        let legal = game.legal_moves();
        let house = legal[rng.usize(..legal.len())];
        let mv = match game.make_move(house) {
            Ok(mv) => mv,
            Err(err) => {
                warn!(house, %err, "legal move rejected, abandoning playout");
                break;
            }
        };
        moves += 1;
        if mv.extra_turn {
            extra_turns += 1;
        }
        if mv.captured > 0 {
            captures += 1;
        }
    }
    let result = game.end_game();
    debug!(moves, extra_turns, captures, winner = ?result.winner, "playout finished");
    Playout {
        result,
        moves,
        extra_turns,
        captures,
    }
}
