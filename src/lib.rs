//! Kalah: rules engine for the two-player seed-sowing game.
//!
//! Each player owns a row of houses and a store. A move picks up every seed
//! in one of the mover's houses and sows them one at a time along the
//! mover's houses, into the mover's store, and on around the opponent's
//! houses. Ending in the mover's store grants another move; ending in an
//! empty house on the mover's side captures the opposite house.
//!
//! ## Modules
//!
//! - [`constants`] - Default board dimensions and console vocabulary
//! - [`config`] - Game configuration and presets
//! - [`board`] - House and store state, the only place counts change
//! - [`sowing`] - Seed distribution and capture
//! - [`game`] - Players, turns, move validation, and end of game
//! - [`display`] - ASCII board rendering
//! - [`console`] - Line-based interactive play
//! - [`playout`] - Random self-play for demos and testing
//!
//! ## Example
//!
//! ```
//! use kalah::board::Side;
//! use kalah::config::GameConfig;
//! use kalah::game::Game;
//!
//! let mut game = Game::new(GameConfig::five_four()).unwrap();
//!
//! // House 2 holds 4 seeds: the last one lands in the store.
//! let mv = game.make_move(1).unwrap();
//! assert!(mv.extra_turn);
//! assert_eq!(game.current_side(), Side::One);
//! assert_eq!(game.board().store_at(Side::One), 1);
//! ```

pub mod board;
pub mod config;
pub mod console;
pub mod constants;
pub mod display;
pub mod game;
pub mod playout;
pub mod sowing;
