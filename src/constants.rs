//! Constants for board dimensions, player naming, and the console protocol.

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of sides (players) on a Kalah board.
pub const NUM_SIDES: usize = 2;

/// Default number of houses per side.
pub const DEFAULT_HOUSES: usize = 5;

/// Default number of seeds placed in every house at the start of a game.
pub const DEFAULT_SEEDS: u32 = 4;

/// Houses per side for the larger `seven-five` preset.
pub const SEVEN_FIVE_HOUSES: usize = 7;

/// Seeds per house for the larger `seven-five` preset.
pub const SEVEN_FIVE_SEEDS: u32 = 5;

// =============================================================================
// Players
// =============================================================================

/// Display names, indexed by side.
pub const PLAYER_NAMES: [&str; NUM_SIDES] = ["P1", "P2"];

// =============================================================================
// Console Protocol
// =============================================================================

/// Input that ends an interactive session.
pub const QUIT_COMMAND: &str = "q";

/// Smallest house number a player may type.
pub const MIN_HOUSE_NUMBER: usize = 1;

/// Width seed counts are padded to when the board is rendered.
pub const COUNT_WIDTH: usize = 2;
