//! Game configuration.
//!
//! A [`GameConfig`] is fixed for the lifetime of a game. The sowing direction
//! only changes how the board is drawn; the rules are identical either way.

use std::fmt;

use crate::constants::{
    DEFAULT_HOUSES, DEFAULT_SEEDS, NUM_SIDES, SEVEN_FIVE_HOUSES, SEVEN_FIVE_SEEDS,
};

/// Direction seeds travel around the board as drawn on screen.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Anticlockwise,
    Clockwise,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub houses_per_player: usize,
    pub seeds_per_house: u32,
    pub direction: Direction,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::five_four()
    }
}

impl GameConfig {
    pub fn new(houses_per_player: usize, seeds_per_house: u32, direction: Direction) -> Self {
        Self {
            houses_per_player,
            seeds_per_house,
            direction,
        }
    }

    /// 5 houses per player, 4 seeds each.
    pub fn five_four() -> Self {
        Self::new(DEFAULT_HOUSES, DEFAULT_SEEDS, Direction::Anticlockwise)
    }

    /// 7 houses per player, 5 seeds each.
    pub fn seven_five() -> Self {
        Self::new(SEVEN_FIVE_HOUSES, SEVEN_FIVE_SEEDS, Direction::Anticlockwise)
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.houses_per_player == 0 {
            return Err(ConfigError::NoHouses);
        }
        let total = u32::try_from(self.houses_per_player)
            .ok()
            .and_then(|houses| houses.checked_mul(NUM_SIDES as u32))
            .and_then(|houses| houses.checked_mul(self.seeds_per_house));
        if total.is_none() {
            return Err(ConfigError::TooManySeeds {
                houses: self.houses_per_player,
                seeds: self.seeds_per_house,
            });
        }
        Ok(())
    }
}

/// Rejected game configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Each player needs at least one house.
    NoHouses,
    /// The seeds on the whole board do not fit in a `u32`.
    TooManySeeds { houses: usize, seeds: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoHouses => write!(f, "houses per player must be at least 1"),
            ConfigError::TooManySeeds { houses, seeds } => write!(
                f,
                "{houses} houses with {seeds} seeds each is too many seeds for one board"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let c = GameConfig::default();
        assert_eq!(c, GameConfig::five_four());
        assert_eq!((c.houses_per_player, c.seeds_per_house), (5, 4));
        assert_eq!(c.direction, Direction::Anticlockwise);

        let c = GameConfig::seven_five().with_direction(Direction::Clockwise);
        assert_eq!((c.houses_per_player, c.seeds_per_house), (7, 5));
        assert_eq!(c.direction, Direction::Clockwise);
    }

    #[test]
    fn test_validate() {
        assert!(GameConfig::default().validate().is_ok());
        assert!(GameConfig::new(1, 0, Direction::Clockwise).validate().is_ok());
        assert_eq!(
            GameConfig::new(0, 4, Direction::Anticlockwise).validate(),
            Err(ConfigError::NoHouses)
        );

        // 2 x 1 x u32::MAX seeds would overflow the stores on the first move.
        assert_eq!(
            GameConfig::new(1, u32::MAX, Direction::Anticlockwise).validate(),
            Err(ConfigError::TooManySeeds { houses: 1, seeds: u32::MAX })
        );
        assert_eq!(
            GameConfig::new(usize::MAX, 0, Direction::Anticlockwise).validate(),
            Err(ConfigError::TooManySeeds { houses: usize::MAX, seeds: 0 })
        );
        let largest = u32::MAX / 2;
        assert!(GameConfig::new(1, largest, Direction::Anticlockwise).validate().is_ok());
        assert!(GameConfig::new(1, largest + 1, Direction::Anticlockwise).validate().is_err());
    }
}
