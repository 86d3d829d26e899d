//! Game configuration.
//!
//! The engine is configured once at construction:
//! - Main grid dimensions (rows × cols)
//! - Reserve grid dimensions (one reserve per player)
//! - Pieces per player
//! - Starting player and RNG seed
//!
//! Dimensions are invariant for the lifetime of a game.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::Player;

/// Complete game configuration.
///
/// `Default` is the standard game: a 5×6 main grid, 6×2 reserves and
/// 12 pieces per player.
///
/// ```
/// use dara_engine::core::GameConfig;
///
/// let config = GameConfig::default()
///     .with_main_size(4, 4)
///     .with_reserve_size(2, 2)
///     .with_pieces_per_player(4);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rows of the shared playing grid.
    pub main_rows: usize,

    /// Columns of the shared playing grid.
    pub main_cols: usize,

    /// Rows of each reserve grid.
    pub reserve_rows: usize,

    /// Columns of each reserve grid.
    pub reserve_cols: usize,

    /// Pieces each player starts with (N). Total pieces are 2N.
    pub pieces_per_player: u8,

    /// Player who acts first.
    pub first_player: Player,

    /// Seed for the AI's random source.
    /// Same seed produces identical AI decisions.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            main_rows: 5,
            main_cols: 6,
            reserve_rows: 6,
            reserve_cols: 2,
            pieces_per_player: 12,
            first_player: Player::One,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Set the main grid size.
    #[must_use]
    pub fn with_main_size(mut self, rows: usize, cols: usize) -> Self {
        self.main_rows = rows;
        self.main_cols = cols;
        self
    }

    /// Set the reserve grid size.
    #[must_use]
    pub fn with_reserve_size(mut self, rows: usize, cols: usize) -> Self {
        self.reserve_rows = rows;
        self.reserve_cols = cols;
        self
    }

    /// Set the number of pieces per player.
    #[must_use]
    pub fn with_pieces_per_player(mut self, pieces: u8) -> Self {
        self.pieces_per_player = pieces;
        self
    }

    /// Set the starting player.
    #[must_use]
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of cells on the main grid.
    #[must_use]
    pub fn main_cells(&self) -> usize {
        self.main_rows * self.main_cols
    }

    /// Number of slots in one reserve grid.
    #[must_use]
    pub fn reserve_slots(&self) -> usize {
        self.reserve_rows * self.reserve_cols
    }

    /// Check that the configuration describes a playable board.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a grid is empty, the reserve size does not
    /// match the piece count, or the pieces cannot all fit on the main grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.main_rows == 0 || self.main_cols == 0 {
            return Err(ConfigError::EmptyMainGrid {
                rows: self.main_rows,
                cols: self.main_cols,
            });
        }

        if self.pieces_per_player == 0 {
            return Err(ConfigError::NoPieces);
        }

        if self.pieces_per_player > 127 {
            return Err(ConfigError::TooManyPieces(self.pieces_per_player));
        }

        let pieces = usize::from(self.pieces_per_player);
        if self.reserve_slots() != pieces {
            return Err(ConfigError::ReserveMismatch {
                slots: self.reserve_slots(),
                pieces,
            });
        }

        if self.main_cells() < 2 * pieces {
            return Err(ConfigError::MainGridTooSmall {
                cells: self.main_cells(),
                pieces: 2 * pieces,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.main_rows, 5);
        assert_eq!(config.main_cols, 6);
        assert_eq!(config.reserve_slots(), 12);
        assert_eq!(config.pieces_per_player, 12);
        assert_eq!(config.first_player, Player::One);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_main_size(3, 4)
            .with_reserve_size(1, 5)
            .with_pieces_per_player(5)
            .with_first_player(Player::Two)
            .with_seed(7);

        assert_eq!(config.main_cells(), 12);
        assert_eq!(config.reserve_slots(), 5);
        assert_eq!(config.first_player, Player::Two);
        assert_eq!(config.seed, 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reserve_mismatch() {
        let config = GameConfig::default().with_reserve_size(5, 2);

        assert_eq!(
            config.validate(),
            Err(ConfigError::ReserveMismatch { slots: 10, pieces: 12 })
        );
    }

    #[test]
    fn test_empty_main_grid() {
        let config = GameConfig::default().with_main_size(0, 6);
        assert!(matches!(config.validate(), Err(ConfigError::EmptyMainGrid { .. })));
    }

    #[test]
    fn test_main_grid_too_small() {
        let config = GameConfig::default().with_main_size(3, 3);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MainGridTooSmall { cells: 9, pieces: 24 })
        ));
    }

    #[test]
    fn test_piece_limits() {
        let none = GameConfig::default().with_pieces_per_player(0);
        assert_eq!(none.validate(), Err(ConfigError::NoPieces));

        let many = GameConfig::default().with_pieces_per_player(200);
        assert_eq!(many.validate(), Err(ConfigError::TooManyPieces(200)));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
