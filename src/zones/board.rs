//! Board storage: the main grid and one reserve grid per player.
//!
//! The `Board` is an arena: each zone is a fixed-size row-major `Vec`
//! allocated at construction, so every cell access is O(1). The board
//! performs no rule validation; callers maintain the one-cell-per-piece
//! invariant, and `validate` detects violations.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::GameConfig;
use crate::core::error::BoardError;
use crate::core::piece::PieceId;
use crate::core::player::{Player, PlayerMap};

/// One of the three disjoint coordinate spaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// The shared playing grid.
    Main,
    /// Player 1's reserve.
    ReserveA,
    /// Player 2's reserve.
    ReserveB,
}

impl Zone {
    /// All zones, in scan order.
    pub const ALL: [Zone; 3] = [Zone::Main, Zone::ReserveA, Zone::ReserveB];

    /// Get the reserve zone belonging to a player.
    #[must_use]
    pub const fn reserve_of(player: Player) -> Self {
        match player {
            Player::One => Zone::ReserveA,
            Player::Two => Zone::ReserveB,
        }
    }

    /// Get the owner of a reserve zone. `None` for the shared grid.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Zone::Main => None,
            Zone::ReserveA => Some(Player::One),
            Zone::ReserveB => Some(Player::Two),
        }
    }
}

/// Zero-based grid coordinate. The zone is carried separately by `Location`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance between two cells.
    #[must_use]
    pub fn distance(self, other: Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Orthogonal adjacency (distance exactly 1).
    #[must_use]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.distance(other) == 1
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Cardinal direction for grid traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
}

/// A cell tagged with its zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub zone: Zone,
    pub cell: Cell,
}

impl Location {
    #[must_use]
    pub const fn new(zone: Zone, cell: Cell) -> Self {
        Self { zone, cell }
    }

    /// Location on the main grid.
    #[must_use]
    pub const fn main(row: usize, col: usize) -> Self {
        Self::new(Zone::Main, Cell::new(row, col))
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}{}", self.zone, self.cell)
    }
}

/// A fixed-size rectangular grid of optional pieces.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<PieceId>>,
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check whether a cell lies inside the grid.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    fn index(&self, cell: Cell) -> usize {
        assert!(
            self.contains(cell),
            "cell {} outside {}x{} grid",
            cell,
            self.rows,
            self.cols
        );
        cell.row * self.cols + cell.col
    }

    /// Read a cell.
    ///
    /// Panics if the cell is outside the grid.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<PieceId> {
        self.cells[self.index(cell)]
    }

    /// Overwrite a cell.
    ///
    /// Panics if the cell is outside the grid.
    pub fn set(&mut self, cell: Cell, value: Option<PieceId>) {
        let idx = self.index(cell);
        self.cells[idx] = value;
    }

    /// Iterate over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let cols = self.cols;
        (0..self.rows * cols).map(move |i| Cell::new(i / cols, i % cols))
    }

    /// Iterate over occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Cell, PieceId)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, slot)| slot.map(|piece| (Cell::new(i / self.cols, i % self.cols), piece)))
    }

    /// Check whether every cell is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Step one cell in a direction. `None` at the grid edge.
    #[must_use]
    pub fn step(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let next = match direction {
            Direction::Up => Cell::new(cell.row.checked_sub(1)?, cell.col),
            Direction::Down => Cell::new(cell.row + 1, cell.col),
            Direction::Left => Cell::new(cell.row, cell.col.checked_sub(1)?),
            Direction::Right => Cell::new(cell.row, cell.col + 1),
        };
        self.contains(next).then_some(next)
    }

    /// Orthogonal neighbours inside the grid.
    #[must_use]
    pub fn neighbors(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.step(cell, dir))
            .collect()
    }
}

/// Complete board: main grid plus both reserves.
///
/// ## Usage
///
/// ```
/// use dara_engine::core::{GameConfig, PieceId, Player};
/// use dara_engine::zones::{Board, Location, Zone};
///
/// let mut board = Board::new(&GameConfig::default());
///
/// // Player 1's pieces start in their reserve.
/// let from = board.locate(PieceId(1)).unwrap();
/// assert_eq!(from.zone, Zone::ReserveA);
///
/// // Drop it onto the main grid.
/// board.move_piece(from, Location::main(2, 2));
/// assert_eq!(board.get(Zone::Main, 2, 2), Some(PieceId(1)));
/// assert_eq!(board.owner_at_main(2, 2), Some(Player::One));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pieces_per_player: u8,
    main: Grid,
    reserves: PlayerMap<Grid>,
}

impl Board {
    /// Create the initial board for a configuration.
    ///
    /// The main grid is empty. Player 1's reserve holds `1..=N` row-major;
    /// Player 2's reserve holds `2N` down to `N+1` row-major.
    ///
    /// The configuration must already be valid (see `GameConfig::validate`).
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "board built from invalid config");

        let n = config.pieces_per_player;
        let mut board = Self::empty(config);

        let slots: Vec<Cell> = board.reserves[Player::One].cells().collect();
        for (i, &cell) in slots.iter().enumerate().take(usize::from(n)) {
            let i = i as u8;
            board.reserves[Player::One].set(cell, Some(PieceId(1 + i)));
            board.reserves[Player::Two].set(cell, Some(PieceId(2 * n - i)));
        }

        board
    }

    /// Create a board with every zone empty.
    ///
    /// Useful for setting up positions; pieces are added with `place`.
    #[must_use]
    pub fn empty(config: &GameConfig) -> Self {
        Self {
            pieces_per_player: config.pieces_per_player,
            main: Grid::new(config.main_rows, config.main_cols),
            reserves: PlayerMap::new(|_| Grid::new(config.reserve_rows, config.reserve_cols)),
        }
    }

    /// Pieces each player started with.
    #[must_use]
    pub fn pieces_per_player(&self) -> u8 {
        self.pieces_per_player
    }

    /// Check that zone sizes and piece count agree with a configuration.
    #[must_use]
    pub fn matches_config(&self, config: &GameConfig) -> bool {
        let reserves_match = Player::ALL.iter().all(|&p| {
            self.reserves[p].rows() == config.reserve_rows && self.reserves[p].cols() == config.reserve_cols
        });

        self.pieces_per_player == config.pieces_per_player
            && self.main.rows() == config.main_rows
            && self.main.cols() == config.main_cols
            && reserves_match
    }

    /// Get the grid for a zone.
    #[must_use]
    pub fn grid(&self, zone: Zone) -> &Grid {
        match zone {
            Zone::Main => &self.main,
            Zone::ReserveA => &self.reserves[Player::One],
            Zone::ReserveB => &self.reserves[Player::Two],
        }
    }

    fn grid_mut(&mut self, zone: Zone) -> &mut Grid {
        match zone {
            Zone::Main => &mut self.main,
            Zone::ReserveA => &mut self.reserves[Player::One],
            Zone::ReserveB => &mut self.reserves[Player::Two],
        }
    }

    /// Get the main grid.
    #[must_use]
    pub fn main(&self) -> &Grid {
        &self.main
    }

    // === Cell Access ===

    /// Read a cell.
    ///
    /// Panics on out-of-range coordinates.
    #[must_use]
    pub fn get(&self, zone: Zone, row: usize, col: usize) -> Option<PieceId> {
        self.grid(zone).get(Cell::new(row, col))
    }

    /// Overwrite a cell. Performs no validation.
    ///
    /// Panics on out-of-range coordinates.
    pub fn set(&mut self, zone: Zone, row: usize, col: usize, value: Option<PieceId>) {
        self.grid_mut(zone).set(Cell::new(row, col), value);
    }

    /// Read a location.
    #[must_use]
    pub fn at(&self, location: Location) -> Option<PieceId> {
        self.grid(location.zone).get(location.cell)
    }

    // === Primitives ===

    /// Place a piece at a location, overwriting whatever was there.
    pub fn place(&mut self, piece: PieceId, location: Location) {
        self.grid_mut(location.zone).set(location.cell, Some(piece));
    }

    /// Clear a location, returning the piece that was there.
    pub fn clear(&mut self, location: Location) -> Option<PieceId> {
        let piece = self.at(location);
        self.grid_mut(location.zone).set(location.cell, None);
        piece
    }

    /// Move whatever occupies `from` to `to`.
    ///
    /// Returns the moved piece, or `None` (and changes nothing) if `from`
    /// was empty.
    pub fn move_piece(&mut self, from: Location, to: Location) -> Option<PieceId> {
        let piece = self.clear(from)?;
        self.place(piece, to);
        Some(piece)
    }

    /// Remove a piece from the board entirely.
    ///
    /// Returns where it was, or `None` if it was not on the board.
    pub fn remove_piece(&mut self, piece: PieceId) -> Option<Location> {
        let location = self.locate(piece)?;
        self.clear(location);
        Some(location)
    }

    // === Queries ===

    /// Find the unique cell holding a piece.
    ///
    /// Linear scan over all zones. `None` if the piece was captured or
    /// never existed.
    #[must_use]
    pub fn locate(&self, piece: PieceId) -> Option<Location> {
        Zone::ALL.iter().find_map(|&zone| {
            self.grid(zone)
                .occupied()
                .find(|&(_, p)| p == piece)
                .map(|(cell, _)| Location::new(zone, cell))
        })
    }

    /// All pieces in a zone with their cells, row-major.
    pub fn all_pieces(&self, zone: Zone) -> impl Iterator<Item = (Cell, PieceId)> + '_ {
        self.grid(zone).occupied()
    }

    /// Get the owner of a piece.
    #[must_use]
    pub fn owner_of(&self, piece: PieceId) -> Option<Player> {
        piece.owner(self.pieces_per_player)
    }

    /// Owner of the piece on a main grid cell. `None` if empty or off-grid.
    #[must_use]
    pub fn owner_at(&self, cell: Cell) -> Option<Player> {
        if !self.main.contains(cell) {
            return None;
        }
        self.main.get(cell).and_then(|piece| self.owner_of(piece))
    }

    /// Convenience form of `owner_at` taking raw coordinates.
    #[must_use]
    pub fn owner_at_main(&self, row: usize, col: usize) -> Option<Player> {
        self.owner_at(Cell::new(row, col))
    }

    /// Check whether a player has placed every reserve piece.
    #[must_use]
    pub fn reserve_is_empty(&self, player: Player) -> bool {
        self.reserves[player].is_empty()
    }

    /// Check whether both reserves are empty.
    #[must_use]
    pub fn all_reserves_empty(&self) -> bool {
        Player::ALL.iter().all(|&p| self.reserve_is_empty(p))
    }

    /// First unplaced piece of a player, scanning the reserve row-major.
    #[must_use]
    pub fn first_unplaced(&self, player: Player) -> Option<PieceId> {
        self.reserves[player].occupied().next().map(|(_, piece)| piece)
    }

    /// A player's pieces on the main grid with their cells, row-major.
    pub fn on_board(&self, player: Player) -> impl Iterator<Item = (Cell, PieceId)> + '_ {
        self.main
            .occupied()
            .filter(move |&(_, piece)| self.owner_of(piece) == Some(player))
    }

    /// Every remaining piece of a player, across all zones.
    #[must_use]
    pub fn pieces_of(&self, player: Player) -> Vec<PieceId> {
        Zone::ALL
            .iter()
            .flat_map(|&zone| self.grid(zone).occupied())
            .map(|(_, piece)| piece)
            .filter(|&piece| self.owner_of(piece) == Some(player))
            .collect()
    }

    /// Number of remaining pieces of a player, across all zones.
    #[must_use]
    pub fn piece_count(&self, player: Player) -> usize {
        self.pieces_of(player).len()
    }

    /// Check that no piece appears twice and every piece id is in range.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), BoardError> {
        let mut seen: FxHashMap<PieceId, Location> = FxHashMap::default();

        for zone in Zone::ALL {
            for (cell, piece) in self.grid(zone).occupied() {
                let here = Location::new(zone, cell);

                if !piece.is_valid(self.pieces_per_player) {
                    return Err(BoardError::InvalidPiece { piece, at: here });
                }

                if let Some(&first) = seen.get(&piece) {
                    return Err(BoardError::DuplicatePiece {
                        piece,
                        first,
                        second: here,
                    });
                }
                seen.insert(piece, here);
            }
        }

        Ok(())
    }
}

impl std::fmt::Display for Board {
    /// Renders reserve A, the main grid and reserve B side by side.
    /// Empty cells are shown as `.`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let left = &self.reserves[Player::One];
        let right = &self.reserves[Player::Two];
        let height = left.rows().max(self.main.rows()).max(right.rows());

        for row in 0..height {
            write_grid_row(f, left, row)?;
            write!(f, " |")?;
            write_grid_row(f, &self.main, row)?;
            write!(f, " |")?;
            write_grid_row(f, right, row)?;
            writeln!(f)?;
        }

        Ok(())
    }
}

fn write_grid_row(f: &mut std::fmt::Formatter<'_>, grid: &Grid, row: usize) -> std::fmt::Result {
    for col in 0..grid.cols() {
        if row >= grid.rows() {
            write!(f, "   ")?;
            continue;
        }
        match grid.get(Cell::new(row, col)) {
            Some(piece) => write!(f, "{:>3}", piece.raw())?,
            None => write!(f, "  .")?,
        }
    }
    Ok(())
}
