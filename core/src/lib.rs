use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use history::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod history;
mod session;
mod types;

pub const MIN_BOARD_SIZE: Coord = 3;
pub const MAX_BOARD_SIZE: Coord = 10;
pub const DEFAULT_BOARD_SIZE: Coord = 9;

/// Obstacles seeded per round: `round(size² / 8)`.
pub const fn obstacle_quota(size: Coord) -> CellCount {
    (mult(size, size) + 4) / 8
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub seed: u64,
}

impl GameConfig {
    pub const fn new(size: Coord, seed: u64) -> Self {
        Self { size, seed }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE, 0)
    }
}

/// Outcome of applying a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    NoChange,
    Placed,
    Collision,
}

impl PlayOutcome {
    pub const fn has_update(self) -> bool {
        use PlayOutcome::*;
        match self {
            NoChange => false,
            Placed => true,
            Collision => true,
        }
    }

    pub const fn is_collision(self) -> bool {
        matches!(self, Self::Collision)
    }
}

/// Outcome of an undo request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UndoOutcome {
    NoChange,
    Restored,
}

impl UndoOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Restored => true,
        }
    }
}
