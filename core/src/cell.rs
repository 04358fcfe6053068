use serde::{Deserialize, Serialize};

use crate::*;

/// Contents of a single board cell. Directional pieces carry wire codes
/// 1/2/3 on the input API; obstacles are only ever pre-placed at setup.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Piece {
    #[default]
    Empty,
    Straight,
    TurnLeft,
    TurnRight,
    Obstacle,
}

impl Piece {
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            1 => Ok(Self::Straight),
            2 => Ok(Self::TurnLeft),
            3 => Ok(Self::TurnRight),
            _ => Err(GameError::InvalidPiece),
        }
    }

    pub const fn is_directional(self) -> bool {
        matches!(self, Self::Straight | Self::TurnLeft | Self::TurnRight)
    }

    /// Direction the road continues in after passing through this piece.
    pub const fn apply_turn(self, entry: Direction) -> Direction {
        match self {
            Self::TurnLeft => entry.turned_left(),
            Self::TurnRight => entry.turned_right(),
            Self::Straight | Self::Empty | Self::Obstacle => entry,
        }
    }

    /// Road mark recorded on the cell this piece is placed into.
    pub const fn road_mark(self, entry: Direction) -> RoadMark {
        match self {
            Self::Straight => RoadMark::Straight(entry),
            Self::TurnLeft | Self::TurnRight => RoadMark::Bend(entry, self.apply_turn(entry)),
            Self::Empty | Self::Obstacle => RoadMark::None,
        }
    }
}

/// Which direction(s) the road used while occupying a cell. Written during
/// propagation, read only by renderers, never by the engine itself.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoadMark {
    #[default]
    None,
    Straight(Direction),
    Bend(Direction, Direction),
    Full,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub piece: Piece,
    pub road: RoadMark,
}
