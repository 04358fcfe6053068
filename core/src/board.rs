use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square grid of cells. Mutation is reserved to the propagation engine and
/// the round setup; everything else reads through the accessors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn new(size: Coord) -> Result<Self> {
        let size = Self::validate_size(size)?;
        Ok(Self {
            cells: Array2::default((size as usize, size as usize)),
        })
    }

    pub fn validate_size(size: Coord) -> Result<Coord> {
        if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            Ok(size)
        } else {
            Err(GameError::InvalidSize)
        }
    }

    pub fn size(&self) -> Coord {
        self.cells.dim().0.try_into().unwrap()
    }

    pub fn contains(&self, pos: Coord2) -> bool {
        let size = self.size();
        pos.0 < size && pos.1 < size
    }

    pub fn cell_at(&self, pos: Coord2) -> Cell {
        self.cells[pos.to_nd_index()]
    }

    pub fn piece_at(&self, pos: Coord2) -> Piece {
        self.cell_at(pos).piece
    }

    /// True if the cell holds a previously placed directional piece, i.e.
    /// one a road can chain through. Obstacles do not count.
    pub fn is_occupied(&self, pos: Coord2) -> bool {
        self.piece_at(pos).is_directional()
    }

    pub fn is_obstacle(&self, pos: Coord2) -> bool {
        self.piece_at(pos) == Piece::Obstacle
    }

    pub fn free_cell_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.piece == Piece::Empty)
            .count()
            .try_into()
            .unwrap()
    }

    pub(crate) fn set_piece(&mut self, pos: Coord2, piece: Piece) {
        self.cells[pos.to_nd_index()].piece = piece;
    }

    pub(crate) fn mark_road(&mut self, pos: Coord2, mark: RoadMark) {
        self.cells[pos.to_nd_index()].road = mark;
    }

    /// Obstacle cells always carry a full road mark and are never rewritten.
    pub(crate) fn place_obstacle(&mut self, pos: Coord2) {
        self.cells[pos.to_nd_index()] = Cell {
            piece: Piece::Obstacle,
            road: RoadMark::Full,
        };
    }
}
