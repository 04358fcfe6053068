use serde::{Deserialize, Serialize};

use crate::*;

/// The two seats. `Computer` is a second human seat by default; nothing in
/// the engine plays for it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub const fn other(self) -> Self {
        match self {
            Self::Player => Self::Computer,
            Self::Computer => Self::Player,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RoundState {
    InProgress,
    Ended,
}

impl RoundState {
    pub const fn is_ended(self) -> bool {
        matches!(self, Self::Ended)
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// One round of play: the board plus the road head. The cursor always rests
/// on the cell the next piece will be placed into, so the preview equals the
/// cursor while the round is in progress and is cleared when it ends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    board: Board,
    cursor: Coord2,
    direction: Direction,
    next_preview: Option<Coord2>,
    turn: Side,
    state: RoundState,
}

impl PlayEngine {
    pub(crate) fn new(board: Board, turn: Side) -> Self {
        Self {
            board,
            cursor: (0, 0),
            direction: Direction::South,
            next_preview: Some((0, 0)),
            turn,
            state: Default::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cursor(&self) -> Coord2 {
        self.cursor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn next_preview(&self) -> Option<Coord2> {
        self.next_preview
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_ended(&self) -> bool {
        self.state.is_ended()
    }

    /// Applies a move for the active seat: writes the piece at the cursor,
    /// resolves the road, and flips the turn. The turn flips even on the
    /// move that ends the round.
    pub(crate) fn advance(&mut self, piece: Piece) -> Result<PlayOutcome> {
        if self.board.piece_at(self.cursor) != Piece::Empty {
            return Err(GameError::IllegalMove);
        }

        self.board.set_piece(self.cursor, piece);
        self.board.mark_road(self.cursor, piece.road_mark(self.direction));

        let outcome = match self.propagate(piece) {
            Some(pos) => {
                self.next_preview = Some(pos);
                PlayOutcome::Placed
            }
            None => {
                self.state = RoundState::Ended;
                self.next_preview = None;
                PlayOutcome::Collision
            }
        };

        self.turn = self.turn.other();
        Ok(outcome)
    }

    /// Recursive chain resolution. Turns, steps one cell, then either stops
    /// on an empty cell (the new pending placement), stops on a collision
    /// (`None`; the cursor never enters the colliding cell), or chains
    /// through an occupied cell, leaving it full-marked. Depth is bounded by
    /// the number of placed pieces on the board.
    fn propagate(&mut self, piece: Piece) -> Option<Coord2> {
        self.direction = piece.apply_turn(self.direction);

        let size = self.board.size();
        let next = self.direction.step(self.cursor, (size, size))?;
        if self.board.is_obstacle(next) {
            return None;
        }

        if self.board.is_occupied(next) {
            let chained = self.board.piece_at(next);
            self.cursor = next;
            let end = self.propagate(chained);
            self.board.mark_road(next, RoadMark::Full);
            return end;
        }

        self.cursor = next;
        Some(next)
    }
}
