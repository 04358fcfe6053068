use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board size outside the supported range")]
    InvalidSize,
    #[error("Piece code outside 1..=3")]
    InvalidPiece,
    #[error("Cursor cell is already occupied")]
    IllegalMove,
    #[error("Nothing to undo before the initial snapshot")]
    EmptyHistory,
}

pub type Result<T> = core::result::Result<T, GameError>;
