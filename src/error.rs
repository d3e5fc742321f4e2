use std::fmt;

/// Why a move was refused.
///
/// `OutOfTurn` signals a driver bug: the wrong player tried to move.
/// The remaining variants are ordinary rule rejections, also reported
/// as `false` by `GameState::is_valid_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfTurn,
    GameOver,
    OffBoard,
    Occupied,
    Suicide,
    Ko,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfTurn => write!(f, "out of turn"),
            MoveError::GameOver => write!(f, "the game is over"),
            MoveError::OffBoard => write!(f, "point is off the board"),
            MoveError::Occupied => write!(f, "point is occupied"),
            MoveError::Suicide => write!(f, "self-capture"),
            MoveError::Ko => write!(f, "ko"),
        }
    }
}

impl std::error::Error for MoveError {}
