use std::rc::Rc;

use crate::board::Board;
use crate::error::MoveError;
use crate::point::Point;
use crate::stone::Stone;
use crate::turn::Turn;

/// An immutable snapshot of a game: the board, the player to move, and
/// a shared link to the preceding snapshot.
///
/// Applying a move never touches the receiver. Plays deep-copy the
/// board before mutating it; passes and resignations share it. The
/// chain of `previous` links is the history the superko rule walks.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Rc<Board>,
    next_player: Stone,
    previous: Option<Rc<GameState>>,
    last_move: Option<Turn>,
}

impl GameState {
    /// Start a fresh square game with Black to move.
    pub fn new_game(size: u8) -> Self {
        Self::with_dimensions(size, size)
    }

    /// Start a fresh game on a rows x cols board with Black to move.
    pub fn with_dimensions(rows: u8, cols: u8) -> Self {
        GameState {
            board: Rc::new(Board::with_dimensions(rows, cols)),
            next_player: Stone::Black,
            previous: None,
            last_move: None,
        }
    }

    // -- Accessors --

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn next_player(&self) -> Stone {
        self.next_player
    }

    pub fn previous(&self) -> Option<&GameState> {
        self.previous.as_deref()
    }

    pub fn last_move(&self) -> Option<Turn> {
        self.last_move
    }

    /// The (player to move, board) pair the ko rule compares.
    pub fn situation(&self) -> (Stone, &Board) {
        (self.next_player, &self.board)
    }

    // -- Transitions --

    /// Apply a move mechanically, producing the next state.
    ///
    /// Only the turn order is checked here; callers are expected to have
    /// run [`is_valid_move`](GameState::is_valid_move) first, or to use
    /// [`try_move`](GameState::try_move). Applying an unvalidated play
    /// to an occupied or off-grid point is a programming error.
    pub fn apply_move(&self, stone: Stone, turn: Turn) -> Result<GameState, MoveError> {
        if stone != self.next_player {
            return Err(MoveError::OutOfTurn);
        }

        let board = match turn.pos() {
            Some(point) => Rc::new(self.hypothetical(stone, point)),
            None => Rc::clone(&self.board),
        };

        Ok(GameState {
            board,
            next_player: stone.opp(),
            previous: Some(Rc::new(self.clone())),
            last_move: Some(turn),
        })
    }

    /// Validate, then apply: the checked way to advance a game.
    pub fn try_move(&self, stone: Stone, turn: Turn) -> Result<GameState, MoveError> {
        if stone != self.next_player {
            return Err(MoveError::OutOfTurn);
        }
        self.validate(turn)?;
        self.apply_move(stone, turn)
    }

    // -- Queries --

    /// Whether the game has ended: a resignation, or two consecutive
    /// passes.
    pub fn is_over(&self) -> bool {
        let Some(last) = self.last_move else {
            return false;
        };
        if last.is_resign() {
            return true;
        }
        let second_last = self.previous.as_ref().and_then(|state| state.last_move);
        match second_last {
            Some(before) => last.is_pass() && before.is_pass(),
            None => false,
        }
    }

    /// Full legality check for the player to move. Pass and resign are
    /// always acceptable while the game is running.
    pub fn validate(&self, turn: Turn) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let Some(point) = turn.pos() else {
            return Ok(());
        };
        if !self.board.is_on_grid(point) {
            return Err(MoveError::OffBoard);
        }
        if self.board.stone_at(point).is_some() {
            return Err(MoveError::Occupied);
        }
        if self.is_move_self_capture(self.next_player, turn) {
            return Err(MoveError::Suicide);
        }
        if self.does_move_violate_ko(self.next_player, turn) {
            return Err(MoveError::Ko);
        }
        Ok(())
    }

    pub fn is_valid_move(&self, turn: Turn) -> bool {
        self.validate(turn).is_ok()
    }

    /// Would this play leave its own newly formed group without a
    /// liberty? Enemy captures triggered by the same move resolve first,
    /// so a throw-in that captures is not a self-capture.
    pub fn is_move_self_capture(&self, stone: Stone, turn: Turn) -> bool {
        let Some(point) = turn.pos() else {
            return false;
        };
        let next_board = self.hypothetical(stone, point);
        let group = next_board.group_at(point).expect("stone was just placed");
        group.num_liberties() == 0
    }

    /// Positional superko: would this play recreate any earlier
    /// (player to move, board) situation?
    ///
    /// A linear walk over the whole ancestor chain with a structural
    /// board comparison at every step. O(history) per query; the
    /// dominant cost of legality checking in long games.
    pub fn does_move_violate_ko(&self, stone: Stone, turn: Turn) -> bool {
        let Some(point) = turn.pos() else {
            return false;
        };
        let next_board = self.hypothetical(stone, point);
        let next_player = stone.opp();

        let mut past = self.previous.as_deref();
        while let Some(state) = past {
            if state.next_player == next_player && *state.board == next_board {
                return true;
            }
            past = state.previous.as_deref();
        }
        false
    }

    /// The board as it would stand after `stone` plays at `point`.
    fn hypothetical(&self, stone: Stone, point: Point) -> Board {
        let mut board = (*self.board).clone();
        board.place_stone(stone, point);
        board
    }
}
