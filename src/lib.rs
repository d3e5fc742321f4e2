pub mod board;
pub mod error;
pub mod game;
pub mod group;
pub mod point;
pub mod stone;
pub mod turn;

pub use board::{Board, Prisoners};
pub use error::MoveError;
pub use game::GameState;
pub use group::StoneGroup;
pub use point::Point;
pub use stone::Stone;
pub use turn::Turn;
