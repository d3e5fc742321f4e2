use serde::{Deserialize, Serialize};
use std::fmt;

use crate::point::Point;

/// A single move: play a stone, pass, or resign.
///
/// Exactly one of the three alternatives holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Turn {
    Play { pos: Point },
    Pass,
    Resign,
}

impl Turn {
    pub fn play(pos: Point) -> Self {
        Turn::Play { pos }
    }

    pub fn pass() -> Self {
        Turn::Pass
    }

    pub fn resign() -> Self {
        Turn::Resign
    }

    pub fn is_play(self) -> bool {
        matches!(self, Turn::Play { .. })
    }

    pub fn is_pass(self) -> bool {
        self == Turn::Pass
    }

    pub fn is_resign(self) -> bool {
        self == Turn::Resign
    }

    /// The played point, for play moves.
    pub fn pos(self) -> Option<Point> {
        match self {
            Turn::Play { pos } => Some(pos),
            _ => None,
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Turn::Play { pos } => write!(f, "play {pos}"),
            Turn::Pass => write!(f, "pass"),
            Turn::Resign => write!(f, "resign"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_move() {
        let t = Turn::play(Point::new(3, 4));
        assert!(t.is_play());
        assert!(!t.is_pass());
        assert!(!t.is_resign());
        assert_eq!(t.pos(), Some(Point::new(3, 4)));
    }

    #[test]
    fn pass_move() {
        let t = Turn::pass();
        assert!(t.is_pass());
        assert!(!t.is_play());
        assert_eq!(t.pos(), None);
    }

    #[test]
    fn resign_move() {
        let t = Turn::resign();
        assert!(t.is_resign());
        assert_eq!(t.pos(), None);
    }

    #[test]
    fn equality() {
        assert_eq!(Turn::play(Point::new(1, 1)), Turn::play(Point::new(1, 1)));
        assert_ne!(Turn::play(Point::new(1, 1)), Turn::play(Point::new(1, 2)));
        assert_ne!(Turn::pass(), Turn::resign());
    }

    #[test]
    fn display() {
        assert_eq!(Turn::play(Point::new(3, 4)).to_string(), "play (3, 4)");
        assert_eq!(Turn::pass().to_string(), "pass");
        assert_eq!(Turn::resign().to_string(), "resign");
    }

    #[test]
    fn json_shape() {
        let json = serde_json::to_value(Turn::play(Point::new(3, 4))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "play", "pos": {"row": 3, "col": 4}})
        );
        assert_eq!(
            serde_json::to_value(Turn::pass()).unwrap(),
            serde_json::json!({"kind": "pass"})
        );
        let restored: Turn = serde_json::from_str(r#"{"kind":"resign"}"#).unwrap();
        assert_eq!(restored, Turn::resign());
    }
}
