use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::ops::Neg;

/// A stone color, doubling as player identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Stone {
    Black = 1,
    White = -1,
}

impl Stone {
    pub fn opp(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }
}

impl Neg for Stone {
    type Output = Self;

    fn neg(self) -> Self {
        self.opp()
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Black => write!(f, "Black"),
            Stone::White => write!(f, "White"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent() {
        assert_eq!(Stone::Black.opp(), Stone::White);
        assert_eq!(Stone::White.opp(), Stone::Black);
    }

    #[test]
    fn negation() {
        assert_eq!(-Stone::Black, Stone::White);
        assert_eq!(-Stone::White, Stone::Black);
    }

    #[test]
    fn display() {
        assert_eq!(Stone::Black.to_string(), "Black");
        assert_eq!(Stone::White.to_string(), "White");
    }

    #[test]
    fn serializes_as_signed_int() {
        assert_eq!(serde_json::to_value(Stone::Black).unwrap(), 1);
        assert_eq!(serde_json::to_value(Stone::White).unwrap(), -1);
        assert_eq!(serde_json::from_str::<Stone>("-1").unwrap(), Stone::White);
    }
}
