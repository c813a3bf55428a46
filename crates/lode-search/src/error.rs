//! Errors raised when constructing actions by hand.

use std::error::Error;
use std::fmt;

/// A malformed [`MoveAction`](crate::MoveAction) or
/// [`DigAction`](crate::DigAction).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// A move with no horizontal component. Falls are not actions.
    ZeroMove,
    /// A move along both horizontal axes at once.
    DiagonalMove,
    /// A move of more than one block horizontally.
    MoveTooLong,
    /// A move climbing or dropping more than one block.
    ClimbTooHigh {
        /// The requested vertical displacement.
        dy: i32,
    },
    /// A dig straight above the head or below the feet.
    VerticalDig,
    /// A dig target no dig range can reach.
    OutOfReach {
        /// The requested displacement, formatted.
        offset: String,
    },
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMove => write!(f, "a move must change the horizontal position"),
            Self::DiagonalMove => write!(f, "moves are accepted along one axis at a time"),
            Self::MoveTooLong => write!(f, "only moves of one block are accepted"),
            Self::ClimbTooHigh { dy } => {
                write!(f, "cannot climb or drop {dy} blocks in one move")
            }
            Self::VerticalDig => write!(f, "never dig above the head or below the feet"),
            Self::OutOfReach { offset } => write!(f, "dig target ({offset}) is out of reach"),
        }
    }
}

impl Error for ActionError {}
