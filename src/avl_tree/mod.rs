//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod node;
mod set;
mod tree;

pub use self::set::{AvlSet, AvlSetIntoIter, AvlSetIter};
use std::error;
use std::fmt;
use std::result;

/// An invariant violation found while checking an avl tree.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// A key is not strictly between the keys of its ancestors.
    OrderViolation,
    /// The cached height of a node does not match the heights of its children.
    HeightMismatch { expected: usize, actual: usize },
    /// The balance factor of a node is outside of `-1..=1`.
    Unbalanced(isize),
    /// The number of nodes does not match the recorded length.
    LengthMismatch { expected: usize, actual: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OrderViolation => write!(f, "keys are not in binary search tree order"),
            Error::HeightMismatch { expected, actual } => {
                write!(f, "cached height {} does not match computed height {}", actual, expected)
            },
            Error::Unbalanced(balance) => write!(f, "node has balance factor {}", balance),
            Error::LengthMismatch { expected, actual } => {
                write!(f, "tree has {} nodes but recorded length is {}", actual, expected)
            },
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
