//! Keyed items and the edit operations emitted over them
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// An item that can be matched across two sequences by key.
///
/// Keys need not be unique: the nth item with a given key in the input is
/// paired with the nth item carrying the same key in the output.
pub trait Keyed {
    type Key: Hash + Eq + Clone;

    fn key(&self) -> Self::Key;
}

// Plain values are their own key
macro_rules! keyed_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Keyed for $ty {
                type Key = $ty;

                fn key(&self) -> Self::Key {
                    self.clone()
                }
            }
        )*
    };
}

keyed_by_value!(
    String, char, bool, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize,
);

impl<'a> Keyed for &'a str {
    type Key = &'a str;

    fn key(&self) -> Self::Key {
        *self
    }
}

/// Pairs are keyed by their first element, so the second can carry identity
/// or content that the diff ignores.
impl<K, V> Keyed for (K, V)
where
    K: Hash + Eq + Clone,
{
    type Key = K;

    fn key(&self) -> Self::Key {
        self.0.clone()
    }
}

/// Operation kind, as exposed on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpAction {
    Splice,
    Move,
}

impl fmt::Display for OpAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpAction::Splice => f.write_str("SPLICE"),
            OpAction::Move => f.write_str("MOVE"),
        }
    }
}

/// A single edit. Offsets describe the sequence as it is after every earlier
/// operation of the same script has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EditOp<T> {
    /// Replace `before` (currently at `offset`) with `after`.
    Splice {
        offset: usize,
        before: Vec<T>,
        after: Vec<T>,
    },
    /// Shift the `count` items at `offset` forward past the next `distance` items.
    Move {
        offset: usize,
        count: usize,
        distance: usize,
    },
}

impl<T> EditOp<T> {
    pub fn action(&self) -> OpAction {
        match self {
            EditOp::Splice { .. } => OpAction::Splice,
            EditOp::Move { .. } => OpAction::Move,
        }
    }

    pub fn is_delete(&self) -> bool {
        matches!(
            self,
            EditOp::Splice { before, after, .. } if !before.is_empty() && after.is_empty()
        )
    }

    pub fn is_insert(&self) -> bool {
        matches!(
            self,
            EditOp::Splice { before, after, .. } if before.is_empty() && !after.is_empty()
        )
    }

    pub fn is_move(&self) -> bool {
        matches!(self, EditOp::Move { .. })
    }
}
