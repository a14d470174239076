//! Checked reference implementation of the splice/move contract over a `Vec`
use crate::errors::EditError;
use crate::types::{EditOp, Keyed};

/// A mutable copy of a sequence that edit operations are replayed onto.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Mirror<T> {
    items: Vec<T>,
}

impl<T: Keyed + Clone> Mirror<T> {
    pub fn new(items: Vec<T>) -> Self {
        Mirror { items }
    }

    /// Replace `before` at `offset` with `after`, checking that the items being
    /// removed carry the keys currently found there.
    pub fn splice(
        &mut self,
        offset: usize,
        before: &[T],
        after: &[T],
    ) -> Result<(), EditError> {
        let end = offset
            .checked_add(before.len())
            .filter(|&end| end <= self.items.len())
            .ok_or(EditError::SpliceOutOfRange {
                offset,
                removed: before.len(),
                len: self.items.len(),
            })?;

        if let Some(position) = self.items[offset..end]
            .iter()
            .zip(before)
            .position(|(current, expected)| current.key() != expected.key())
        {
            return Err(EditError::KeyMismatch {
                position: offset + position,
            });
        }

        self.items.splice(offset..end, after.iter().cloned());
        Ok(())
    }

    pub fn move_items(
        &mut self,
        offset: usize,
        count: usize,
        distance: usize,
    ) -> Result<(), EditError> {
        let end = offset
            .checked_add(count)
            .and_then(|end| end.checked_add(distance))
            .filter(|&end| end <= self.items.len())
            .ok_or(EditError::MoveOutOfRange {
                offset,
                count,
                distance,
                len: self.items.len(),
            })?;

        // [moved | passed] -> [passed | moved]
        self.items[offset..end].rotate_left(count);
        Ok(())
    }

    pub fn apply(&mut self, op: &EditOp<T>) -> Result<(), EditError> {
        match op {
            EditOp::Splice {
                offset,
                before,
                after,
            } => self.splice(*offset, before, after),
            EditOp::Move {
                offset,
                count,
                distance,
            } => self.move_items(*offset, *count, *distance),
        }
    }
}

impl<T> Mirror<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}
