//! Edit scripts: emitted operations captured as data
use crate::diff_engine::{EditSink, edits_into};
use crate::errors::EditError;
use crate::mirror::Mirror;
use crate::types::{EditOp, Keyed};
use serde::{Deserialize, Serialize};

/// Ordered operations converting one sequence into another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditScript<T> {
    ops: Vec<EditOp<T>>,
}

impl<T> Default for EditScript<T> {
    fn default() -> Self {
        EditScript { ops: Vec::new() }
    }
}

impl<T: Keyed + Clone> EditScript<T> {
    /// Record the edits that turn `input` into `output`.
    pub fn record(input: &[T], output: &[T]) -> Self {
        let mut script = EditScript::default();
        edits_into(input, output, &mut script);
        script
    }

    /// Replay the script onto `items`.
    pub fn apply_to(&self, items: Vec<T>) -> Result<Vec<T>, EditError> {
        let mut mirror = Mirror::new(items);
        for op in &self.ops {
            mirror.apply(op)?;
        }
        Ok(mirror.into_inner())
    }
}

impl<T> EditScript<T> {
    pub fn ops(&self) -> &[EditOp<T>] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn into_ops(self) -> Vec<EditOp<T>> {
        self.ops
    }
}

impl<T: Serialize> EditScript<T> {
    pub fn to_json(&self) -> Result<String, EditError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<T: Clone> EditSink<T> for EditScript<T> {
    fn splice(&mut self, offset: usize, before: &[T], after: &[T]) {
        self.ops.push(EditOp::Splice {
            offset,
            before: before.to_vec(),
            after: after.to_vec(),
        });
    }

    fn move_items(&mut self, offset: usize, count: usize, distance: usize) {
        self.ops.push(EditOp::Move {
            offset,
            count,
            distance,
        });
    }
}

impl<T> IntoIterator for EditScript<T> {
    type Item = EditOp<T>;
    type IntoIter = std::vec::IntoIter<EditOp<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a EditScript<T> {
    type Item = &'a EditOp<T>;
    type IntoIter = std::slice::Iter<'a, EditOp<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn records_and_replays() {
        let input = vec!["a", "b", "c"];
        let output = vec!["d", "c", "b"];
        let script = EditScript::record(&input, &output);

        assert_eq!(script.len(), 3);
        assert_eq!(script.apply_to(input).unwrap(), output);
    }

    #[test]
    fn identical_sequences_record_an_empty_script() {
        let items = vec![1, 2, 2, 3];
        let script = EditScript::record(&items, &items);
        assert!(script.is_empty());
        assert_eq!(script.apply_to(items.clone()).unwrap(), items);
    }

    #[test]
    fn serializes_as_a_plain_list() {
        let script = EditScript::record(&["a", "b"], &["b", "a"]);
        assert_eq!(
            script.to_json().unwrap(),
            r#"[{"action":"MOVE","offset":0,"count":1,"distance":1}]"#
        );

        let parsed: EditScript<String> =
            serde_json::from_str(r#"[{"action":"SPLICE","offset":0,"before":["x"],"after":[]}]"#)
                .unwrap();
        assert!(parsed.ops()[0].is_delete());
    }

    #[test]
    fn replay_surfaces_mirror_errors() {
        let script = EditScript::record(&["a", "b", "c"], &[]);
        assert!(matches!(
            script.apply_to(vec!["a"]),
            Err(EditError::SpliceOutOfRange { .. })
        ));
    }
}
