//! Identity resolution: pairs input and output positions by occurrence-qualified key
use crate::types::Keyed;
use indexmap::{IndexMap, IndexSet};
use std::hash::Hash;

/// What an output position corresponds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Claimed the input item at this position.
    Matched(usize),
    /// Absent from the input; carries its own output position.
    Inserted(usize),
}

/// A key made unique within one sequence by its ordinal occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct OccurrenceKey<K> {
    key: K,
    ordinal: usize,
}

/// Per-key occurrence counter for a single left-to-right scan.
struct Occurrences<K> {
    counts: IndexMap<K, usize>,
}

impl<K: Hash + Eq + Clone> Occurrences<K> {
    fn new() -> Self {
        Occurrences {
            counts: IndexMap::new(),
        }
    }

    fn qualify(&mut self, key: K) -> OccurrenceKey<K> {
        let count = self.counts.entry(key.clone()).or_insert(0);
        let ordinal = *count;
        *count += 1;
        OccurrenceKey { key, ordinal }
    }
}

/// Input/output correspondence consumed by the edit emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correspondence {
    /// Coded input: `input[i] == i` on construction.
    pub input: Vec<usize>,
    pub output: Vec<Slot>,
    /// Input positions no output item claimed, ascending.
    pub removed: IndexSet<usize>,
}

impl Correspondence {
    pub fn resolve<T: Keyed>(input: &[T], output: &[T]) -> Self {
        let mut occurrences = Occurrences::new();
        let mut indices: IndexMap<OccurrenceKey<T::Key>, usize> =
            IndexMap::with_capacity(input.len());
        for (pos, item) in input.iter().enumerate() {
            indices.insert(occurrences.qualify(item.key()), pos);
        }
        let coded_input: Vec<usize> = (0..input.len()).collect();

        // Fresh counter: the nth output occurrence claims the nth input occurrence
        let mut occurrences = Occurrences::new();
        let coded_output: Vec<Slot> = output
            .iter()
            .enumerate()
            .map(|(pos, item)| {
                match indices.swap_remove(&occurrences.qualify(item.key())) {
                    Some(matched) => Slot::Matched(matched),
                    None => Slot::Inserted(pos),
                }
            })
            .collect();

        let mut removed: IndexSet<usize> = indices.into_values().collect();
        removed.sort_unstable();

        Correspondence {
            input: coded_input,
            output: coded_output,
            removed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn matches_by_key_and_marks_insertions() {
        let c = Correspondence::resolve(&["a", "b", "c"], &["d", "c", "b"]);
        assert_eq!(c.input, vec![0, 1, 2]);
        assert_eq!(
            c.output,
            vec![Slot::Inserted(0), Slot::Matched(2), Slot::Matched(1)]
        );
        assert_eq!(c.removed.into_iter().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn empty_input_inserts_everything() {
        let c = Correspondence::resolve::<&str>(&[], &["a", "b"]);
        assert!(c.input.is_empty());
        assert_eq!(c.output, vec![Slot::Inserted(0), Slot::Inserted(1)]);
        assert!(c.removed.is_empty());
    }

    #[test]
    fn empty_output_removes_everything() {
        let c = Correspondence::resolve::<&str>(&["a", "b", "c"], &[]);
        assert!(c.output.is_empty());
        assert_eq!(c.removed.into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn duplicate_keys_pair_by_ordinal() {
        let input = [('x', 1), ('y', 2), ('x', 3)];
        let output = [('y', 0), ('x', 0)];
        let c = Correspondence::resolve(&input, &output);
        // first output `x` claims the first input `x`, never the second
        assert_eq!(c.output, vec![Slot::Matched(1), Slot::Matched(0)]);
        assert_eq!(c.removed.into_iter().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn surplus_output_duplicates_are_inserted() {
        let c = Correspondence::resolve(&['x'], &['x', 'x']);
        assert_eq!(c.output, vec![Slot::Matched(0), Slot::Inserted(1)]);
    }

    #[test]
    fn every_input_position_is_claimed_or_removed() {
        let input = ["a", "b", "a", "c", "b", "a"];
        let output = ["b", "a", "d", "a", "e"];
        let c = Correspondence::resolve(&input, &output);

        let mut seen: Vec<usize> = c
            .output
            .iter()
            .filter_map(|slot| match slot {
                Slot::Matched(pos) => Some(*pos),
                Slot::Inserted(_) => None,
            })
            .chain(c.removed.iter().copied())
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..input.len()).collect::<Vec<_>>());
    }
}
