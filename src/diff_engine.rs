//! Edit emission: turns a correspondence into splice/move operations
//!
//! Both sequences are scanned from the tail toward the head, so an operation
//! never disturbs the offsets of the still-unprocessed prefix. The move search
//! is linear and the coded input shrinks with `Vec::remove`, so emission is
//! O(n·m) worst case.
use super::resolver::{Correspondence, Slot};
use super::types::Keyed;
use std::slice;

/// Receiver of emitted operations. Implementors own a mutable mirror of the
/// input and apply each call to it in order.
pub trait EditSink<T> {
    /// Replace `before.len()` items at `offset` with `after`.
    fn splice(&mut self, offset: usize, before: &[T], after: &[T]);

    /// Shift the `count` items at `offset` forward past the next `distance` items.
    fn move_items(&mut self, offset: usize, count: usize, distance: usize);
}

/// Adapts a pair of closures to [`EditSink`].
struct FnSink<S, M> {
    splice: S,
    move_items: M,
}

impl<T, S, M> EditSink<T> for FnSink<S, M>
where
    S: FnMut(usize, &[T], &[T]),
    M: FnMut(usize, usize, usize),
{
    fn splice(&mut self, offset: usize, before: &[T], after: &[T]) {
        (self.splice)(offset, before, after)
    }

    fn move_items(&mut self, offset: usize, count: usize, distance: usize) {
        (self.move_items)(offset, count, distance)
    }
}

pub struct DiffEngine<'a, T, S: ?Sized> {
    input: &'a [T],
    output: &'a [T],
    sink: &'a mut S,
}

impl<'a, T, S> DiffEngine<'a, T, S>
where
    T: Keyed + Clone,
    S: EditSink<T> + ?Sized,
{
    pub fn new(input: &'a [T], output: &'a [T], sink: &'a mut S) -> Self {
        DiffEngine {
            input,
            output,
            sink,
        }
    }

    pub fn reconcile(&mut self) {
        let correspondence = Correspondence::resolve(self.input, self.output);
        log::debug!(
            "DiffEngine: reconciling input={} output={} removed={}",
            self.input.len(),
            self.output.len(),
            correspondence.removed.len()
        );
        self.emit(correspondence);
    }

    fn emit(&mut self, correspondence: Correspondence) {
        let Correspondence {
            mut input,
            output,
            removed,
        } = correspondence;
        let (source, target) = (self.input, self.output);
        let (mut i, mut o) = (input.len(), output.len());

        while i > 0 && o > 0 {
            let current = input[i - 1];
            match output[o - 1] {
                Slot::Matched(pos) if pos == current => {
                    i -= 1;
                    o -= 1;
                }
                _ if removed.contains(&current) => {
                    self.splice(i - 1, slice::from_ref(&source[current]), &[]);
                    i -= 1;
                }
                Slot::Inserted(pos) => {
                    self.splice(i, &[], slice::from_ref(&target[pos]));
                    o -= 1;
                }
                Slot::Matched(pos) => {
                    // Claimed positions are consumed once, so `pos` is still in the prefix
                    let Some(index) = input[..i].iter().position(|&code| code == pos) else {
                        unreachable!("matched input position {pos} missing from prefix");
                    };
                    self.move_items(index, 1, i - 1 - index);
                    input.remove(index);
                    i -= 1;
                    o -= 1;
                }
            }
        }

        // Leftover output slots are all insertions at their own positions
        if o > 0 {
            debug_assert!(
                output[..o]
                    .iter()
                    .enumerate()
                    .all(|(kk, slot)| *slot == Slot::Inserted(kk))
            );
            self.splice(0, &[], &target[..o]);
        }

        if i > 0 {
            let leftover: Vec<T> = input[..i]
                .iter()
                .map(|&code| source[code].clone())
                .collect();
            self.splice(0, &leftover, &[]);
        }
    }

    fn splice(&mut self, offset: usize, before: &[T], after: &[T]) {
        log::trace!(
            "DiffEngine: splice offset={} removed={} inserted={}",
            offset,
            before.len(),
            after.len()
        );
        self.sink.splice(offset, before, after);
    }

    fn move_items(&mut self, offset: usize, count: usize, distance: usize) {
        log::trace!(
            "DiffEngine: move offset={} count={} distance={}",
            offset,
            count,
            distance
        );
        self.sink.move_items(offset, count, distance);
    }
}

/// Emit the edits converting `input` into `output` through `sink`.
pub fn edits_into<T, S>(input: &[T], output: &[T], sink: &mut S)
where
    T: Keyed + Clone,
    S: EditSink<T> + ?Sized,
{
    DiffEngine::new(input, output, sink).reconcile();
}

/// Emit the edits converting `input` into `output`.
///
/// `splice(offset, before, after)` replaces `before` at `offset` with `after`;
/// each call is a pure delete or a pure insert. `move_items(offset, count,
/// distance)` shifts `count` items at `offset` past the `distance` items after
/// them. Offsets always refer to the sequence with every earlier operation
/// already applied.
///
/// Duplicate keys are allowed: the nth occurrence of a key in `output` is the
/// nth occurrence of that key in `input`.
pub fn edits<T, S, M>(input: &[T], output: &[T], splice: S, move_items: M)
where
    T: Keyed + Clone,
    S: FnMut(usize, &[T], &[T]),
    M: FnMut(usize, usize, usize),
{
    let mut sink = FnSink { splice, move_items };
    edits_into(input, output, &mut sink);
}
