//! An explicit traversal frontier for stack-safe graph walks.
//!
//! Every traversal in this crate keeps its pending nodes in a [`Worklist`]
//! instead of the call stack, so visit depth never scales with graph
//! diameter. Storage is a plain `Vec`, giving LIFO (depth-first) order with
//! amortized O(1) push/pop; reachability semantics do not depend on the
//! pop order.

/// A heap-allocated LIFO work-list of pending traversal targets.
#[derive(Debug)]
pub(crate) struct Worklist<T> {
    pending: Vec<T>,
}

impl<T> Worklist<T> {
    pub(crate) fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            pending: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, item: T) {
        self.pending.push(item);
    }

    /// Pushes every item yielded by `items`.
    #[inline]
    pub(crate) fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.pending.extend(items);
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<T> {
        self.pending.pop()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
