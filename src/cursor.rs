use crate::error::CursorError;
use crate::pipe::{Stage, Walk};
use crate::sink::Assign;

/// Uniform cursor over a sequence
///
/// A cursor is a small, cheaply clonable position over a sequence it does not
/// own. Implementors provide the three forward-only primitives
/// [`more`](Cursor::more), [`item`](Cursor::item) and [`step`](Cursor::step);
/// every other operation is synthesized from them.
///
/// Random-access cursors override [`len`](Cursor::len),
/// [`item_at`](Cursor::item_at) and [`forward`](Cursor::forward) with O(1)
/// versions, set [`RANDOM_ACCESS`](Cursor::RANDOM_ACCESS) and implement
/// [`RandomAccessCursor`](crate::RandomAccessCursor).
///
/// None of the provided methods depends on a provided method that is in turn
/// derived from it, so implementing the required triple is always enough.
pub trait Cursor: Clone {
    /// The value produced at each position
    type Item;

    /// Whether `len`, `item_at` and `forward` run in O(1)
    const RANDOM_ACCESS: bool = false;

    /// Whether items are produced in a known monotonic order
    const SORTED: bool = false;

    /// Check whether the cursor still has a current item
    fn more(&self) -> bool;

    /// Get the item at the current position
    ///
    /// Calling this on an exhausted cursor is a precondition violation; use
    /// [`try_item`](Cursor::try_item) when that cannot be ruled out.
    fn item(&self) -> Self::Item;

    /// Advance the cursor by one position
    fn step(&mut self);

    /// Number of items remaining
    ///
    /// The fallback counts with a single pass over a clone, O(n).
    fn len(&self) -> usize {
        log::trace!("counting remaining cursor items by linear scan");
        let mut probe = self.clone();
        let mut len = 0;
        while probe.more() {
            probe.step();
            len += 1;
        }
        len
    }

    /// Check whether the cursor is exhausted
    fn is_empty(&self) -> bool {
        !self.more()
    }

    /// Get the item `index` positions ahead without moving the cursor
    fn item_at(&self, index: usize) -> Self::Item {
        self.forwarded(index).item()
    }

    /// Advance the cursor by `count` positions
    fn forward(&mut self, count: usize) {
        for _ in 0..count {
            self.step();
        }
    }

    /// A cursor positioned past the last item
    ///
    /// Random-access cursors jump there in O(1). Everything else walks a clone
    /// until it is exhausted, in one pass.
    fn end(&self) -> Self {
        if Self::RANDOM_ACCESS {
            return self.forwarded(self.len());
        }

        log::trace!("synthesizing end cursor by linear scan");
        let mut end = self.clone();
        while end.more() {
            end.step();
        }
        end
    }

    /// A copy of the cursor at its current position
    fn begin(&self) -> Self {
        self.clone()
    }

    /// A copy of the cursor advanced by `count` positions
    fn forwarded(&self, count: usize) -> Self {
        let mut cursor = self.clone();
        cursor.forward(count);
        cursor
    }

    /// Advance the cursor, returning a copy of its previous position
    fn stepped(&mut self) -> Self {
        let previous = self.clone();
        self.step();
        previous
    }

    /// Read the current item and advance
    fn pull(&mut self) -> Self::Item {
        let item = self.item();
        self.step();
        item
    }

    /// Overwrite the current item and advance
    fn push<V>(&mut self, value: V)
    where
        Self::Item: Assign<V>,
    {
        self.item().assign(value);
        self.step();
    }

    /// Get the current item, or an error if the cursor is exhausted
    fn try_item(&self) -> Result<Self::Item, CursorError> {
        if self.more() {
            Ok(self.item())
        } else {
            Err(CursorError::Exhausted)
        }
    }

    /// Get the item `index` positions ahead, or an error if it does not exist
    fn try_item_at(&self, index: usize) -> Result<Self::Item, CursorError> {
        let len = self.len();
        if index < len {
            Ok(self.item_at(index))
        } else {
            Err(CursorError::OutOfBounds { index, len })
        }
    }

    /// Advance the cursor, or return an error if it is already exhausted
    fn try_step(&mut self) -> Result<(), CursorError> {
        if !self.more() {
            return Err(CursorError::Exhausted);
        }
        self.step();
        Ok(())
    }

    /// Adapt the cursor into a standard [`Iterator`]
    fn walk(self) -> Walk<Self> {
        Walk::new(self)
    }

    /// Feed the cursor into an adaptor or terminal stage
    ///
    /// `cursor.pipe(stage)` is the method form of `cursor | stage`.
    fn pipe<S>(self, stage: S) -> S::Output
    where
        S: Stage<Self>,
    {
        stage.feed(self)
    }
}

/// Cursors that can also move backwards
pub trait Bidirectional: Cursor {
    /// Move the cursor back by one position
    fn prev(&mut self);

    /// Move the cursor back by `count` positions
    fn rewind(&mut self, count: usize) {
        for _ in 0..count {
            self.prev();
        }
    }

    /// A copy of the cursor moved back by `count` positions
    fn rewound(&self, count: usize) -> Self {
        let mut cursor = self.clone();
        cursor.rewind(count);
        cursor
    }

    /// Move back, returning a copy of the previous position
    fn stepped_back(&mut self) -> Self {
        let previous = self.clone();
        self.prev();
        previous
    }
}
