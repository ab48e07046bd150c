use thiserror::Error;

/// Errors reported by the checked cursor accessors
///
/// The unchecked accessors (`item`, `item_at`, `step`) treat these conditions as
/// precondition violations. The `try_*` variants on [`Cursor`](crate::Cursor)
/// report them instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    /// The cursor has no current item
    #[error("cannot read past the end of an exhausted cursor")]
    Exhausted,
    /// An offset past the remaining length was requested
    #[error("offset {index} is out of bounds for a cursor with {len} remaining items")]
    OutOfBounds { index: usize, len: usize },
}
