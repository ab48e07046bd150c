pub mod indexed;
pub mod slice;
pub mod sorted;

pub use indexed::{Indexed, IndexedCursor};
pub use slice::{CellCursor, SliceCursor};
pub use sorted::{AssumeSorted, SortExt, bsearch};
