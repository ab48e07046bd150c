//! # CursorComb - Lazy Cursor Combinator Library
//!
//! Allocation-free, statically dispatched iteration over borrowed sequences.
//!
//! A [`Cursor`] is a small, copyable position over a sequence it does not own.
//! Implementing three primitives (`more`, `item`, `step`) is enough to get the
//! whole surface: indexed access, length, end sentinels, forwarding and the
//! pipeline operator. Random-access sources override the O(n) fallbacks with
//! O(1) versions.
//!
//! Cursors compose into pipelines with `|`:
//!
//! - **Adaptors** wrap a cursor in a new cursor: [`map`], [`filter`],
//!   [`filter_by`], [`zip`], [`enumerate`]
//! - **Sources** produce items themselves: [`iota`], [`iota_to`], or any
//!   [`Iterable`] through [`cursor`]
//! - **Terminals** drive the pipeline to completion: [`reduce`], [`apply`],
//!   [`sink`], [`drain`], [`unzip`], [`all`], [`any`], [`none`]
//!
//! ```
//! use cursorcomb::{cursor, filter, map, reduce};
//!
//! let data = [1, 2, 3, 4, 5];
//! let total = cursor(&data)
//!     | filter(|x: &i32| x % 2 == 0)
//!     | map(|x: &i32| x * 10)
//!     | reduce(|acc: i32, x: i32| acc + x, 0);
//! assert_eq!(total, 60);
//! ```
//!
//! Nothing is computed until a terminal (or an explicit `pull`) asks for an
//! item. Capabilities such as random access and sortedness are compile-time
//! properties of each cursor type: asking a forward-only cursor for a binary
//! search is a type error, not a runtime failure.

pub mod apply;
pub mod bulk;
pub mod cursor;
pub mod cursors;
pub mod enumerate;
pub mod error;
pub mod filter;
pub mod func;
pub mod introspect;
pub mod iota;
pub mod iterable;
pub mod map;
pub mod pipe;
pub mod quantifiers;
pub mod reduce;
pub mod sink;
pub mod zip;

pub use apply::{Apply, apply};
pub use bulk::{copy, fill};
pub use cursor::{Bidirectional, Cursor};
pub use cursors::{
    AssumeSorted, CellCursor, Indexed, IndexedCursor, SliceCursor, SortExt, bsearch,
};
pub use enumerate::{Enumerate, EnumerateExt, enumerate};
pub use error::CursorError;
pub use filter::{Filter, FilterExt, FilterStage, filter, filter_by};
pub use func::{Identity, Predicate, Projection};
pub use introspect::{CursorOf, RandomAccessCursor, SortedCursor, is_random_access, is_sorted};
pub use iota::{Iota, iota, iota_to};
pub use iterable::{Iterable, cursor};
pub use map::{Map, MapExt, MapStage, map};
pub use pipe::{Stage, Walk};
pub use quantifiers::{AllOf, AnyOf, NoneOf, all, all_by, any, any_by, none, none_by};
pub use reduce::{Reduce, reduce};
pub use sink::{Assign, Drain, Sink, SinkStage, Unzip, Writer, drain, sink, unzip, writer};
pub use zip::{Zip, ZipExt, zip};
