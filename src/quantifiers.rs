//! Short-circuiting `all` / `any` / `none` terminals
//!
//! Each takes a predicate and an optional projection. The predicate defaults
//! to truthiness through [`Identity`], so `cursor | any(Identity)` asks
//! whether a `bool` cursor holds any `true`.

use crate::cursor::Cursor;
use crate::func::{Identity, Predicate, Projection};
use crate::pipe::Stage;

/// Whether some remaining item's projection passes `predicate`
fn find_match<C, P, F>(mut cursor: C, predicate: &P, projection: &F) -> bool
where
    C: Cursor,
    F: Projection<C::Item>,
    P: Predicate<F::Output>,
{
    while cursor.more() {
        if predicate.test(projection.project(cursor.pull())) {
            return true;
        }
    }
    false
}

/// True when every item matches; stops at the first mismatch
#[derive(Debug, Clone, Copy)]
pub struct AllOf<P, F = Identity> {
    predicate: P,
    projection: F,
}

impl<C, P, F> Stage<C> for AllOf<P, F>
where
    C: Cursor,
    F: Projection<C::Item>,
    P: Predicate<F::Output>,
{
    type Output = bool;

    fn feed(self, mut cursor: C) -> bool {
        while cursor.more() {
            let key = self.projection.project(cursor.pull());
            if !self.predicate.test(key) {
                return false;
            }
        }
        true
    }
}

/// True when some item matches; stops at the first match
#[derive(Debug, Clone, Copy)]
pub struct AnyOf<P, F = Identity> {
    predicate: P,
    projection: F,
}

impl<C, P, F> Stage<C> for AnyOf<P, F>
where
    C: Cursor,
    F: Projection<C::Item>,
    P: Predicate<F::Output>,
{
    type Output = bool;

    fn feed(self, cursor: C) -> bool {
        find_match(cursor, &self.predicate, &self.projection)
    }
}

/// True when no item matches; the negation of [`AnyOf`]
#[derive(Debug, Clone, Copy)]
pub struct NoneOf<P, F = Identity> {
    predicate: P,
    projection: F,
}

impl<C, P, F> Stage<C> for NoneOf<P, F>
where
    C: Cursor,
    F: Projection<C::Item>,
    P: Predicate<F::Output>,
{
    type Output = bool;

    fn feed(self, cursor: C) -> bool {
        !find_match(cursor, &self.predicate, &self.projection)
    }
}

pub fn all<P>(predicate: P) -> AllOf<P> {
    AllOf {
        predicate,
        projection: Identity,
    }
}

pub fn all_by<P, F>(predicate: P, projection: F) -> AllOf<P, F> {
    AllOf {
        predicate,
        projection,
    }
}

pub fn any<P>(predicate: P) -> AnyOf<P> {
    AnyOf {
        predicate,
        projection: Identity,
    }
}

pub fn any_by<P, F>(predicate: P, projection: F) -> AnyOf<P, F> {
    AnyOf {
        predicate,
        projection,
    }
}

pub fn none<P>(predicate: P) -> NoneOf<P> {
    NoneOf {
        predicate,
        projection: Identity,
    }
}

pub fn none_by<P, F>(predicate: P, projection: F) -> NoneOf<P, F> {
    NoneOf {
        predicate,
        projection,
    }
}
