use crate::cursor::Cursor;
use crate::pipe::Stage;

/// Terminal stage folding every item into an accumulator, left to right
#[derive(Debug, Clone, Copy)]
pub struct Reduce<F, A> {
    combine: F,
    init: A,
}

impl<C, F, A> Stage<C> for Reduce<F, A>
where
    C: Cursor,
    F: FnMut(A, C::Item) -> A,
{
    type Output = A;

    fn feed(self, mut cursor: C) -> A {
        let Reduce { mut combine, init } = self;
        let mut accumulator = init;
        while cursor.more() {
            accumulator = combine(accumulator, cursor.pull());
        }
        accumulator
    }
}

/// Fold the items with `combine`, starting from `init`
pub fn reduce<F, A>(combine: F, init: A) -> Reduce<F, A> {
    Reduce { combine, init }
}
