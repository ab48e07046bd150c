use crate::cursor::Cursor;
use crate::pipe::Stage;

/// Terminal stage calling a function once per item, for its side effects
///
/// Pass `&mut f` to keep using `f` (and whatever it accumulated) after the
/// pipeline has run.
#[derive(Debug, Clone, Copy)]
pub struct Apply<F> {
    action: F,
}

impl<C, F, R> Stage<C> for Apply<F>
where
    C: Cursor,
    F: FnMut(C::Item) -> R,
{
    type Output = ();

    fn feed(mut self, mut cursor: C) {
        while cursor.more() {
            (self.action)(cursor.pull());
        }
    }
}

/// Call `action` on every item
pub fn apply<F>(action: F) -> Apply<F> {
    Apply { action }
}
