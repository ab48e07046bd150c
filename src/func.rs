use std::borrow::Borrow;

/// The identity function object
///
/// Used as the default projection of the filtering and quantifying stages. As a
/// predicate it tests the truth of `bool` items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Identity;

/// A function object mapping an item to a derived value
pub trait Projection<T> {
    type Output;

    fn project(&self, value: T) -> Self::Output;
}

impl<T, U, F> Projection<T> for F
where
    F: Fn(T) -> U,
{
    type Output = U;

    #[inline]
    fn project(&self, value: T) -> U {
        self(value)
    }
}

impl<T> Projection<T> for Identity {
    type Output = T;

    #[inline]
    fn project(&self, value: T) -> T {
        value
    }
}

/// A function object deciding whether a value matches
pub trait Predicate<T> {
    fn test(&self, value: T) -> bool;
}

impl<T, F> Predicate<T> for F
where
    F: Fn(T) -> bool,
{
    #[inline]
    fn test(&self, value: T) -> bool {
        self(value)
    }
}

impl<T: Borrow<bool>> Predicate<T> for Identity {
    #[inline]
    fn test(&self, value: T) -> bool {
        *value.borrow()
    }
}
