//! Associative combination with an identity element.
//!
//! Styles, paths, and drawings are all built by folding small fragments
//! together; this trait is the one law they share.

/// A type with an associative `combine` and an `empty` identity.
///
/// `a.combine(b).combine(c) == a.combine(b.combine(c))` and
/// `T::empty().combine(a) == a.combine(T::empty())` for every
/// implementation in this crate (up to group flattening for
/// [`Drawing`](crate::Drawing)).
pub trait Combine: Sized {
    /// The identity element.
    #[must_use]
    fn empty() -> Self;

    /// Combine `self` with `other`, `self` taking precedence where the
    /// implementation is biased.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Fold a sequence left to right, starting from [`Combine::empty`].
    #[must_use]
    fn concat_all<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        items.into_iter().fold(Self::empty(), Self::combine)
    }
}
