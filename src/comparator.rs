use core::cmp::Ordering;
use core::fmt;

/// A total order over `T`, injected into an [`AvlSet`](crate::AvlSet) at construction.
///
/// The order is fixed for the lifetime of the set. It must be consistent: if
/// `compare(a, b)` is `Less` then `compare(b, a)` is `Greater`, equality is transitive, and
/// repeated calls give the same answer. An inconsistent comparator does not cause undefined
/// behavior, but the set's contents and query results become unspecified.
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use avl_set::{AvlSet, Comparator};
///
/// /// Orders strings by length first, then lexicographically.
/// struct ByLength;
///
/// impl Comparator<&str> for ByLength {
///     fn compare(&self, a: &&str, b: &&str) -> Ordering {
///         a.len().cmp(&b.len()).then_with(|| a.cmp(b))
///     }
/// }
///
/// let mut set = AvlSet::with_comparator(ByLength);
/// set.insert("ccc");
/// set.insert("a");
/// set.insert("bb");
/// assert_eq!(set.to_vec(), ["a", "bb", "ccc"]);
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders elements by their [`Ord`] implementation. This is the default comparator.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct NaturalOrder;

impl<T: ?Sized + Ord> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders elements by the reverse of their [`Ord`] implementation.
///
/// # Examples
///
/// ```
/// use avl_set::{AvlSet, ReverseOrder};
///
/// let mut set = AvlSet::with_comparator(ReverseOrder);
/// set.add_all([1, 3, 2]);
/// assert_eq!(set.first(), Ok(&3));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct ReverseOrder;

impl<T: ?Sized + Ord> Comparator<T> for ReverseOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Adapts a closure `Fn(&T, &T) -> Ordering` into a [`Comparator`].
///
/// Usually built through [`AvlSet::from_fn`](crate::AvlSet::from_fn).
#[derive(Clone, Copy, Default)]
pub struct FnComparator<F>(pub F);

impl<T: ?Sized, F> Comparator<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for FnComparator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnComparator(..)")
    }
}

impl<T: ?Sized, C: Comparator<T> + ?Sized> Comparator<T> for &C {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use core::cmp::Ordering::{Equal, Greater, Less};

    #[test]
    fn natural_and_reverse_disagree() {
        assert_eq!(NaturalOrder.compare(&1, &2), Less);
        assert_eq!(ReverseOrder.compare(&1, &2), Greater);
        assert_eq!(NaturalOrder.compare("b", "b"), Equal);
        assert_eq!(ReverseOrder.compare("b", "b"), Equal);
    }

    #[test]
    fn closures_and_references() {
        let by_abs = FnComparator(|a: &i32, b: &i32| a.abs().cmp(&b.abs()));
        assert_eq!(by_abs.compare(&-3, &2), Greater);
        assert_eq!((&by_abs).compare(&-2, &2), Equal);
    }
}
