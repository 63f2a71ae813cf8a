use crate::{Config, Result};

/// Returns the leftmost index in `[low, high]` at which `predicate`
/// stops holding, assuming it holds for a prefix of `s[low..high]`
/// and fails for the rest.
///
/// Returns `high` if the predicate holds everywhere in the range and
/// `low` if it holds nowhere.
///
/// # Errors
///
/// Returns [`Error::InvalidRange`](crate::Error::InvalidRange) if
/// `low > high` and [`Error::OutOfBounds`](crate::Error::OutOfBounds)
/// if `high > s.len()`. The predicate is not called in either case.
///
/// # Examples
///
/// ```
/// let a = [2, 4, 6, 7, 9];
/// let first_odd = ordered_search::lower_bound_by(&a, 0, a.len(), |x| x % 2 == 0);
/// assert_eq!(first_odd, Ok(3));
/// ```
pub fn lower_bound_by<T, P>(
    s: &[T],
    low: usize,
    high: usize,
    predicate: P,
) -> Result<usize>
where
    P: FnMut(&T) -> bool,
{
    Config::default().lower_bound_by(s, low, high, predicate)
}

/// Returns the leftmost index in `[low, high]` whose element is not
/// less than `value`, or `high` if no such element exists.
/// `s[low..high]` must be sorted in ascending order.
///
/// # Errors
///
/// Same as [`lower_bound_by`].
///
/// # Examples
///
/// ```
/// let a = [1, 3, 3, 5, 7];
/// assert_eq!(ordered_search::lower_bound(&a, 0, 5, &3), Ok(1));
/// assert_eq!(ordered_search::lower_bound(&a, 0, 5, &4), Ok(3));
/// assert_eq!(ordered_search::lower_bound(&a, 0, 5, &8), Ok(5));
/// ```
pub fn lower_bound<T>(
    s: &[T],
    low: usize,
    high: usize,
    value: &T,
) -> Result<usize>
where
    T: PartialOrd,
{
    Config::default().lower_bound(s, low, high, value)
}

/// Searches the sorted range `s[low..high]` for `value`.
///
/// If the value is found then `Ok(Ok(i))` is returned, where `i` is the
/// index of the leftmost matching element. Otherwise `Ok(Err(i))` is
/// returned, containing the index where a matching element could be
/// inserted while maintaining sorted order.
///
/// # Errors
///
/// Same as [`lower_bound_by`].
pub fn binary_search<T>(
    s: &[T],
    low: usize,
    high: usize,
    value: &T,
) -> Result<std::result::Result<usize, usize>>
where
    T: PartialOrd,
{
    Config::default().binary_search(s, low, high, value)
}

/// Like [`lower_bound_by`], without validating the range.
///
/// If `low > high` this returns `low` without calling the predicate.
/// If `high > s.len()` this panics as soon as the search reads past
/// the end of `s`.
pub fn lower_bound_by_unchecked<T, P>(
    s: &[T],
    mut low: usize,
    mut high: usize,
    mut predicate: P,
) -> usize
where
    P: FnMut(&T) -> bool,
{
    while low < high {
        // rounds toward low, so mid is always in [low, high)
        let mid = low + (high - low) / 2;
        if predicate(&s[mid]) {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}

/// Like [`lower_bound`], without validating the range.
///
/// See [`lower_bound_by_unchecked`] for what happens on a bad range.
pub fn lower_bound_unchecked<T>(
    s: &[T],
    low: usize,
    high: usize,
    value: &T,
) -> usize
where
    T: PartialOrd,
{
    lower_bound_by_unchecked(s, low, high, |x| x < value)
}

/// Turns a lower bound `at` into a membership answer with a single
/// equality check.
pub(crate) fn probe<T>(
    s: &[T],
    at: usize,
    high: usize,
    value: &T,
) -> std::result::Result<usize, usize>
where
    T: PartialOrd,
{
    if at < high && s[at] == *value { Ok(at) } else { Err(at) }
}

#[test]
fn test_lower_bound() {
    let s = [1, 3, 3, 5, 7];
    assert_eq!(lower_bound(&s, 0, 5, &3), Ok(1));
    assert_eq!(lower_bound(&s, 0, 5, &4), Ok(3));
    assert_eq!(lower_bound(&s, 0, 5, &0), Ok(0));
    assert_eq!(lower_bound(&s, 0, 5, &8), Ok(5));
    assert_eq!(lower_bound(&s, 0, 5, &7), Ok(4));
    assert_eq!(lower_bound(&s, 0, 5, &1), Ok(0));

    // subranges
    assert_eq!(lower_bound(&s, 2, 5, &3), Ok(2));
    assert_eq!(lower_bound(&s, 0, 3, &6), Ok(3));
    assert_eq!(lower_bound(&s, 3, 3, &0), Ok(3));

    let empty: [i32; 0] = [];
    assert_eq!(lower_bound(&empty, 0, 0, &8), Ok(0));
}

#[test]
fn test_lower_bound_by() {
    let s = ["apple", "banana", "cherry", "damson", "elder"];
    assert_eq!(lower_bound_by(&s, 0, 5, |x| x.len() < 7), Ok(5));
    assert_eq!(lower_bound_by(&s, 0, 5, |x| *x < "c"), Ok(2));
    assert_eq!(lower_bound_by(&s, 0, 5, |x| x.starts_with('a')), Ok(1));
    assert_eq!(lower_bound_by(&s, 1, 4, |_| false), Ok(1));
    assert_eq!(lower_bound_by(&s, 1, 4, |_| true), Ok(4));
}

#[test]
fn test_unchecked_matches_reference() {
    let s = [1, 3, 3, 5, 7];
    assert_eq!(lower_bound_unchecked(&s, 0, 5, &3), 1);
    assert_eq!(lower_bound_unchecked(&s, 0, 5, &4), 3);
    // an inverted range skips the loop entirely
    assert_eq!(lower_bound_unchecked(&s, 4, 1, &0), 4);
    assert_eq!(lower_bound_by_unchecked(&s, 9, 2, |_| unreachable!()), 9);
}

#[test]
#[should_panic]
fn test_unchecked_out_of_bounds_panics() {
    let s = [1, 3, 3, 5, 7];
    lower_bound_unchecked(&s, 0, 12, &100);
}

#[test]
fn test_binary_search() {
    let s = [4, 5, 5, 6, 9];
    assert_eq!(binary_search(&s, 0, 5, &3), Ok(Err(0)));
    assert_eq!(binary_search(&s, 0, 5, &4), Ok(Ok(0)));
    assert_eq!(binary_search(&s, 0, 5, &5), Ok(Ok(1)));
    assert_eq!(binary_search(&s, 0, 5, &6), Ok(Ok(3)));
    assert_eq!(binary_search(&s, 0, 5, &7), Ok(Err(4)));
    assert_eq!(binary_search(&s, 0, 5, &9), Ok(Ok(4)));
    assert_eq!(binary_search(&s, 0, 5, &10), Ok(Err(5)));
    // 9 sits at index 4, outside of [0, 4)
    assert_eq!(binary_search(&s, 0, 4, &9), Ok(Err(4)));
}

#[cfg(test)]
mod qc {
    use super::*;

    fn reference(s: &[u8], low: usize, high: usize, value: u8) -> usize {
        s[low..high]
            .iter()
            .position(|x| *x >= value)
            .map_or(high, |i| low + i)
    }

    fn bounds(len: usize, a: usize, b: usize) -> (usize, usize) {
        let a = a % (len + 1);
        let b = b % (len + 1);
        (a.min(b), a.max(b))
    }

    quickcheck::quickcheck! {
        #[cfg_attr(miri, ignore)]
        fn qc_lower_bound_matches_scan(s: Vec<u8>, a: usize, b: usize, value: u8) -> bool {
            let mut s = s;
            s.sort_unstable();
            let (low, high) = bounds(s.len(), a, b);
            lower_bound(&s, low, high, &value) == Ok(reference(&s, low, high, value))
        }

        #[cfg_attr(miri, ignore)]
        fn qc_lower_bound_by_matches_partition_point(s: Vec<u8>, value: u8) -> bool {
            let mut s = s;
            s.sort_unstable();
            let expected = s.partition_point(|x| *x < value);
            lower_bound_by(&s, 0, s.len(), |x| *x < value) == Ok(expected)
        }
    }
}
