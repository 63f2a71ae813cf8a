use serde::{Deserialize, Serialize};

use crate::{
    binary_search::{lower_bound_by_unchecked, probe},
    Error, Result,
};

/// Top-level configuration for searches.
///
/// The free functions of this crate run under `Config::default()`,
/// which validates bounds and trusts the caller about the predicate
/// being partitioned.
///
/// # Examples
///
/// ```
/// use ordered_search::Config;
///
/// let strict = Config::new().verify_partition(true);
/// let a = [1, 3, 3, 5, 7];
/// assert_eq!(strict.lower_bound(&a, 0, a.len(), &4), Ok(3));
/// assert!(strict.lower_bound_by(&a, 0, a.len(), |x| *x % 2 == 0).is_ok());
/// assert!(strict.lower_bound_by(&a, 0, a.len(), |x| *x == 5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    check_bounds: bool,
    verify_partition: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config { check_bounds: true, verify_partition: false }
    }
}

macro_rules! builder {
    ($(($name:ident, $get:ident, $set:ident, $t:ty, $desc:expr)),*) => {
        $(
            #[doc="Get "]
            #[doc=$desc]
            pub const fn $get(&self) -> $t {
                self.$name
            }

            #[doc="Set "]
            #[doc=$desc]
            pub fn $set(&mut self, to: $t) {
                self.$name = to;
            }

            #[doc="Builder, set "]
            #[doc=$desc]
            pub const fn $name(mut self, to: $t) -> Config {
                self.$name = to;
                self
            }
        )*
    }
}

impl Config {
    /// Returns a default `Config`
    pub fn new() -> Config {
        Config::default()
    }

    builder!(
        (
            check_bounds,
            get_check_bounds,
            set_check_bounds,
            bool,
            "whether to reject ranges where low > high or high > len"
        ),
        (
            verify_partition,
            get_verify_partition,
            set_verify_partition,
            bool,
            "whether to scan the whole range to prove the predicate is partitioned"
        )
    );

    /// Returns the leftmost index in `[low, high]` at which
    /// `predicate` stops holding.
    ///
    /// With `check_bounds` disabled this behaves exactly like
    /// [`lower_bound_by_unchecked`](crate::lower_bound_by_unchecked),
    /// except that `verify_partition` panics on a range it cannot slice.
    pub fn lower_bound_by<T, P>(
        &self,
        s: &[T],
        low: usize,
        high: usize,
        mut predicate: P,
    ) -> Result<usize>
    where
        P: FnMut(&T) -> bool,
    {
        if self.check_bounds {
            check_range(s.len(), low, high)?;
        }

        if self.verify_partition {
            check_partition(s, low, high, &mut predicate)?;
        }

        let ret = lower_bound_by_unchecked(s, low, high, predicate);

        if self.verify_partition {
            log::trace!(
                "partition of [{}, {}) verified, partition point {}",
                low,
                high,
                ret
            );
        }

        Ok(ret)
    }

    /// Returns the leftmost index in `[low, high]` whose element
    /// is not less than `value`, or `high` if every element is.
    pub fn lower_bound<T>(
        &self,
        s: &[T],
        low: usize,
        high: usize,
        value: &T,
    ) -> Result<usize>
    where
        T: PartialOrd,
    {
        self.lower_bound_by(s, low, high, |x| x < value)
    }

    /// Searches `[low, high)` for `value`.
    ///
    /// Returns `Ok(Ok(i))` with the leftmost `i` holding an element
    /// equal to `value`, or `Ok(Err(i))` with the index where `value`
    /// could be inserted while keeping the range sorted.
    pub fn binary_search<T>(
        &self,
        s: &[T],
        low: usize,
        high: usize,
        value: &T,
    ) -> Result<std::result::Result<usize, usize>>
    where
        T: PartialOrd,
    {
        let at = self.lower_bound(s, low, high, value)?;
        Ok(probe(s, at, high, value))
    }
}

fn check_range(len: usize, low: usize, high: usize) -> Result<()> {
    if low > high {
        log::debug!("rejecting search over [{}, {})", low, high);
        return Err(Error::InvalidRange { low, high });
    }
    if high > len {
        log::debug!(
            "rejecting search over [{}, {}) of a sequence of length {}",
            low,
            high,
            len
        );
        return Err(Error::OutOfBounds { high, len });
    }
    Ok(())
}

fn check_partition<T, P>(
    s: &[T],
    low: usize,
    high: usize,
    predicate: &mut P,
) -> Result<()>
where
    P: FnMut(&T) -> bool,
{
    let mut failed = false;
    for (at, item) in s[low..high].iter().enumerate() {
        let holds = predicate(item);
        if holds && failed {
            let at = low + at;
            log::warn!(
                "predicate over [{}, {}) holds again at {} after failing",
                low,
                high,
                at
            );
            return Err(Error::NotPartitioned { at });
        }
        failed |= !holds;
    }
    Ok(())
}
