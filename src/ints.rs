//! Searches specialized to `i32` slices.

use crate::{lower_bound, lower_bound_by, Result};

/// [`lower_bound`] over a slice of `i32`.
pub fn lower_bound_ints(
    s: &[i32],
    low: usize,
    high: usize,
    value: &i32,
) -> Result<usize> {
    lower_bound(s, low, high, value)
}

/// [`lower_bound`] over a slice of `i32`, expressed through
/// [`lower_bound_by`] with a predicate capturing `value`.
pub fn lower_bound_ints_by(
    s: &[i32],
    low: usize,
    high: usize,
    value: &i32,
) -> Result<usize> {
    let predicate = |x: &i32| *x < *value;
    lower_bound_by(s, low, high, predicate)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Error;

    #[test]
    fn test_wrappers_agree() {
        let s = [-7, -2, 0, 0, 3, 3, 3, 11];
        for value in -9..=13 {
            for low in 0..=s.len() {
                for high in low..=s.len() {
                    assert_eq!(
                        lower_bound_ints(&s, low, high, &value),
                        lower_bound_ints_by(&s, low, high, &value),
                        "value {} range [{}, {})",
                        value,
                        low,
                        high
                    );
                }
            }
        }
    }

    #[test]
    fn test_wrappers_extremes() {
        let s = [i32::MIN, -1, 0, 1, i32::MAX];
        assert_eq!(lower_bound_ints(&s, 0, 5, &i32::MIN), Ok(0));
        assert_eq!(lower_bound_ints(&s, 0, 5, &i32::MAX), Ok(4));
        assert_eq!(lower_bound_ints_by(&s, 0, 5, &i32::MAX), Ok(4));
        assert_eq!(lower_bound_ints_by(&s, 0, 5, &0), Ok(2));
    }

    #[test]
    fn test_wrappers_validate() {
        let s = [1, 2, 3];
        assert_eq!(
            lower_bound_ints(&s, 0, 4, &2),
            Err(Error::OutOfBounds { high: 4, len: 3 })
        );
        assert_eq!(
            lower_bound_ints_by(&s, 3, 1, &2),
            Err(Error::InvalidRange { low: 3, high: 1 })
        );
    }
}
