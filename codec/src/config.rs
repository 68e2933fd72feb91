//! Types for use as [crate::Read::Cfg].

use core::ops::{Bound, RangeBounds};

/// Configuration for limiting the length of a variable-length value whose bound is not part of
/// its type.
///
/// Types such as [crate::VecM] and [crate::BytesM] carry their maximum length as a const generic
/// and need no configuration. [Vec] and [bytes::Bytes] instead accept a `RangeCfg` so that the
/// caller decides, at decode time, how many elements an untrusted length prefix may claim.
///
/// # Examples
///
/// ```
/// use xdrkit_codec::RangeCfg;
///
/// // Limit lengths to 0..=1024
/// let cfg = RangeCfg::from(..=1024);
/// assert!(cfg.contains(&500));
/// assert!(!cfg.contains(&2000));
///
/// // Require at least one element
/// let cfg = RangeCfg::from(1..);
/// assert!(!cfg.contains(&0));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct RangeCfg {
    start: Bound<usize>,
    end: Bound<usize>,
}

impl RangeCfg {
    /// Creates a new `RangeCfg` from any range of lengths.
    pub fn new(r: impl RangeBounds<usize>) -> Self {
        Self {
            start: r.start_bound().cloned(),
            end: r.end_bound().cloned(),
        }
    }

    /// Creates a `RangeCfg` that only accepts exactly `len`.
    pub fn exact(len: usize) -> Self {
        Self {
            start: Bound::Included(len),
            end: Bound::Included(len),
        }
    }

    /// Returns true if `len` is within this range.
    pub fn contains(&self, len: &usize) -> bool {
        let above_start = match self.start {
            Bound::Included(s) => *len >= s,
            Bound::Excluded(s) => *len > s,
            Bound::Unbounded => true,
        };
        let below_end = match self.end {
            Bound::Included(e) => *len <= e,
            Bound::Excluded(e) => *len < e,
            Bound::Unbounded => true,
        };
        above_start && below_end
    }
}

impl Default for RangeCfg {
    /// Accepts any length (bounded only by the `u32` length prefix and the input size).
    fn default() -> Self {
        Self::new(..)
    }
}

macro_rules! impl_from_range {
    ($($range:ty),*) => {
        $(
            impl From<$range> for RangeCfg {
                fn from(r: $range) -> Self {
                    Self::new(r)
                }
            }
        )*
    };
}

impl_from_range!(
    core::ops::Range<usize>,
    core::ops::RangeInclusive<usize>,
    core::ops::RangeFrom<usize>,
    core::ops::RangeTo<usize>,
    core::ops::RangeToInclusive<usize>,
    core::ops::RangeFull
);

impl RangeBounds<usize> for RangeCfg {
    fn start_bound(&self) -> Bound<&usize> {
        self.start.as_ref()
    }

    fn end_bound(&self) -> Bound<&usize> {
        self.end.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_cfg_contains() {
        // Unbounded
        let cfg = RangeCfg::default();
        assert!(cfg.contains(&0));
        assert!(cfg.contains(&usize::MAX));

        // Inclusive start
        let cfg = RangeCfg::from(5..);
        assert!(!cfg.contains(&4));
        assert!(cfg.contains(&5));

        // Exclusive end
        let cfg = RangeCfg::from(..10);
        assert!(cfg.contains(&9));
        assert!(!cfg.contains(&10));

        // Inclusive end
        let cfg = RangeCfg::from(..=10);
        assert!(cfg.contains(&10));
        assert!(!cfg.contains(&11));

        // Both bounds
        let cfg = RangeCfg::from(5..=10);
        assert!(!cfg.contains(&4));
        assert!(cfg.contains(&5));
        assert!(cfg.contains(&10));
        assert!(!cfg.contains(&11));

        // Exclusive start
        let cfg = RangeCfg {
            start: Bound::Excluded(5),
            end: Bound::Unbounded,
        };
        assert!(!cfg.contains(&5));
        assert!(cfg.contains(&6));
    }

    #[test]
    fn test_range_cfg_exact() {
        let cfg = RangeCfg::exact(32);
        assert!(!cfg.contains(&31));
        assert!(cfg.contains(&32));
        assert!(!cfg.contains(&33));
    }

    #[test]
    fn test_range_cfg_empty() {
        let cfg = RangeCfg::from(5..5);
        assert!(!cfg.contains(&4));
        assert!(!cfg.contains(&5));
        assert!(!cfg.contains(&6));
    }
}
