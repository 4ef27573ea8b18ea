//! Types for configuring a [crate::Decoder].

use core::ops::{Bound, RangeBounds};

/// Bounds on an acceptable length.
///
/// # Examples
///
/// ```
/// use bitsparrow::RangeCfg;
///
/// let cfg = RangeCfg::new(1..=1024);
/// assert!(cfg.contains(500));
/// assert!(!cfg.contains(0));
/// assert!(!cfg.contains(2000));
///
/// let any = RangeCfg::from(..);
/// assert!(any.contains(usize::MAX));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct RangeCfg {
    start: Bound<usize>,
    end: Bound<usize>,
}

impl RangeCfg {
    /// Creates a new `RangeCfg` from any range of `usize`.
    pub fn new(r: impl RangeBounds<usize>) -> Self {
        Self {
            start: r.start_bound().cloned(),
            end: r.end_bound().cloned(),
        }
    }

    /// Returns true if `value` lies within the bounds.
    pub fn contains(&self, value: usize) -> bool {
        (self.start, self.end).contains(&value)
    }
}

impl Default for RangeCfg {
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

/// Configuration for a [crate::Decoder].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Config {
    /// Accepted length of `bytes` and `string` payloads, and of collections.
    ///
    /// Lengths outside this range are rejected before the payload is read.
    pub max_len: RangeCfg,
}

impl Config {
    /// Creates a configuration that accepts lengths in `range`.
    pub fn with_max_len(range: impl Into<RangeCfg>) -> Self {
        Self {
            max_len: range.into(),
        }
    }
}
