use std::fmt::Display;
use std::ops::Range;

use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::typedef::PosType;

/// A half-open coordinate range `[start, end)` within a single sequence.
///
/// Plain value type. The sequence it belongs to is carried by the owning
/// [`RegionEntry`](crate::data_structs::RegionEntry), not by the interval
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    start: PosType,
    end:   PosType,
}

impl Interval {
    /// Creates a new `Interval`.
    pub fn new(
        start: PosType,
        end: PosType,
    ) -> Self {
        assert!(
            start <= end,
            "Start position must be less than or equal to end position"
        );
        Self { start, end }
    }

    /// The interval spanning an entire sequence.
    pub fn whole() -> Self {
        Self {
            start: 0,
            end:   PosType::MAX,
        }
    }

    /// Returns the start position.
    pub fn start(&self) -> PosType {
        self.start
    }

    /// Returns the end position (exclusive).
    pub fn end(&self) -> PosType {
        self.end
    }

    /// Returns the length of the interval.
    pub fn length(&self) -> PosType {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Checks whether a single position falls inside the interval.
    pub fn contains(
        &self,
        pos: PosType,
    ) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Checks whether two intervals share at least one position.
    ///
    /// Empty intervals overlap nothing, including themselves.
    pub fn overlaps(
        &self,
        other: &Self,
    ) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.start < other.end
            && other.start < self.end
    }
}

impl From<Range<PosType>> for Interval {
    fn from(value: Range<PosType>) -> Self {
        Self::new(value.start, value.end)
    }
}

impl From<Interval> for Range<PosType> {
    fn from(value: Interval) -> Self {
        value.start..value.end
    }
}

impl PartialOrd for Interval {
    /// Compares two `Interval`s by genomic order.
    ///
    /// Returns `None` if the intervals intersect.
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<std::cmp::Ordering> {
        if self.start >= other.end {
            return Some(std::cmp::Ordering::Greater);
        }
        if self.end <= other.start {
            return Some(std::cmp::Ordering::Less);
        }
        None
    }
}

impl Display for Interval {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
