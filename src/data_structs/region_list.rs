//! Region lists: the in-memory collection of named regions used to scope
//! range queries against an indexed sequence file.
//!
//! A [`RegionList`] owns its entries, and each [`RegionEntry`] exclusively
//! owns its interval set. Teardown is therefore a plain depth-first drop:
//! every interval set is reclaimed before its entry, and every entry before
//! the list storage. [`RegionList::release`] makes that teardown explicit
//! and observable; because it consumes the list, releasing twice is a
//! compile-time error rather than a double free.

use hashbrown::HashMap;
use itertools::Itertools;
use log::debug;
use serde::{
    Deserialize,
    Serialize,
};

use super::interval::Interval;
use super::region::Region;
use crate::data_structs::typedef::RegSmallStr;

/// One named region: a sequence name plus the intervals of interest on it.
///
/// The interval set is lazily allocated: an entry may exist with no set at
/// all (`None`), which is distinct from an entry with an empty set. Producers
/// that register a sequence before discovering any intervals leave the set
/// absent, and every consumer must tolerate that state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionEntry {
    seqname:   RegSmallStr,
    intervals: Option<Vec<Interval>>,
}

impl RegionEntry {
    /// Creates an entry with no interval set allocated.
    pub fn new(seqname: RegSmallStr) -> Self {
        Self {
            seqname,
            intervals: None,
        }
    }

    /// Returns the sequence name.
    pub fn seqname(&self) -> &RegSmallStr {
        &self.seqname
    }

    /// Returns the interval set, or `None` if it was never allocated.
    pub fn intervals(&self) -> Option<&[Interval]> {
        self.intervals.as_deref()
    }

    /// Number of populated intervals. Zero when the set is absent.
    pub fn n_intervals(&self) -> usize {
        self.intervals.as_ref().map_or(0, Vec::len)
    }

    pub fn has_intervals(&self) -> bool {
        self.intervals.is_some()
    }

    /// Adds an interval, allocating the set on first use and keeping it
    /// ordered by start position. Overlapping intervals are kept distinct,
    /// not merged.
    pub fn push(
        &mut self,
        interval: Interval,
    ) {
        let intervals = self.intervals.get_or_insert_with(Vec::new);
        let idx = intervals
            .partition_point(|iv| (iv.start(), iv.end()) <= (interval.start(), interval.end()));
        intervals.insert(idx, interval);
    }

    /// Checks whether any owned interval overlaps the query.
    ///
    /// An absent or empty interval set matches nothing.
    pub fn overlaps(
        &self,
        query: &Interval,
    ) -> bool {
        let Some(intervals) = self.intervals.as_ref()
        else {
            return false;
        };
        for interval in intervals {
            // Sorted by start, so no later interval can reach back.
            if interval.start() >= query.end() {
                return false;
            }
            if interval.overlaps(query) {
                return true;
            }
        }
        false
    }
}

/// What a release walk reclaimed. Only observable output of
/// [`RegionList::release`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseStats {
    /// Entries torn down.
    pub entries:       usize,
    /// Interval sets that were allocated and got reclaimed.
    pub interval_sets: usize,
    /// Intervals contained in those sets.
    pub intervals:     usize,
}

/// An ordered list of [`RegionEntry`] values with a by-name lookup table.
///
/// The list exclusively owns its entries and, transitively, every interval
/// set. Its length is intrinsic — there is no caller-supplied element count
/// to get wrong. "No list at all" is represented as `Option<RegionList>` at
/// call sites and means the query is unrestricted (see [`matches`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionList {
    entries: Vec<RegionEntry>,
    lookup:  HashMap<RegSmallStr, usize>,
}

impl FromIterator<Region> for RegionList {
    fn from_iter<I: IntoIterator<Item = Region>>(iter: I) -> Self {
        let mut list = Self::new();
        for region in iter {
            list.insert(region);
        }
        list
    }
}

impl RegionList {
    /// Creates a new empty `RegionList`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from query strings (`"chr1:100-200"`, ...).
    ///
    /// Queries naming the same sequence are grouped into one entry, in
    /// first-seen order.
    pub fn from_queries<I, S>(queries: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>, {
        let regions = queries
            .into_iter()
            .map(|q| q.as_ref().parse::<Region>())
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self::from_iter(regions))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[RegionEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RegionEntry> {
        self.entries.iter()
    }

    /// Sequence names in insertion order.
    pub fn seqnames(&self) -> Vec<RegSmallStr> {
        self.entries
            .iter()
            .map(|e| e.seqname().clone())
            .collect_vec()
    }

    /// Looks up an entry by sequence name.
    pub fn get(
        &self,
        seqname: &str,
    ) -> Option<&RegionEntry> {
        self.lookup
            .get(&RegSmallStr::from(seqname))
            .map(|idx| &self.entries[*idx])
    }

    /// Registers a sequence without allocating its interval set, returning
    /// the (possibly pre-existing) entry.
    pub fn add_sequence(
        &mut self,
        seqname: RegSmallStr,
    ) -> &mut RegionEntry {
        let idx = match self.lookup.get(&seqname) {
            Some(idx) => *idx,
            None => {
                let idx = self.entries.len();
                self.entries.push(RegionEntry::new(seqname.clone()));
                self.lookup.insert(seqname, idx);
                idx
            },
        };
        &mut self.entries[idx]
    }

    /// Adds one region, creating its entry on first sight of the sequence
    /// name.
    pub fn insert(
        &mut self,
        region: Region,
    ) {
        let (seqname, interval) = region.into_parts();
        self.add_sequence(seqname).push(interval);
    }

    /// Checks whether the query interval overlaps any interval registered
    /// for the named sequence. Unknown sequence names match nothing.
    pub fn overlaps(
        &self,
        seqname: &str,
        query: &Interval,
    ) -> bool {
        self.get(seqname)
            .map_or(false, |entry| entry.overlaps(query))
    }

    /// Tears the list down, reclaiming every entry's interval set before the
    /// list storage itself, and reports what was reclaimed.
    ///
    /// Entries whose interval set was never allocated are skipped without
    /// fault. Consuming `self` makes a second release of the same list
    /// unrepresentable; lists that merely fall out of scope get the same
    /// teardown from `Drop` glue, minus the stats.
    pub fn release(self) -> ReleaseStats {
        let mut stats = ReleaseStats::default();
        for entry in self.entries {
            stats.entries += 1;
            if let Some(intervals) = entry.intervals {
                stats.interval_sets += 1;
                stats.intervals += intervals.len();
                drop(intervals);
            }
        }
        debug!(
            "released region list: {} entries, {} interval sets, {} intervals",
            stats.entries, stats.interval_sets, stats.intervals
        );
        stats
    }
}

impl<'a> IntoIterator for &'a RegionList {
    type IntoIter = std::slice::Iter<'a, RegionEntry>;
    type Item = &'a RegionEntry;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Releases a possibly-absent region list.
///
/// An absent list is a valid state ("no regions specified") and releasing it
/// is a no-op reporting zero reclaimed allocations.
pub fn release(list: Option<RegionList>) -> ReleaseStats {
    match list {
        Some(list) => list.release(),
        None => ReleaseStats::default(),
    }
}

/// Scope check against a possibly-absent region list.
///
/// An absent list means "no regions specified": every query matches. A
/// present list restricts matches to its registered intervals.
pub fn matches(
    list: Option<&RegionList>,
    seqname: &str,
    query: &Interval,
) -> bool {
    match list {
        Some(list) => list.overlaps(seqname, query),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(
        start: u32,
        end: u32,
    ) -> Interval {
        Interval::new(start, end)
    }

    #[test]
    fn test_insert_and_get() {
        let mut list = RegionList::new();
        list.insert(Region::new("chr1".into(), interval(0, 100)));
        list.insert(Region::new("chr2".into(), interval(50, 150)));
        list.insert(Region::new("chr1".into(), interval(200, 300)));

        assert_eq!(list.len(), 2);
        assert_eq!(list.get("chr1").unwrap().n_intervals(), 2);
        assert_eq!(list.get("chr2").unwrap().n_intervals(), 1);
        assert!(list.get("chr3").is_none());
    }

    #[test]
    fn test_entries_keep_first_seen_order() {
        let mut list = RegionList::new();
        list.insert(Region::new("chr2".into(), interval(0, 10)));
        list.insert(Region::new("chr1".into(), interval(0, 10)));
        list.insert(Region::new("chr2".into(), interval(20, 30)));

        assert_eq!(list.seqnames(), vec![
            RegSmallStr::from("chr2"),
            RegSmallStr::from("chr1"),
        ]);
    }

    #[test]
    fn test_push_keeps_intervals_sorted() {
        let mut entry = RegionEntry::new("chr1".into());
        entry.push(interval(200, 300));
        entry.push(interval(0, 100));
        entry.push(interval(150, 250));

        assert_eq!(entry.intervals().unwrap(), [
            interval(0, 100),
            interval(150, 250),
            interval(200, 300),
        ]);
    }

    #[test]
    fn test_overlaps() {
        let mut list = RegionList::new();
        list.insert(Region::new("chr1".into(), interval(100, 200)));
        list.insert(Region::new("chr1".into(), interval(400, 500)));

        assert!(list.overlaps("chr1", &interval(150, 160)));
        assert!(list.overlaps("chr1", &interval(199, 400)));
        assert!(!list.overlaps("chr1", &interval(200, 400)));
        assert!(!list.overlaps("chr1", &interval(500, 600)));
        assert!(!list.overlaps("chr2", &interval(150, 160)));
    }

    #[test]
    fn test_entry_without_intervals_matches_nothing() {
        let mut list = RegionList::new();
        list.add_sequence("chr1".into());

        assert!(!list.get("chr1").unwrap().has_intervals());
        assert!(!list.overlaps("chr1", &interval(0, 100)));
    }

    #[test]
    fn test_matches_with_absent_list() {
        assert!(matches(None, "chr1", &interval(0, 100)));

        let mut list = RegionList::new();
        list.insert(Region::new("chr1".into(), interval(50, 60)));
        assert!(matches(Some(&list), "chr1", &interval(0, 100)));
        assert!(!matches(Some(&list), "chr2", &interval(0, 100)));
    }
}
