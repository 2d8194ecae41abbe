//! # regidx
//!
//! `regidx` is the region-list subsystem of a genomic-data indexing stack:
//! a small in-memory representation of named genomic regions (e.g.
//! `"chr1:100-200"`) together with the per-region interval sets used to
//! scope range queries against indexed sequence files.
//!
//! The crate centers on the ownership discipline of the two-level
//! [`RegionList`] container: the list owns its entries, each entry owns its
//! lazily allocated interval set, and teardown is a single consuming
//! [`RegionList::release`] (or implicit `Drop`) that reclaims the whole tree
//! exactly once. Absence is explicit at both levels — `Option<RegionList>`
//! for "no regions specified, match everything" and a `None` interval set
//! for "entry registered, no intervals discovered yet".
//!
//! ## Key Features
//!
//! * **Owning region lists**: [`RegionList`] / [`RegionEntry`] with
//!   intrinsic length, by-name lookup and insertion-order iteration.
//! * **Query parsing**: [`Region`] parses the conventional 1-based query
//!   syntax (`chr1`, `chr1:100-200`, `chr1:100-`, `{name:with:colons}:1-5`,
//!   comma-grouped digits) into 0-based half-open [`Interval`]s.
//! * **Scoping queries**: overlap checks per entry and per list, plus the
//!   absent-list rule via [`matches`].
//! * **Explicit release**: [`release`] tears down a possibly-absent list and
//!   reports what was reclaimed ([`ReleaseStats`]).
//!
//! ## Usage
//!
//! ```
//! use regidx::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let list = RegionList::from_queries(["chr1:100-200", "chr1:500-", "chr2"])?;
//!
//!     assert!(list.overlaps("chr1", &Interval::new(150, 160)));
//!     assert!(!list.overlaps("chr3", &Interval::new(150, 160)));
//!
//!     // An absent list scopes nothing out.
//!     assert!(matches(None, "chr3", &Interval::new(0, 10)));
//!
//!     let stats = release(Some(list));
//!     assert_eq!(stats.entries, 2);
//!     Ok(())
//! }
//! ```

pub mod data_structs;
pub mod prelude;

pub use data_structs::typedef::RegSmallStr;
pub use data_structs::{
    Interval,
    Region,
    RegionEntry,
    RegionList,
    ReleaseStats,
};
