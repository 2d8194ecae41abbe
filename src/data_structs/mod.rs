//! Core data structures for representing named genomic regions and the
//! interval sets that scope range queries.
//!
//! Key components of this module include:
//!
//! - [`Interval`]: a half-open coordinate range within a single sequence.
//! - [`Region`]: one named query, with parsing from and rendering to the
//!   conventional `"chr1:100-200"` syntax.
//! - [`RegionEntry`] and [`RegionList`]: the owning container handed to
//!   query executors, together with its release protocol ([`release`],
//!   [`ReleaseStats`]) and the absent-list query rule ([`matches`]).
//! - [`typedef`]: type aliases for positions and sequence names.

mod interval;
mod region;
mod region_list;
pub mod typedef;

#[cfg(test)]
mod tests;

pub use interval::Interval;
pub use region::Region;
pub use region_list::{
    matches,
    release,
    RegionEntry,
    RegionList,
    ReleaseStats,
};
