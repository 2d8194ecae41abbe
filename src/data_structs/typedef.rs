use smallstr::SmallString;

pub const SMALLSTR_SIZE: usize = 20;

/// Inline-allocated sequence name. Typical contig names ("chr1",
/// "NC_000001.11") fit without touching the heap.
pub type RegSmallStr = SmallString<[u8; SMALLSTR_SIZE]>;

/// Coordinate type for positions within a sequence.
pub type PosType = u32;
