pub use crate::data_structs::typedef::{
    PosType,
    RegSmallStr,
};
pub use crate::data_structs::{
    matches,
    release,
    Interval,
    Region,
    RegionEntry,
    RegionList,
    ReleaseStats,
};
