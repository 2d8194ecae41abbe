use std::fmt::Display;
use std::str::FromStr;

use anyhow::{
    bail,
    ensure,
    Context,
};
use serde::{
    Deserialize,
    Serialize,
};

use super::interval::Interval;
use crate::data_structs::typedef::{
    PosType,
    RegSmallStr,
};

/// A single named region query: one sequence name and one interval on it.
///
/// This is the unit produced by parsing query strings such as
/// `"chr1:100-200"` and consumed by
/// [`RegionList`](crate::data_structs::RegionList) construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    seqname:  RegSmallStr,
    interval: Interval,
}

impl Region {
    /// Creates a new `Region`.
    pub fn new(
        seqname: RegSmallStr,
        interval: Interval,
    ) -> Self {
        Self { seqname, interval }
    }

    /// A region covering an entire sequence.
    pub fn whole_seq(seqname: RegSmallStr) -> Self {
        Self::new(seqname, Interval::whole())
    }

    /// Returns the sequence name.
    pub fn seqname(&self) -> &RegSmallStr {
        &self.seqname
    }

    /// Returns the interval.
    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn into_parts(self) -> (RegSmallStr, Interval) {
        (self.seqname, self.interval)
    }
}

/// Parses one 1-based, comma-grouped position.
fn parse_pos(s: &str) -> anyhow::Result<PosType> {
    let cleaned: String = s.chars().filter(|c| *c != ',').collect();
    ensure!(!cleaned.is_empty(), "Empty position in region query");
    cleaned
        .parse::<PosType>()
        .with_context(|| format!("Invalid position {:?} in region query", s))
}

impl FromStr for Region {
    type Err = anyhow::Error;

    /// Parses the conventional indexed-file query syntax.
    ///
    /// Positions on input are 1-based inclusive and are converted to the
    /// 0-based half-open representation of [`Interval`]:
    ///
    /// - `chr1` — the whole sequence
    /// - `chr1:100` — a single position
    /// - `chr1:100-200`
    /// - `chr1:100-` — open end
    /// - `chr1:-200` — open start
    /// - `{name:with:colons}:100-200` — braces shield names containing `:`
    ///
    /// Digit groups may contain `,` separators (`chr1:1,000-2,000`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, range) = if let Some(rest) = s.strip_prefix('{') {
            let (name, tail) = rest
                .split_once('}')
                .with_context(|| format!("Unclosed '{{' in region query {:?}", s))?;
            match tail {
                "" => (name, None),
                _ => {
                    let range = tail.strip_prefix(':').with_context(|| {
                        format!("Expected ':' after '}}' in region query {:?}", s)
                    })?;
                    (name, Some(range))
                },
            }
        }
        else {
            // The last ':' separates name from range, so names like
            // "HLA-DRB1*10:01" must be brace-quoted to be queried whole.
            match s.rsplit_once(':') {
                Some((name, range)) => (name, Some(range)),
                None => (s, None),
            }
        };

        ensure!(!name.is_empty(), "Empty sequence name in region query {:?}", s);
        let seqname = RegSmallStr::from(name);

        let range = match range {
            None => return Ok(Self::whole_seq(seqname)),
            Some("") => bail!("Empty range in region query {:?}", s),
            Some(range) => range,
        };

        let interval = if let Some(end) = range.strip_prefix('-') {
            Interval::new(0, parse_pos(end)?)
        }
        else if let Some((start, end)) = range.split_once('-') {
            let start = parse_pos(start)?;
            ensure!(start >= 1, "Position 0 in region query {:?} (positions are 1-based)", s);
            let end = match end {
                "" => PosType::MAX,
                _ => parse_pos(end)?,
            };
            ensure!(
                end >= start,
                "End position is less than start in region query {:?}",
                s
            );
            Interval::new(start - 1, end)
        }
        else {
            let pos = parse_pos(range)?;
            ensure!(pos >= 1, "Position 0 in region query {:?} (positions are 1-based)", s);
            Interval::new(pos - 1, pos)
        };

        Ok(Self::new(seqname, interval))
    }
}

impl Display for Region {
    /// Renders the region back in 1-based query syntax.
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        if self.seqname.contains(':') {
            write!(f, "{{{}}}", self.seqname)?;
        }
        else {
            write!(f, "{}", self.seqname)?;
        }
        if self.interval == Interval::whole() {
            return Ok(());
        }
        write!(f, ":{}", self.interval.start() + 1)?;
        if self.interval.end() == PosType::MAX {
            write!(f, "-")
        }
        else if self.interval.length() != 1 {
            write!(f, "-{}", self.interval.end())
        }
        else {
            Ok(())
        }
    }
}
