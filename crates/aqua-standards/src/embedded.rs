//! Embedded reference data.
//!
//! The locality table is compiled in with `include_str!()` so the cleaner has
//! no runtime path resolution for its defaults.

/// Named coastal localities followed by broader sea/ocean regions, in match
/// priority order.
pub const LOCALITIES_CSV: &str = include_str!("../data/localities.csv");
