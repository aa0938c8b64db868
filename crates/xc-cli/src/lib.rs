//! Library side of the `xc` command-line scorer.

pub mod adjust;
pub mod logging;
