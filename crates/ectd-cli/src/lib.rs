//! Library components of the `ectd-generate` command line tool.

pub mod input;
pub mod logging;
pub mod tree;
