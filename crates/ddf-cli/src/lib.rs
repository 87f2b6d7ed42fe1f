//! Library surface of the DDF adaptor CLI: logging setup and the export
//! operations the binary dispatches to.

pub mod export;
pub mod logging;
