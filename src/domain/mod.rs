//! Domain layer - Pure scoring logic and the Decision aggregate.
//!
//! Nothing here performs I/O. The only async code is the share slug retry
//! loop, which awaits callbacks supplied by the caller.

pub mod analysis;
pub mod decision;
pub mod foundation;
pub mod sharing;
