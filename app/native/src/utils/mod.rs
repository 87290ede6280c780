//! Small cross-platform helpers.

pub mod thread;
