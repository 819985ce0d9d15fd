//! Process-level helpers.
//!
//! Setup that embedding processes and test harnesses call once.

pub mod bootstrap;
