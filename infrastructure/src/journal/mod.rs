//! Journal store
//!
//! File-system plumbing around the solver: daily and weekly log files, the
//! monthly aggregation that seeds a solver run's context, and summary
//! persistence. Two directory layouts are supported — a flat folder of
//! markdown files and a Logseq graph (journals/ and pages/).

pub mod aggregate;
pub mod daily;
pub mod store;
pub mod summary;
pub mod weekly;
