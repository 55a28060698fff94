//! Cexplain - GCC diagnostic explainer for novice C programmers
//!
//! This library provides the diagnostic resolution engine: raw output
//! from a failed remote compile is segmented into individual
//! diagnostics, classified against an ordered table of known failure
//! patterns, and rewritten into a localized explanation plus a
//! suggested fix. An independent line scanner flags common beginner
//! mistakes without compiling at all.
//!
//! The two engine entry points are [`classifier::classify`] and
//! [`scanner::scan_mistakes`]; both are pure, synchronous and safe to
//! call concurrently. All I/O lives behind [`compile::CompileService`].

pub mod classifier;
pub mod cli;
pub mod compile;
pub mod rules;
pub mod scanner;
pub mod segmenter;
pub mod substitutor;
pub mod wandbox;
