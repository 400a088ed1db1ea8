//! A multi-strategy solver for rearranging pieces on a small finite grid.
//!
//! A start configuration is transformed into a target configuration via legal
//! piece moves; six interchangeable search strategies share the same board
//! model, move generator and visited-set layers.

pub mod board;
pub mod core;
pub mod puzzle;
pub mod rules;
pub mod scenarios;
pub mod search;
