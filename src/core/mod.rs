//! Core value types shared by the board model and the search layers.

pub mod coord;
