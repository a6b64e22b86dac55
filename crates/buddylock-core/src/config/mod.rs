//! Tunable constants shared across the workspace

pub mod consts;
