//! Randomized decorative panel generation
//!
//! A random corner-to-corner walk over the vertices of a cell grid acts as a
//! set of internal walls. The walls split the cells into irregular regions,
//! and a bounded random subset of every region is colored from a palette.
//! The result is encoded as a compact descriptor that can be rendered to PNG.

#![forbid(unsafe_code)]

/// Core generation: vertex path, regions, coloring and the seeded pipeline
pub mod algorithm;
/// Input/output operations, rendering and error handling
pub mod io;
/// Grid allocation and debug formatting
pub mod spatial;

pub use algorithm::pipeline::{Panel, PanelGenerator, PanelRequest, generate};
pub use io::error::{AlgorithmError, Result};
