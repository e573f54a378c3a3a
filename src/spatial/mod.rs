//! Spatial data structures and grid formatting
//!
//! This module contains spatial-related functionality including:
//! - Grid allocation for vertices and cells
//! - Debug formatting of grids

/// Debug formatting of vertex and cell grids
pub mod display;
/// Grid allocation and the cell data model
pub mod grid;

pub use grid::{Cell, CellGrid, VertexGrid};
