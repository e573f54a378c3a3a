//! Grid allocation and the cell/vertex data model
//!
//! Both grids are indexed `[x, y]` with `x` running left to right and `y`
//! running bottom to top. The vertex grid is one unit larger than the cell
//! grid on each axis, so vertex `[x, y]` is the bottom-left corner of cell
//! `[x, y]`.

use ndarray::Array2;
use num_traits::Zero;

/// Visit orders of the vertex walk (0 = unvisited)
pub type VertexGrid = Array2<u32>;

/// Region and color assignments for every panel cell
pub type CellGrid = Array2<Cell>;

/// A single panel cell
///
/// `region == 0` only while regions are being discovered; `color == 0`
/// means the cell stays blank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    /// Region id, starting from 1
    pub region: u32,
    /// Palette index, starting from 1 (0 = no icon)
    pub color: u32,
}

/// Allocate a `dims.0 x dims.1` grid holding a clone of `fill` in every slot
pub fn make_grid<T: Clone>(dims: (usize, usize), fill: T) -> Array2<T> {
    Array2::from_elem(dims, fill)
}

/// Allocate a grid filled with the numeric zero of `T`
pub fn zeroed_grid<T: Zero + Clone>(dims: (usize, usize)) -> Array2<T> {
    Array2::zeros(dims)
}

/// Allocate an empty vertex grid for a panel of `dims` cells
pub fn vertex_grid_for(dims: (usize, usize)) -> VertexGrid {
    zeroed_grid((dims.0 + 1, dims.1 + 1))
}

/// Allocate an unassigned cell grid for a panel of `dims` cells
pub fn cell_grid_for(dims: (usize, usize)) -> CellGrid {
    make_grid(dims, Cell::default())
}

/// Largest valid `[x, y]` index of a grid (saturates to `[0, 0]` when empty)
pub fn max_position<T>(grid: &Array2<T>) -> [usize; 2] {
    let (cols, rows) = grid.dim();
    [cols.saturating_sub(1), rows.saturating_sub(1)]
}
