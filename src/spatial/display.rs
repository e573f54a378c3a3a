//! Plain-text rendering of vertex and cell grids for debugging

use ndarray::Array2;

use crate::spatial::grid::{Cell, CellGrid, VertexGrid};

/// Width of a formatted value column
const COLUMN_WIDTH: usize = 3;

/// Cell attribute selected for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellField {
    /// Region ids
    Region,
    /// Palette color indices
    Color,
}

impl CellField {
    const fn select(self, cell: &Cell) -> u32 {
        match self {
            Self::Region => cell.region,
            Self::Color => cell.color,
        }
    }
}

/// Format the vertex visit orders, top row first
pub fn format_vertices(vertices: &VertexGrid) -> String {
    format_grid(vertices, |&order| order)
}

/// Format one field of every cell, top row first
pub fn format_cells(cells: &CellGrid, field: CellField) -> String {
    format_grid(cells, |cell| field.select(cell))
}

// y grows upwards, so the last row is printed first
fn format_grid<T>(grid: &Array2<T>, value: impl Fn(&T) -> u32) -> String {
    let (cols, rows) = grid.dim();
    let mut output = String::new();

    for y in (0..rows).rev() {
        let line: String = (0..cols)
            .filter_map(|x| grid.get([x, y]))
            .map(|item| format!("{:<width$}", value(item), width = COLUMN_WIDTH))
            .collect();
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output
}
