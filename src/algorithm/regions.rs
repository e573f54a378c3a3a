//! Flood-fill partitioning of panel cells into regions bounded by the vertex path

use crate::spatial::grid::{CellGrid, VertexGrid};

/// Flood-fill directions, tried in this order from every cell
pub const DIRECTIONS: [[isize; 2]; 4] = [[1, 0], [0, 1], [-1, 0], [0, -1]];

/// Cells of each region, where entry `i` holds the members of region `i + 1`
pub type RegionMembers = Vec<Vec<[usize; 2]>>;

/// The two vertices bounding the edge crossed when leaving `cell` along `direction`
pub const fn wall_vertices(cell: [usize; 2], direction: [isize; 2]) -> [[usize; 2]; 2] {
    let [x, y] = cell;
    let [dx, dy] = direction;

    // Top-right corner for right/up moves, bottom-left otherwise
    let first = if dx == 1 || dy == 1 { [x + 1, y + 1] } else { [x, y] };
    // Top-left corner for up/left moves, bottom-right otherwise
    let second = if dx - dy == -1 { [x, y + 1] } else { [x + 1, y] };

    [first, second]
}

/// Whether the vertex path runs along the edge crossed when leaving `cell`
pub fn is_path_wall(vertices: &VertexGrid, cell: [usize; 2], direction: [isize; 2]) -> bool {
    let [first, second] = wall_vertices(cell, direction);
    let a = vertices.get(first).copied().unwrap_or(0);
    let b = vertices.get(second).copied().unwrap_or(0);

    a != 0 && b != 0 && a.abs_diff(b) == 1
}

/// Assign a region id to every cell and collect the members of each region
///
/// Cells are scanned column by column (x ascending, then y ascending). The
/// first unassigned cell found starts the next region id, counting from 1.
/// Cells already carrying a region id are left untouched.
pub fn partition_regions(cells: &mut CellGrid, vertices: &VertexGrid) -> RegionMembers {
    let (cols, rows) = cells.dim();
    let mut regions: RegionMembers = Vec::new();

    for x in 0..cols {
        for y in 0..rows {
            let unassigned = cells.get([x, y]).is_some_and(|cell| cell.region == 0);
            if unassigned {
                let region_id = regions.len() as u32 + 1;
                regions.push(flood_region(cells, vertices, [x, y], region_id));
            }
        }
    }

    regions
}

fn flood_region(
    cells: &mut CellGrid,
    vertices: &VertexGrid,
    start: [usize; 2],
    region_id: u32,
) -> Vec<[usize; 2]> {
    let mut members = Vec::new();
    let mut pending = vec![start];

    if let Some(cell) = cells.get_mut(start) {
        cell.region = region_id;
    }

    while let Some(current) = pending.pop() {
        members.push(current);

        for direction in DIRECTIONS {
            if let Some(next) = crawl_target(cells, vertices, current, direction) {
                if let Some(cell) = cells.get_mut(next) {
                    cell.region = region_id;
                }
                pending.push(next);
            }
        }
    }

    members
}

// Neighbor reached from `current` along `direction`, if the move is allowed
fn crawl_target(
    cells: &CellGrid,
    vertices: &VertexGrid,
    current: [usize; 2],
    direction: [isize; 2],
) -> Option<[usize; 2]> {
    let x = current[0].checked_add_signed(direction[0])?;
    let y = current[1].checked_add_signed(direction[1])?;

    // Out of bounds or already assigned
    if cells.get([x, y])?.region != 0 {
        return None;
    }

    (!is_path_wall(vertices, current, direction)).then_some([x, y])
}
