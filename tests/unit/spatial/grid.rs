//! Tests for grid allocation and the cell data model

#[cfg(test)]
mod tests {
    use randopanel::spatial::grid::{
        Cell, cell_grid_for, make_grid, max_position, vertex_grid_for, zeroed_grid,
    };

    // Tests every slot holds its own copy of the fill value
    // Verified by sharing one cell between all slots
    #[test]
    fn test_make_grid_fills_independent_copies() {
        let fill = Cell {
            region: 3,
            color: 1,
        };
        let mut grid = make_grid((3, 2), fill);

        assert_eq!(grid.dim(), (3, 2));
        if let Some(cell) = grid.get_mut([1, 1]) {
            cell.color = 7;
        }

        assert_eq!(grid.get([1, 1]).map(|cell| cell.color), Some(7));
        assert_eq!(grid.get([0, 0]), Some(&fill));
        assert_eq!(grid.get([2, 1]), Some(&fill));
    }

    // Tests vertex grids are one larger than the panel on each axis and start unvisited
    // Verified by allocating the vertex grid at panel size
    #[test]
    fn test_vertex_grid_is_one_larger_and_unvisited() {
        let vertices = vertex_grid_for((4, 2));

        assert_eq!(vertices.dim(), (5, 3));
        assert!(vertices.iter().all(|&order| order == 0));
    }

    // Tests cell grids start with region and color both unassigned
    // Verified by defaulting cells to region 1
    #[test]
    fn test_cell_grid_starts_unassigned() {
        let cells = cell_grid_for((2, 3));

        assert_eq!(cells.dim(), (2, 3));
        assert!(cells.iter().all(|cell| *cell == Cell::default()));
        assert_eq!(Cell::default().region, 0);
        assert_eq!(Cell::default().color, 0);
    }

    // Tests max position is the last valid index on both axes
    // Verified by returning the dimensions instead of the last index
    #[test]
    fn test_max_position_is_last_index() {
        let grid = zeroed_grid::<u32>((3, 5));
        assert_eq!(max_position(&grid), [2, 4]);

        let single = zeroed_grid::<u32>((1, 1));
        assert_eq!(max_position(&single), [0, 0]);
    }
}
