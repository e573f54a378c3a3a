//! Tests for the randomized vertex walk and its neighbor restriction

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};
    use randopanel::algorithm::path::{PathError, PathGenerator, candidate_neighbors};
    use randopanel::spatial::grid::{VertexGrid, vertex_grid_for};

    // Orders 1..=length each appear once, start and end at the corners and step one unit at a time
    fn assert_valid_path(vertices: &VertexGrid, length: u32) {
        let (cols, rows) = vertices.dim();
        let mut positions: Vec<Option<[usize; 2]>> = vec![None; length as usize];

        for ((x, y), &order) in vertices.indexed_iter() {
            if order == 0 {
                continue;
            }
            assert!(order <= length, "order {order} beyond path length {length}");
            let slot = &mut positions[order as usize - 1];
            assert!(slot.is_none(), "order {order} appears twice");
            *slot = Some([x, y]);
        }

        let positions: Vec<[usize; 2]> = positions.into_iter().flatten().collect();
        assert_eq!(positions.len(), length as usize, "missing orders");
        assert_eq!(positions.first(), Some(&[0, 0]));
        assert_eq!(positions.last(), Some(&[cols - 1, rows - 1]));

        for step in positions.windows(2) {
            let distance = step[0][0].abs_diff(step[1][0]) + step[0][1].abs_diff(step[1][1]);
            assert_eq!(distance, 1, "orders not adjacent: {step:?}");
        }
    }

    // Tests the neighbor filter in the corners, along the edges and in the interior
    // Verified by allowing downward steps on the right edge
    #[test]
    fn test_candidate_neighbors_respect_escape_rules() {
        let max = [3, 3];

        assert_eq!(candidate_neighbors([0, 0], max), vec![[1, 0], [0, 1]]);
        assert_eq!(
            candidate_neighbors([1, 1], max),
            vec![[2, 1], [1, 2], [1, 0], [0, 1]]
        );
        // Right edge: up, and left because the top is not reached
        assert_eq!(candidate_neighbors([3, 1], max), vec![[3, 2], [2, 1]]);
        // Top edge: right, and down because the right edge is not reached
        assert_eq!(candidate_neighbors([1, 3], max), vec![[2, 3], [1, 2]]);
        // Bottom edge never offers a downward step
        assert_eq!(
            candidate_neighbors([2, 0], max),
            vec![[3, 0], [2, 1], [1, 0]]
        );
        assert_eq!(candidate_neighbors([3, 3], max), Vec::<[usize; 2]>::new());
    }

    // Tests generated paths satisfy the path invariant across shapes and seeds
    // Verified by skipping the undo on backtrack
    #[test]
    fn test_generate_produces_valid_paths() {
        for dims in [(1, 1), (2, 1), (1, 3), (3, 3), (4, 4), (6, 3), (6, 6)] {
            for seed in 0..20 {
                let mut rng = StdRng::seed_from_u64(seed);
                let mut vertices = vertex_grid_for(dims);
                let mut generator = PathGenerator::new(usize::MAX);

                let length = generator
                    .generate(&mut vertices, &mut rng)
                    .unwrap_or_else(|e| unreachable!("unbounded search failed: {e:?}"));

                assert_valid_path(&vertices, length);
                assert!(generator.marks() >= length as usize);
            }
        }
    }

    // Tests a single cell panel always yields a three-vertex corner path
    // Verified by requiring every vertex to be visited
    #[test]
    fn test_single_cell_path_visits_three_corners() {
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut vertices = vertex_grid_for((1, 1));

            let length = PathGenerator::new(100).generate(&mut vertices, &mut rng);

            assert_eq!(length, Ok(3));
            assert_eq!(vertices.get([0, 0]).copied(), Some(1));
            assert_eq!(vertices.get([1, 1]).copied(), Some(3));

            let mut orders: Vec<u32> = vertices.iter().copied().collect();
            orders.sort_unstable();
            assert_eq!(orders, vec![0, 1, 2, 3]);
        }
    }

    // Tests running out of budget reports the overrun and leaves the grid cleared
    // Verified by returning NoPath on budget overrun
    #[test]
    fn test_budget_overrun_clears_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut vertices = vertex_grid_for((3, 3));
        let mut generator = PathGenerator::new(2);

        let result = generator.generate(&mut vertices, &mut rng);

        assert_eq!(result, Err(PathError::BudgetExceeded));
        assert!(vertices.iter().all(|&order| order == 0));
    }

    // Tests a generator can be reused and clears the previous path first
    // Verified by skipping the initial grid reset
    #[test]
    fn test_generate_reuses_grid() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut vertices = vertex_grid_for((4, 3));
        let mut generator = PathGenerator::new(usize::MAX);

        for _ in 0..5 {
            let length = generator
                .generate(&mut vertices, &mut rng)
                .unwrap_or_else(|e| unreachable!("unbounded search failed: {e:?}"));
            assert_valid_path(&vertices, length);
        }
    }

    // Tests identical seeds walk identical paths
    // Verified by seeding the shuffle from thread randomness
    #[test]
    fn test_generate_is_deterministic_per_seed() {
        let walk = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut vertices = vertex_grid_for((5, 5));
            let length = PathGenerator::new(usize::MAX).generate(&mut vertices, &mut rng);
            (length, vertices)
        };

        assert_eq!(walk(2024), walk(2024));
    }
}
