//! Randomized depth-first walk over panel vertices
//!
//! The walk starts at corner `(0, 0)` with order 1 and stops as soon as it
//! reaches the opposite corner. Neighbor candidates are restricted so that a
//! partial path can always escape towards the terminal corner: the walk never
//! steps down along the right edge or left along the top edge.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::spatial::grid::{VertexGrid, max_position};

/// Reasons a walk attempt stops without reaching the terminal corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// Every candidate from the start vertex was explored
    NoPath,

    /// The attempt marked more vertices than its budget allows
    ///
    /// The attempt can be retried from an empty grid.
    BudgetExceeded,
}

/// Backtracking vertex walk with a per-attempt mark budget
#[derive(Debug, Clone)]
pub struct PathGenerator {
    budget: usize,
    marks: usize,
}

impl PathGenerator {
    /// Create a generator allowing `budget` vertex marks per attempt
    pub const fn new(budget: usize) -> Self {
        Self { budget, marks: 0 }
    }

    /// Vertex marks made by the last attempt, backtracked ones included
    pub const fn marks(&self) -> usize {
        self.marks
    }

    /// Clear `vertices` and walk a fresh path from `(0, 0)` to the far corner
    ///
    /// On success the grid holds visit orders `1..=length` along the path and
    /// 0 everywhere else, and the path length is returned. On failure the grid
    /// is left cleared.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::BudgetExceeded`] when the attempt runs out of
    /// budget, and [`PathError::NoPath`] if the search space is exhausted.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        vertices: &mut VertexGrid,
        rng: &mut R,
    ) -> Result<u32, PathError> {
        vertices.fill(0);
        self.marks = 0;

        let result = self.walk(vertices, [0, 0], 1, rng);
        match result {
            Ok(length) => debug!(
                "Vertex path of length {length} found after {} marks",
                self.marks
            ),
            Err(error) => {
                debug!("Vertex walk stopped after {} marks: {error:?}", self.marks);
                vertices.fill(0);
            }
        }
        result
    }

    fn walk<R: Rng + ?Sized>(
        &mut self,
        vertices: &mut VertexGrid,
        position: [usize; 2],
        order: u32,
        rng: &mut R,
    ) -> Result<u32, PathError> {
        self.marks += 1;
        if self.marks > self.budget {
            return Err(PathError::BudgetExceeded);
        }

        if let Some(vertex) = vertices.get_mut(position) {
            *vertex = order;
        }

        let terminal = max_position(vertices);
        if position == terminal {
            return Ok(order);
        }

        let mut candidates = candidate_neighbors(position, terminal);
        candidates.shuffle(rng);

        for next in candidates {
            if vertices.get(next).copied() != Some(0) {
                continue;
            }
            match self.walk(vertices, next, order + 1, rng) {
                Ok(length) => return Ok(length),
                Err(PathError::NoPath) => {}
                Err(error) => return Err(error),
            }
        }

        // Undo the mark so siblings see the grid as it was before this call
        if let Some(vertex) = vertices.get_mut(position) {
            *vertex = 0;
        }
        Err(PathError::NoPath)
    }
}

/// Neighbor vertices the walk may step to from `position`
///
/// Right and up are allowed whenever they stay on the grid. Down is only
/// allowed away from the right edge and left only away from the top edge,
/// which keeps the terminal corner reachable from any partial path.
pub fn candidate_neighbors(position: [usize; 2], max: [usize; 2]) -> Vec<[usize; 2]> {
    let [x, y] = position;
    let mut candidates = Vec::with_capacity(4);

    if x != max[0] {
        candidates.push([x + 1, y]);
    }
    if y != max[1] {
        candidates.push([x, y + 1]);
    }
    if x != max[0] && y != 0 {
        candidates.push([x, y - 1]);
    }
    if y != max[1] && x != 0 {
        candidates.push([x - 1, y]);
    }

    candidates
}
