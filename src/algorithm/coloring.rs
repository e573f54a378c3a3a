//! Bounded random coloring of cells within each region
//!
//! Every region receives a single palette color applied to a random subset of
//! its cells. The palette cursor advances once per region, so neighbouring
//! region ids rotate through the palette.

use rand::Rng;
use rand::seq::index;

use crate::algorithm::regions::RegionMembers;
use crate::spatial::grid::CellGrid;

/// Per-region limits on the number of colored cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionBounds {
    /// Regions with at least this many cells get at least this many colored
    pub min_per_region: usize,
    /// Upper limit on colored cells per region (`None` = unbounded)
    pub max_per_region: Option<usize>,
}

impl RegionBounds {
    /// Number of cells to color in a region of `size` cells, given a random draw
    ///
    /// `upper_random` is the uniform draw from `[0, max(1, size - 1))`.
    pub fn colored_count(&self, size: usize, upper_random: usize) -> usize {
        let count = self.min_per_region.min(size).max(upper_random);
        let count = self.max_per_region.map_or(count, |max| count.min(max));
        count.min(size)
    }
}

/// Palette color (1-based) given to the region processed at `cursor`
pub const fn palette_color(cursor: usize, palette_len: usize) -> u32 {
    (cursor % palette_len) as u32 + 1
}

/// Color a bounded random subset of each region's cells
///
/// Regions are processed in ascending id order. The palette cursor starts at
/// `palette_len` and advances for every region, including regions that end
/// up with no colored cells. Returns the number of cells colored per region.
pub fn assign_colors<R: Rng + ?Sized>(
    cells: &mut CellGrid,
    regions: &RegionMembers,
    palette_len: usize,
    bounds: RegionBounds,
    rng: &mut R,
) -> Vec<usize> {
    let palette_len = palette_len.max(1);
    let mut colored = Vec::with_capacity(regions.len());

    for (offset, members) in regions.iter().enumerate() {
        let size = members.len();
        let upper_random = rng.random_range(0..size.saturating_sub(1).max(1));
        let count = bounds.colored_count(size, upper_random);

        if count > 0 {
            let color = palette_color(palette_len + offset, palette_len);
            for chosen in index::sample(rng, size, count) {
                if let Some(cell) = members.get(chosen).and_then(|&pos| cells.get_mut(pos)) {
                    cell.color = color;
                }
            }
        }

        colored.push(count);
    }

    colored
}
