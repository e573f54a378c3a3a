//! End-to-end panel generation driven by a single seeded random source
//!
//! The stages run in a fixed order, all drawing from the same `StdRng`:
//! vertex walk, region partition, region coloring. The same seed and request
//! therefore always yield the same descriptor.

use log::debug;
use rand::{SeedableRng, rngs::StdRng};

use crate::algorithm::coloring::{RegionBounds, assign_colors};
use crate::algorithm::path::{PathError, PathGenerator};
use crate::algorithm::regions::{RegionMembers, partition_regions};
use crate::io::configuration::{
    DEFAULT_DIMENSIONS, DEFAULT_MIN_PER_REGION, MAX_PANEL_DIMENSION, MAX_PATH_ATTEMPTS,
    PANEL_SHAPE, PATH_SEARCH_BUDGET,
};
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::io::palette::Palette;
use crate::io::placement::Descriptor;
use crate::spatial::grid::{CellGrid, VertexGrid, cell_grid_for, vertex_grid_for};

/// Validated parameters of a single panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRequest {
    /// Panel size in cells (columns, rows)
    pub dimensions: (usize, usize),
    /// Colors available to the regions
    pub palette: Palette,
    /// Limits on colored cells per region
    pub bounds: RegionBounds,
}

impl PanelRequest {
    /// Create a request, checking the panel size
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is 0 or larger than
    /// [`MAX_PANEL_DIMENSION`]
    pub fn new(
        dimensions: (usize, usize),
        palette: Palette,
        min_per_region: usize,
        max_per_region: Option<usize>,
    ) -> Result<Self> {
        for (parameter, value) in [("width", dimensions.0), ("height", dimensions.1)] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be 1 or greater"));
            }
            if value > MAX_PANEL_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must not exceed {MAX_PANEL_DIMENSION}"),
                ));
            }
        }

        Ok(Self {
            dimensions,
            palette,
            bounds: RegionBounds {
                min_per_region,
                max_per_region,
            },
        })
    }
}

impl Default for PanelRequest {
    fn default() -> Self {
        Self {
            dimensions: DEFAULT_DIMENSIONS,
            palette: Palette::default(),
            bounds: RegionBounds {
                min_per_region: DEFAULT_MIN_PER_REGION,
                max_per_region: None,
            },
        }
    }
}

/// A generated panel with every intermediate structure kept for inspection
#[derive(Debug, Clone)]
pub struct Panel {
    /// Visit orders of the vertex path
    pub vertices: VertexGrid,
    /// Number of vertices on the path
    pub path_length: u32,
    /// Region and color of every cell
    pub cells: CellGrid,
    /// Member cells of each region, region 1 first
    pub regions: RegionMembers,
    /// Number of colored cells in each region, region 1 first
    pub colored: Vec<usize>,
    /// Palette the colors refer to
    pub palette: Palette,
}

impl Panel {
    /// Panel size in cells (columns, rows)
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Number of regions the path carved out
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Descriptor handed to the renderer
    pub fn descriptor(&self) -> Descriptor {
        Descriptor::from_cells(PANEL_SHAPE, self.palette.names(), &self.cells)
    }
}

/// Seeded panel generator
pub struct PanelGenerator {
    rng: StdRng,
    path_generator: PathGenerator,
    max_attempts: usize,
}

impl PanelGenerator {
    /// Create a generator with the default search limits
    pub fn new(seed: u64) -> Self {
        Self::with_search_limits(seed, PATH_SEARCH_BUDGET, MAX_PATH_ATTEMPTS)
    }

    /// Create a generator with a custom path budget and attempt limit
    pub fn with_search_limits(seed: u64, budget: usize, max_attempts: usize) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            path_generator: PathGenerator::new(budget),
            max_attempts,
        }
    }

    /// Generate one panel
    ///
    /// Consecutive calls continue the same random stream, so a generator
    /// yields a reproducible sequence of panels.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::PathExhausted`] if no vertex path is found
    /// within the attempt limit
    pub fn generate(&mut self, request: &PanelRequest) -> Result<Panel> {
        let (vertices, path_length) = self.walk_vertices(request.dimensions)?;

        let mut cells = cell_grid_for(request.dimensions);
        let regions = partition_regions(&mut cells, &vertices);
        debug!(
            "{}x{} panel split into {} region(s)",
            request.dimensions.0,
            request.dimensions.1,
            regions.len()
        );

        let colored = assign_colors(
            &mut cells,
            &regions,
            request.palette.len(),
            request.bounds,
            &mut self.rng,
        );

        Ok(Panel {
            vertices,
            path_length,
            cells,
            regions,
            colored,
            palette: request.palette.clone(),
        })
    }

    fn walk_vertices(&mut self, dimensions: (usize, usize)) -> Result<(VertexGrid, u32)> {
        let mut vertices = vertex_grid_for(dimensions);

        for attempt in 1..=self.max_attempts {
            match self.path_generator.generate(&mut vertices, &mut self.rng) {
                Ok(length) => return Ok((vertices, length)),
                Err(PathError::BudgetExceeded) => {
                    debug!("Path attempt {attempt} ran out of budget, restarting");
                }
                Err(PathError::NoPath) => {
                    return Err(AlgorithmError::PathExhausted {
                        vertex_dimensions: vertices.dim(),
                        attempts: attempt,
                    });
                }
            }
        }

        Err(AlgorithmError::PathExhausted {
            vertex_dimensions: vertices.dim(),
            attempts: self.max_attempts,
        })
    }
}

/// Generate the descriptor string of one panel
///
/// # Errors
///
/// Returns an error if path generation fails
pub fn generate(request: &PanelRequest, seed: u64) -> Result<String> {
    let panel = PanelGenerator::new(seed).generate(request)?;
    Ok(panel.descriptor().to_string())
}
