/// Bounded random coloring of region cells
pub mod coloring;
/// Randomized depth-first walk over panel vertices
pub mod path;
/// Seeded end-to-end generation pipeline
pub mod pipeline;
/// Flood-fill region partitioning bounded by the vertex path
pub mod regions;
