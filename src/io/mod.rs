//! Input/output: command line, descriptors, rendering and ambient concerns

/// Command-line parsing and panel processing
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Logger initialization
pub mod logging;
/// Palette handling and color resolution
pub mod palette;
/// Placement strings and descriptor parsing
pub mod placement;
/// Progress display for multi-panel runs
pub mod progress;
/// Rasterization of descriptors into images
pub mod render;
