//! Generation constants and runtime configuration defaults

// Default request values, used when a parameter is not supplied
/// Panel dimensions (columns, rows) when none are requested
pub const DEFAULT_DIMENSIONS: (usize, usize) = (4, 4);
/// Palette names when no colors are requested
pub const DEFAULT_PALETTE: [&str; 2] = ["white", "black"];
/// Minimum number of colored cells per region
pub const DEFAULT_MIN_PER_REGION: usize = 0;
/// Number of panels generated per invocation
pub const DEFAULT_PANEL_COUNT: usize = 1;

// The vertex walk backtracks exponentially in the worst case
/// Largest accepted panel dimension on either axis
pub const MAX_PANEL_DIMENSION: usize = 16;

/// Vertex marks allowed in one path search attempt before restarting
pub const PATH_SEARCH_BUDGET: usize = 10_000;

/// Path search attempts before generation gives up
pub const MAX_PATH_ATTEMPTS: usize = 64;

/// Largest panel dimension accepted in a descriptor for rendering
pub const MAX_RENDER_DIMENSION: usize = 64;

// Descriptor grammar
/// Shape discriminator written at the head of every descriptor
pub const PANEL_SHAPE: &str = "square";
/// Separator between cell tokens within a row
pub const CELL_DELIMITER: &str = ",";
/// Separator between rows
pub const ROW_DELIMITER: &str = "-";
/// Separator between icon and palette names
pub const NAME_DELIMITER: &str = ",";
/// Separator between the icon flag and the color index in a cell token
pub const COLOR_MARKER: char = 'c';

// Raster layout, in pixels
/// Height and width of a rendered icon
pub const CELL_SIZE_PX: u32 = 58;
/// Offset from the image edge to the first row and column
pub const EDGE_SIZE_PX: u32 = 64;
/// Distance between the origins of neighbouring cells
pub const GAP_SIZE_PX: u32 = 82;

// Progress bar display settings
/// Panels generated before the progress bar is shown
pub const MAX_INDIVIDUAL_PROGRESS_PANELS: usize = 1;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Build the default palette as a freshly owned list
pub fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|&name| name.to_string()).collect()
}

/// Pixel size of a rendered panel along one axis, if it fits in a `u32`
pub fn image_size(cells: usize) -> Option<u32> {
    u32::try_from(cells)
        .ok()?
        .checked_mul(GAP_SIZE_PX)?
        .checked_add(2 * EDGE_SIZE_PX - (GAP_SIZE_PX - CELL_SIZE_PX))
}
