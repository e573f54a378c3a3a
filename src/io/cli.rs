//! Command-line interface for generating and rendering panels

use crate::algorithm::pipeline::{Panel, PanelGenerator, PanelRequest};
use crate::io::configuration::{
    DEFAULT_DIMENSIONS, DEFAULT_MIN_PER_REGION, DEFAULT_PANEL_COUNT, PANEL_SHAPE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::palette::Palette;
use crate::io::placement::Descriptor;
use crate::io::progress::ProgressManager;
use crate::io::render::{load_icons, render, save_png};
use crate::spatial::display::{CellField, format_cells, format_vertices};
use clap::{Parser, ValueEnum};
use image::RgbaImage;
use log::info;
use rand::Rng;
use std::path::{Path, PathBuf};

/// Intermediate grid printed with `--show`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GridView {
    /// Vertex visit orders of the maze path
    Path,
    /// Region id of every cell
    Regions,
    /// Palette index of every cell
    Colors,
}

#[derive(Parser)]
#[command(name = "randopanel")]
#[command(
    author,
    version,
    about = "Generate decorative panels partitioned by a random maze path"
)]
/// Command-line arguments for the panel generator
pub struct Cli {
    /// Panel size in cells as "W,H" [default: 4,4]
    #[arg(short, long, value_parser = parse_dimensions)]
    pub dimensions: Option<(usize, usize)>,

    /// Comma-separated palette (names, +RRGGBB, +RGB or R-G-B) [default: white,black]
    #[arg(short, long)]
    pub colors: Option<String>,

    /// Minimum colored cells per region
    #[arg(long, default_value_t = DEFAULT_MIN_PER_REGION)]
    pub min: usize,

    /// Maximum colored cells per region (unbounded when omitted)
    #[arg(long)]
    pub max: Option<usize>,

    /// Random seed for reproducible generation (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of panels to generate, with consecutive seeds
    #[arg(short = 'n', long, default_value_t = DEFAULT_PANEL_COUNT)]
    pub count: usize,

    /// Render each panel to this PNG path ("{}" is replaced by the panel index)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Directory holding <icon>.png artwork
    #[arg(long, value_name = "DIR")]
    pub icons: Option<PathBuf>,

    /// Render an existing descriptor instead of generating one
    #[arg(long, value_name = "DESCRIPTOR", requires = "output")]
    pub descriptor: Option<String>,

    /// Print an intermediate grid to stderr
    #[arg(long, value_enum)]
    pub show: Option<GridView>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the generation request, filling in defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the palette is empty or the dimensions are out of range
    pub fn request(&self) -> Result<PanelRequest> {
        let palette = match &self.colors {
            Some(list) => Palette::parse_list(list)?,
            None => Palette::default(),
        };

        PanelRequest::new(
            self.dimensions.unwrap_or(DEFAULT_DIMENSIONS),
            palette,
            self.min,
            self.max,
        )
    }
}

/// Parse a "W,H" panel size
///
/// # Errors
///
/// Returns a message if the value does not hold exactly two integers
pub fn parse_dimensions(value: &str) -> std::result::Result<(usize, usize), String> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    let [width, height] = parts.as_slice() else {
        return Err(format!("expected \"W,H\", got \"{value}\""));
    };

    let width = width
        .parse::<usize>()
        .map_err(|e| format!("invalid width \"{width}\": {e}"))?;
    let height = height
        .parse::<usize>()
        .map_err(|e| format!("invalid height \"{height}\": {e}"))?;

    Ok((width, height))
}

/// Drives panel generation, rendering and output for one invocation
pub struct PanelProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl PanelProcessor {
    /// Create a new panel processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate or render according to the CLI arguments
    ///
    /// Generated descriptors are printed to stdout, one per line.
    ///
    /// # Errors
    ///
    /// Returns an error if validation, generation, rendering or saving fails
    // Descriptors are the program's output
    #[allow(clippy::print_stdout)]
    pub fn process(&mut self) -> Result<()> {
        if let Some(descriptor) = self.cli.descriptor.clone() {
            return self.render_existing(&descriptor);
        }

        for descriptor in self.generate_descriptors()? {
            println!("{descriptor}");
        }
        Ok(())
    }

    /// Generate every requested panel and return their descriptors
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid or a panel fails to
    /// generate or render
    pub fn generate_descriptors(&mut self) -> Result<Vec<String>> {
        let request = self.cli.request()?;
        if self.cli.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.cli.count,
                &"must be 1 or greater",
            ));
        }

        let base_seed = self.base_seed();
        info!(
            "Generating {} panel(s) starting from seed {base_seed}",
            self.cli.count
        );

        let icons = match &self.cli.output {
            Some(_) => load_icons(&[PANEL_SHAPE.to_string()], self.cli.icons.as_deref())?,
            None => Vec::new(),
        };

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        let mut descriptors = Vec::with_capacity(self.cli.count);
        for index in 0..self.cli.count {
            let seed = base_seed.wrapping_add(index as u64);
            let panel = PanelGenerator::new(seed).generate(&request)?;
            self.show(&panel);

            let descriptor = panel.descriptor();
            if let Some(path) = self.output_path(index) {
                Self::render_to(&descriptor, &icons, &path)?;
            }

            if let Some(ref pm) = self.progress_manager {
                pm.complete_panel(seed);
            }
            descriptors.push(descriptor.to_string());
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(descriptors)
    }

    /// Seed of the first panel, drawn at random when none was given
    pub fn base_seed(&mut self) -> u64 {
        *self.cli.seed.get_or_insert_with(|| rand::rng().random())
    }

    /// Output path of the panel at `index`, if rendering was requested
    ///
    /// A single panel is written to the path as given. For several panels,
    /// `{}` in the path is replaced by the index, or `_<index>` is appended
    /// to the file stem.
    pub fn output_path(&self, index: usize) -> Option<PathBuf> {
        let path = self.cli.output.as_ref()?;
        if self.cli.count <= 1 {
            return Some(path.clone());
        }

        let text = path.to_string_lossy();
        if text.contains("{}") {
            return Some(PathBuf::from(text.replace("{}", &index.to_string())));
        }

        let stem = path.file_stem().unwrap_or_default().to_string_lossy();
        let extension = path
            .extension()
            .map_or_else(String::new, |ext| format!(".{}", ext.to_string_lossy()));
        Some(path.with_file_name(format!("{stem}_{index}{extension}")))
    }

    fn render_existing(&self, descriptor: &str) -> Result<()> {
        let descriptor = Descriptor::parse(descriptor)?;
        let icons = load_icons(&descriptor.icons, self.cli.icons.as_deref())?;

        match self.output_path(0) {
            Some(path) => Self::render_to(&descriptor, &icons, &path),
            None => Err(invalid_parameter(
                "output",
                &"",
                &"rendering a descriptor needs an output path",
            )),
        }
    }

    fn render_to(descriptor: &Descriptor, icons: &[RgbaImage], path: &Path) -> Result<()> {
        let image = render(descriptor, icons)?;
        save_png(&image, path)?;
        info!("Panel written to {}", path.display());
        Ok(())
    }

    // Allow print for the requested debug grid
    #[allow(clippy::print_stderr)]
    fn show(&self, panel: &Panel) {
        let text = match self.cli.show {
            Some(GridView::Path) => format_vertices(&panel.vertices),
            Some(GridView::Regions) => format_cells(&panel.cells, CellField::Region),
            Some(GridView::Colors) => format_cells(&panel.cells, CellField::Color),
            None => return,
        };
        eprint!("{text}");
    }
}
