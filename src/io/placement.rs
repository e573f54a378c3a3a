//! Placement strings and panel descriptors
//!
//! A descriptor has the form `<icons> [colors] <W,H> <placements>`. The
//! placement string lists rows from the top of the panel down, separated by
//! `-`, each row listing cells left to right separated by `,`. A cell token is
//! `<icon>c<color>`, where the icon is a 1-based index into the icon list
//! (0 = blank) and the color a 1-based index into the palette (0 = untinted).

use std::fmt;

use crate::io::configuration::{
    CELL_DELIMITER, COLOR_MARKER, MAX_RENDER_DIMENSION, NAME_DELIMITER, ROW_DELIMITER,
};
use crate::io::error::{Result, invalid_descriptor};
use crate::io::palette::is_rgb_triple;
use crate::spatial::grid::{Cell, CellGrid};

/// Icon and color indices for a single cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Placement {
    /// 1-based icon index (0 = blank)
    pub icon: u32,
    /// 1-based palette index (0 = untinted)
    pub color: u32,
}

impl Placement {
    /// Placement for a generated cell; any colored cell shows the first icon
    pub fn from_cell(cell: &Cell) -> Self {
        Self {
            icon: cell.color.min(1),
            color: cell.color,
        }
    }

    /// Encode as a cell token
    pub fn token(&self) -> String {
        format!("{}{COLOR_MARKER}{}", self.icon, self.color)
    }

    /// Decode a cell token
    ///
    /// An empty icon part is a blank cell and a missing color part means 0.
    /// The color of a blank cell is never drawn, so a malformed one reads as 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the icon part is present but not a number, or the
    /// cell has an icon and its color part is present but not a number
    pub fn parse_token(token: &str) -> Result<Self> {
        let mut parts = token.split(COLOR_MARKER);
        let icon_part = parts.next().unwrap_or_default();
        let color_part = parts.next().unwrap_or_default();

        let icon = parse_index(icon_part)
            .ok_or_else(|| invalid_descriptor(&format!("icon index {icon_part} isn't a digit")))?;
        let color = match parse_index(color_part) {
            Some(color) => color,
            None if icon == 0 => 0,
            None => {
                return Err(invalid_descriptor(&format!(
                    "color index {color_part} isn't a digit"
                )));
            }
        };

        Ok(Self { icon, color })
    }
}

fn parse_index(part: &str) -> Option<u32> {
    if part.is_empty() {
        return Some(0);
    }
    if !part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Placements of a cell grid in descriptor order (top row first)
pub fn placement_rows(cells: &CellGrid) -> Vec<Vec<Placement>> {
    let (cols, rows) = cells.dim();

    (0..rows)
        .rev()
        .map(|y| {
            (0..cols)
                .filter_map(|x| cells.get([x, y]))
                .map(Placement::from_cell)
                .collect()
        })
        .collect()
}

/// Join placement rows into a placement string
pub fn encode_rows(rows: &[Vec<Placement>]) -> String {
    rows.iter()
        .map(|row| {
            row.iter()
                .map(Placement::token)
                .collect::<Vec<_>>()
                .join(CELL_DELIMITER)
        })
        .collect::<Vec<_>>()
        .join(ROW_DELIMITER)
}

/// Serialize a colored cell grid into a placement string
pub fn encode_placements(cells: &CellGrid) -> String {
    encode_rows(&placement_rows(cells))
}

/// A complete panel description handed to the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    /// Icon names, referenced by 1-based icon index
    pub icons: Vec<String>,
    /// Palette names, referenced by 1-based color index (may be empty)
    pub palette: Vec<String>,
    /// Panel size in cells (columns, rows)
    pub dimensions: (usize, usize),
    /// Placements, top row first
    pub rows: Vec<Vec<Placement>>,
}

impl Descriptor {
    /// Build the descriptor of a generated cell grid
    pub fn from_cells(shape: &str, palette: &[String], cells: &CellGrid) -> Self {
        Self {
            icons: vec![shape.to_string()],
            palette: palette.to_vec(),
            dimensions: cells.dim(),
            rows: placement_rows(cells),
        }
    }

    /// Placement string of this descriptor
    pub fn placement_string(&self) -> String {
        encode_rows(&self.rows)
    }

    /// Parse and validate a descriptor string
    ///
    /// # Errors
    ///
    /// Returns [`crate::AlgorithmError::InvalidDescriptor`] if a field is
    /// missing or malformed, the panel size is not two positive integers up
    /// to [`MAX_RENDER_DIMENSION`], the placements do not fit the panel, or an
    /// icon or color index refers past the end of its list
    pub fn parse(input: &str) -> Result<Self> {
        let fields: Vec<&str> = input.split_whitespace().collect();

        let icons_field = fields
            .first()
            .ok_or_else(|| invalid_descriptor(&"arguments missing"))?;
        let icons = split_names(icons_field);

        // The palette is optional and recognised by its shape
        let mut next = 1;
        let mut palette = Vec::new();
        if let Some(field) = fields.get(next).filter(|field| is_palette_field(field)) {
            palette = split_names(field);
            next += 1;
        }

        let dimensions_field = fields
            .get(next)
            .ok_or_else(|| invalid_descriptor(&"panel size missing"))?;
        let dimensions = parse_dimensions(dimensions_field)?;

        let placements_field = fields
            .get(next + 1)
            .ok_or_else(|| invalid_descriptor(&"placements missing"))?;
        let rows = parse_rows(placements_field)?;

        let descriptor = Self {
            icons,
            palette,
            dimensions,
            rows,
        };
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Check the panel size is renderable and the placements fit it
    ///
    /// # Errors
    ///
    /// Returns [`crate::AlgorithmError::InvalidDescriptor`] if either
    /// dimension is zero or exceeds [`MAX_RENDER_DIMENSION`], the placements
    /// do not fit the panel, or an index refers past the end of its list
    pub fn validate(&self) -> Result<()> {
        let (cols, rows) = self.dimensions;

        for (axis, value) in [("x", cols), ("y", rows)] {
            if value == 0 {
                return Err(invalid_descriptor(&format!(
                    "{axis} dimension ({value}) must be 1 or greater"
                )));
            }
            if value > MAX_RENDER_DIMENSION {
                return Err(invalid_descriptor(&format!(
                    "{axis} dimension ({value}) must not exceed {MAX_RENDER_DIMENSION}"
                )));
            }
        }

        if self.rows.len() > rows {
            return Err(invalid_descriptor(&"too many rows specified"));
        }

        let long_rows: Vec<usize> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.len() > cols)
            .map(|(index, _)| index + 1)
            .collect();
        match long_rows.as_slice() {
            [] => {}
            [row] => {
                return Err(invalid_descriptor(&format!(
                    "row {row} is longer than x dimension specified ({cols})"
                )));
            }
            many => {
                return Err(invalid_descriptor(&format!(
                    "rows {many:?} are longer than x dimension specified ({cols})"
                )));
            }
        }

        for placement in self.rows.iter().flatten() {
            if placement.icon as usize > self.icons.len() {
                return Err(invalid_descriptor(&format!(
                    "icon index {} doesn't correspond to any specified icon",
                    placement.icon
                )));
            }
            // Blank cells never look at their color
            if placement.icon > 0 && placement.color as usize > self.palette.len() {
                return Err(invalid_descriptor(&format!(
                    "color index {} doesn't correspond to any specified color",
                    placement.color
                )));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.icons.join(NAME_DELIMITER))?;
        if !self.palette.is_empty() {
            write!(f, " {}", self.palette.join(NAME_DELIMITER))?;
        }
        write!(
            f,
            " {},{} {}",
            self.dimensions.0,
            self.dimensions.1,
            self.placement_string()
        )
    }
}

fn split_names(field: &str) -> Vec<String> {
    field.split(NAME_DELIMITER).map(str::to_string).collect()
}

// A palette either starts with a non-digit, is a hex code or is an R-G-B triple
fn is_palette_field(field: &str) -> bool {
    let starts_with_digit = field.chars().next().is_some_and(|c| c.is_ascii_digit());
    let first_name = field.split(NAME_DELIMITER).next().unwrap_or_default();

    !starts_with_digit || field.starts_with('+') || is_rgb_triple(first_name)
}

fn parse_dimensions(field: &str) -> Result<(usize, usize)> {
    let values = field
        .split(NAME_DELIMITER)
        .map(|part| part.trim().parse::<i64>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|err| invalid_descriptor(&format!("panel size \"{field}\": {err}")))?;

    let [cols, rows] = values.as_slice() else {
        return Err(invalid_descriptor(&format!(
            "panel size argument \"{field}\" must contain exactly two values \"x,y\""
        )));
    };

    if *cols <= 0 {
        return Err(invalid_descriptor(&format!(
            "x dimension ({cols}) must be 1 or greater"
        )));
    }
    if *rows <= 0 {
        return Err(invalid_descriptor(&format!(
            "y dimension ({rows}) must be 1 or greater"
        )));
    }

    Ok((*cols as usize, *rows as usize))
}

fn parse_rows(field: &str) -> Result<Vec<Vec<Placement>>> {
    field
        .split(ROW_DELIMITER)
        .map(|row| row.split(CELL_DELIMITER).map(Placement::parse_token).collect())
        .collect()
}
