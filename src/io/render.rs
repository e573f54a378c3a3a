//! Rasterization of panel descriptors into RGBA images
//!
//! Icons are square 58 px tiles laid out on an 82 px pitch with a 64 px
//! margin. Tinting multiplies each RGB channel by the palette color and keeps
//! the icon's alpha.

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::io::configuration::{CELL_SIZE_PX, EDGE_SIZE_PX, GAP_SIZE_PX, PANEL_SHAPE, image_size};
use crate::io::error::{AlgorithmError, Result, invalid_descriptor};
use crate::io::palette::resolve_color;
use crate::io::placement::Descriptor;

/// Icon artwork available without an icon directory
pub fn builtin_icon(name: &str) -> Option<RgbaImage> {
    (name == PANEL_SHAPE)
        .then(|| RgbaImage::from_pixel(CELL_SIZE_PX, CELL_SIZE_PX, Rgba([255, 255, 255, 255])))
}

/// Load the icons named by a descriptor, in descriptor order
///
/// With a directory, `<directory>/<name>.png` is used when it exists; other
/// names fall back to the built-in artwork. Every icon is resized to the
/// cell size.
///
/// # Errors
///
/// Returns [`AlgorithmError::IconLoad`] when a name has neither a readable
/// file nor built-in artwork
pub fn load_icons(names: &[String], directory: Option<&Path>) -> Result<Vec<RgbaImage>> {
    names
        .iter()
        .map(|name| load_icon(name, directory))
        .collect()
}

fn load_icon(name: &str, directory: Option<&Path>) -> Result<RgbaImage> {
    let path = directory.map_or_else(
        || PathBuf::from(format!("{name}.png")),
        |dir| dir.join(format!("{name}.png")),
    );

    if (directory.is_none() || !path.exists())
        && let Some(icon) = builtin_icon(name)
    {
        return Ok(icon);
    }

    let icon = image::open(&path)
        .map_err(|source| AlgorithmError::IconLoad {
            path: path.clone(),
            source,
        })?
        .into_rgba8();

    Ok(imageops::resize(
        &icon,
        CELL_SIZE_PX,
        CELL_SIZE_PX,
        FilterType::Lanczos3,
    ))
}

/// Multiply the RGB channels of an icon by a color, keeping alpha
pub fn tint(icon: &RgbaImage, rgb: [u8; 3]) -> RgbaImage {
    let mut tinted = icon.clone();
    for pixel in tinted.pixels_mut() {
        for (channel, factor) in pixel.0.iter_mut().zip(rgb) {
            *channel = (u16::from(*channel) * u16::from(factor) / 255) as u8;
        }
    }
    tinted
}

/// Draw a descriptor onto a transparent canvas
///
/// # Errors
///
/// Returns an error if the descriptor fails [`Descriptor::validate`], a
/// palette entry cannot be resolved, or a placement refers to an icon that
/// was not loaded
pub fn render(descriptor: &Descriptor, icons: &[RgbaImage]) -> Result<RgbaImage> {
    descriptor.validate()?;

    let colors = descriptor
        .palette
        .iter()
        .map(|name| resolve_color(name))
        .collect::<Result<Vec<_>>>()?;

    let (cols, rows) = descriptor.dimensions;
    let (Some(width), Some(height)) = (image_size(cols), image_size(rows)) else {
        return Err(invalid_descriptor(&format!(
            "panel size {cols},{rows} is too large to render"
        )));
    };
    let mut canvas = RgbaImage::new(width, height);

    for (row_index, row) in descriptor.rows.iter().enumerate() {
        let top = EDGE_SIZE_PX + GAP_SIZE_PX * row_index as u32;

        for (col_index, placement) in row.iter().enumerate() {
            let left = EDGE_SIZE_PX + GAP_SIZE_PX * col_index as u32;

            let Some(icon_index) = (placement.icon as usize).checked_sub(1) else {
                continue;
            };
            let icon = icons.get(icon_index).ok_or_else(|| {
                invalid_descriptor(&format!("no icon loaded for index {}", placement.icon))
            })?;

            match (placement.color as usize).checked_sub(1) {
                None => imageops::replace(&mut canvas, icon, i64::from(left), i64::from(top)),
                Some(color_index) => {
                    let rgb = colors.get(color_index).copied().ok_or_else(|| {
                        invalid_descriptor(&format!(
                            "color index {} doesn't correspond to any specified color",
                            placement.color
                        ))
                    })?;
                    imageops::replace(
                        &mut canvas,
                        &tint(icon, rgb),
                        i64::from(left),
                        i64::from(top),
                    );
                }
            }
        }
    }

    Ok(canvas)
}

/// Save a rendered panel as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be written
pub fn save_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
