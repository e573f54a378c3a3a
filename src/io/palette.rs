//! Palette handling and color name resolution
//!
//! Palette entries are resolved to RGB in the order: named table, hex code
//! (`+RRGGBB` or the short `+RGB`), then decimal `R-G-B` triple.

use crate::io::configuration::{NAME_DELIMITER, default_palette};
use crate::io::error::{AlgorithmError, Result, invalid_parameter};

/// Ordered, non-empty list of color names
///
/// Cells refer to palette entries by 1-based index; index 0 is "no color".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    names: Vec<String>,
}

impl Palette {
    /// Create a palette from color names
    ///
    /// # Errors
    ///
    /// Returns an error if `names` is empty
    pub fn new(names: Vec<String>) -> Result<Self> {
        if names.is_empty() {
            return Err(invalid_parameter(
                "colors",
                &"",
                &"palette must contain at least one color",
            ));
        }
        Ok(Self { names })
    }

    /// Parse a comma-separated color list
    ///
    /// Spaces become `+`, undoing URL decoding of hex codes such as `+ff0000`.
    ///
    /// # Errors
    ///
    /// Returns an error if the list has no entries
    pub fn parse_list(list: &str) -> Result<Self> {
        let names = list
            .split(NAME_DELIMITER)
            .filter(|name| !name.is_empty())
            .map(normalize_name)
            .collect();
        Self::new(names)
    }

    /// Number of colors in the palette
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false; palettes hold at least one color
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Color names in palette order
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            names: default_palette(),
        }
    }
}

/// Replace spaces with `+` in a color name
pub fn normalize_name(name: &str) -> String {
    name.replace(' ', "+")
}

/// Named colors understood without hex or RGB notation
pub const NAMED_COLORS: [(&str, [u8; 3]); 37] = [
    ("looksy-black", [0, 0, 0]),
    ("looksy-white", [255, 255, 255]),
    ("looksy-lightgray", [204, 204, 204]),
    ("looksy-red", [255, 0, 0]),
    ("looksy-pink", [255, 102, 179]),
    ("looksy-darkred", [128, 0, 0]),
    ("looksy-orange", [255, 165, 0]),
    ("looksy-lightred", [255, 102, 102]),
    ("looksy-orangered", [255, 64, 0]),
    ("looksy-yellow", [255, 255, 0]),
    ("looksy-lightyellow", [255, 255, 128]),
    ("looksy-gold", [255, 201, 0]),
    ("looksy-darkgreen", [0, 128, 0]),
    ("looksy-green", [0, 255, 0]),
    ("looksy-lightgreen", [176, 255, 176]),
    ("looksy-blue", [0, 0, 255]),
    ("looksy-blueviolet", [104, 103, 253]),
    ("looksy-lightcyan", [128, 255, 255]),
    ("looksy-purple", [128, 0, 128]),
    ("looksy-violet", [129, 1, 255]),
    ("looksy-magenta", [255, 7, 255]),
    ("black", [0, 0, 0]),
    ("grey", [128, 128, 128]),
    ("white", [255, 255, 255]),
    ("darkred", [128, 0, 0]),
    ("red", [255, 0, 0]),
    ("orange", [255, 165, 0]),
    ("olive", [128, 128, 0]),
    ("yellow", [255, 255, 0]),
    ("darkgreen", [0, 128, 0]),
    ("green", [0, 255, 0]),
    ("teal", [0, 128, 128]),
    ("cyan", [0, 255, 255]),
    ("darkblue", [0, 0, 128]),
    ("blue", [0, 0, 255]),
    ("purple", [128, 0, 128]),
    ("magenta", [255, 0, 255]),
];

/// Resolve a single color name to RGB
///
/// # Errors
///
/// Returns [`AlgorithmError::InvalidColor`] when the name is neither a named
/// color, a hex code nor an `R-G-B` triple
pub fn resolve_color(name: &str) -> Result<[u8; 3]> {
    if let Some(&(_, rgb)) = NAMED_COLORS.iter().find(|(known, _)| *known == name) {
        return Ok(rgb);
    }

    if let Some(hex) = name.strip_prefix('+') {
        return parse_hex(hex).ok_or_else(|| invalid_color(name));
    }

    if is_rgb_triple(name) {
        return parse_rgb_triple(name).ok_or_else(|| invalid_color(name));
    }

    Err(invalid_color(name))
}

/// Whether `name` has the `R-G-B` shape (three dash-separated parts)
pub fn is_rgb_triple(name: &str) -> bool {
    name.split('-').count() == 3
}

fn invalid_color(name: &str) -> AlgorithmError {
    AlgorithmError::InvalidColor {
        name: name.to_string(),
    }
}

// Short codes expand each digit, so "f0a" reads as "ff00aa"
fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };

    let channel = |start: usize| {
        expanded
            .get(start..start + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
    };

    Some([channel(0)?, channel(2)?, channel(4)?])
}

fn parse_rgb_triple(name: &str) -> Option<[u8; 3]> {
    let mut channels = name.split('-').map(|part| part.trim().parse::<u8>().ok());
    Some([channels.next()??, channels.next()??, channels.next()??])
}
