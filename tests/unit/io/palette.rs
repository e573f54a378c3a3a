//! Tests for palette parsing and color name resolution

#[cfg(test)]
mod tests {
    use randopanel::AlgorithmError;
    use randopanel::io::palette::{
        NAMED_COLORS, Palette, is_rgb_triple, normalize_name, resolve_color,
    };

    // Tests palettes must hold at least one color
    // Verified by accepting empty palettes
    #[test]
    fn test_palette_new_rejects_empty() {
        assert!(matches!(
            Palette::new(Vec::new()),
            Err(AlgorithmError::InvalidParameter {
                parameter: "colors",
                ..
            })
        ));

        let palette = Palette::new(vec!["red".to_string()]);
        assert!(palette.is_ok_and(|p| p.len() == 1 && !p.is_empty()));
    }

    // Tests list parsing drops empty entries and restores hex prefixes
    // Verified by keeping spaces in names
    #[test]
    fn test_palette_parse_list() {
        let parsed = Palette::parse_list("red,, ff0000,12-34-56,");
        assert!(parsed.is_ok_and(|p| p.names() == ["red", "+ff0000", "12-34-56"]));

        assert!(Palette::parse_list("").is_err());
        assert!(Palette::parse_list(",,").is_err());
    }

    // Tests named colors, including the themed set
    // Verified by removing a table entry
    #[test]
    fn test_resolve_named_colors() {
        assert_eq!(resolve_color("black").ok(), Some([0, 0, 0]));
        assert_eq!(resolve_color("grey").ok(), Some([128, 128, 128]));
        assert_eq!(resolve_color("looksy-gold").ok(), Some([255, 201, 0]));
        assert_eq!(resolve_color("looksy-violet").ok(), Some([129, 1, 255]));

        for (name, rgb) in NAMED_COLORS {
            assert_eq!(resolve_color(name).ok(), Some(rgb), "{name}");
        }
    }

    // Tests long and short hex codes
    // Verified by expanding short codes with zero padding
    #[test]
    fn test_resolve_hex_codes() {
        assert_eq!(resolve_color("+ff8000").ok(), Some([255, 128, 0]));
        assert_eq!(resolve_color("+F0a").ok(), Some([255, 0, 170]));

        assert!(resolve_color("+ff80").is_err());
        assert!(resolve_color("+gg0000").is_err());
        assert!(resolve_color("+").is_err());
    }

    // Tests decimal triples, including out of range channels
    // Verified by wrapping channels above 255
    #[test]
    fn test_resolve_rgb_triples() {
        assert_eq!(resolve_color("10-20-30").ok(), Some([10, 20, 30]));
        assert_eq!(resolve_color("255-255-255").ok(), Some([255, 255, 255]));

        assert!(resolve_color("256-0-0").is_err());
        assert!(resolve_color("1-2-x").is_err());
    }

    // Tests unknown names are reported with the name
    // Verified by falling back to black
    #[test]
    fn test_resolve_unknown_name() {
        let error = resolve_color("chartreuse").map_err(|e| e.to_string());
        assert_eq!(
            error,
            Err("Syntax error for color with name \"chartreuse\"".to_string())
        );
    }

    // Tests triple detection and name normalization
    // Verified by counting dashes instead of parts
    #[test]
    fn test_name_helpers() {
        assert!(is_rgb_triple("1-2-3"));
        assert!(is_rgb_triple("a-b-c"));
        assert!(!is_rgb_triple("looksy-red"));
        assert!(!is_rgb_triple("1-2-3-4"));

        assert_eq!(normalize_name(" 00ff00"), "+00ff00");
        assert_eq!(normalize_name("red"), "red");
    }
}
