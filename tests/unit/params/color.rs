//! Tests for hex color parsing and formatting

#[cfg(test)]
mod tests {
    use halftone::params::color::Color;

    // Tests hex parsing with and without the leading hash
    // Verified by swapping the green and blue channel ranges
    #[test]
    fn test_parse_hex() {
        assert_eq!("#ff8000".parse::<Color>().ok(), Some(Color::new(255, 128, 0)));
        assert_eq!("00FF7f".parse::<Color>().ok(), Some(Color::new(0, 255, 127)));
        assert_eq!(" #c8c0b8 ".parse::<Color>().ok(), Some(Color::new(200, 192, 184)));
    }

    // Tests malformed colors are rejected
    // Verified by accepting any six-character string
    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", "#fff", "#ff00000", "#gg0000", "+f0000", "#+f0000", "red"] {
            assert!(input.parse::<Color>().is_err(), "{input:?} should be rejected");
        }
    }

    // Tests display writes lowercase #rrggbb
    // Verified by formatting channels without zero padding
    #[test]
    fn test_display() {
        assert_eq!(Color::new(1, 171, 255).to_string(), "#01abff");
        assert_eq!(Color::BLACK.to_string(), "#000000");
        assert_eq!(Color::WHITE.to_string(), "#ffffff");
    }

    // Tests RGBA expansion appends the requested alpha
    // Verified by always using an opaque alpha
    #[test]
    fn test_rgba() {
        assert_eq!(Color::from_rgb([9, 8, 7]).rgba(0), [9, 8, 7, 0]);
        assert_eq!(Color::new(9, 8, 7).rgba(255), [9, 8, 7, 255]);
    }

    // Tests colors serialize as hex strings
    // Verified by deriving the default struct serialization
    #[test]
    fn test_serde_hex_string() {
        let json = serde_json::to_string(&Color::new(200, 192, 184)).expect("color serializes");
        assert_eq!(json, "\"#c8c0b8\"");

        let parsed: Color = serde_json::from_str("\"#102030\"").expect("color parses");
        assert_eq!(parsed, Color::new(16, 32, 48));
        assert!(serde_json::from_str::<Color>("\"#1020\"").is_err());
    }
}
