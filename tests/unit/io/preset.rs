//! Tests for JSON parameter presets

#[cfg(test)]
mod tests {
    use halftone::HalftoneError;
    use halftone::io::preset::{load_preset, parse_preset, preset_path, save_preset};
    use halftone::params::{BlendMode, Color, NoiseVariant, Parameters, RenderMode};
    use std::path::{Path, PathBuf};

    // Tests a partial preset fills every other field with defaults
    // Verified by removing serde(default) from a parameter group
    #[test]
    fn test_partial_preset_uses_defaults() {
        let params = parse_preset(
            r##"{"render_mode":"smooth","noise":{"variant":"ridged"},"halftone":{"foreground":"#123456"}}"##,
        )
        .expect("partial preset parses");

        assert_eq!(params.render_mode, RenderMode::Smooth);
        assert_eq!(params.noise.variant, NoiseVariant::Ridged);
        assert_eq!(params.noise.seed, Parameters::default().noise.seed);
        assert_eq!(params.halftone.foreground, Color::new(0x12, 0x34, 0x56));
        assert_eq!(params.halftone.background, Parameters::default().halftone.background);
        assert_eq!(params.blend.mode, BlendMode::Multiply);
    }

    // Tests unknown enum names and malformed colors are rejected
    // Verified by falling back to defaults on invalid values
    #[test]
    fn test_invalid_preset_values() {
        assert!(parse_preset(r#"{"source_mode":"plasma"}"#).is_err());
        assert!(parse_preset(r##"{"halftone":{"background":"#12"}}"##).is_err());
        assert!(parse_preset("[1, 2]").is_err());
    }

    // Tests saved presets load back to the same parameters
    // Verified by saving with compact formatting and a dropped field
    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("presets").join("look.json");

        let mut params = Parameters::default();
        params.noise.seed = -17;
        params.halftone.angle = 33.5;
        params.mask.enabled = true;

        save_preset(&params, &path).expect("preset saved");
        assert_eq!(load_preset(&path).expect("preset loads"), params);

        let text = std::fs::read_to_string(&path).expect("preset written");
        assert!(text.contains("\n  \"source_mode\": \"noise\""));
    }

    // Tests load errors carry the offending path
    // Verified by reporting the JSON error without its path
    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            load_preset(&missing),
            Err(HalftoneError::FileSystem { .. })
        ));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").expect("write broken preset");
        let error = load_preset(&broken).expect_err("broken preset fails");
        assert!(matches!(&error, HalftoneError::Preset { path, .. } if *path == broken));
    }

    // Tests files are decoded by the same rules as preset text
    // Verified by loading files with a lenient decoder
    #[test]
    fn test_load_matches_parse() {
        let dir = tempfile::tempdir().expect("temp dir");
        let invalid = r#"{"source_mode":"plasma"}"#;
        let path = dir.path().join("plasma.json");
        std::fs::write(&path, invalid).expect("write preset");

        assert!(parse_preset(invalid).is_err());
        let error = load_preset(&path).expect_err("unknown source mode");
        assert!(error.to_string().contains("plasma.json"));

        let partial = r#"{"noise":{"octaves":3}}"#;
        std::fs::write(&path, partial).expect("write preset");
        assert_eq!(
            load_preset(&path).expect("partial preset loads"),
            parse_preset(partial).expect("partial preset parses")
        );
    }

    // Tests the sidecar path swaps the extension for json
    // Verified by appending instead of replacing the extension
    #[test]
    fn test_preset_path() {
        assert_eq!(
            preset_path(Path::new("out/pattern-7.png")),
            PathBuf::from("out/pattern-7.json")
        );
    }
}
