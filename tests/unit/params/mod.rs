pub mod color;

#[cfg(test)]
mod tests {
    use halftone::params::{
        BlendMode, HalftoneShape, NoiseVariant, Parameters, RenderMode, SourceMode, Strategy,
    };

    // Tests default parameters match the documented defaults
    // Verified by changing the default frequency
    #[test]
    fn test_parameter_defaults() {
        let params = Parameters::default();

        assert_eq!(params.source_mode, SourceMode::Noise);
        assert_eq!(params.render_mode, RenderMode::Stepped);
        assert_eq!(params.noise.seed, 500);
        assert_eq!(params.noise.octaves, 3);
        assert_eq!(params.noise.variant, NoiseVariant::Perlin);
        assert_eq!(params.blend.mode, BlendMode::Multiply);
        assert_eq!(params.halftone.shape, HalftoneShape::Line);
        assert!((params.halftone.frequency - 40.0).abs() < f64::EPSILON);
        assert!((params.halftone.angle - 90.0).abs() < f64::EPSILON);
        assert_eq!(params.halftone.foreground.to_string(), "#ff0000");
        assert_eq!(params.halftone.background.to_string(), "#c8c0b8");
        assert!(!params.halftone.invert);
        assert!(!params.halftone.transparent);
        assert!(!params.mask.enabled);
        assert!((params.mask.threshold - 0.45).abs() < f64::EPSILON);
    }

    // Tests the strategy follows the shape and render mode
    // Verified by ignoring the render mode for lines
    #[test]
    fn test_parameters_strategy() {
        let mut params = Parameters::default();
        assert_eq!(params.strategy(), Strategy::SteppedLine);

        params.render_mode = RenderMode::Smooth;
        assert_eq!(params.strategy(), Strategy::SmoothLine);

        params.halftone.shape = HalftoneShape::Dither;
        assert_eq!(params.strategy(), Strategy::Dither);
    }

    // Tests serialized parameters use lowercase enum names and hex colors
    // Verified by removing rename_all from an enum
    #[test]
    fn test_parameters_serialize() {
        let mut params = Parameters {
            source_mode: SourceMode::Both,
            ..Parameters::default()
        };
        params.halftone.shape = HalftoneShape::Diamond;

        let value = serde_json::to_value(&params).expect("parameters serialize");
        assert_eq!(value["source_mode"], "both");
        assert_eq!(value["render_mode"], "stepped");
        assert_eq!(value["halftone"]["shape"], "diamond");
        assert_eq!(value["halftone"]["foreground"], "#ff0000");
        assert_eq!(value["noise"]["variant"], "perlin");
    }

    // Tests an empty object deserializes to the defaults
    // Verified by removing serde(default) from Parameters
    #[test]
    fn test_parameters_empty_object() {
        let params: Parameters = serde_json::from_str("{}").expect("empty preset parses");
        assert_eq!(params, Parameters::default());
    }
}
