pub mod dither;
pub mod shape;

#[cfg(test)]
mod tests {
    use halftone::field::Fields;
    use halftone::params::{CellShape, HalftoneShape, Parameters, RenderMode};
    use halftone::raster::{Screen, dither, rasterize, render, shape, smooth, stepped};

    // Tests rasterize runs exactly the rasterizer the strategy names
    // Verified by sending cell shapes through the line rasterizers
    #[test]
    fn test_rasterize_dispatch() {
        let (width, height) = (48, 36);
        let mut params = Parameters::default();
        params.halftone.frequency = 8.0;
        let fields = Fields::build(width, height, &params);
        let screen = Screen::new(width, height, &params, &fields);

        assert_eq!(
            rasterize(width, height, &params, &fields),
            stepped::rasterize(&screen, params.halftone.cell_size)
        );

        params.render_mode = RenderMode::Smooth;
        assert_eq!(
            rasterize(width, height, &params, &fields),
            smooth::rasterize(&screen, 6.0)
        );

        params.halftone.shape = HalftoneShape::Circle;
        assert_eq!(
            rasterize(width, height, &params, &fields),
            shape::rasterize(&screen, CellShape::Circle, RenderMode::Smooth)
        );

        params.halftone.shape = HalftoneShape::Dither;
        assert_eq!(
            rasterize(width, height, &params, &fields),
            dither::rasterize(&screen, params.noise.seed)
        );
    }

    // Tests the rendered buffer has four bytes per pixel
    // Verified by allocating three bytes per pixel
    #[test]
    fn test_render_buffer_size() {
        let buffer = render(33, 17, &Parameters::default());
        assert_eq!(buffer.as_bytes().len(), 33 * 17 * 4);
        assert_eq!((buffer.width(), buffer.height()), (33, 17));
    }
}
