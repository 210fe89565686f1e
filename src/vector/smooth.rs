//! Smooth bars as variable-width ribbons
//!
//! Each line is walked pixel by pixel along its direction. Contiguous on-canvas
//! samples with a visible width form a segment, and each segment becomes one
//! closed polygon: the centreline offset by half the local width on either side.

use crate::io::configuration::{MAX_SEGMENT_SAMPLES, MIN_VECTOR_BAR_WIDTH};
use crate::math::geometry::{diagonal, pixel_index};
use crate::raster::screen::Screen;
use crate::vector::accumulator::{SegmentAccumulator, downsample};
use crate::vector::document::Primitive;

/// Extra lines scanned beyond the diagonal on each side
const LINE_MARGIN: i64 = 4;

/// A centreline point and the bar width there
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RibbonSample {
    /// Canvas x
    pub x: f64,
    /// Canvas y
    pub y: f64,
    /// Full bar width in pixels
    pub width: f64,
}

/// Closed outline of a ribbon: top edge forward, bottom edge reversed
pub fn ribbon_outline(samples: &[RibbonSample], cos: f64, sin: f64) -> Vec<(f64, f64)> {
    let top = samples.iter().map(|s| {
        let half = s.width / 2.0;
        (s.x + cos * half, s.y + sin * half)
    });
    let bottom = samples.iter().rev().map(|s| {
        let half = s.width / 2.0;
        (s.x - cos * half, s.y - sin * half)
    });
    top.chain(bottom).collect()
}

/// Walk one line and split it into visible segments
fn line_segments(screen: &Screen<'_>, line: i64, diagonal: f64) -> Vec<Vec<RibbonSample>> {
    let rotation = &screen.rotation;
    let (along_x, along_y) = (-rotation.sin, rotation.cos);
    let center_across = (line as f64 + 0.5) * screen.period;
    let steps = diagonal.ceil() as i64;
    let origin_x = screen.width as f64 / 2.0 + rotation.cos * center_across
        - rotation.cos * (diagonal / 2.0);
    let origin_y = screen.height as f64 / 2.0 + rotation.sin * center_across
        - rotation.sin * (diagonal / 2.0);

    let mut segments = Vec::new();
    let mut accumulator = SegmentAccumulator::new();

    for step in -steps..=steps {
        let s = step as f64;
        let x = origin_x + along_x * s;
        let y = origin_y + along_y * s;

        let width = pixel_index(
            x.floor() as i64,
            y.floor() as i64,
            screen.width,
            screen.height,
        )
        .map(|index| screen.pixel_darkness(index) * screen.thickness * screen.period);

        match width {
            Some(width) if width > MIN_VECTOR_BAR_WIDTH => {
                accumulator.push(RibbonSample { x, y, width });
            }
            Some(_) | None => segments.extend(accumulator.flush()),
        }
    }
    segments.extend(accumulator.flush());
    segments
}

/// Emit one ribbon path per visible segment of every line
pub fn extract(screen: &Screen<'_>) -> Vec<Primitive> {
    let diagonal = diagonal(screen.width, screen.height);
    let num_lines = (diagonal / screen.period).ceil() as i64 + LINE_MARGIN;
    let (cos, sin) = (screen.rotation.cos, screen.rotation.sin);

    (-num_lines..=num_lines)
        .flat_map(|line| line_segments(screen, line, diagonal))
        .filter_map(|segment| {
            let sampled = downsample(&segment, MAX_SEGMENT_SAMPLES);
            (sampled.len() >= 2).then(|| Primitive::Path {
                points: ribbon_outline(&sampled, cos, sin),
            })
        })
        .collect()
}
