//! Flat scene of vector primitives and its SVG text form

use crate::params::{Color, HalftoneParams};
use crate::raster::Palette;
use std::fmt;

/// A coordinate written with one decimal place
///
/// Rounds the exact binary value to the nearest tenth with ties away from
/// zero. A negative value that rounds to zero keeps its sign (`-0.0`) while
/// negative zero itself prints as `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fixed(pub f64);

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0.0 {
            f.write_str("-")?;
        }
        let magnitude = self.0.abs();
        // `{:.1}` rounds exact ties to even, so an exact odd multiple of 0.05 is bumped up first
        let twentieths = magnitude * 20.0;
        let is_tie = twentieths.fract() == 0.0
            && (twentieths / 2.0).fract() != 0.0
            && magnitude.mul_add(20.0, -twentieths) == 0.0;
        if is_tie {
            write!(f, "{:.1}", (twentieths + 1.0) / 20.0)
        } else {
            write!(f, "{magnitude:.1}")
        }
    }
}

/// One shape in the vector scene
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Axis-aligned rectangle on whole pixels
    Rect {
        /// Left edge
        x: usize,
        /// Top edge
        y: usize,
        /// Width in pixels
        width: usize,
        /// Height in pixels
        height: usize,
    },
    /// Rectangle in a local frame translated to `origin` and rotated by `angle`
    RotatedRect {
        /// Local left edge
        x: f64,
        /// Local top edge
        y: f64,
        /// Width
        width: f64,
        /// Height
        height: f64,
        /// Canvas position of the local origin
        origin: (i64, i64),
        /// Rotation in degrees
        angle: f64,
    },
    /// Circle around a canvas pixel
    Circle {
        /// Centre
        center: (i64, i64),
        /// Radius
        r: f64,
    },
    /// Ellipse rotated about its centre
    Ellipse {
        /// Centre
        center: (i64, i64),
        /// Horizontal radius before rotation
        rx: f64,
        /// Vertical radius before rotation
        ry: f64,
        /// Rotation in degrees
        angle: f64,
    },
    /// Four-point polygon around a canvas pixel, rotated about that pixel
    Diamond {
        /// Centre
        center: (i64, i64),
        /// Distance from the centre to each vertex before rotation
        r: f64,
        /// Rotation in degrees
        angle: f64,
    },
    /// Closed straight-edged path
    Path {
        /// Vertices in drawing order
        points: Vec<(f64, f64)>,
    },
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rect {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                r#"<rect x="{x}" y="{y}" width="{width}" height="{height}"/>"#
            ),
            Self::RotatedRect {
                x,
                y,
                width,
                height,
                origin: (ox, oy),
                angle,
            } => write!(
                f,
                r#"<rect x="{}" y="{}" width="{}" height="{}" transform="translate({ox},{oy}) rotate({angle})"/>"#,
                Fixed(*x),
                Fixed(*y),
                Fixed(*width),
                Fixed(*height)
            ),
            Self::Circle { center: (cx, cy), r } => {
                write!(f, r#"<circle cx="{cx}" cy="{cy}" r="{}"/>"#, Fixed(*r))
            }
            Self::Ellipse {
                center: (cx, cy),
                rx,
                ry,
                angle,
            } => write!(
                f,
                r#"<ellipse cx="{cx}" cy="{cy}" rx="{}" ry="{}" transform="rotate({angle},{cx},{cy})"/>"#,
                Fixed(*rx),
                Fixed(*ry)
            ),
            Self::Diamond {
                center: (cx, cy),
                r,
                angle,
            } => {
                // Vertices on the centre's row or column keep the integer coordinate
                let (x, y) = (*cx as f64, *cy as f64);
                write!(
                    f,
                    r#"<polygon points="{cx},{} {},{cy} {cx},{} {},{cy}" transform="rotate({angle},{cx},{cy})"/>"#,
                    Fixed(y - r),
                    Fixed(x + r),
                    Fixed(y + r),
                    Fixed(x - r)
                )
            }
            Self::Path { points } => {
                f.write_str(r#"<path d=""#)?;
                for (i, (x, y)) in points.iter().enumerate() {
                    let command = if i == 0 { 'M' } else { 'L' };
                    write!(f, "{command}{},{}", Fixed(*x), Fixed(*y))?;
                }
                f.write_str(r#"Z"/>"#)
            }
        }
    }
}

/// Fixed-size vector scene: optional paper, then every primitive filled with ink
///
/// Primitives sit in one group clipped to the canvas, so shapes that overhang
/// the edges are cut exactly where the raster output ends.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorDocument {
    /// Canvas width in pixels
    pub width: usize,
    /// Canvas height in pixels
    pub height: usize,
    /// Paper color, `None` when transparent
    pub background: Option<Color>,
    /// Ink color shared by every primitive
    pub foreground: Color,
    /// Shapes in drawing order
    pub primitives: Vec<Primitive>,
}

impl VectorDocument {
    /// Wrap extracted primitives with the palette of the halftone settings
    pub fn from_primitives(
        width: usize,
        height: usize,
        params: &HalftoneParams,
        primitives: Vec<Primitive>,
    ) -> Self {
        let palette = Palette::resolve(params);
        Self {
            width,
            height,
            background: (!params.transparent).then_some(palette.paper),
            foreground: palette.ink,
            primitives,
        }
    }

    /// Serialize as an SVG document
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VectorDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = (self.width, self.height);
        write!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        )?;
        if let Some(background) = self.background {
            write!(f, r#"<rect width="{w}" height="{h}" fill="{background}"/>"#)?;
        }
        write!(
            f,
            r#"<defs><clipPath id="c"><rect width="{w}" height="{h}"/></clipPath></defs>"#
        )?;
        write!(f, r#"<g clip-path="url(#c)" fill="{}">"#, self.foreground)?;
        for primitive in &self.primitives {
            write!(f, "{primitive}")?;
        }
        f.write_str("</g></svg>")
    }
}
