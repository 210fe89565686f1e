//! Command-line interface for rendering halftone patterns to disk
//!
//! Parameters are layered: defaults, then an optional JSON preset, then any
//! flag given explicitly. Each planned render becomes a [`RenderJob`] that the
//! [`FileProcessor`] executes in order.

use crate::field::Fields;
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_CANVAS_DIMENSION, OUTPUT_PREFIX, RANDOM_SEED_RANGE,
};
use crate::io::error::{HalftoneError, Result, path_error};
use crate::io::export::{save_png, save_svg};
use crate::io::preset::{load_preset, preset_path, save_preset};
use crate::io::progress::{ProgressManager, Stage};
use crate::params::{
    BlendMode, Color, HalftoneShape, NoiseVariant, Parameters, RenderMode, SourceMode,
};
use crate::raster::{self, Palette, PixelBuffer};
use crate::vector::{self, VectorDocument};
use clap::{Parser, ValueEnum};
use rand::Rng;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// File format written for each render
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// RGBA raster through the pixel renderer
    Png,
    /// Vector scene through the primitive extractor
    Svg,
}

impl OutputFormat {
    /// File extension without the dot
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }

    /// Infer the format from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "png" => Some(Self::Png),
            "svg" => Some(Self::Svg),
            _ => None,
        }
    }
}

#[derive(Parser)]
#[command(name = "halftone")]
#[command(
    author,
    version,
    about = "Render procedural halftone patterns as PNG or SVG"
)]
/// Command-line arguments for the pattern renderer
// Every boolean parameter of the pattern is exposed as its own flag
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Output file; defaults to halftone-pattern-<seed>.<ext>
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Output format, inferred from the output extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// JSON preset applied before any explicit flag
    #[arg(short = 'p', long = "params", value_name = "PRESET")]
    pub preset: Option<PathBuf>,

    /// Write the effective parameters as JSON next to each output
    #[arg(short, long)]
    pub dump_params: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Render even if the output already exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Canvas width in pixels
    #[arg(short = 'w', long)]
    pub width: Option<usize>,

    /// Canvas height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Supersampling factor for PNG output; multiplies size and frequency
    #[arg(short = 'k', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub scale: u32,

    /// Number of consecutive seeds to render
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Base seed for noise and dither
    #[arg(short, long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Pick the base seed at random
    #[arg(short, long, conflicts_with = "seed")]
    pub random_seed: bool,

    /// Source field
    #[arg(long, value_enum)]
    pub source: Option<SourceMode>,

    /// Per-cell or per-pixel sampling
    #[arg(long, value_enum)]
    pub render_mode: Option<RenderMode>,

    /// Halftone element
    #[arg(long, value_enum)]
    pub shape: Option<HalftoneShape>,

    /// Noise flavour
    #[arg(long, value_enum)]
    pub noise_variant: Option<NoiseVariant>,

    /// Noise feature density relative to the shorter side
    #[arg(long)]
    pub noise_scale: Option<f64>,

    /// Fractal octaves
    #[arg(long)]
    pub octaves: Option<u32>,

    /// Amplitude decay per octave
    #[arg(long)]
    pub persistence: Option<f64>,

    /// Contrast stretch around mid gray
    #[arg(long, allow_negative_numbers = true)]
    pub contrast: Option<f64>,

    /// Brightness shift on the 0-255 scale
    #[arg(long, allow_negative_numbers = true)]
    pub brightness: Option<f64>,

    /// Domain warp strength
    #[arg(long, allow_negative_numbers = true)]
    pub warp: Option<f64>,

    /// Gradient direction in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub direction: Option<f64>,

    /// Gradient window start in percent
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<f64>,

    /// Gradient window end in percent
    #[arg(long, allow_negative_numbers = true)]
    pub end: Option<f64>,

    /// Gradient falloff exponent
    #[arg(long)]
    pub curve: Option<f64>,

    /// Gradient weight when blending with noise
    #[arg(long)]
    pub mix: Option<f64>,

    /// Blend operator
    #[arg(long, value_enum)]
    pub blend: Option<BlendMode>,

    /// Periods across the canvas width
    #[arg(long)]
    pub frequency: Option<f64>,

    /// Screen angle in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub angle: Option<f64>,

    /// Ink amount multiplier
    #[arg(long)]
    pub thickness: Option<f64>,

    /// Along-line cell length relative to the period
    #[arg(long)]
    pub cell_size: Option<f64>,

    /// Ink color as #rrggbb
    #[arg(long)]
    pub fg: Option<Color>,

    /// Paper color as #rrggbb
    #[arg(long)]
    pub bg: Option<Color>,

    /// Swap ink and paper
    #[arg(long, overrides_with = "no_invert")]
    pub invert: bool,

    /// Keep ink and paper as given, even if the preset inverts them
    #[arg(long, overrides_with = "invert")]
    pub no_invert: bool,

    /// Leave the paper transparent
    #[arg(long, overrides_with = "no_transparent")]
    pub transparent: bool,

    /// Paint the paper, even if the preset leaves it transparent
    #[arg(long, overrides_with = "transparent")]
    pub no_transparent: bool,

    /// Enable the soft mask
    #[arg(long, overrides_with = "no_mask")]
    pub mask: bool,

    /// Disable the soft mask, even if the preset enables it
    #[arg(long, overrides_with = "mask")]
    pub no_mask: bool,

    /// Mask noise scale
    #[arg(long)]
    pub mask_scale: Option<f64>,

    /// Mask threshold center
    #[arg(long)]
    pub mask_threshold: Option<f64>,

    /// Mask threshold half-width
    #[arg(long)]
    pub mask_softness: Option<f64>,

    /// Mask fade toward the top
    #[arg(long)]
    pub vertical_bias: Option<f64>,

    /// Mask fade toward the edges
    #[arg(long)]
    pub edge_fade: Option<f64>,
}

fn set<T: Copy>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

/// Explicit state of an `--x` / `--no-x` flag pair, `None` when neither is given
const fn switch(on: bool, off: bool) -> Option<bool> {
    if on {
        Some(true)
    } else if off {
        Some(false)
    } else {
        None
    }
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Effective parameters: defaults, then the preset, then explicit flags
    ///
    /// # Errors
    ///
    /// Returns an error if the preset cannot be read or decoded
    pub fn parameters(&self) -> Result<Parameters> {
        let mut params = match &self.preset {
            Some(path) => load_preset(path)?,
            None => Parameters::default(),
        };
        self.apply_overrides(&mut params);
        Ok(params)
    }

    /// Overwrite every parameter given explicitly on the command line
    pub fn apply_overrides(&self, params: &mut Parameters) {
        set(&mut params.source_mode, self.source);
        set(&mut params.render_mode, self.render_mode);

        let noise = &mut params.noise;
        set(&mut noise.seed, self.seed);
        set(&mut noise.variant, self.noise_variant);
        set(&mut noise.scale, self.noise_scale);
        set(&mut noise.octaves, self.octaves);
        set(&mut noise.persistence, self.persistence);
        set(&mut noise.contrast, self.contrast);
        set(&mut noise.brightness, self.brightness);
        set(&mut noise.warp_amount, self.warp);

        let gradient = &mut params.gradient;
        set(&mut gradient.direction, self.direction);
        set(&mut gradient.start, self.start);
        set(&mut gradient.end, self.end);
        set(&mut gradient.curve, self.curve);

        set(&mut params.blend.mix, self.mix);
        set(&mut params.blend.mode, self.blend);

        let halftone = &mut params.halftone;
        set(&mut halftone.shape, self.shape);
        set(&mut halftone.frequency, self.frequency);
        set(&mut halftone.angle, self.angle);
        set(&mut halftone.thickness, self.thickness);
        set(&mut halftone.cell_size, self.cell_size);
        set(&mut halftone.foreground, self.fg);
        set(&mut halftone.background, self.bg);
        set(&mut halftone.invert, switch(self.invert, self.no_invert));
        set(
            &mut halftone.transparent,
            switch(self.transparent, self.no_transparent),
        );

        let mask = &mut params.mask;
        set(&mut mask.enabled, switch(self.mask, self.no_mask));
        set(&mut mask.scale, self.mask_scale);
        set(&mut mask.threshold, self.mask_threshold);
        set(&mut mask.softness, self.mask_softness);
        set(&mut mask.vertical_bias, self.vertical_bias);
        set(&mut mask.edge_fade, self.edge_fade);
    }

    /// Requested canvas size before supersampling
    pub fn canvas(&self) -> (usize, usize) {
        (
            self.width.unwrap_or(DEFAULT_WIDTH),
            self.height.unwrap_or(DEFAULT_HEIGHT),
        )
    }

    /// Output format from the flag, the output extension, or PNG
    pub fn output_format(&self) -> OutputFormat {
        self.format
            .or_else(|| self.output.as_deref().and_then(OutputFormat::from_path))
            .unwrap_or(OutputFormat::Png)
    }

    /// Output path for one seed of the run
    pub fn output_path(&self, seed: i64, scale: u32, format: OutputFormat) -> PathBuf {
        match &self.output {
            Some(output) if self.count == 1 => output.clone(),
            Some(output) => {
                let stem = output.file_stem().unwrap_or_default().to_string_lossy();
                output.with_file_name(format!("{stem}-{seed}.{}", format.extension()))
            }
            None => PathBuf::from(default_output_name(seed, scale, format)),
        }
    }

    /// Plan every render of the run
    ///
    /// # Errors
    ///
    /// Returns an error if the preset fails to load, the output names a
    /// directory, or the canvas is invalid
    pub fn plan_jobs(&self) -> Result<Vec<RenderJob>> {
        if let Some(output) = self.output.as_deref().filter(|path| path.is_dir()) {
            return Err(path_error(output, "output path is a directory"));
        }
        let base = self.parameters()?;
        let format = self.output_format();
        // Vector output is resolution independent
        let scale = match format {
            OutputFormat::Png => self.scale,
            OutputFormat::Svg => 1,
        };

        let (width, height) = self.canvas();
        let factor = scale as usize;
        let (width, height) = (width.saturating_mul(factor), height.saturating_mul(factor));
        validate_dimensions(width, height)?;

        let first = if self.random_seed {
            rand::rng().random_range(0..RANDOM_SEED_RANGE)
        } else {
            base.noise.seed
        };

        Ok((0..self.count)
            .map(|offset| {
                let seed = first.saturating_add(i64::from(offset));
                let mut preset = base.clone();
                preset.noise.seed = seed;
                let mut params = preset.clone();
                params.halftone.frequency *= f64::from(scale);
                RenderJob {
                    path: self.output_path(seed, scale, format),
                    params,
                    preset,
                    width,
                    height,
                    format,
                }
            })
            .collect())
    }
}

/// Default output filename `halftone-pattern-<seed>[-<k>x].<ext>`
pub fn default_output_name(seed: i64, scale: u32, format: OutputFormat) -> String {
    let suffix = if scale > 1 {
        format!("-{scale}x")
    } else {
        String::new()
    };
    format!("{OUTPUT_PREFIX}-{seed}{suffix}.{}", format.extension())
}

/// Reject empty or oversized canvases before they reach the renderer
///
/// # Errors
///
/// Returns an error if either side is zero or exceeds the maximum dimension
pub const fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 || width > MAX_CANVAS_DIMENSION || height > MAX_CANVAS_DIMENSION {
        return Err(HalftoneError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// One image to render and where to write it
#[derive(Debug, Clone, PartialEq)]
pub struct RenderJob {
    /// Fully resolved parameters, seed and scale applied
    pub params: Parameters,
    /// Parameters as the user would set them: seed applied, before supersampling
    pub preset: Parameters,
    /// Canvas width in pixels
    pub width: usize,
    /// Canvas height in pixels
    pub height: usize,
    /// File format
    pub format: OutputFormat,
    /// Destination path
    pub path: PathBuf,
}

/// Orchestrates a run of renders with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Render every planned job
    ///
    /// # Errors
    ///
    /// Returns an error if planning fails or an output cannot be written
    pub fn process(&mut self) -> Result<()> {
        let jobs: Vec<RenderJob> = self
            .cli
            .plan_jobs()?
            .into_iter()
            .filter(|job| self.should_render(job))
            .collect();

        if jobs.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(jobs.len());
        }

        for (index, job) in jobs.iter().enumerate() {
            self.render_job(job, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn should_render(&self, job: &RenderJob) -> bool {
        if !self.cli.skip_existing() || !job.path.exists() {
            return true;
        }
        log::warn!("Skipping: {} (output exists)", job.path.display());
        false
    }

    fn enter_stage(&mut self, index: usize, stage: Stage) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.enter_stage(index, stage);
        }
    }

    fn render_job(&mut self, job: &RenderJob, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let RenderJob {
            params,
            width,
            height,
            ..
        } = job;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_job(index, &job.path);
        }

        self.enter_stage(index, Stage::Fields);
        let fields = Fields::build(*width, *height, params);

        self.enter_stage(index, Stage::Screen);
        match job.format {
            OutputFormat::Png => {
                let coverage = raster::rasterize(*width, *height, params, &fields);
                let buffer = PixelBuffer::paint(&coverage, &Palette::resolve(&params.halftone));
                self.enter_stage(index, Stage::Write);
                save_png(buffer, &job.path)?;
            }
            OutputFormat::Svg => {
                let primitives = vector::extract(*width, *height, params, &fields);
                let document =
                    VectorDocument::from_primitives(*width, *height, &params.halftone, primitives);
                self.enter_stage(index, Stage::Write);
                save_svg(&document, &job.path)?;
            }
        }

        if self.cli.dump_params {
            save_preset(&job.preset, &preset_path(&job.path))?;
        }
        log::info!("wrote {}", job.path.display());

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_job(index, start_time.elapsed());
        }

        Ok(())
    }
}
