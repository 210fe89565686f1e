//! Multi-image progress tracking with automatic batching for large runs

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Pipeline stages reported for each image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Building the source and mask fields
    Fields,
    /// Running the halftone screen or vector extractor
    Screen,
    /// Encoding and writing the file
    Write,
}

impl Stage {
    /// Number of stages in one render
    pub const COUNT: usize = 3;

    /// Position of this stage, starting at one
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Fields => 1,
            Self::Screen => 2,
            Self::Write => 3,
        }
    }

    /// Short label shown next to the bar
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fields => "fields",
            Self::Screen => "screen",
            Self::Write => "write",
        }
    }
}

/// Display state of one image: name, stages done, stage label
#[derive(Debug, Clone, Default)]
struct JobState {
    name: String,
    done: usize,
    label: &'static str,
}

/// Coordinates progress display for a run of renders
///
/// Shows one bar per image for small runs and adds a batch bar for large
/// runs, keeping only the most recent images visible
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    job_bars: Vec<ProgressBar>,
    job_states: Vec<JobState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg:>6} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Images: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            job_bars: Vec::new(),
            job_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on image count
    pub fn initialize(&mut self, job_count: usize) {
        // Batch mode keeps large runs from flooding the terminal
        if job_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(job_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..job_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let pb = ProgressBar::new(Stage::COUNT as u64);
            pb.set_style(PROGRESS_STYLE.clone());
            self.job_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Register an image about to be rendered
    pub fn start_job(&mut self, index: usize, path: &Path) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.job_states.len() {
            self.job_states.resize(index + 1, JobState::default());
        }
        if let Some(state) = self.job_states.get_mut(index) {
            *state = JobState {
                name,
                done: 0,
                label: "",
            };
        }
        self.update_bars();
    }

    /// Report that an image entered a stage
    pub fn enter_stage(&mut self, index: usize, stage: Stage) {
        if let Some(state) = self.job_states.get_mut(index) {
            state.done = stage.ordinal() - 1;
            state.label = stage.label();
        }
        self.update_bars();
    }

    /// Mark an image as written and update batch progress
    pub fn complete_job(&mut self, index: usize, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.job_states.get_mut(index) {
            log::debug!("{} rendered in {elapsed:.2?}", state.name);
            state.name = format!("✓ {}", state.name);
            state.done = Stage::COUNT;
            state.label = "done";
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All images rendered");
        }
        let _ = self.multi_progress.clear();
    }

    /// Show the most recent images on the available bars
    fn update_bars(&self) {
        let active: Vec<&JobState> = self
            .job_states
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();

        let start_idx = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, state) in visible.iter().enumerate() {
            if let Some(bar) = self.job_bars.get(bar_idx) {
                bar.set_position(state.done as u64);
                bar.set_message(state.label);
                bar.set_prefix(state.name.clone());
            }
        }

        for bar in self.job_bars.iter().skip(visible.len()) {
            bar.set_position(0);
            bar.set_message("");
            bar.set_prefix(String::new());
        }
    }
}
