//! Scanline accumulators for the vector extractors
//!
//! Both are two-state machines, idle or accumulating. Flushing hands back what
//! was collected and returns to idle.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum RunState {
    /// No open run
    #[default]
    Idle,
    /// A run opened at `start`
    Accumulating {
        /// First covered column of the run
        start: usize,
    },
}

/// Collects runs of covered pixels along a scanline
#[derive(Debug, Clone, Default)]
pub struct RunAccumulator {
    state: RunState,
}

impl RunAccumulator {
    /// Start idle
    pub const fn new() -> Self {
        Self {
            state: RunState::Idle,
        }
    }

    /// Feed column `x`; returns the run closed by an uncovered pixel
    pub fn step(&mut self, x: usize, covered: bool) -> Option<Range<usize>> {
        match (self.state, covered) {
            (RunState::Idle, true) => {
                self.state = RunState::Accumulating { start: x };
                None
            }
            (RunState::Accumulating { start }, false) => {
                self.state = RunState::Idle;
                Some(start..x)
            }
            (RunState::Idle, false) | (RunState::Accumulating { .. }, true) => None,
        }
    }

    /// Close any open run at the end of the row
    pub fn finish(&mut self, end: usize) -> Option<Range<usize>> {
        self.step(end, false)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum SegmentState<T> {
    /// No open segment
    Idle,
    /// Samples collected so far
    Accumulating(Vec<T>),
}

/// Collects contiguous samples into segments
#[derive(Debug, Clone)]
pub struct SegmentAccumulator<T> {
    state: SegmentState<T>,
}

impl<T> Default for SegmentAccumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SegmentAccumulator<T> {
    /// Start idle
    pub const fn new() -> Self {
        Self {
            state: SegmentState::Idle,
        }
    }

    /// Append a sample, opening a segment if idle
    pub fn push(&mut self, sample: T) {
        if let SegmentState::Accumulating(samples) = &mut self.state {
            samples.push(sample);
        } else {
            self.state = SegmentState::Accumulating(vec![sample]);
        }
    }

    /// Close the open segment, returning it if it holds at least two samples
    pub fn flush(&mut self) -> Option<Vec<T>> {
        match std::mem::replace(&mut self.state, SegmentState::Idle) {
            SegmentState::Accumulating(samples) if samples.len() > 1 => Some(samples),
            SegmentState::Idle | SegmentState::Accumulating(_) => None,
        }
    }
}

/// Keep at most about `cap` evenly strided samples, always including the last
pub fn downsample<T: Clone>(samples: &[T], cap: usize) -> Vec<T> {
    let step = (samples.len() / cap.max(1)).max(1);
    let mut kept: Vec<T> = samples.iter().step_by(step).cloned().collect();
    let last_index = samples.len().saturating_sub(1);
    if last_index % step != 0 {
        if let Some(last) = samples.last() {
            kept.push(last.clone());
        }
    }
    kept
}
