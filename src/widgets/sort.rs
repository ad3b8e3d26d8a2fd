//! Sorting visualizer with an animated bubble sort
//!
//! # Animation model
//!
//! [`BubbleSort`] is a pure cursor: every call to [`BubbleSort::step`] performs
//! at most one comparison or swap on the buffer and reports it as a
//! [`SortStep`]. The widget wraps the cursor in a `SortRun` that schedules the
//! next step `step_delay` after the previous one and checks its
//! [`CancelToken`] before every step.
//!
//! ```text
//! Compare(j) ─delay─▶ Swap(j) ─delay─▶ Compare(j+1) ...   (out of order)
//! Compare(j) ─delay─▶ Compare(j+1) ...                    (in order)
//! ... ─▶ Done (no highlights)
//! ```
//!
//! # Re-entrancy
//!
//! Only one run is live at a time. Starting a second run while one is active
//! is rejected; generating a new dataset cancels the active run first.

use crate::config::{EngineConfig, SORT_SAMPLE_LEN, SORT_VALUE_MAX, SORT_VALUE_MIN};
use crate::engine::cancel::CancelToken;
use crate::engine::controls::{button, Action, ControlDescriptor, ControlId};
use crate::engine::frame::{FrameLayout, RenderFrame};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

pub const GENERATE_BUTTON: ControlId = ControlId("sort-generate");
pub const BUBBLE_SORT_BUTTON: ControlId = ControlId("sort-bubble");

/// One observable step of a bubble sort run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStep {
    /// Positions `j` and `j + 1` were compared
    Compare(usize),
    /// Positions `j` and `j + 1` were swapped
    Swap(usize),
    Done,
}

impl SortStep {
    /// The highlighted pair for this step, if any
    pub fn pair(self) -> Option<(usize, usize)> {
        match self {
            SortStep::Compare(j) | SortStep::Swap(j) => Some((j, j + 1)),
            SortStep::Done => None,
        }
    }
}

/// Resumable bubble sort over an external buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BubbleSort {
    pass: usize,
    index: usize,
    // A comparison at `index` has been shown and awaits its swap decision
    compared: bool,
}

impl BubbleSort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one visible step.
    ///
    /// The buffer length must not change between calls.
    pub fn step(&mut self, data: &mut [i64]) -> SortStep {
        let len = data.len();

        if self.compared {
            self.compared = false;
            let j = self.index;
            self.index += 1;
            if j + 1 < len && data[j] > data[j + 1] {
                data.swap(j, j + 1);
                return SortStep::Swap(j);
            }
        }

        while self.pass < len {
            if self.index + 1 < len - self.pass {
                self.compared = true;
                return SortStep::Compare(self.index);
            }
            self.pass += 1;
            self.index = 0;
        }

        SortStep::Done
    }

    /// Drive the cursor to completion, collecting every step
    pub fn run(data: &mut [i64]) -> Vec<SortStep> {
        let mut cursor = BubbleSort::new();
        let mut steps = Vec::new();
        loop {
            let step = cursor.step(data);
            steps.push(step);
            if step == SortStep::Done {
                return steps;
            }
        }
    }
}

#[derive(Debug)]
struct SortRun {
    cursor: BubbleSort,
    token: CancelToken,
    next_due: Instant,
}

#[derive(Debug)]
pub struct SortWidget {
    data: Vec<i64>,
    highlights: Vec<usize>,
    run: Option<SortRun>,
    rng: StdRng,
    step_delay: Duration,
    mount_token: CancelToken,
}

impl SortWidget {
    /// Create a widget with a freshly generated dataset
    pub fn new(config: &EngineConfig, mount_token: CancelToken) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut widget = SortWidget {
            data: Vec::new(),
            highlights: Vec::new(),
            run: None,
            rng,
            step_delay: config.step_delay,
            mount_token,
        };
        widget.data = widget.random_dataset();
        widget
    }

    /// Create a widget over explicit data
    pub fn with_data(data: Vec<i64>, config: &EngineConfig, mount_token: CancelToken) -> Self {
        let mut widget = Self::new(config, mount_token);
        widget.data = data;
        widget
    }

    pub fn controls() -> Vec<ControlDescriptor> {
        vec![
            button(GENERATE_BUTTON, Action::GenerateNew),
            button(BUBBLE_SORT_BUTTON, Action::BubbleSort),
        ]
    }

    pub fn data(&self) -> &[i64] {
        &self.data
    }

    pub fn is_sorting(&self) -> bool {
        self.run.is_some()
    }

    fn random_dataset(&mut self) -> Vec<i64> {
        (0..SORT_SAMPLE_LEN)
            .map(|_| self.rng.gen_range(SORT_VALUE_MIN..=SORT_VALUE_MAX))
            .collect()
    }

    fn cancel_run(&mut self) {
        if let Some(run) = self.run.take() {
            run.token.cancel();
            debug!("bubble sort run cancelled");
        }
        self.highlights.clear();
    }

    /// Replace the dataset, cancelling any run in progress
    pub fn generate_new(&mut self) {
        self.cancel_run();
        self.data = self.random_dataset();
        debug!(values = ?self.data, "generated sort dataset");
    }

    /// Start an animated bubble sort. The first comparison is shown immediately.
    /// Returns false if a run is already in progress.
    pub fn bubble_sort(&mut self, now: Instant) -> bool {
        if self.run.is_some() {
            debug!("bubble sort already running; request ignored");
            return false;
        }
        self.run = Some(SortRun {
            cursor: BubbleSort::new(),
            token: self.mount_token.child_token(),
            next_due: now,
        });
        debug!(len = self.data.len(), "bubble sort started");
        self.tick(now);
        true
    }

    pub fn activate(&mut self, action: Action, now: Instant) -> bool {
        match action {
            Action::GenerateNew => self.generate_new(),
            Action::BubbleSort => {
                self.bubble_sort(now);
            }
            _ => return false,
        }
        true
    }

    /// Execute every step that has come due. Returns true if anything was drawn.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(run) = self.run.as_mut() else {
            return false;
        };

        let mut redrawn = false;
        let finished = loop {
            if run.token.is_cancelled() {
                debug!("bubble sort run observed cancellation");
                break true;
            }
            if now < run.next_due {
                break false;
            }
            let step = run.cursor.step(&mut self.data);
            trace!(?step, "bubble sort step");
            redrawn = true;
            match step.pair() {
                Some((j, k)) => {
                    self.highlights = vec![j, k];
                    run.next_due += self.step_delay;
                }
                None => break true,
            }
        };

        if finished {
            self.run = None;
            self.highlights.clear();
            redrawn = true;
        }
        redrawn
    }

    pub fn frame(&self) -> RenderFrame {
        RenderFrame::new(FrameLayout::Bars, self.data.iter().copied())
            .with_highlights(self.highlights.iter().copied())
    }
}
