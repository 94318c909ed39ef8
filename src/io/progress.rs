//! Per-problem height progress with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Display state of one problem: name, searched heights, height bound
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct ProblemState {
    name: String,
    searched: usize,
    max_height: usize,
}

/// Coordinates progress display for a batch of problems
///
/// Shows one bar per problem for small batches, plus a single batch bar once
/// there are more problems than `MAX_INDIVIDUAL_PROGRESS_BARS` can show; the
/// per-problem bars then roll over to the most recent problems.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    problem_bars: Vec<ProgressBar>,
    problem_count: usize,
    problem_states: Vec<ProblemState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static HEIGHT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Problems: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            problem_bars: Vec::new(),
            problem_count: 0,
            problem_states: Vec::new(),
        }
    }

    /// Create the bars for `problem_count` problems
    pub fn initialize(&mut self, problem_count: usize) {
        self.problem_count = problem_count;

        if problem_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(problem_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..problem_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(HEIGHT_STYLE.clone());
            self.problem_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Number of problems the manager was initialized for
    pub const fn problem_count(&self) -> usize {
        self.problem_count
    }

    /// Start tracking a problem
    pub fn start_problem(&mut self, index: usize, name: &str, max_height: usize) {
        if index >= self.problem_states.len() {
            self.problem_states
                .resize(index + 1, ProblemState::default());
        }
        if let Some(state) = self.problem_states.get_mut(index) {
            *state = ProblemState {
                name: name.to_owned(),
                searched: 0,
                max_height,
            };
        }
        self.update_bars();
    }

    /// Record that `height` has been searched
    pub fn searched_height(&mut self, index: usize, height: usize) {
        if let Some(state) = self.problem_states.get_mut(index) {
            state.searched = height;
        }
        self.update_bars();
    }

    /// Mark a problem as finished, with the accepted height if any
    pub fn complete_problem(&mut self, index: usize, accepted_height: Option<usize>) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.problem_states.get_mut(index) {
            let mark = if accepted_height.is_some() { "✓" } else { "✗" };
            state.name = format!("{mark} {}", state.name);
            state.searched = state.max_height;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All problems solved");
        }
        let _ = self.multi_progress.clear();
    }

    // Shows the most recent problems on the available bars
    fn update_bars(&self) {
        let active: Vec<&ProblemState> = self
            .problem_states
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();

        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar, state) in self.problem_bars.iter().zip(visible) {
            bar.set_length(state.max_height as u64);
            bar.set_position(state.searched as u64);
            bar.set_message(format!("height {}/{}", state.searched, state.max_height));
            bar.set_prefix(state.name.clone());
        }

        for bar in self.problem_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
