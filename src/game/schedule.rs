//! The global scatter/chase timeline.

use tracing::debug;

use crate::entity::ghost::BehaviorState;

/// Walks a list of mode durations: even indices scatter, odd indices chase.
///
/// The last window never ends. Zero-length windows are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeScheduler {
    durations: Vec<f32>,
    index: usize,
    /// Seconds left in the current window.
    remaining: f32,
}

impl ModeScheduler {
    /// Creates a scheduler positioned at the first non-empty window.
    ///
    /// An empty list behaves as a single endless scatter window.
    pub fn new(durations: Vec<f32>) -> Self {
        let durations = if durations.is_empty() { vec![f32::INFINITY] } else { durations };
        let mut scheduler = Self {
            remaining: durations[0],
            durations,
            index: 0,
        };
        scheduler.skip_elapsed_windows();
        scheduler
    }

    /// The mode a window index maps to.
    pub const fn mode_for_index(index: usize) -> BehaviorState {
        if index % 2 == 0 {
            BehaviorState::Scatter
        } else {
            BehaviorState::Chase
        }
    }

    pub fn current_mode(&self) -> BehaviorState {
        Self::mode_for_index(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Seconds left in the current window.
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    fn is_last(&self) -> bool {
        self.index + 1 >= self.durations.len()
    }

    /// Moves past every window whose time is used up. Returns true if the index changed.
    fn skip_elapsed_windows(&mut self) -> bool {
        let start = self.index;
        while self.remaining <= 0.0 && !self.is_last() {
            self.index += 1;
            self.remaining += self.durations[self.index];
        }
        self.index != start
    }

    /// Advances the timeline by `delta` seconds unless `frozen`.
    ///
    /// Returns the new mode when a window boundary was crossed. Several boundaries crossed in one
    /// call collapse into the final mode, which is not reported if it matches the starting one.
    pub fn update(&mut self, delta: f32, frozen: bool) -> Option<BehaviorState> {
        if frozen || self.is_last() {
            return None;
        }

        let previous = self.current_mode();
        self.remaining -= delta;
        if !self.skip_elapsed_windows() {
            return None;
        }

        let mode = self.current_mode();
        debug!(index = self.index, mode = ?mode, remaining = self.remaining, "Mode window advanced");
        (mode != previous).then_some(mode)
    }
}
