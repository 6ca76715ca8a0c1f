//! Progress animation shown while statistics are being computed
//!
//! A short highlight slides across a dotted track, redrawn in place with a
//! carriage return. The animation runs as a spawned task owned by a
//! [`ProgressHandle`]; the handle carries its own cancellation flag, so no
//! process-wide state is involved.

use crate::constants::progress::{HIGHLIGHT, MAX_STEPS, STEP_MS, TRACK_WIDTH};
use crate::ui::colors;
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Sliding-highlight indicator. Holds only the current step; rendering is a
/// pure function of it.
#[derive(Debug, Clone, Default)]
pub struct ProgressIndicator {
    step: usize,
}

impl ProgressIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the current frame: dots to the left of the highlight, the
    /// visible part of the highlight, dots to the right. The highlight
    /// enters from the left edge and slides off the right one.
    pub fn frame(&self) -> String {
        let cycle = TRACK_WIDTH + HIGHLIGHT.len();
        let iteration = self.step % cycle;
        let left = iteration as isize - HIGHLIGHT.len() as isize;
        let right = iteration;

        let num_left = left.max(0) as usize;
        let num_highlight = right.min(TRACK_WIDTH) - num_left;
        let num_right = TRACK_WIDTH - (num_left + num_highlight);

        format!(
            " {}{}{}",
            ".".repeat(num_left),
            &HIGHLIGHT[..num_highlight],
            ".".repeat(num_right)
        )
    }

    /// Advances to the next animation step
    pub fn advance(&mut self) {
        self.step += 1;
    }
}

/// Owns a running progress animation: the cancellation flag and the spawned
/// task. Dropping the handle without calling [`ProgressHandle::stop`] leaves
/// the task to finish its cycle on its own.
pub struct ProgressHandle {
    cancel: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl ProgressHandle {
    /// Starts the animation task and returns the handle owning it.
    pub fn start() -> Self {
        let cancel = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancel);
        let task = tokio::spawn(async move {
            let mut indicator = ProgressIndicator::new();
            for _ in 0..MAX_STEPS {
                if flag.load(Ordering::Relaxed) {
                    break;
                }
                tokio::time::sleep(Duration::from_millis(STEP_MS)).await;
                print!("{}\r", colors::paint(&indicator.frame(), colors::info_fg()));
                let _ = std::io::stdout().flush();
                indicator.advance();
            }
            // Clear the animation line before normal output resumes
            print!("{}\r", " ".repeat(TRACK_WIDTH + 2));
            let _ = std::io::stdout().flush();
        });
        Self { cancel, task }
    }

    /// Signals the task to stop and waits for it to clear the line.
    pub async fn stop(self) {
        self.cancel.store(true, Ordering::Relaxed);
        let _ = self.task.await;
    }
}
