//! Delayed snap scheduling.
//!
//! Windows appear at unpredictable times after a process launches, so a launch
//! is answered with a fixed series of attempts rather than a single one. Each
//! attempt re-resolves the application and re-validates it, and a window that is
//! already in place is left untouched, so the later attempts are harmless when an
//! earlier one succeeded. Pending attempts are never cancelled.
//!
//! [`SnapQueue`] is the pure, clock-free part: it turns [`SnapCommand`]s into
//! [`SnapTask`]s with due times. [`drive`] owns a queue, feeds it from a channel,
//! and hands each task to an executor when it falls due.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;

use super::snapper::SnapMode;

/// Offsets, from the launch notification, of the snap attempts for a new app.
pub const LAUNCH_RETRY_DELAYS: [Duration; 4] = [
    Duration::from_millis(400),
    Duration::from_millis(800),
    Duration::from_millis(1500),
    Duration::from_millis(2500),
];

/// Time given to the un-minimize animation before the window is measured again.
pub const UNMINIMIZE_SETTLE_DELAY: Duration = Duration::from_millis(80);

// ============================================================================
// Commands and Tasks
// ============================================================================

/// Requests fed into the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapCommand {
    /// An application finished launching.
    AppLaunched { pid: i32 },
    /// Snap the frontmost application now.
    SnapFrontmost,
    /// A manual snap restored a minimized window of `pid`.
    Settle { pid: i32 },
}

impl SnapCommand {
    /// Whether the command is queued under the given auto-snap setting.
    ///
    /// Launches are ignored while auto-snap is off. Manual snaps and their
    /// follow-ups always run.
    #[must_use]
    pub const fn is_accepted(self, auto_snap: bool) -> bool {
        auto_snap || !matches!(self, Self::AppLaunched { .. })
    }
}

/// The application a task acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapTarget {
    Application(i32),
    /// Resolved when the task runs, not when it was queued.
    Frontmost,
}

/// A single scheduled snap attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapTask {
    pub target: SnapTarget,
    pub mode: SnapMode,
    /// 1-based attempt number within the command that produced the task.
    pub attempt: usize,
    pub due: Instant,
}

/// Heap entry ordered by due time, then by insertion order.
#[derive(Debug)]
struct Pending {
    seq: u64,
    task: SnapTask,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool { self.cmp(other) == Ordering::Equal }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Ord for Pending {
    // Reversed so the max-heap pops the earliest task first.
    fn cmp(&self, other: &Self) -> Ordering {
        other.task.due.cmp(&self.task.due).then_with(|| other.seq.cmp(&self.seq))
    }
}

// ============================================================================
// SnapQueue
// ============================================================================

/// Pending snap attempts ordered by due time.
#[derive(Debug, Default)]
pub struct SnapQueue {
    pending: BinaryHeap<Pending>,
    next_seq: u64,
}

impl SnapQueue {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Expands a command into tasks relative to `now` and returns how many were added.
    pub fn schedule(&mut self, command: SnapCommand, now: Instant) -> usize {
        match command {
            SnapCommand::AppLaunched { pid } => {
                for (index, delay) in LAUNCH_RETRY_DELAYS.iter().enumerate() {
                    self.push(SnapTask {
                        target: SnapTarget::Application(pid),
                        mode: SnapMode::Launch,
                        attempt: index + 1,
                        due: now + *delay,
                    });
                }
                LAUNCH_RETRY_DELAYS.len()
            }
            SnapCommand::SnapFrontmost => {
                self.push(SnapTask {
                    target: SnapTarget::Frontmost,
                    mode: SnapMode::Manual,
                    attempt: 1,
                    due: now,
                });
                1
            }
            SnapCommand::Settle { pid } => {
                self.push(SnapTask {
                    target: SnapTarget::Application(pid),
                    mode: SnapMode::Settle,
                    attempt: 1,
                    due: now + UNMINIMIZE_SETTLE_DELAY,
                });
                1
            }
        }
    }

    /// Due time of the earliest pending task.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> { self.pending.peek().map(|entry| entry.task.due) }

    /// Removes and returns every task due at or before `now`, earliest first.
    pub fn pop_due(&mut self, now: Instant) -> Vec<SnapTask> {
        let mut due = Vec::new();
        while self.pending.peek().is_some_and(|entry| entry.task.due <= now) {
            if let Some(entry) = self.pending.pop() {
                due.push(entry.task);
            }
        }
        due
    }

    #[must_use]
    pub fn len(&self) -> usize { self.pending.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.pending.is_empty() }

    fn push(&mut self, task: SnapTask) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending { seq, task });
    }
}

// ============================================================================
// Driver
// ============================================================================

/// Runs the queue until the command channel closes.
///
/// `execute` is called for each task as it falls due. It must not block; the
/// desktop shell uses it to hop onto the main thread.
pub async fn drive<F>(mut commands: mpsc::UnboundedReceiver<SnapCommand>, mut execute: F)
where F: FnMut(SnapTask) {
    let mut queue = SnapQueue::new();

    loop {
        let next_due = queue.next_due();

        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else {
                    tracing::debug!(pending = queue.len(), "snap queue closed");
                    break;
                };
                let added = queue.schedule(command, Instant::now());
                tracing::trace!(?command, added, "scheduled snap attempts");
            }
            () = sleep_until_due(next_due) => {
                for task in queue.pop_due(Instant::now()) {
                    execute(task);
                }
            }
        }
    }
}

async fn sleep_until_due(due: Option<Instant>) {
    match due {
        Some(due) => tokio::time::sleep_until(due).await,
        None => std::future::pending().await,
    }
}
