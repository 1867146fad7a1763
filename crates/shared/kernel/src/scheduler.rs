//! Virtual-time task queue for delayed effects.
//!
//! Every task has an owner node. The facade cancels a task as soon as its owner
//! leaves the document, so a late callback never lands on a stale control.

use crate::effect::Effect;
use crate::page::{NodeId, Page};
use std::time::Duration;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

#[derive(Debug)]
struct Task {
    id: TaskId,
    owner: NodeId,
    due: Duration,
    effects: Vec<Effect>,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    now: Duration,
    next_id: u64,
    tasks: Vec<Task>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the scheduler was created.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Queues `effects` to fire after `delay`, owned by `owner`.
    pub fn schedule(&mut self, owner: NodeId, delay: Duration, effects: Vec<Effect>) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let due = self.now.saturating_add(delay);
        trace!(?id, ?owner, ?due, "Scheduled task");
        self.tasks.push(Task { id, owner, due, effects });
        id
    }

    /// Cancels a pending task. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let cancelled = self.tasks.len() != before;
        if cancelled {
            debug!(?id, "Cancelled task");
        }
        cancelled
    }

    #[must_use]
    pub fn is_pending(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|task| task.id == id)
    }

    #[must_use]
    pub const fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Delay until the earliest pending task, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.tasks.iter().map(|task| task.due.saturating_sub(self.now)).min()
    }

    /// Cancels every task whose owner is no longer attached to `page`.
    pub fn cancel_detached(&mut self, page: &Page) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| page.is_attached(task.owner));
        let cancelled = before - self.tasks.len();
        if cancelled > 0 {
            debug!(cancelled, "Cancelled tasks owned by detached nodes");
        }
        cancelled
    }

    /// Moves time forward and drains due tasks, earliest first.
    pub fn advance(&mut self, by: Duration) -> Vec<Effect> {
        self.now = self.now.saturating_add(by);
        let now = self.now;

        let (mut due, pending): (Vec<Task>, Vec<Task>) =
            std::mem::take(&mut self.tasks).into_iter().partition(|task| task.due <= now);
        self.tasks = pending;

        due.sort_by_key(|task| (task.due, task.id));
        due.into_iter()
            .inspect(|task| trace!(id = ?task.id, "Firing task"))
            .flat_map(|task| task.effects)
            .collect()
    }
}
