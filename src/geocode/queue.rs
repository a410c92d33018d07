// src/geocode/queue.rs
//
// Sequential task queue with a fixed pause between tasks.
// Concurrency or backoff would slot in here without touching the per-row task.

use std::thread;
use std::time::Duration;

/// Where the queue waits. Swapped out in tests so nothing actually sleeps.
pub trait Pacer {
    fn pause(&mut self, d: Duration);
}

/// Real wall-clock pause.
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, d: Duration) {
        if !d.is_zero() {
            thread::sleep(d);
        }
    }
}

/// Records pauses instead of sleeping.
#[derive(Debug, Default)]
pub struct RecordingPacer {
    pub pauses: Vec<Duration>,
}

impl Pacer for RecordingPacer {
    fn pause(&mut self, d: Duration) {
        self.pauses.push(d);
    }
}

pub struct RateLimitedQueue<P: Pacer> {
    delay: Duration,
    pacer: P,
}

impl RateLimitedQueue<ThreadPacer> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pacer: ThreadPacer }
    }
}

impl<P: Pacer> RateLimitedQueue<P> {
    pub fn with_pacer(delay: Duration, pacer: P) -> Self {
        Self { delay, pacer }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    pub fn into_pacer(self) -> P {
        self.pacer
    }

    /// Run `task` on every item, strictly in order, pausing between calls
    /// (not before the first, not after the last). Results keep input order.
    pub fn run<T, R, F>(&mut self, items: impl IntoIterator<Item = T>, mut task: F) -> Vec<R>
    where
        F: FnMut(usize, T) -> R,
    {
        let mut out = Vec::new();
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.pacer.pause(self.delay);
            }
            out.push(task(i, item));
        }
        out
    }
}
