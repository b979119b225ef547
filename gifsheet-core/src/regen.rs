//! Debounce-plus-supersede regeneration policy for call sites that re-invoke
//! the engine on every configuration edit.
//!
//! The engine itself has no notion of cancellation; this module gives the
//! caller last-invocation-wins semantics with plain threads, timers, and a
//! generation counter.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Coalesces rapid successive rebuild requests.
///
/// Each [`request`](Coalescer::request) bumps a generation counter and
/// schedules the job after a fixed quiescence interval following the last
/// request. A request superseded before its job runs never runs it; one
/// superseded while the job ran drops the result instead of delivering it,
/// which releases any resources the result owns (e.g. a
/// [`SheetHandle`](crate::SheetHandle)).
#[derive(Debug)]
pub struct Coalescer {
    quiescence: Duration,
    generation: Arc<AtomicU64>,
}

impl Coalescer {
    /// Create a coalescer with the given quiescence interval.
    pub fn new(quiescence: Duration) -> Self {
        Self {
            quiescence,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Generation of the most recent request.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Schedule `job`, delivering its result only if no newer request arrives
    /// first.
    ///
    /// Returns the worker's join handle; its value is `true` when the result
    /// was delivered and `false` when the request was superseded.
    pub fn request<T, J, D>(&self, job: J, deliver: D) -> JoinHandle<bool>
    where
        T: Send + 'static,
        J: FnOnce() -> T + Send + 'static,
        D: FnOnce(T) + Send + 'static,
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let counter = Arc::clone(&self.generation);
        let quiescence = self.quiescence;
        thread::spawn(move || {
            thread::sleep(quiescence);
            if counter.load(Ordering::SeqCst) != generation {
                return false;
            }
            let result = job();
            if counter.load(Ordering::SeqCst) != generation {
                // Superseded mid-run; drop the result so it releases whatever
                // it owns.
                return false;
            }
            deliver(result);
            true
        })
    }
}

#[cfg(test)]
#[path = "../tests/unit/regen.rs"]
mod tests;
