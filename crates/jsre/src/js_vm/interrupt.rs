// Cooperative cancellation for long-running matches.
//
// The matcher shares its thread with timer callbacks and peripheral drivers,
// so it polls an `Interrupt` before every step and unwinds as soon as the
// host asks it to stop.

use std::cell::Cell;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// "Should I stop now?" signal consulted at the top of every matching step.
pub trait Interrupt {
    fn is_interrupted(&self) -> bool;
}

impl<T: Interrupt + ?Sized> Interrupt for &T {
    #[inline(always)]
    fn is_interrupted(&self) -> bool {
        (**self).is_interrupted()
    }
}

/// Never interrupts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInterrupt;

impl Interrupt for NoInterrupt {
    #[inline(always)]
    fn is_interrupted(&self) -> bool {
        false
    }
}

/// Shared flag raised from elsewhere (watchdog, Ctrl-C handler, another thread).
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn clear(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Interrupt for InterruptFlag {
    #[inline]
    fn is_interrupted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Interrupts once the wall clock passes a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct Deadline(Instant);

impl Deadline {
    pub fn at(instant: Instant) -> Self {
        Deadline(instant)
    }

    pub fn after(timeout: Duration) -> Self {
        Deadline(Instant::now() + timeout)
    }
}

impl Interrupt for Deadline {
    fn is_interrupted(&self) -> bool {
        Instant::now() >= self.0
    }
}

/// Interrupts after a fixed number of polls.
///
/// Deterministic, so it is what tests use to cut a search off at an exact
/// step. A budget of 0 interrupts on the very first poll.
#[derive(Debug)]
pub struct StepBudget {
    remaining: Cell<u64>,
    polled: Cell<u64>,
}

impl StepBudget {
    pub fn new(steps: u64) -> Self {
        Self {
            remaining: Cell::new(steps),
            polled: Cell::new(0),
        }
    }

    /// How many times the budget has been consulted.
    pub fn polled(&self) -> u64 {
        self.polled.get()
    }
}

impl Interrupt for StepBudget {
    fn is_interrupted(&self) -> bool {
        self.polled.set(self.polled.get() + 1);
        match self.remaining.get() {
            0 => true,
            n => {
                self.remaining.set(n - 1);
                false
            }
        }
    }
}
